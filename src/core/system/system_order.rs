//! Central system ordering labels to make the frame sequence explicit.
//! Stages (high-level):
//! 1. Interaction (pointer drag edits velocities)
//! 2. Reconcile (ball collections follow the clock)
//! 3. Draw (gizmos read post-step transforms from the previous physics step)
//! 4. Rapier (handled by plugin in PostUpdate)
use bevy::prelude::*;

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum ClockSet {
    Interaction,
    Reconcile,
    Draw,
}
