use bevy::prelude::*;

/// Coordinator lifecycle. Uninitialized -> Running happens once, at startup;
/// there is no terminal state (the app runs until its window closes).
#[derive(States, Debug, Clone, Copy, Eq, PartialEq, Hash, Default)]
pub enum AppState {
    /// Walls and seed balls not spawned yet.
    #[default]
    Uninitialized,
    /// Per-frame reconciliation and drawing active.
    Running,
}
