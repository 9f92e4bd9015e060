use bevy::prelude::*;

use crate::debug::DebugPlugin;
use crate::gameplay::coordinator::CoordinatorPlugin;
use crate::interaction::drag::DragInteractionPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::config_hot_reload::ConfigHotReloadPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::camera::CameraPlugin;
use crate::rendering::sketch::SketchRenderPlugin;

/// Everything the windowed clock needs on top of `DefaultPlugins`.
/// Expects `ClockConfig` (and optionally `WallClock`) inserted beforehand.
pub struct ClockPlugin;

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            CoordinatorPlugin,
            CameraPlugin,
            PhysicsSetupPlugin,
            SketchRenderPlugin,
            DragInteractionPlugin,
            DebugPlugin,
            ConfigHotReloadPlugin,
            AutoClosePlugin,
        ));
    }
}
