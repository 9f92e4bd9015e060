use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::config::ClockConfig;

/// Installs Rapier (which steps on its own in PostUpdate) and keeps its gravity in sync with config.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let (pixels_per_meter, rapier_debug) = app
            .world()
            .get_resource::<ClockConfig>()
            .map(|cfg| (cfg.physics.pixels_per_meter, cfg.rapier_debug))
            .unwrap_or((50.0, false));

        app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
            pixels_per_meter.max(1.0),
        ))
        .add_systems(Update, sync_gravity);

        if rapier_debug {
            app.add_plugins(RapierDebugRenderPlugin::default());
        }
    }
}

/// The Rapier context is created by the plugin at startup, so this retries
/// each frame and only writes when the value differs (also covers hot reload).
pub fn sync_gravity(cfg: Res<ClockConfig>, mut rapier_cfg: Query<&mut RapierConfiguration>) {
    let gravity = Vect::new(0.0, cfg.gravity.y);
    for mut rc in rapier_cfg.iter_mut() {
        if rc.gravity != gravity {
            rc.gravity = gravity;
        }
    }
}
