//! Debug module: frame stats, periodic ball-count logging, wireframe toggle.
//! Built only when compiled with `--features debug` (on by default).

#[cfg(feature = "debug")]
pub mod keys;
#[cfg(feature = "debug")]
mod logging;
#[cfg(feature = "debug")]
pub mod stats;

#[cfg(feature = "debug")]
pub use stats::DebugStats;

use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::system::system_order::ClockSet;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    #[cfg(feature = "debug")]
    fn build(&self, app: &mut App) {
        use keys::debug_key_input_system;
        use logging::debug_logging_system;
        use stats::debug_stats_collect_system;

        app.init_resource::<DebugStats>().add_systems(
            Update,
            (
                debug_key_input_system,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .in_set(ClockSet::Draw),
            ),
        );
    }

    #[cfg(not(feature = "debug"))]
    fn build(&self, _app: &mut App) {}
}
