use bevy::prelude::*;

use super::stats::DebugStats;
use crate::core::config::ClockConfig;

pub fn debug_logging_system(
    time: Res<Time>,
    cfg: Res<ClockConfig>,
    stats: Res<DebugStats>,
    mut accum: Local<f32>,
) {
    if cfg.log_interval <= 0.0 {
        return;
    }
    *accum += time.delta_secs();
    if *accum < cfg.log_interval {
        return;
    }
    *accum = 0.0;
    let (s, m, h) = stats.balls;
    info!(
        "CLOCK frame={} t={:.1}s fps={:.1} ft_ms={:.1} balls s={} m={} h={} lag={}",
        stats.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        stats.frame_time_ms,
        s,
        m,
        h,
        stats.lag
    );
}
