use bevy::prelude::*;

use crate::core::clock::{ClockReading, TimeUnit};
use crate::gameplay::coordinator::{FrameReading, TimeBalls};

/// Smoothed frame timing plus how far each collection is from its clock value.
#[derive(Resource, Debug, Default, Clone)]
pub struct DebugStats {
    pub frame_counter: u64,
    pub fps: f32,
    pub frame_time_ms: f32,
    pub balls: (usize, usize, usize),
    /// Sum over units of |collection length - clock value|; non-zero while draining a rollover.
    pub lag: u32,
}

/// Exponential moving average seeded by the first sample.
pub fn smooth(prev: f32, sample: f32) -> f32 {
    if prev == 0.0 {
        sample
    } else {
        prev * 0.9 + sample * 0.1
    }
}

pub fn reconcile_lag(balls: &TimeBalls, reading: &ClockReading) -> u32 {
    TimeUnit::ALL
        .iter()
        .map(|u| (balls.len(*u) as i64 - reading.value(*u) as i64).unsigned_abs() as u32)
        .sum()
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    balls: Res<TimeBalls>,
    frame: Res<FrameReading>,
) {
    stats.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    stats.fps = smooth(stats.fps, 1.0 / dt);
    stats.frame_time_ms = smooth(stats.frame_time_ms, dt * 1000.0);
    stats.balls = balls.counts();
    stats.lag = reconcile_lag(&balls, &frame.0);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lag_counts_missing_and_extra_balls() {
        let mut balls = TimeBalls::default();
        for n in 0..59 {
            balls.push(TimeUnit::Second, Entity::from_raw(n));
        }
        balls.push(TimeUnit::Hour, Entity::from_raw(100));
        let reading = ClockReading::from_hms(3, 2, 0);
        // 59 extra seconds, 2 missing minutes, 2 missing hours
        assert_eq!(reconcile_lag(&balls, &reading), 63);
    }

    #[test]
    fn smooth_seeds_then_averages() {
        assert_eq!(smooth(0.0, 60.0), 60.0);
        assert!((smooth(60.0, 30.0) - 57.0).abs() < 1e-4);
    }
}
