use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use rand::Rng;

use crate::core::canvas::Canvas;
use crate::core::clock::TimeUnit;
use crate::core::components::{Ball, BallRadius, BallUnit};
use crate::core::config::ClockConfig;

pub fn radius_for(unit: TimeUnit, cfg: &ClockConfig) -> f32 {
    match unit {
        TimeUnit::Second => cfg.balls.second.radius,
        TimeUnit::Minute => cfg.balls.minute.radius,
        TimeUnit::Hour => cfg.balls.hour.radius,
    }
}

/// Where the next ball enters: the canvas top-center, optionally nudged sideways.
pub fn drop_position(canvas: &Canvas, jitter: f32, rng: &mut impl Rng) -> Vec2 {
    let mut pos = canvas.drop_point();
    if jitter > 0.0 {
        pos.x += rng.gen_range(-jitter..=jitter);
    }
    pos
}

/// Spawns one dynamic ball for `unit` at the drop point and returns its entity.
pub fn drop_ball(
    commands: &mut Commands,
    unit: TimeUnit,
    cfg: &ClockConfig,
    canvas: &Canvas,
    rng: &mut impl Rng,
) -> Entity {
    let radius = radius_for(unit, cfg);
    let pos = drop_position(canvas, cfg.balls.drop_jitter, rng);
    commands
        .spawn((
            Name::new(format!("{}Ball", unit.label())),
            Ball,
            BallUnit(unit),
            BallRadius(radius),
            Transform::from_translation(pos.extend(0.0)),
            RigidBody::Dynamic,
            Collider::ball(radius),
            Velocity::zero(),
            Restitution::coefficient(cfg.bounce.restitution),
            Friction::coefficient(cfg.bounce.friction),
            Damping {
                linear_damping: cfg.bounce.linear_damping.max(0.0),
                angular_damping: 0.0,
            },
        ))
        .id()
}

pub fn drop_second_ball(
    commands: &mut Commands,
    cfg: &ClockConfig,
    canvas: &Canvas,
    rng: &mut impl Rng,
) -> Entity {
    drop_ball(commands, TimeUnit::Second, cfg, canvas, rng)
}

pub fn drop_minute_ball(
    commands: &mut Commands,
    cfg: &ClockConfig,
    canvas: &Canvas,
    rng: &mut impl Rng,
) -> Entity {
    drop_ball(commands, TimeUnit::Minute, cfg, canvas, rng)
}

pub fn drop_hour_ball(
    commands: &mut Commands,
    cfg: &ClockConfig,
    canvas: &Canvas,
    rng: &mut impl Rng,
) -> Entity {
    drop_ball(commands, TimeUnit::Hour, cfg, canvas, rng)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn drop_position_without_jitter_is_top_center() {
        let canvas = Canvas::new(1000.0, 500.0);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(drop_position(&canvas, 0.0, &mut rng), Vec2::new(0.0, 250.0));
    }

    #[test]
    fn drop_position_jitter_is_bounded() {
        let canvas = Canvas::new(1000.0, 500.0);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..100 {
            let p = drop_position(&canvas, 2.0, &mut rng);
            assert!(p.x.abs() <= 2.0);
            assert_eq!(p.y, 250.0);
        }
    }

    #[test]
    fn class_helpers_use_class_radius() {
        let mut app = App::new();
        app.add_systems(Startup, |mut commands: Commands| {
            let cfg = ClockConfig::default();
            let canvas = Canvas::new(800.0, 600.0);
            let mut rng = StdRng::seed_from_u64(1);
            drop_second_ball(&mut commands, &cfg, &canvas, &mut rng);
            drop_minute_ball(&mut commands, &cfg, &canvas, &mut rng);
            drop_hour_ball(&mut commands, &cfg, &canvas, &mut rng);
        });
        app.update();
        let mut q = app.world_mut().query::<(&BallUnit, &BallRadius, &Transform)>();
        let mut seen: Vec<(TimeUnit, f32)> = q
            .iter(app.world())
            .map(|(u, r, tf)| {
                assert_eq!(tf.translation.truncate(), Vec2::new(0.0, 300.0));
                (u.0, r.0)
            })
            .collect();
        seen.sort_by(|a, b| a.1.total_cmp(&b.1));
        assert_eq!(
            seen,
            vec![
                (TimeUnit::Second, 8.0),
                (TimeUnit::Minute, 18.0),
                (TimeUnit::Hour, 38.0)
            ]
        );
    }
}
