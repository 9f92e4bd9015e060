use bevy::prelude::*;

use crate::core::clock::TimeUnit;
use crate::core::components::{BallRadius, Wall};
use crate::core::config::ClockConfig;
use crate::gameplay::coordinator::{FrameReading, TimeBalls};
use crate::rendering::palette::palette::palette_for_minute;

pub fn update_background(frame: Res<FrameReading>, mut clear: ResMut<ClearColor>) {
    let bg = palette_for_minute(frame.minute).background;
    if clear.0 != bg {
        clear.0 = bg;
    }
}

/// Closed outline through the wall's current vertices.
pub fn wall_outline(vertices: [Vec2; 4]) -> [Vec2; 5] {
    [vertices[0], vertices[1], vertices[2], vertices[3], vertices[0]]
}

pub fn draw_walls(
    cfg: Res<ClockConfig>,
    frame: Res<FrameReading>,
    q_walls: Query<(&Wall, &Transform)>,
    mut gizmos: Gizmos,
) {
    if !cfg.walls.visible {
        return;
    }
    let color = palette_for_minute(frame.minute).wall();
    for (wall, tf) in &q_walls {
        gizmos.linestrip_2d(wall_outline(wall.vertices(tf)), color);
    }
}

/// Outline circles at the positions Rapier last wrote, walked in collection order.
pub fn draw_balls(
    frame: Res<FrameReading>,
    balls: Res<TimeBalls>,
    q_balls: Query<(&Transform, &BallRadius)>,
    mut gizmos: Gizmos,
) {
    let palette = palette_for_minute(frame.minute);
    for unit in TimeUnit::ALL {
        let color = palette.unit_color(unit);
        for e in balls.iter(unit) {
            // Spawned this frame; position exists once commands apply.
            let Ok((tf, radius)) = q_balls.get(e) else {
                continue;
            };
            gizmos.circle_2d(tf.translation.truncate(), radius.0, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wall_outline_closes_polygon() {
        let v = [Vec2::ZERO, Vec2::X, Vec2::ONE, Vec2::Y];
        let outline = wall_outline(v);
        assert_eq!(outline.len(), 5);
        assert_eq!(outline[0], outline[4]);
    }
}
