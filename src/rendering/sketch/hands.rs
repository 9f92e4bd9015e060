use bevy::prelude::*;

use crate::core::canvas::Canvas;
use crate::core::clock::TimeUnit;
use crate::core::config::{ClockConfig, HandConfig};
use crate::gameplay::coordinator::FrameReading;
use crate::rendering::palette::palette::palette_for_minute;

/// Gizmo group per hand so each gets its own stroke width.
#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct HourHandGizmos;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct MinuteHandGizmos;

#[derive(Default, Reflect, GizmoConfigGroup)]
pub struct SecondHandGizmos;

/// Linear map of `value` in `0..=range` onto `0..=360` degrees.
pub fn hand_angle_degrees(value: f32, range: f32) -> f32 {
    if range <= 0.0 {
        return 0.0;
    }
    value / range * 360.0
}

/// End point of a hand rotated clockwise from 12 o'clock (world space, y up).
pub fn hand_tip(center: Vec2, angle_degrees: f32, length: f32) -> Vec2 {
    let (sin, cos) = angle_degrees.to_radians().sin_cos();
    center + Vec2::new(sin, cos) * length
}

pub fn hand_config(cfg: &ClockConfig, unit: TimeUnit) -> HandConfig {
    match unit {
        TimeUnit::Second => cfg.hands.second,
        TimeUnit::Minute => cfg.hands.minute,
        TimeUnit::Hour => cfg.hands.hour,
    }
}

fn draw_time_hand<G: GizmoConfigGroup>(
    gizmos: &mut Gizmos<G>,
    center: Vec2,
    angle_degrees: f32,
    length: f32,
    color: Color,
) {
    gizmos.line_2d(center, hand_tip(center, angle_degrees, length), color);
}

/// Pushes hand weights from config into the gizmo line widths.
pub fn apply_hand_widths(cfg: Res<ClockConfig>, mut store: ResMut<GizmoConfigStore>) {
    if !cfg.is_changed() {
        return;
    }
    store.config_mut::<HourHandGizmos>().0.line.width = cfg.hands.hour.weight;
    store.config_mut::<MinuteHandGizmos>().0.line.width = cfg.hands.minute.weight;
    store.config_mut::<SecondHandGizmos>().0.line.width = cfg.hands.second.weight;
}

pub fn draw_hands(
    frame: Res<FrameReading>,
    canvas: Res<Canvas>,
    cfg: Res<ClockConfig>,
    mut hour: Gizmos<HourHandGizmos>,
    mut minute: Gizmos<MinuteHandGizmos>,
    mut second: Gizmos<SecondHandGizmos>,
) {
    let reading = frame.0;
    let palette = palette_for_minute(reading.minute);
    let center = canvas.center();
    let geometry = |unit: TimeUnit| {
        let angle = hand_angle_degrees(reading.hand_value(unit) as f32, unit.hand_range() as f32);
        let length = canvas.width * hand_config(&cfg, unit).length_frac;
        (angle, length, palette.unit_color(unit))
    };

    let (angle, length, color) = geometry(TimeUnit::Hour);
    draw_time_hand(&mut hour, center, angle, length, color);
    let (angle, length, color) = geometry(TimeUnit::Minute);
    draw_time_hand(&mut minute, center, angle, length, color);
    let (angle, length, color) = geometry(TimeUnit::Second);
    draw_time_hand(&mut second, center, angle, length, color);
}
