//! Immediate-mode drawing of the clock: background, walls, balls, hands.

pub mod bodies;
pub mod hands;

use bevy::prelude::*;

use crate::core::system::system_order::ClockSet;
use crate::rendering::palette::palette::ClockPalette;

use bodies::{draw_balls, draw_walls, update_background};
use hands::{apply_hand_widths, draw_hands, HourHandGizmos, MinuteHandGizmos, SecondHandGizmos};

pub struct SketchRenderPlugin;

impl Plugin for SketchRenderPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(ClockPalette::light().background))
            .init_gizmo_group::<HourHandGizmos>()
            .init_gizmo_group::<MinuteHandGizmos>()
            .init_gizmo_group::<SecondHandGizmos>()
            .add_systems(
                Update,
                (
                    apply_hand_widths,
                    update_background,
                    draw_walls,
                    draw_balls,
                    draw_hands,
                )
                    .chain()
                    .in_set(ClockSet::Draw),
            );
    }
}
