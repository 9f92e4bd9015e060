//! Drawing area derived from the hosting window.
//!
//! Canvas coordinates put the origin at the top-left with y pointing down, the
//! way layout and the drop point are described. Bevy world space is centered
//! with y up; `to_world` / `to_canvas` convert between the two.

use bevy::prelude::*;

use crate::core::config::WindowConfig;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
        }
    }

    /// Container width minus the fixed side margin; height is taken as-is.
    pub fn from_window(window: &WindowConfig) -> Self {
        Self::new(window.width - window.side_margin, window.height)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn to_world(&self, canvas_pos: Vec2) -> Vec2 {
        Vec2::new(
            canvas_pos.x - self.width * 0.5,
            self.height * 0.5 - canvas_pos.y,
        )
    }

    pub fn to_canvas(&self, world_pos: Vec2) -> Vec2 {
        Vec2::new(
            world_pos.x + self.width * 0.5,
            self.height * 0.5 - world_pos.y,
        )
    }

    /// Top-center of the canvas, where new balls enter.
    pub fn drop_point(&self) -> Vec2 {
        self.to_world(Vec2::new(self.width * 0.5, 0.0))
    }

    /// Pivot of the clock hands.
    pub fn center(&self) -> Vec2 {
        self.to_world(self.size() * 0.5)
    }
}
