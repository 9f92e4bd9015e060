use bevy::prelude::*;

use crate::core::clock::TimeUnit;

/// Marker component identifying a ball entity (holds physics body & collider).
#[derive(Component)]
pub struct Ball;

/// Time unit a ball counts toward.
#[derive(Component, Debug, Deref, Copy, Clone, PartialEq, Eq)]
pub struct BallUnit(pub TimeUnit);

/// Logical radius used both for the collider and the drawn circle.
#[derive(Component, Debug, Deref, DerefMut, Copy, Clone)]
pub struct BallRadius(pub f32);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Floor,
    Left,
    Right,
}

impl WallSide {
    pub fn name(self) -> &'static str {
        match self {
            WallSide::Floor => "WallFloor",
            WallSide::Left => "WallLeft",
            WallSide::Right => "WallRight",
        }
    }
}

/// Static boundary body. `half_extents` matches the cuboid collider.
#[derive(Component, Debug, Clone, Copy)]
pub struct Wall {
    pub side: WallSide,
    pub half_extents: Vec2,
}

impl Wall {
    /// Corner vertices in world space, counter-clockwise from bottom-left.
    pub fn vertices(&self, tf: &Transform) -> [Vec2; 4] {
        let h = self.half_extents;
        [
            Vec2::new(-h.x, -h.y),
            Vec2::new(h.x, -h.y),
            Vec2::new(h.x, h.y),
            Vec2::new(-h.x, h.y),
        ]
        .map(|corner| tf.transform_point(corner.extend(0.0)).truncate())
    }
}
