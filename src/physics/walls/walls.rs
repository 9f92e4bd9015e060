use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::canvas::Canvas;
use crate::core::components::{Wall, WallSide};

/// Handles of the three static boundary bodies. Created once, never replaced.
#[derive(Resource, Debug, Clone, Copy)]
pub struct ArenaWalls {
    pub floor: Entity,
    pub left: Entity,
    pub right: Entity,
}

impl ArenaWalls {
    pub fn entities(&self) -> [Entity; 3] {
        [self.floor, self.left, self.right]
    }
}

/// World-space center and the wall component for floor, left and right.
/// The top stays open so balls can drop in.
pub fn wall_layout(canvas: &Canvas, thickness: f32) -> [(Vec2, Wall); 3] {
    let (w, h) = (canvas.width, canvas.height);
    let half_t = thickness * 0.5;
    [
        (
            canvas.to_world(Vec2::new(w * 0.5, h)),
            Wall {
                side: WallSide::Floor,
                half_extents: Vec2::new(w * 0.5, half_t),
            },
        ),
        (
            canvas.to_world(Vec2::new(0.0, h * 0.5)),
            Wall {
                side: WallSide::Left,
                half_extents: Vec2::new(half_t, h * 0.5),
            },
        ),
        (
            canvas.to_world(Vec2::new(w, h * 0.5)),
            Wall {
                side: WallSide::Right,
                half_extents: Vec2::new(half_t, h * 0.5),
            },
        ),
    ]
}

/// Spawns the fixed colliders for the arena boundary.
pub fn spawn_walls(commands: &mut Commands, canvas: &Canvas, thickness: f32) -> ArenaWalls {
    let [floor, left, right] = wall_layout(canvas, thickness).map(|(center, wall)| {
        commands
            .spawn((
                Name::new(wall.side.name()),
                wall,
                RigidBody::Fixed,
                Collider::cuboid(wall.half_extents.x, wall.half_extents.y),
                Transform::from_translation(center.extend(0.0)),
            ))
            .id()
    });
    ArenaWalls { floor, left, right }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walls_hug_bottom_and_sides() {
        let canvas = Canvas::new(800.0, 600.0);
        let [(floor_c, floor), (left_c, left), (right_c, right)] = wall_layout(&canvas, 50.0);
        assert_eq!(floor.side, WallSide::Floor);
        assert_eq!(floor_c, Vec2::new(0.0, -300.0));
        assert_eq!(floor.half_extents, Vec2::new(400.0, 25.0));
        assert_eq!(left_c, Vec2::new(-400.0, 0.0));
        assert_eq!(left.half_extents, Vec2::new(25.0, 300.0));
        assert_eq!(right_c, Vec2::new(400.0, 0.0));
        assert_eq!(right.side, WallSide::Right);
    }

    #[test]
    fn spawn_walls_creates_three_fixed_bodies() {
        let mut app = App::new();
        app.add_systems(Startup, |mut commands: Commands| {
            let walls = spawn_walls(&mut commands, &Canvas::new(640.0, 480.0), 50.0);
            commands.insert_resource(walls);
        });
        app.update();
        let walls = *app.world().resource::<ArenaWalls>();
        for e in walls.entities() {
            assert!(app.world().get::<Wall>(e).is_some());
            assert!(matches!(
                app.world().get::<RigidBody>(e),
                Some(RigidBody::Fixed)
            ));
        }
        let floor_tf = app.world().get::<Transform>(walls.floor).unwrap();
        assert_eq!(floor_tf.translation.y, -240.0);
    }
}
