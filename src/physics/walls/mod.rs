pub mod walls;

pub use walls::{spawn_walls, wall_layout, ArenaWalls};
