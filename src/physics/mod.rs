pub mod rapier;
pub mod walls;
