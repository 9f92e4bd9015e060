pub mod camera;
pub mod palette;
pub mod sketch;
