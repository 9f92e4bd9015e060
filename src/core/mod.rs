pub mod canvas;
pub mod clock;
pub mod components;
pub mod config;
pub mod system;
