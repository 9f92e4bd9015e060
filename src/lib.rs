pub mod app;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::clock::ClockPlugin;
pub use crate::app::state::AppState;
pub use crate::core::canvas::Canvas;
pub use crate::core::clock::{ClockReading, ClockSource, ManualClock, SystemClock, TimeUnit, WallClock};
pub use crate::core::components::{Ball, BallRadius, BallUnit, Wall, WallSide};
pub use crate::core::config::{ClockConfig, WindowConfig};
pub use crate::gameplay::coordinator::{CoordinatorPlugin, FrameReading, TimeBalls};
