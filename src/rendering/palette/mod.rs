pub mod palette;

pub use palette::{palette_for_minute, ClockPalette};
