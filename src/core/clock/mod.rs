pub mod clock;

pub use clock::{
    parse_hms, ClockReading, ClockSource, ManualClock, SystemClock, TimeUnit, WallClock,
};
