//! Wall-clock readings and the sources they come from.
//!
//! The coordinator never calls `chrono` directly; it reads a [`WallClock`]
//! resource, which wraps any [`ClockSource`]. Production uses [`SystemClock`],
//! tests and `--time` use [`ManualClock`].

use std::sync::{
    atomic::{AtomicU32, Ordering},
    Arc,
};

use bevy::prelude::*;
use chrono::{Local, NaiveTime, Timelike};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// One of the three time units that own a ball collection and a hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    Second,
    Minute,
    Hour,
}

impl TimeUnit {
    pub const ALL: [TimeUnit; 3] = [TimeUnit::Second, TimeUnit::Minute, TimeUnit::Hour];

    /// Full-turn value of the hand for this unit.
    pub fn hand_range(self) -> u32 {
        match self {
            TimeUnit::Second | TimeUnit::Minute => 60,
            TimeUnit::Hour => 12,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
        }
    }
}

/// Second / minute / 12h-hour snapshot taken once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub second: u32,
    pub minute: u32,
    /// 1..=12; midnight and noon read as 12.
    pub hour12: u32,
}

impl ClockReading {
    pub fn from_hms(hour24: u32, minute: u32, second: u32) -> Self {
        let hour12 = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        Self {
            second,
            minute,
            hour12,
        }
    }

    /// Target ball count for `unit`.
    pub fn value(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Second => self.second,
            TimeUnit::Minute => self.minute,
            TimeUnit::Hour => self.hour12,
        }
    }

    /// Value fed to the hand angle; the hour hand points straight up at 12.
    pub fn hand_value(&self, unit: TimeUnit) -> u32 {
        match unit {
            TimeUnit::Hour => self.hour12 % 12,
            other => self.value(other),
        }
    }
}

/// Port for time abstraction so the coordinator can run against real or simulated time.
pub trait ClockSource: Send + Sync + 'static {
    fn now(&self) -> ClockReading;

    fn name(&self) -> &str {
        "Clock"
    }
}

/// Local time of the host.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl ClockSource for SystemClock {
    fn now(&self) -> ClockReading {
        let now = Local::now();
        ClockReading::from_hms(now.hour(), now.minute(), now.second())
    }

    fn name(&self) -> &str {
        "system"
    }
}

/// Settable clock; clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    seconds_of_day: Arc<AtomicU32>,
}

impl ManualClock {
    pub fn new(hour24: u32, minute: u32, second: u32) -> Self {
        let clock = Self::default();
        clock.set_hms(hour24, minute, second);
        clock
    }

    pub fn set_hms(&self, hour24: u32, minute: u32, second: u32) {
        let secs = (hour24 * 3600 + minute * 60 + second) % SECONDS_PER_DAY;
        self.seconds_of_day.store(secs, Ordering::Relaxed);
    }

    /// Moves the clock forward, wrapping at midnight.
    pub fn advance(&self, seconds: u32) {
        let cur = self.seconds_of_day.load(Ordering::Relaxed);
        let next = (cur + seconds % SECONDS_PER_DAY) % SECONDS_PER_DAY;
        self.seconds_of_day.store(next, Ordering::Relaxed);
    }

    pub fn hms(&self) -> (u32, u32, u32) {
        let secs = self.seconds_of_day.load(Ordering::Relaxed);
        (secs / 3600, (secs / 60) % 60, secs % 60)
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> ClockReading {
        let (h, m, s) = self.hms();
        ClockReading::from_hms(h, m, s)
    }

    fn name(&self) -> &str {
        "manual"
    }
}

/// Parses `HH:MM:SS` (24h) into hour, minute, second.
pub fn parse_hms(text: &str) -> Result<(u32, u32, u32), chrono::ParseError> {
    let t = NaiveTime::parse_from_str(text.trim(), "%H:%M:%S")?;
    Ok((t.hour(), t.minute(), t.second()))
}

/// Clock the coordinator reads each frame.
#[derive(Resource)]
pub struct WallClock(Box<dyn ClockSource>);

impl WallClock {
    pub fn new(source: impl ClockSource) -> Self {
        Self(Box::new(source))
    }

    pub fn read(&self) -> ClockReading {
        self.0.now()
    }

    pub fn source_name(&self) -> &str {
        self.0.name()
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hour_normalizes_to_twelve_hour_form() {
        assert_eq!(ClockReading::from_hms(0, 0, 0).hour12, 12);
        assert_eq!(ClockReading::from_hms(12, 0, 0).hour12, 12);
        assert_eq!(ClockReading::from_hms(13, 0, 0).hour12, 1);
        assert_eq!(ClockReading::from_hms(23, 0, 0).hour12, 11);
        assert_eq!(ClockReading::from_hms(3, 0, 0).hour12, 3);
    }

    #[test]
    fn hour_hand_value_wraps_twelve_to_zero() {
        let r = ClockReading::from_hms(0, 30, 15);
        assert_eq!(r.value(TimeUnit::Hour), 12);
        assert_eq!(r.hand_value(TimeUnit::Hour), 0);
        assert_eq!(r.hand_value(TimeUnit::Minute), 30);
        assert_eq!(r.hand_value(TimeUnit::Second), 15);
    }

    #[test]
    fn manual_clock_advances_and_wraps_midnight() {
        let clock = ManualClock::new(23, 59, 58);
        let shared = clock.clone();
        clock.advance(1);
        assert_eq!(shared.hms(), (23, 59, 59));
        clock.advance(1);
        assert_eq!(shared.hms(), (0, 0, 0));
        assert_eq!(shared.now(), ClockReading::from_hms(0, 0, 0));
    }

    #[test]
    fn parse_hms_accepts_24h_time() {
        assert_eq!(parse_hms("03:10:05").unwrap(), (3, 10, 5));
        assert_eq!(parse_hms(" 23:59:59 ").unwrap(), (23, 59, 59));
        assert!(parse_hms("25:00:00").is_err());
        assert!(parse_hms("noon").is_err());
    }

    #[test]
    fn wall_clock_reads_its_source() {
        let manual = ManualClock::new(15, 4, 9);
        let clock = WallClock::new(manual.clone());
        assert_eq!(clock.source_name(), "manual");
        assert_eq!(clock.read(), ClockReading::from_hms(15, 4, 9));
        manual.set_hms(16, 0, 0);
        assert_eq!(clock.read().hour12, 4);
    }
}
