//! Clock color palettes. The palette flips every minute: even minutes use the
//! light scheme, odd minutes the dark one.

use bevy::prelude::*;

use crate::core::clock::TimeUnit;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPalette {
    pub background: Color,
    pub second: Color,
    pub minute: Color,
    pub hour: Color,
}

impl ClockPalette {
    /// Even-minute scheme.
    pub fn light() -> Self {
        Self {
            background: Color::srgb_u8(0xED, 0xF7, 0xFA),
            second: Color::srgb_u8(0x5F, 0x6C, 0xAF),
            minute: Color::srgb_u8(0xFF, 0xB6, 0x77),
            hour: Color::srgb_u8(0xFF, 0x83, 0x64),
        }
    }

    /// Odd-minute scheme.
    pub fn dark() -> Self {
        Self {
            background: Color::srgb_u8(0x27, 0x28, 0x29),
            second: Color::srgb_u8(0xF7, 0xE9, 0x87),
            minute: Color::srgb_u8(0xD8, 0xD9, 0xDA),
            hour: Color::srgb_u8(0x61, 0x67, 0x7A),
        }
    }

    /// Stroke color for a unit's balls and hand.
    pub fn unit_color(&self, unit: TimeUnit) -> Color {
        match unit {
            TimeUnit::Second => self.second,
            TimeUnit::Minute => self.minute,
            TimeUnit::Hour => self.hour,
        }
    }

    /// Faint outline for the boundary walls.
    pub fn wall(&self) -> Color {
        self.hour.with_alpha(0.35)
    }
}

#[inline]
pub fn palette_for_minute(minute: u32) -> ClockPalette {
    if minute % 2 == 0 {
        ClockPalette::light()
    } else {
        ClockPalette::dark()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_minute_is_dark_even_is_light() {
        assert_eq!(palette_for_minute(11), ClockPalette::dark());
        assert_eq!(palette_for_minute(12), ClockPalette::light());
        assert_eq!(palette_for_minute(0), ClockPalette::light());
        assert_eq!(palette_for_minute(59), ClockPalette::dark());
    }

    #[test]
    fn palette_depends_only_on_parity() {
        for m in 0..60 {
            assert_eq!(palette_for_minute(m), palette_for_minute(m % 2));
        }
    }

    #[test]
    fn unit_colors_distinct_within_palette() {
        for p in [ClockPalette::light(), ClockPalette::dark()] {
            let colors: Vec<Color> = TimeUnit::ALL.iter().map(|u| p.unit_color(*u)).collect();
            for (i, c1) in colors.iter().enumerate() {
                for (j, c2) in colors.iter().enumerate() {
                    if i != j {
                        assert!(c1 != c2, "palette repeats a unit color at {i} and {j}");
                    }
                }
                assert!(*c1 != p.background);
            }
        }
    }
}
