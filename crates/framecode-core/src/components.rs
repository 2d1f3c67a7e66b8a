use core::fmt;

use crate::error::TimecodeError;
use crate::format::pad_two_digits;

/// Elapsed-time split for one frame of a capture sequence.
///
/// Derived from a frame index and a per-frame seconds multiplier; holds no
/// reference to either. `minutes` and `seconds` are always below 60; `hours`
/// is unbounded (long captures do not wrap into days).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct TimecodeComponents {
    pub hours: u64,
    pub minutes: u8,
    pub seconds: u8,
}

impl TimecodeComponents {
    /// Splits a total second count into hours, minutes, and seconds.
    #[inline]
    pub const fn from_seconds(total_seconds: u64) -> Self {
        Self {
            hours: total_seconds / 3600,
            minutes: ((total_seconds / 60) % 60) as u8,
            seconds: (total_seconds % 60) as u8,
        }
    }

    /// Converts a frame index under the given per-frame seconds multiplier.
    ///
    /// Elapsed seconds are `frame_index * frame_rate`: each captured frame
    /// stands for `frame_rate` seconds of real time. Fails on a zero rate
    /// and on a second count that does not fit in `u64`.
    pub fn from_frames(frame_index: u64, frame_rate: u32) -> Result<Self, TimecodeError> {
        if frame_rate == 0 {
            return Err(TimecodeError::ZeroFrameRate);
        }

        let total_seconds = frame_index
            .checked_mul(u64::from(frame_rate))
            .ok_or(TimecodeError::Overflow { frame_index, frame_rate })?;

        Ok(Self::from_seconds(total_seconds))
    }

    /// Total elapsed seconds represented by this split.
    #[inline]
    pub const fn total_seconds(self) -> u64 {
        self.hours * 3600 + self.minutes as u64 * 60 + self.seconds as u64
    }

    /// Long form including the seconds field: `"00h:30m:15s"`.
    ///
    /// The `Display` impl sticks to minute resolution; this is the variant
    /// for hosts that burn full stamps onto frames.
    pub fn with_seconds(self) -> String {
        format!(
            "{}h:{}m:{}s",
            pad_two_digits(self.hours),
            pad_two_digits(u64::from(self.minutes)),
            pad_two_digits(u64::from(self.seconds)),
        )
    }
}

/// Minute-resolution display, `"00h:30m"`.
///
/// Both fields go through [`pad_two_digits`], so hours of 100 or more render
/// unpadded. Seconds never appear here.
impl fmt::Display for TimecodeComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}h:{}m",
            pad_two_digits(self.hours),
            pad_two_digits(u64::from(self.minutes)),
        )
    }
}
