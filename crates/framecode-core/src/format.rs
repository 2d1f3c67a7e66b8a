use crate::components::TimecodeComponents;
use crate::error::TimecodeError;

/// Per-frame seconds multiplier of the standard deployment: each captured
/// frame stands for 30 seconds of real time.
pub const DEFAULT_FRAME_RATE: u32 = 30;

/// Pads a value to two digits with a literal `"0"` prefix.
///
/// One-sided: values below 10 gain the prefix, everything else renders as
/// plain decimal, so 100 and above come back at three or more digits.
pub fn pad_two_digits(value: u64) -> String {
    if value < 10 {
        format!("0{value}")
    } else {
        value.to_string()
    }
}

/// Formats a frame index as a minute-resolution timecode, `"00h:30m"`.
///
/// Elapsed seconds are `frame_index * frame_rate`. Fails on a zero rate and
/// on a second count that does not fit in `u64`; no string is produced for
/// invalid input.
pub fn format_frames(frame_index: u64, frame_rate: u32) -> Result<String, TimecodeError> {
    Ok(TimecodeComponents::from_frames(frame_index, frame_rate)?.to_string())
}
