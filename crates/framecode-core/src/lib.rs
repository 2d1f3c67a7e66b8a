//! Frame-index to timecode conversion for fixed-rate timelapse captures.
//!
//! This crate is intentionally dependency-free so it can be consumed by
//! capture hosts, overlay renderers, and editor tooling without pulling in
//! any clock or process-level code.
//!
//! # Structure
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`components`] | `TimecodeComponents` |
//! | [`error`] | `TimecodeError` |
//! | [`format`] | `format_frames` entry point, `pad_two_digits`, `DEFAULT_FRAME_RATE` |
//!
//! # Quick start
//!
//! ```rust
//! use framecode_core::{format_frames, DEFAULT_FRAME_RATE};
//!
//! // Frame 60 of a 30 s/frame capture: half an hour of real time elapsed.
//! let label = format_frames(60, DEFAULT_FRAME_RATE).unwrap();
//! assert_eq!(label, "00h:30m");
//! ```

pub mod components;
pub mod error;
pub mod format;

pub use components::TimecodeComponents;
pub use error::TimecodeError;
pub use format::{format_frames, pad_two_digits, DEFAULT_FRAME_RATE};

#[cfg(test)]
mod timecode_tests {
    use super::*;

    fn tc(frames: u64, rate: u32) -> String { format_frames(frames, rate).unwrap() }

    /// Asserts the rendered shape: 2+ digit hours, 'h', ':', 2 digit minutes, 'm'.
    fn shape(label: &str) {
        let (hours, rest) = label.split_once("h:").unwrap();
        assert!(hours.len() >= 2 && hours.bytes().all(|b| b.is_ascii_digit()), "{label}");
        let minutes = rest.strip_suffix('m').unwrap();
        assert!(minutes.len() == 2 && minutes.bytes().all(|b| b.is_ascii_digit()), "{label}");
    }

    #[test] fn origin_frame() { assert_eq!(tc(0, 30), "00h:00m"); }
    #[test] fn half_hour() { assert_eq!(tc(60, 30), "00h:30m"); }
    #[test] fn sixty_hours() { assert_eq!(tc(7200, 30), "60h:00m"); }
    #[test] fn sub_minute_elapsed() { assert_eq!(tc(3, 1), "00h:00m"); }
    #[test] fn repeat_calls_agree() { assert_eq!(tc(4321, 30), tc(4321, 30)); }
    #[test] fn shape_holds_across_rates() {
        for (frames, rate) in [(0, 1), (7, 30), (119, 2), (7200, 30), (1_000_000, 60)] {
            shape(&tc(frames, rate));
        }
    }
    #[test] fn zero_rate_errors() { format_frames(1, 0).unwrap_err(); }
    #[test] fn overflow_errors() { format_frames(u64::MAX, 2).unwrap_err(); }
}
