use std::fmt;

/// A conversion error from frame arithmetic.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TimecodeError {
    /// The per-frame seconds multiplier was zero.
    ZeroFrameRate,
    /// `frame_index * frame_rate` does not fit in a `u64` second count.
    Overflow {
        frame_index: u64,
        frame_rate: u32,
    },
}

impl fmt::Display for TimecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimecodeError::ZeroFrameRate => {
                write!(f, "frame rate must be positive")
            }
            TimecodeError::Overflow { frame_index, frame_rate } => {
                write!(
                    f,
                    "elapsed seconds overflow for frame {frame_index} at {frame_rate} s/frame"
                )
            }
        }
    }
}

impl std::error::Error for TimecodeError {}
