use std::time::Instant;

use framecode_core::{TimecodeComponents, TimecodeError};

/// Snapshot for one captured frame.
#[derive(Debug, Copy, Clone)]
pub struct FrameStamp {
    /// Zero-based index of the frame within its capture sequence.
    pub frame_index: u64,

    /// Monotonic timestamp taken at the tick.
    pub now: Instant,
}

impl FrameStamp {
    /// Elapsed-time split for this frame under the given per-frame seconds
    /// multiplier.
    pub fn timecode(&self, frame_rate: u32) -> Result<TimecodeComponents, TimecodeError> {
        TimecodeComponents::from_frames(self.frame_index, frame_rate)
    }
}

/// Frame counter producing `FrameStamp` snapshots.
///
/// One clock per capture sequence, so concurrent sequences never share an
/// index. Call `tick()` once per captured frame; the first tick yields the
/// starting index.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start_index: u64,
    next_index: u64,
}

impl FrameClock {
    /// Creates a clock whose first tick yields frame 0.
    pub fn new() -> Self {
        Self::starting_at(0)
    }

    /// Creates a clock whose first tick yields `frame_index`.
    ///
    /// Useful when a capture resumes partway through an existing sequence.
    pub fn starting_at(frame_index: u64) -> Self {
        Self {
            start_index: frame_index,
            next_index: frame_index,
        }
    }

    /// Rewinds the clock to its starting index.
    pub fn reset(&mut self) {
        log::debug!("frame clock reset to index {}", self.start_index);
        self.next_index = self.start_index;
    }

    /// Advances the clock and returns the stamp for the captured frame.
    pub fn tick(&mut self) -> FrameStamp {
        let stamp = FrameStamp {
            frame_index: self.next_index,
            now: Instant::now(),
        };

        self.next_index = self
            .next_index
            .wrapping_add(1);

        stamp
    }

    /// Number of frames ticked since creation or the last `reset`.
    pub fn frames_ticked(&self) -> u64 {
        self.next_index.wrapping_sub(self.start_index)
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
