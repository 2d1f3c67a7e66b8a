//! Framecode clock crate.
//!
//! Owns the tick-driven frame counter and process logging setup used by
//! capture hosts. Timecode math lives in `framecode-core`; this crate
//! supplies the frame indices that feed it.
//!
//! Intended usage:
//! - one `FrameClock` per capture sequence
//! - call `tick()` once per captured frame to obtain a `FrameStamp`

pub mod clock;
pub mod logging;

pub use clock::{FrameClock, FrameStamp};
pub use logging::init_logging;
