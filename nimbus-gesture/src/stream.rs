//! The seam between the core and the external hand tracker.

use crate::landmarks::HandFrame;
use thiserror::Error;

/// Errors a landmark source can report.
#[derive(Debug, Error)]
pub enum StreamError {
    #[error("Tracker unavailable: {0}")]
    TrackerUnavailable(String),

    #[error("Invalid detection data: {0}")]
    InvalidData(String),

    #[error("Stream ended")]
    StreamEnded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for sources that produce hand landmark detections.
///
/// Implementations wrap whatever actually looks at camera frames (a
/// landmark model, a replay file, a script). One call yields the hands seen
/// in one detection cycle; an empty list means no hands this cycle, which
/// the caller treats the same as "no data yet".
pub trait LandmarkStream {
    /// Get the hands detected in the next cycle.
    /// Returns `None` when the stream ends.
    fn next_frame(&mut self) -> Result<Option<Vec<HandFrame>>, StreamError>;

    /// Get the detection rate (cycles per second), if known.
    fn frame_rate(&self) -> Option<f32>;

    /// Check if the source is still active.
    fn is_active(&self) -> bool;

    /// Stop producing detections.
    fn stop(&mut self);
}
