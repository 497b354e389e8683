//! Hand landmark frames produced by an external tracker.

use glam::Vec3;

/// Number of landmarks per hand in the tracker's layout.
pub const LANDMARK_COUNT: usize = 21;

/// Index of the thumb-tip landmark.
pub const THUMB_TIP: usize = 4;

/// Index of the index-finger-tip landmark.
pub const INDEX_TIP: usize = 8;

/// Landmarks for a single detected hand.
///
/// Positions are normalized image coordinates (x and y in 0-1, z a relative
/// depth the gesture mapping ignores). A well-formed frame carries
/// [`LANDMARK_COUNT`] points; frames with fewer are tolerated but may not
/// expose the tips the gesture mapping needs.
#[derive(Debug, Clone, PartialEq)]
pub struct HandFrame {
    landmarks: Vec<Vec3>,
}

impl HandFrame {
    /// Wrap a tracker's landmark list for one hand.
    pub fn new(landmarks: Vec<Vec3>) -> Self {
        Self { landmarks }
    }

    /// Number of landmarks present.
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    /// Landmark by index, `None` when the frame is truncated.
    pub fn landmark(&self, index: usize) -> Option<Vec3> {
        self.landmarks.get(index).copied()
    }

    /// Thumb-tip position, if present.
    pub fn thumb_tip(&self) -> Option<Vec3> {
        self.landmark(THUMB_TIP)
    }

    /// Index-finger-tip position, if present.
    pub fn index_tip(&self) -> Option<Vec3> {
        self.landmark(INDEX_TIP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_frame() -> HandFrame {
        HandFrame::new(
            (0..LANDMARK_COUNT)
                .map(|i| Vec3::new(i as f32 * 0.01, 0.5, 0.0))
                .collect(),
        )
    }

    #[test]
    fn test_tip_accessors() {
        let frame = full_frame();
        assert_eq!(frame.thumb_tip().unwrap().x, 0.04);
        assert_eq!(frame.index_tip().unwrap().x, 0.08);
    }

    #[test]
    fn test_truncated_frame_has_no_tips() {
        let frame = HandFrame::new(vec![Vec3::ZERO; 3]);
        assert!(frame.thumb_tip().is_none());
        assert!(frame.index_tip().is_none());
    }
}
