//! Mapping detected hands to a normalized control signal.

use crate::landmarks::HandFrame;
use crate::signal::ControlSignal;
use glam::Vec3;

/// Pinch gesture: thumb-to-index distance saturating around this span.
const PINCH_RANGE: f32 = 0.2;

/// Spread gesture: index-to-index distance below this reads as zero.
const SPREAD_MIN: f32 = 0.05;

/// Spread gesture: span of the usable index-to-index range.
const SPREAD_RANGE: f32 = 0.6;

/// Derive the control signal for one detection cycle.
///
/// Pure function of this cycle's hands and the previous signal:
///
/// - no hands: inactive, the previous distance is carried so consumers
///   never see the value jump when tracking drops out;
/// - one hand: pinch, thumb tip to index tip, `clamp(d / 0.2, 0, 1)`;
/// - two hands: spread, index tip to index tip,
///   `clamp((d - 0.05) / 0.6, 0, 1)`;
/// - more than two hands: only the first two in tracker order count.
///
/// A cycle whose hands are missing the needed landmarks, or whose distance
/// comes out non-finite, is skipped: the previous signal is returned
/// unchanged rather than propagating garbage downstream.
pub fn derive_control_signal(hands: &[HandFrame], last: ControlSignal) -> ControlSignal {
    match hands {
        [] => ControlSignal::new(last.distance, false),
        [hand] => match (hand.thumb_tip(), hand.index_tip()) {
            (Some(thumb), Some(index)) => normalized(planar_distance(thumb, index) / PINCH_RANGE, last),
            _ => last,
        },
        [first, second, ..] => match (first.index_tip(), second.index_tip()) {
            (Some(a), Some(b)) => {
                normalized((planar_distance(a, b) - SPREAD_MIN) / SPREAD_RANGE, last)
            }
            _ => last,
        },
    }
}

/// Euclidean distance in the image plane; the tracker's relative depth is
/// too noisy to drive the gesture.
fn planar_distance(a: Vec3, b: Vec3) -> f32 {
    a.truncate().distance(b.truncate())
}

fn normalized(raw: f32, last: ControlSignal) -> ControlSignal {
    if raw.is_finite() {
        ControlSignal::new(raw.clamp(0.0, 1.0), true)
    } else {
        last
    }
}
