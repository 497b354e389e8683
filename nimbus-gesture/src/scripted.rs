//! Scripted landmark source for demos and tests.
//!
//! Stands in for the real tracker: no camera, no model, just a
//! deterministic loop of gesture phases (idle, pinch, spread) so the rest
//! of the pipeline can be exercised end to end.

use crate::landmarks::{HandFrame, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP};
use crate::stream::{LandmarkStream, StreamError};
use glam::Vec3;
use std::f32::consts::TAU;
use tracing::info;

/// Seconds each gesture phase lasts before moving to the next.
const PHASE_SECONDS: f32 = 4.0;

/// Gesture phases the script cycles through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Pinch,
    Spread,
}

/// Deterministic landmark source cycling idle, pinch, and spread gestures.
pub struct ScriptedGestures {
    cycle: u64,
    frame_rate: f32,
    active: bool,
}

impl ScriptedGestures {
    /// Create a script running at the given detection rate.
    pub fn new(frame_rate: f32) -> Self {
        info!("Scripted gesture source at {} Hz", frame_rate);
        Self {
            cycle: 0,
            frame_rate,
            active: true,
        }
    }

    fn phase_at(&self, t: f32) -> Phase {
        match ((t / PHASE_SECONDS) as u64) % 3 {
            0 => Phase::Idle,
            1 => Phase::Pinch,
            _ => Phase::Spread,
        }
    }

    /// Hands visible at scripted time `t`.
    fn hands_at(&self, t: f32) -> Vec<HandFrame> {
        match self.phase_at(t) {
            Phase::Idle => Vec::new(),
            Phase::Pinch => {
                // Thumb-to-index gap sweeps the full pinch range.
                let gap = 0.1 * (1.0 + (TAU * t / PHASE_SECONDS).sin());
                let center = Vec3::new(0.5, 0.5, 0.0);
                vec![synth_hand(
                    center,
                    center - Vec3::new(gap * 0.5, 0.0, 0.0),
                    center + Vec3::new(gap * 0.5, 0.0, 0.0),
                )]
            }
            Phase::Spread => {
                // Index-to-index span sweeps most of the spread range.
                let span = 0.35 + 0.3 * (TAU * t / PHASE_SECONDS).sin();
                let left = Vec3::new(0.5 - span * 0.5, 0.5, 0.0);
                let right = Vec3::new(0.5 + span * 0.5, 0.5, 0.0);
                vec![
                    synth_hand(left, left - Vec3::new(0.03, 0.0, 0.0), left),
                    synth_hand(right, right + Vec3::new(0.03, 0.0, 0.0), right),
                ]
            }
        }
    }
}

impl LandmarkStream for ScriptedGestures {
    fn next_frame(&mut self) -> Result<Option<Vec<HandFrame>>, StreamError> {
        if !self.active {
            return Ok(None);
        }
        let t = self.cycle as f32 / self.frame_rate;
        self.cycle += 1;
        Ok(Some(self.hands_at(t)))
    }

    fn frame_rate(&self) -> Option<f32> {
        Some(self.frame_rate)
    }

    fn is_active(&self) -> bool {
        self.active
    }

    fn stop(&mut self) {
        if self.active {
            self.active = false;
            info!("Scripted gesture source stopped after {} cycles", self.cycle);
        }
    }
}

impl Drop for ScriptedGestures {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Build a full landmark frame around a palm center, with the two tips the
/// gesture mapping reads placed exactly.
fn synth_hand(palm: Vec3, thumb_tip: Vec3, index_tip: Vec3) -> HandFrame {
    let mut landmarks = Vec::with_capacity(LANDMARK_COUNT);
    for i in 0..LANDMARK_COUNT {
        // Knuckles fan out in a fixed grid below the palm center.
        let row = (i / 5) as f32;
        let col = (i % 5) as f32;
        landmarks.push(palm + Vec3::new((col - 2.0) * 0.02, row * 0.02, 0.0));
    }
    landmarks[THUMB_TIP] = thumb_tip;
    landmarks[INDEX_TIP] = index_tip;
    HandFrame::new(landmarks)
}
