//! Persistent particle buffer smoothing toward a target cloud.

use glam::Vec3;
use nimbus_shapes::{PointCloud, ShapeKind};
use thiserror::Error;
use tracing::debug;

/// Per-tick interpolation factor used by fixed-rate callers.
///
/// A constant factor couples morph speed to tick rate; callers with a real
/// clock should derive the factor from elapsed time via
/// [`smoothing_for_dt`] instead.
pub const DEFAULT_SMOOTHING: f32 = 0.05;

/// Convergence rate for the time-based factor, chosen so one 60 Hz tick
/// matches [`DEFAULT_SMOOTHING`].
pub const MORPH_RATE: f32 = 3.0;

/// Interpolation factor equivalent to exponential approach over `dt`
/// seconds, independent of tick rate.
pub fn smoothing_for_dt(dt: f32) -> f32 {
    1.0 - (-MORPH_RATE * dt).exp()
}

/// Errors from advancing the morph.
#[derive(Debug, Error)]
pub enum MorphError {
    #[error("target holds {target} points, state holds {state}")]
    CountMismatch { target: usize, state: usize },
}

/// The persistent current-position buffer.
///
/// Created once at system start and only ever mutated by [`advance`]:
/// selecting a new shape swaps the *target* cloud the caller passes in,
/// never this buffer, which is what makes the on-screen morph continuous.
///
/// [`advance`]: MorphState::advance
#[derive(Debug, Clone)]
pub struct MorphState {
    current: Vec<Vec3>,
}

impl MorphState {
    /// Start from a fresh sphere sample, the shape the system boots with.
    pub fn new(count: usize) -> Self {
        debug!("Morph state initialized with {} particles", count);
        Self {
            current: nimbus_shapes::sample(ShapeKind::Sphere, count)
                .points()
                .to_vec(),
        }
    }

    /// Start from explicit positions.
    pub fn from_positions(positions: Vec<Vec3>) -> Self {
        Self { current: positions }
    }

    /// Number of particles; fixed for the life of the state.
    pub fn len(&self) -> usize {
        self.current.len()
    }

    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Current positions.
    pub fn positions(&self) -> &[Vec3] {
        &self.current
    }

    /// Move every particle a fraction of the way toward its target slot.
    ///
    /// `current[i] += (target[i] - current[i]) * smoothing`. With a factor
    /// in (0, 1) the buffer approaches the target asymptotically and never
    /// overshoots; it converges without ever exactly reaching it.
    pub fn advance(&mut self, target: &PointCloud, smoothing: f32) -> Result<(), MorphError> {
        if target.len() != self.current.len() {
            return Err(MorphError::CountMismatch {
                target: target.len(),
                state: self.current.len(),
            });
        }
        for (current, target) in self.current.iter_mut().zip(target.points()) {
            *current += (*target - *current) * smoothing;
        }
        Ok(())
    }

    /// Root-mean-square distance to the target, for convergence reporting.
    pub fn distance_to(&self, target: &PointCloud) -> f32 {
        if self.current.is_empty() || target.len() != self.current.len() {
            return 0.0;
        }
        let sum: f32 = self
            .current
            .iter()
            .zip(target.points())
            .map(|(c, t)| c.distance_squared(*t))
            .sum();
        (sum / self.current.len() as f32).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nimbus_shapes::sample;

    #[test]
    fn test_new_state_matches_count() {
        let state = MorphState::new(500);
        assert_eq!(state.len(), 500);
        assert!(state.positions().iter().all(|p| p.is_finite()));
    }

    #[test]
    fn test_advance_monotonically_approaches_target() {
        let target = sample(ShapeKind::Heart, 200);
        let mut state = MorphState::new(200);
        let mut previous: Vec<f32> = state
            .positions()
            .iter()
            .zip(target.points())
            .map(|(c, t)| c.distance(*t))
            .collect();
        for _ in 0..50 {
            state.advance(&target, DEFAULT_SMOOTHING).unwrap();
            for (i, (c, t)) in state.positions().iter().zip(target.points()).enumerate() {
                let d = c.distance(*t);
                assert!(d <= previous[i] + 1e-6, "particle {i} moved away");
                previous[i] = d;
            }
        }
    }

    #[test]
    fn test_convergence_after_200_ticks() {
        // 0.95^200 of the initial offset remains, about 3e-5 of it.
        let target = sample(ShapeKind::Heart, 1000);
        let mut state = MorphState::new(1000);
        for _ in 0..200 {
            state.advance(&target, 0.05).unwrap();
        }
        let close = state
            .positions()
            .iter()
            .zip(target.points())
            .filter(|(c, t)| c.distance(**t) <= 0.01)
            .count();
        assert!(close >= 950, "only {close} of 1000 particles converged");
    }

    #[test]
    fn test_target_swap_preserves_current() {
        let heart = sample(ShapeKind::Heart, 100);
        let saturn = sample(ShapeKind::Saturn, 100);
        let mut state = MorphState::new(100);
        for _ in 0..10 {
            state.advance(&heart, DEFAULT_SMOOTHING).unwrap();
        }
        let before: Vec<_> = state.positions().to_vec();
        // Swapping targets is the caller passing a different cloud; the
        // buffer itself must not react until the next advance.
        state.advance(&saturn, 0.0).unwrap();
        assert_eq!(state.positions(), &before[..]);
    }

    #[test]
    fn test_count_mismatch_is_rejected() {
        let target = sample(ShapeKind::Sphere, 99);
        let mut state = MorphState::new(100);
        let err = state.advance(&target, DEFAULT_SMOOTHING).unwrap_err();
        assert!(matches!(
            err,
            MorphError::CountMismatch { target: 99, state: 100 }
        ));
    }

    #[test]
    fn test_smoothing_for_dt_matches_fixed_rate() {
        // One 60 Hz tick of the time-based factor is the documented 0.05.
        let factor = smoothing_for_dt(1.0 / 60.0);
        assert!((factor - DEFAULT_SMOOTHING).abs() < 2e-3, "factor {factor}");
        // Longer elapsed time means a larger step, bounded by 1.
        assert!(smoothing_for_dt(0.5) > factor);
        assert!(smoothing_for_dt(100.0) < 1.0);
    }
}
