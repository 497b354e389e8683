//! The particle system facade: buffer, target, clock, and frame output.

use crate::morph::{MorphState, smoothing_for_dt};
use crate::transform::{ParticleInstance, frame_transform};
use glam::Vec3;
use nimbus_gesture::ControlSignal;
use nimbus_shapes::{PointCloud, ShapeKind};
use tracing::debug;

/// Owns the persistent particle buffer and the active morph target.
///
/// Selecting a shape resamples the *target* only; the buffer keeps
/// smoothing toward it from wherever the particles currently are, which is
/// the visible morph. One instance buffer is reused across ticks to avoid
/// a per-frame allocation.
pub struct ParticleSystem {
    state: MorphState,
    target: PointCloud,
    shape: ShapeKind,
    color: Vec3,
    elapsed: f32,
    instances: Vec<ParticleInstance>,
}

impl ParticleSystem {
    /// Create a system of `count` particles, booted as a sphere.
    pub fn new(count: usize) -> Self {
        Self::with_shape(ShapeKind::Sphere, count)
    }

    /// Create a system already targeting the given shape. The buffer still
    /// starts from a sphere sample, so the first seconds morph into view.
    pub fn with_shape(shape: ShapeKind, count: usize) -> Self {
        Self {
            state: MorphState::new(count),
            target: nimbus_shapes::sample(shape, count),
            shape,
            color: Vec3::ONE,
            elapsed: 0.0,
            instances: Vec::with_capacity(count),
        }
    }

    /// Number of particles.
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }

    /// The shape currently targeted.
    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// The global particle color.
    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Retarget the morph. Safe at any tick; the particle buffer is left
    /// untouched so positions flow continuously into the new shape.
    pub fn set_shape(&mut self, shape: ShapeKind) {
        if shape == self.shape {
            return;
        }
        debug!("Shape change: {} -> {}", self.shape, shape);
        self.shape = shape;
        self.target = nimbus_shapes::sample(shape, self.state.len());
    }

    /// Set the global color applied to every instance.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    /// Root-mean-square distance between the buffer and its target.
    pub fn convergence(&self) -> f32 {
        self.state.distance_to(&self.target)
    }

    /// Advance one tick and produce this frame's instances.
    ///
    /// `dt` is real elapsed seconds; the morph factor is derived from it so
    /// the morph speed does not depend on the caller's tick rate.
    pub fn tick(&mut self, dt: f32, signal: ControlSignal) -> &[ParticleInstance] {
        self.elapsed += dt;
        self.state
            .advance(&self.target, smoothing_for_dt(dt))
            .expect("target resampled at state length");

        let time = self.elapsed;
        let color = self.color;
        self.instances.clear();
        self.instances.extend(
            self.state
                .positions()
                .iter()
                .enumerate()
                .map(|(i, p)| ParticleInstance::from(frame_transform(*p, time, i, signal, color))),
        );
        &self.instances
    }
}
