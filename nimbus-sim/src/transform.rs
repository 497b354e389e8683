//! Pure per-particle frame transforms.
//!
//! Everything here is a deterministic function of the particle's current
//! position, the elapsed time, the particle index, and the gesture signal.
//! Each particle's record is built as a fresh stack value, so the per-frame
//! loop has no shared scratch state and could be parallelized as is.

use glam::{Quat, Vec3};
use nimbus_gesture::ControlSignal;

/// How far the gesture can scale the cloud out beyond rest (1 + 1.0 * 2.5).
const GESTURE_EXPANSION: f32 = 2.5;

/// Amplitude of the idle breathing oscillation.
const BREATHING_AMPLITUDE: f32 = 0.1;

/// Amplitude of the per-particle drift offset.
const DRIFT_AMPLITUDE: f32 = 0.02;

/// Instance scale while a gesture is driving the cloud.
const ACTIVE_SCALE: f32 = 0.03;

/// Rest instance scale and the amplitude of its idle shimmer.
const IDLE_SCALE: f32 = 0.02;
const IDLE_SCALE_AMPLITUDE: f32 = 0.005;

/// Spin rate shared by the per-particle tumble and the group yaw.
const SPIN_RATE: f32 = 0.1;

/// Transform for one rendered instance at one tick.
///
/// Derived, never stored: the renderer consumes it and the next tick
/// recomputes it from scratch.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderTransform {
    /// World position, with expansion, drift, and group yaw applied.
    pub position: Vec3,
    /// Per-particle spin as intrinsic euler angles (x, y, z).
    pub rotation: Vec3,
    /// Uniform instance scale.
    pub scale: f32,
    /// Linear RGB, identical for every particle in the set.
    pub color: Vec3,
}

/// GPU-ready instance record.
/// Matches the std430-friendly layout an instancing vertex shader expects.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable, Debug, PartialEq)]
pub struct ParticleInstance {
    /// xyz position and uniform scale packed into w.
    pub position_scale: [f32; 4],
    /// Euler rotation in xyz, w unused.
    pub rotation: [f32; 4],
    /// rgb color, w unused.
    pub color: [f32; 4],
}

impl ParticleInstance {
    pub fn position(&self) -> Vec3 {
        Vec3::from_slice(&self.position_scale[..3])
    }

    pub fn scale(&self) -> f32 {
        self.position_scale[3]
    }
}

impl From<RenderTransform> for ParticleInstance {
    fn from(t: RenderTransform) -> Self {
        Self {
            position_scale: [t.position.x, t.position.y, t.position.z, t.scale],
            rotation: [t.rotation.x, t.rotation.y, t.rotation.z, 0.0],
            color: [t.color.x, t.color.y, t.color.z, 0.0],
        }
    }
}

/// Scalar applied to every position this tick.
///
/// An active gesture drives an explosive scale-out up to 3.5x; with no
/// hands visible the cloud breathes sinusoidally around rest.
pub fn expansion_factor(signal: ControlSignal, time: f32) -> f32 {
    if signal.active {
        1.0 + signal.distance * GESTURE_EXPANSION
    } else {
        1.0 + time.sin() * BREATHING_AMPLITUDE
    }
}

/// Identical scalar offset added to all three axes of particle `index`.
/// Index-phased sine, not spatial noise; enough for sparkle.
pub fn drift_offset(time: f32, index: usize) -> f32 {
    (time * 0.5 + index as f32).sin() * DRIFT_AMPLITUDE
}

/// Instance scale: constant under an active gesture, a small per-particle
/// shimmer when idle.
pub fn particle_scale(signal: ControlSignal, time: f32, index: usize) -> f32 {
    if signal.active {
        ACTIVE_SCALE
    } else {
        IDLE_SCALE + (time * 2.0 + index as f32).sin() * IDLE_SCALE_AMPLITUDE
    }
}

/// Yaw of the whole group about the vertical axis.
pub fn group_yaw(time: f32) -> f32 {
    time * SPIN_RATE
}

/// Compute the render transform for one particle.
///
/// The group yaw is baked into the emitted position; the per-particle
/// tumble rides in the euler field and composes with it on the renderer
/// side.
pub fn frame_transform(
    position: Vec3,
    time: f32,
    index: usize,
    signal: ControlSignal,
    color: Vec3,
) -> RenderTransform {
    let expanded = position * expansion_factor(signal, time) + Vec3::splat(drift_offset(time, index));
    RenderTransform {
        position: Quat::from_rotation_y(group_yaw(time)) * expanded,
        rotation: Vec3::new(time * SPIN_RATE, time * SPIN_RATE, 0.0),
        scale: particle_scale(signal, time, index),
        color,
    }
}
