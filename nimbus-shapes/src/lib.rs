//! Nimbus Shapes Crate
//!
//! Procedural point-cloud generation for the nimbus particle system.
//! Each shape is a stochastic distribution sampled point-by-point; the
//! morphing and per-frame animation live in nimbus-sim.

pub mod cloud;
pub mod sampler;

pub use cloud::PointCloud;
pub use sampler::{ShapeError, ShapeKind, sample};
