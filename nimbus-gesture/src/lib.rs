//! Nimbus Gesture Crate
//!
//! Hand-landmark ingestion and control-signal derivation.
//!
//! The camera and the landmark model itself live outside this workspace;
//! they reach the core through the [`LandmarkStream`] trait, which yields
//! per-cycle [`HandFrame`]s. [`derive_control_signal`] turns the hands seen
//! in one cycle into a normalized [`ControlSignal`], and [`SignalSlot`] is
//! the single shared cell through which the detection loop publishes the
//! freshest signal to the render loop.

pub mod derive;
pub mod landmarks;
pub mod scripted;
pub mod signal;
pub mod stream;

pub use derive::derive_control_signal;
pub use landmarks::{HandFrame, INDEX_TIP, LANDMARK_COUNT, THUMB_TIP};
pub use scripted::ScriptedGestures;
pub use signal::{ControlSignal, SignalSlot};
pub use stream::{LandmarkStream, StreamError};
