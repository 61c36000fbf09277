//! Lane-geometry estimator orchestrating classification, fitting and
//! temporal smoothing.
//!
//! Overview
//! - Splits the frame's raw segments into left and right candidates by slope
//!   sign and position relative to the vertical midline ([`crate::classify`]).
//! - Fits `x = m * y + b` to each side's endpoints independently
//!   ([`crate::fit`]).
//! - Pushes each fit into that side's bounded history and returns the window
//!   mean ([`crate::smoothing`]). A side without a fit keeps its history.
//!
//! Frames must arrive in temporal order; parallelism is only possible across
//! streams, each with its own estimator (see [`crate::batch`]).
//!
//! Modules
//! - [`params`] – configuration types for the estimator and the overlay.
//! - `pipeline` – the [`LaneEstimator`] implementation.

pub mod params;
mod pipeline;

pub use params::{EstimatorParams, LaneParams};
pub use pipeline::LaneEstimator;
