#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod estimator;
pub mod image;
pub mod render;
pub mod roi;
pub mod types;

// Building blocks of the estimator. Public so tools and tests can run the
// stages individually.
pub mod batch;
pub mod classify;
pub mod config;
pub mod diagnostics;
pub mod draw;
pub mod fit;
pub mod segments;
pub mod smoothing;

// --- High-level re-exports -------------------------------------------------

pub use crate::estimator::{EstimatorParams, LaneEstimator, LaneParams};
pub use crate::render::{extrapolate, render_lanes, render_lanes_with_segments, RenderOptions};
pub use crate::roi::{Roi, RoiOptions};
pub use crate::segments::Segment;
pub use crate::types::{LaneEstimate, LineFit, Side};

pub use crate::diagnostics::{FrameReport, StreamReport};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use lane_detector::prelude::*;
///
/// # fn main() {
/// let frame = RgbImage::from_pixel(640, 480, Rgb([90, 90, 90]));
/// let segments = vec![
///     Segment::from([100.0, 480.0, 250.0, 290.0]),
///     Segment::from([540.0, 480.0, 390.0, 290.0]),
/// ];
///
/// let params = LaneParams::default();
/// let mut estimator = LaneEstimator::new(params.estimator.clone());
/// let (w, h) = (frame.width() as usize, frame.height() as usize);
/// let lanes = estimator.process_frame(&segments, w, h);
/// let roi = Roi::for_frame(h, &params.roi);
/// let annotated = render_lanes(&frame, &lanes, &roi, &params.render);
/// println!("complete={} size={:?}", lanes.is_complete(), annotated.dimensions());
/// # }
/// ```
pub mod prelude {
    pub use crate::image::{Rgb, RgbImage};
    pub use crate::{render_lanes, LaneEstimate, LaneEstimator, LaneParams, Roi, Segment};
}
