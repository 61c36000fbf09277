//! Per-frame and per-stream reports produced alongside lane estimates.
//!
//! [`FrameReport`] is returned by
//! [`LaneEstimator::process_frame_with_diagnostics`](crate::LaneEstimator::process_frame_with_diagnostics)
//! and records what the classifier kept, what each side fitted in isolation
//! and how full the smoothing windows are. [`StreamReport`] collects frame
//! reports for a whole sequence together with stage timings.

pub mod frame;
pub mod timing;

pub use frame::{FrameReport, SideReport, StreamReport};
pub use timing::{StageTiming, TimingBreakdown};
