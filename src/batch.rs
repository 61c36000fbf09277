//! Parallel processing of independent streams.
//!
//! Frames inside one stream must be processed in order because each frame
//! updates the smoothing windows. Separate streams share nothing, so each
//! gets its own [`LaneEstimator`] and the streams run on the rayon pool.

use crate::diagnostics::{FrameReport, StreamReport};
use crate::estimator::{EstimatorParams, LaneEstimator};
use crate::segments::Segment;
use crate::types::LaneEstimate;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-frame segments of one video stream.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct SegmentStream {
    pub width: usize,
    pub height: usize,
    /// Segments of each frame, in temporal order.
    pub frames: Vec<Vec<Segment>>,
}

impl SegmentStream {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            frames: Vec::new(),
        }
    }

    pub fn push_frame(&mut self, segments: Vec<Segment>) {
        self.frames.push(segments);
    }

    /// Run a fresh estimator over the whole stream.
    pub fn estimate(&self, params: &EstimatorParams) -> Vec<LaneEstimate> {
        let mut estimator = LaneEstimator::new(params.clone());
        self.frames
            .iter()
            .map(|segments| estimator.process_frame(segments, self.width, self.height))
            .collect()
    }

    /// Run a fresh estimator over the whole stream, keeping per-frame reports.
    pub fn report(&self, params: &EstimatorParams) -> StreamReport {
        let mut estimator = LaneEstimator::new(params.clone());
        let frames: Vec<FrameReport> = self
            .frames
            .iter()
            .map(|segments| {
                estimator.process_frame_with_diagnostics(segments, self.width, self.height)
            })
            .collect();
        let mut report = StreamReport {
            frames,
            ..Default::default()
        };
        let total: f64 = report.frames.iter().map(|f| f.elapsed_ms).sum();
        report.timing.add("estimate", total);
        report
    }
}

/// Estimate every stream in parallel, one estimator per stream.
///
/// The result is indexed like `streams`; each inner vector has one estimate
/// per input frame.
pub fn process_streams(
    streams: &[SegmentStream],
    params: &EstimatorParams,
) -> Vec<Vec<LaneEstimate>> {
    streams.par_iter().map(|s| s.estimate(params)).collect()
}

/// Parallel variant of [`SegmentStream::report`].
pub fn report_streams(streams: &[SegmentStream], params: &EstimatorParams) -> Vec<StreamReport> {
    streams.par_iter().map(|s| s.report(params)).collect()
}
