//! Frame-sequential lane estimator.
//!
//! Typical usage:
//! ```no_run
//! use lane_detector::{LaneEstimator, EstimatorParams, Segment};
//!
//! # fn frames() -> Vec<Vec<Segment>> { Vec::new() }
//! let mut estimator = LaneEstimator::new(EstimatorParams::default());
//! for segments in frames() {
//!     let lanes = estimator.process_frame(&segments, 640, 480);
//!     if let Some(left) = lanes.left {
//!         println!("left x at bottom: {:.1}", left.x_at(480.0));
//!     }
//! }
//! ```
use super::params::EstimatorParams;
use crate::classify::classify_segments;
use crate::diagnostics::timing::elapsed_ms;
use crate::diagnostics::{FrameReport, SideReport};
use crate::fit::{fit_line, rms_residual};
use crate::segments::Segment;
use crate::smoothing::FitHistory;
use crate::types::{LaneEstimate, Side};
use log::debug;
use std::time::Instant;

/// Lane-boundary estimator for one video stream.
///
/// Holds the left and right fit histories, so one instance must be created
/// per stream and fed that stream's frames in order. A fresh estimator per
/// frame never smooths anything.
pub struct LaneEstimator {
    params: EstimatorParams,
    left: FitHistory,
    right: FitHistory,
    frames: u64,
}

impl LaneEstimator {
    pub fn new(params: EstimatorParams) -> Self {
        let left = FitHistory::new(params.smoothing_window);
        let right = FitHistory::new(params.smoothing_window);
        Self {
            params,
            left,
            right,
            frames: 0,
        }
    }

    /// Classify, fit and smooth one frame's segments, returning the smoothed
    /// boundary pair.
    pub fn process_frame(
        &mut self,
        segments: &[Segment],
        frame_width: usize,
        frame_height: usize,
    ) -> LaneEstimate {
        self.process_frame_with_diagnostics(segments, frame_width, frame_height)
            .estimate()
    }

    /// Same state transition as [`process_frame`](Self::process_frame), also
    /// reporting the intermediate results.
    pub fn process_frame_with_diagnostics(
        &mut self,
        segments: &[Segment],
        frame_width: usize,
        frame_height: usize,
    ) -> FrameReport {
        let start = Instant::now();
        let classified = classify_segments(segments, frame_width, &self.params.classifier);

        let left = Self::update_side(
            &mut self.left,
            Side::Left,
            classified.points(Side::Left),
        );
        let right = Self::update_side(
            &mut self.right,
            Side::Right,
            classified.points(Side::Right),
        );

        let report = FrameReport {
            frame_index: self.frames,
            width: frame_width,
            height: frame_height,
            segments_total: segments.len(),
            rejected_flat: classified.rejected_flat,
            rejected_ambiguous: classified.rejected_ambiguous,
            left,
            right,
            elapsed_ms: elapsed_ms(start),
        };
        self.frames += 1;

        debug!(
            "LaneEstimator::process_frame #{} segments={} left_pts={} right_pts={} flat={} ambiguous={} hist=({}, {})",
            report.frame_index,
            report.segments_total,
            report.left.points,
            report.right.points,
            report.rejected_flat,
            report.rejected_ambiguous,
            report.left.history_len,
            report.right.history_len
        );
        report
    }

    fn update_side(history: &mut FitHistory, side: Side, points: &[[f32; 2]]) -> SideReport {
        let frame_fit = fit_line(points);
        if frame_fit.is_none() && !points.is_empty() {
            debug!(
                "LaneEstimator: {} side has {} points but no usable fit",
                side.as_str(),
                points.len()
            );
        }
        let smoothed = history.update(frame_fit);
        SideReport {
            side,
            points: points.len(),
            frame_fit,
            frame_rms_px: frame_fit.map(|fit| rms_residual(&fit, points)),
            smoothed,
            history_len: history.len(),
        }
    }

    /// Current smoothed pair without consuming a frame.
    pub fn current(&self) -> LaneEstimate {
        LaneEstimate::new(self.left.smoothed(), self.right.smoothed())
    }

    pub fn history(&self, side: Side) -> &FitHistory {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames
    }

    /// Forget all history, e.g. at a scene cut or when switching streams.
    pub fn reset(&mut self) {
        self.left.clear();
        self.right.clear();
        self.frames = 0;
    }
}

impl Default for LaneEstimator {
    fn default() -> Self {
        Self::new(EstimatorParams::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LineFit;

    const W: usize = 640;
    const H: usize = 480;

    fn left_segments(shift: f32) -> Vec<Segment> {
        vec![
            Segment::new([100.0 + shift, 480.0], [175.0 + shift, 385.0]),
            Segment::new([175.0 + shift, 385.0], [250.0 + shift, 290.0]),
        ]
    }

    fn right_segments(shift: f32) -> Vec<Segment> {
        vec![
            Segment::new([540.0 + shift, 480.0], [465.0 + shift, 385.0]),
            Segment::new([465.0 + shift, 385.0], [390.0 + shift, 290.0]),
        ]
    }

    fn both(shift: f32) -> Vec<Segment> {
        let mut segs = left_segments(shift);
        segs.extend(right_segments(shift));
        segs
    }

    #[test]
    fn empty_frame_yields_no_boundaries() {
        let mut est = LaneEstimator::default();
        let lanes = est.process_frame(&[], W, H);
        assert!(lanes.is_empty());
        assert_eq!(est.frames_processed(), 1);
    }

    #[test]
    fn sides_are_independent() {
        let mut est = LaneEstimator::default();
        let lanes = est.process_frame(&left_segments(0.0), W, H);
        assert!(lanes.left.is_some());
        assert!(lanes.right.is_none());
        assert_eq!(est.history(Side::Left).len(), 1);
        assert!(est.history(Side::Right).is_empty());
    }

    #[test]
    fn dropout_keeps_last_estimate() {
        let mut est = LaneEstimator::default();
        let first = est.process_frame(&both(0.0), W, H);
        assert!(first.is_complete());

        // Right boundary disappears for a few frames.
        for _ in 0..3 {
            let lanes = est.process_frame(&left_segments(0.0), W, H);
            assert_eq!(lanes.right, first.right);
            assert_eq!(est.history(Side::Right).len(), 1);
        }
        assert_eq!(est.history(Side::Left).len(), 4);
    }

    #[test]
    fn smoothing_lags_a_jump() {
        let mut est = LaneEstimator::default();
        for _ in 0..5 {
            est.process_frame(&both(0.0), W, H);
        }
        let report = est.process_frame_with_diagnostics(&both(20.0), W, H);
        let frame = report.left.frame_fit.unwrap();
        let smoothed = report.left.smoothed.unwrap();
        // One shifted frame in a window of five moves the estimate a fifth of the way.
        let jump = frame.x_at(480.0) - smoothed.x_at(480.0);
        assert!((jump - 16.0).abs() < 1e-6, "jump={jump}");
        assert_eq!(report.frame_index, 5);
        assert_eq!(report.left.points, 4);
        assert!(report.left.frame_rms_px.unwrap() < 1e-6);
    }

    #[test]
    fn rejected_segments_leave_history_untouched() {
        let mut est = LaneEstimator::default();
        let segs = vec![Segment::new([400.0, 300.0], [600.0, 300.0])];
        let report = est.process_frame_with_diagnostics(&segs, W, H);
        assert_eq!(report.rejected_flat, 1);
        assert!(est.history(Side::Left).is_empty());
        assert!(est.history(Side::Right).is_empty());
    }

    #[test]
    fn reset_clears_state() {
        let mut est = LaneEstimator::default();
        est.process_frame(&both(0.0), W, H);
        est.reset();
        assert!(est.current().is_empty());
        assert_eq!(est.frames_processed(), 0);
    }

    #[test]
    fn window_length_comes_from_params() {
        let mut est = LaneEstimator::new(EstimatorParams {
            smoothing_window: 2,
            ..Default::default()
        });
        for i in 0..4 {
            est.process_frame(&both(i as f32), W, H);
        }
        assert_eq!(est.history(Side::Left).len(), 2);
        let expected: Vec<LineFit> = est.history(Side::Left).iter().copied().collect();
        let mean_b = (expected[0].intercept + expected[1].intercept) / 2.0;
        assert!((est.current().left.unwrap().intercept - mean_b).abs() < 1e-9);
    }
}
