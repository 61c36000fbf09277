use super::TimingBreakdown;
use crate::types::{LaneEstimate, LineFit, Side};
use serde::Serialize;

/// What happened to one side during a frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SideReport {
    pub side: Side,
    /// Endpoints collected by the classifier.
    pub points: usize,
    /// Fit of this frame's points alone.
    pub frame_fit: Option<LineFit>,
    /// RMS horizontal residual of `frame_fit` in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_rms_px: Option<f64>,
    /// Smoothed fit after this frame's update.
    pub smoothed: Option<LineFit>,
    pub history_len: usize,
}

/// Diagnostics for a single processed frame.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameReport {
    /// Zero-based index of the frame within the estimator's stream.
    pub frame_index: u64,
    pub width: usize,
    pub height: usize,
    pub segments_total: usize,
    pub rejected_flat: usize,
    pub rejected_ambiguous: usize,
    pub left: SideReport,
    pub right: SideReport,
    pub elapsed_ms: f64,
}

impl FrameReport {
    pub fn side(&self, side: Side) -> &SideReport {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Smoothed boundary pair after this frame.
    pub fn estimate(&self) -> LaneEstimate {
        LaneEstimate::new(self.left.smoothed, self.right.smoothed)
    }

    /// Boundaries fitted from this frame alone, before smoothing.
    pub fn frame_estimate(&self) -> LaneEstimate {
        LaneEstimate::new(self.left.frame_fit, self.right.frame_fit)
    }
}

/// Frame reports for an entire stream.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StreamReport {
    pub frames: Vec<FrameReport>,
    pub timing: TimingBreakdown,
}

impl StreamReport {
    /// Number of frames in which the given side had its own fit.
    pub fn detections(&self, side: Side) -> usize {
        self.frames
            .iter()
            .filter(|f| f.side(side).frame_fit.is_some())
            .count()
    }

    /// Number of frames that ended with both smoothed boundaries available.
    pub fn complete_frames(&self) -> usize {
        self.frames
            .iter()
            .filter(|f| f.estimate().is_complete())
            .count()
    }
}
