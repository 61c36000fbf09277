//! Region-of-interest rows used when extrapolating boundaries.

use serde::{Deserialize, Serialize};

/// Region-of-interest policy.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RoiOptions {
    /// Rows below the frame's vertical centre at which the ROI (and the drawn
    /// boundaries) start.
    pub top_offset: usize,
}

impl Default for RoiOptions {
    fn default() -> Self {
        Self { top_offset: 50 }
    }
}

/// Vertical extent over which boundaries are drawn.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Roi {
    /// Lower edge of the frame.
    pub y_bottom: f32,
    /// Horizon cutoff.
    pub y_top: f32,
}

impl Roi {
    pub fn new(y_bottom: f32, y_top: f32) -> Self {
        Self { y_bottom, y_top }
    }

    /// ROI for a frame `height` rows tall: from the bottom edge up to
    /// `height / 2 + top_offset`, never below the bottom edge.
    pub fn for_frame(height: usize, opts: &RoiOptions) -> Self {
        let top = (height / 2 + opts.top_offset).min(height);
        Self::new(height as f32, top as f32)
    }
}
