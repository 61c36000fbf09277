//! Left/right partition of raw segments.
//!
//! A segment is a lane-boundary candidate when it is steep enough and lies
//! entirely on one side of the frame's vertical midline with the slope sign
//! expected for that side. In image coordinates (y grows downwards) the left
//! boundary rises to the right, giving a negative slope, and the right
//! boundary a positive one. Both endpoints of every accepted segment are
//! collected into that side's point set for fitting.

use crate::segments::Segment;
use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Thresholds used when classifying segments.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct ClassifierOptions {
    /// Segments with `|slope|` below this are treated as horizontal clutter.
    pub min_abs_slope: f32,
    /// Added to `dx` when computing the slope of a segment.
    pub slope_eps: f32,
}

impl Default for ClassifierOptions {
    fn default() -> Self {
        Self {
            min_abs_slope: 0.5,
            slope_eps: 1e-6,
        }
    }
}

/// Outcome of classifying a single segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SegmentClass {
    Left,
    Right,
    /// Rejected for being too close to horizontal.
    Flat,
    /// Steep enough, but crosses the midline or has the wrong slope sign for its side.
    Ambiguous,
}

/// Point sets collected for both sides in one frame.
#[derive(Clone, Debug, Default)]
pub struct ClassifiedPoints {
    pub left: Vec<[f32; 2]>,
    pub right: Vec<[f32; 2]>,
    pub rejected_flat: usize,
    pub rejected_ambiguous: usize,
}

impl ClassifiedPoints {
    pub fn points(&self, side: Side) -> &[[f32; 2]] {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }
}

/// Horizontal split between the left and right halves of a frame.
#[inline]
pub fn midline_x(frame_width: usize) -> f32 {
    (frame_width / 2) as f32
}

/// Classify one segment against the midline `mid_x`.
pub fn classify_segment(seg: &Segment, mid_x: f32, opts: &ClassifierOptions) -> SegmentClass {
    let slope = seg.slope(opts.slope_eps);
    // NaN compares false everywhere, so it must be caught here explicitly.
    if !(slope.abs() >= opts.min_abs_slope) {
        return SegmentClass::Flat;
    }
    let [x1, _] = seg.p0;
    let [x2, _] = seg.p1;
    if slope < 0.0 && x1 < mid_x && x2 < mid_x {
        SegmentClass::Left
    } else if slope > 0.0 && x1 > mid_x && x2 > mid_x {
        SegmentClass::Right
    } else {
        SegmentClass::Ambiguous
    }
}

/// Split `segments` into left and right candidate points for a frame of
/// width `frame_width`.
pub fn classify_segments(
    segments: &[Segment],
    frame_width: usize,
    opts: &ClassifierOptions,
) -> ClassifiedPoints {
    let mid_x = midline_x(frame_width);
    let mut out = ClassifiedPoints::default();
    for seg in segments {
        match classify_segment(seg, mid_x, opts) {
            SegmentClass::Left => out.left.extend_from_slice(&seg.endpoints()),
            SegmentClass::Right => out.right.extend_from_slice(&seg.endpoints()),
            SegmentClass::Flat => out.rejected_flat += 1,
            SegmentClass::Ambiguous => out.rejected_ambiguous += 1,
        }
    }
    out
}
