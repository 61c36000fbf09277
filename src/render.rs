//! Lane overlay rendering.
//!
//! The renderer is stateless. Each present boundary is extrapolated across
//! the region of interest and drawn onto a black layer, which is added onto
//! the dimmed frame (`frame * base_weight + layer * line_weight`). When both
//! boundaries are present the quadrilateral between them is then filled on a
//! copy of that result and blended back at `fill_alpha`. With no boundary at
//! all the input frame is returned untouched.

use crate::draw::{add_weighted, draw_line, fill_polygon};
use crate::image::{Rgb8, RgbImage};
use crate::roi::Roi;
use crate::segments::Segment;
use crate::types::{LaneEstimate, LineFit};
use serde::{Deserialize, Serialize};

/// Visual style of the overlay. Colours are RGB.
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Stroke width of the boundary lines in pixels.
    pub line_thickness: u32,
    pub line_color: Rgb8,
    pub fill_color: Rgb8,
    /// Weight of the original frame in the line composite.
    pub base_weight: f32,
    /// Weight of the line layer in the line composite.
    pub line_weight: f32,
    /// Opacity of the lane-area fill.
    pub fill_alpha: f32,
    /// Draw at most this many raw segments as thin lines. `None` disables.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_segments: Option<usize>,
    pub debug_color: Rgb8,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            line_thickness: 5,
            line_color: [0, 255, 0],
            fill_color: [60, 200, 60],
            base_weight: 0.8,
            line_weight: 1.0,
            fill_alpha: 0.3,
            debug_segments: None,
            debug_color: [255, 0, 0],
        }
    }
}

/// Endpoints of `fit` at rows `y_bottom` and `y_top`, bottom first.
pub fn extrapolate(fit: Option<LineFit>, y_bottom: f32, y_top: f32) -> Option<[[f32; 2]; 2]> {
    let fit = fit?;
    let x_bottom = fit.x_at(y_bottom as f64) as f32;
    let x_top = fit.x_at(y_top as f64) as f32;
    Some([[x_bottom, y_bottom], [x_top, y_top]])
}

/// Draw the smoothed boundaries and lane area onto a copy of `frame`.
pub fn render_lanes(
    frame: &RgbImage,
    lanes: &LaneEstimate,
    roi: &Roi,
    opts: &RenderOptions,
) -> RgbImage {
    render_lanes_with_segments(frame, lanes, &[], roi, opts)
}

/// Like [`render_lanes`], additionally drawing the first
/// `opts.debug_segments` raw segments into the line layer.
pub fn render_lanes_with_segments(
    frame: &RgbImage,
    lanes: &LaneEstimate,
    segments: &[Segment],
    roi: &Roi,
    opts: &RenderOptions,
) -> RgbImage {
    let left = extrapolate(lanes.left, roi.y_bottom, roi.y_top);
    let right = extrapolate(lanes.right, roi.y_bottom, roi.y_top);
    if left.is_none() && right.is_none() {
        return frame.clone();
    }

    let mut layer = RgbImage::new(frame.width(), frame.height());
    if let Some(limit) = opts.debug_segments {
        for seg in segments.iter().take(limit) {
            draw_line(&mut layer, seg.p0, seg.p1, opts.debug_color, 1);
        }
    }
    for [bottom, top] in [left, right].into_iter().flatten() {
        draw_line(&mut layer, bottom, top, opts.line_color, opts.line_thickness);
    }
    let mut result = add_weighted(frame, opts.base_weight, &layer, opts.line_weight);

    if let (Some([lb, lt]), Some([rb, rt])) = (left, right) {
        let mut overlay = result.clone();
        fill_polygon(&mut overlay, &[lb, lt, rt, rb], opts.fill_color);
        result = add_weighted(&overlay, opts.fill_alpha, &result, 1.0 - opts.fill_alpha);
    }
    result
}
