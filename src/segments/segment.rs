use serde::{Deserialize, Serialize};

/// Raw line segment reported by the upstream line-segment detector.
///
/// Coordinates are in pixels of the frame the segment was extracted from.
/// Segments carry no identity across frames.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub p0: [f32; 2],
    pub p1: [f32; 2],
}

impl Segment {
    pub fn new(p0: [f32; 2], p1: [f32; 2]) -> Self {
        Self { p0, p1 }
    }

    pub fn endpoints(&self) -> [[f32; 2]; 2] {
        [self.p0, self.p1]
    }

    /// Image-space slope `dy / (dx + eps)`.
    ///
    /// `eps` keeps zero-width (vertical) segments finite instead of dropping
    /// them; their slope simply becomes very large.
    #[inline]
    pub fn slope(&self, eps: f32) -> f32 {
        (self.p1[1] - self.p0[1]) / (self.p1[0] - self.p0[0] + eps)
    }
}

impl From<[f32; 4]> for Segment {
    /// Build from the `[x1, y1, x2, y2]` layout used by Hough-style detectors.
    fn from(v: [f32; 4]) -> Self {
        Self::new([v[0], v[1]], [v[2], v[3]])
    }
}
