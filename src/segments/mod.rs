//! Raw line segments consumed by the lane estimator.
//!
//! Segments are produced by an external edge detector and probabilistic
//! line-segment detector; this crate only consumes them. A segment is stored
//! as two endpoints in pixel coordinates and can be built from the flat
//! `[x1, y1, x2, y2]` layout or deserialized from `{"p0": [..], "p1": [..]}`.

mod segment;

pub use segment::Segment;

/// Convert flat `[x1, y1, x2, y2]` records into segments.
pub fn segments_from_coords(coords: &[[f32; 4]]) -> Vec<Segment> {
    coords.iter().copied().map(Segment::from).collect()
}
