use lane_detector::image::{Rgb, RgbImage};
use lane_detector::Segment;

pub const WIDTH: usize = 640;
pub const HEIGHT: usize = 480;

/// Uniform grey road frame.
pub fn road_frame(width: usize, height: usize) -> RgbImage {
    RgbImage::from_pixel(width as u32, height as u32, Rgb([100, 100, 100]))
}

/// Left boundary from (100, 480) to (250, 290), split into two collinear segments.
pub fn left_boundary() -> Vec<Segment> {
    vec![
        Segment::from([100.0, 480.0, 175.0, 385.0]),
        Segment::from([175.0, 385.0, 250.0, 290.0]),
    ]
}

/// Right boundary from (540, 480) to (390, 290), split into two collinear segments.
pub fn right_boundary() -> Vec<Segment> {
    vec![
        Segment::from([540.0, 480.0, 465.0, 385.0]),
        Segment::from([465.0, 385.0, 390.0, 290.0]),
    ]
}

/// Both boundaries plus horizontal clutter that must be rejected.
pub fn lane_segments_with_clutter() -> Vec<Segment> {
    let mut segments = left_boundary();
    segments.extend(right_boundary());
    segments.push(Segment::from([0.0, 300.0, 640.0, 305.0]));
    segments.push(Segment::from([300.0, 470.0, 340.0, 420.0]));
    segments
}

/// Both boundaries only.
pub fn lane_segments() -> Vec<Segment> {
    let mut segments = left_boundary();
    segments.extend(right_boundary());
    segments
}
