//! Raster primitives used by the overlay renderer, on top of
//! `imageproc::drawing`.
//!
//! Coordinates are real-valued pixel positions; vertices are rounded to the
//! pixel grid when drawn. Everything is clipped to the target frame.

use crate::image::{Rgb, Rgb8, RgbImage};
use imageproc::drawing::{draw_filled_circle_mut, draw_line_segment_mut, draw_polygon_mut};
use imageproc::map::map_colors2;
use imageproc::point::Point;
use nalgebra::Vector2;

/// Vertices farther out than this are not drawn.
const COORD_LIMIT: f32 = 1.0e6;

/// Draw a segment of the given stroke width with round caps.
///
/// A thickness of one is a plain one-pixel line. Wider strokes are the
/// quadrilateral around the segment plus a filled disc at each end.
pub fn draw_line(img: &mut RgbImage, p0: [f32; 2], p1: [f32; 2], color: Rgb8, thickness: u32) {
    if !(in_range(p0) && in_range(p1)) {
        return;
    }
    let color = Rgb(color);
    if thickness <= 1 {
        draw_line_segment_mut(img, (p0[0], p0[1]), (p1[0], p1[1]), color);
        return;
    }

    let a = Vector2::new(p0[0], p0[1]);
    let b = Vector2::new(p1[0], p1[1]);
    let cap = (thickness / 2) as i32;
    draw_filled_circle_mut(img, pixel(a), cap, color);
    draw_filled_circle_mut(img, pixel(b), cap, color);

    let dir = b - a;
    let len = dir.norm();
    if len <= f32::EPSILON {
        return;
    }
    let n = Vector2::new(-dir.y, dir.x) * (thickness as f32 * 0.5 / len);
    let corners = [a + n, b + n, b - n, a - n].map(|v| [v.x, v.y]);
    fill_polygon(img, &corners, color.0);
}

/// Fill a closed polygon given by its vertices in drawing order.
///
/// Polygons with fewer than three distinct pixel vertices, or with a
/// non-finite vertex, are skipped.
pub fn fill_polygon(img: &mut RgbImage, vertices: &[[f32; 2]], color: Rgb8) {
    if !vertices.iter().all(|&v| in_range(v)) {
        return;
    }
    let mut poly: Vec<Point<i32>> = Vec::with_capacity(vertices.len());
    for &[x, y] in vertices {
        let p = Point::new(x.round() as i32, y.round() as i32);
        if poly.last() != Some(&p) {
            poly.push(p);
        }
    }
    // draw_polygon_mut closes the ring itself and rejects a repeated start.
    while poly.len() > 1 && poly.first() == poly.last() {
        poly.pop();
    }
    if poly.len() < 3 {
        return;
    }
    draw_polygon_mut(img, &poly, Rgb(color));
}

/// Per-channel `a * alpha + b * beta`, rounded and saturated to `[0, 255]`.
///
/// Panics if the frames differ in size.
pub fn add_weighted(a: &RgbImage, alpha: f32, b: &RgbImage, beta: f32) -> RgbImage {
    debug_assert_eq!(
        a.dimensions(),
        b.dimensions(),
        "add_weighted: frames differ in size"
    );
    map_colors2(a, b, |pa: Rgb<u8>, pb: Rgb<u8>| {
        Rgb(std::array::from_fn(|c| {
            let v = pa[c] as f32 * alpha + pb[c] as f32 * beta;
            v.round().clamp(0.0, 255.0) as u8
        }))
    })
}

#[inline]
fn in_range(v: [f32; 2]) -> bool {
    v.iter().all(|c| c.is_finite() && c.abs() <= COORD_LIMIT)
}

#[inline]
fn pixel(v: Vector2<f32>) -> (i32, i32) {
    (v.x.round() as i32, v.y.round() as i32)
}
