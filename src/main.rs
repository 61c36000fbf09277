use lane_detector::image::{Rgb, RgbImage};
use lane_detector::segments::segments_from_coords;
use lane_detector::{render_lanes, LaneEstimator, LaneParams, Roi, Side};

fn main() {
    env_logger::init();

    // Demo: a synthetic 640x480 road with one clean segment pair per side,
    // jittered a little from frame to frame.
    let (w, h) = (640usize, 480usize);
    let frame = RgbImage::from_pixel(w as u32, h as u32, Rgb([90, 90, 90]));
    let params = LaneParams::default();
    let roi = Roi::for_frame(h, &params.roi);

    let mut estimator = LaneEstimator::new(params.estimator.clone());
    let lanes = (0..10)
        .map(|i| {
            let jitter = if i % 2 == 0 { 3.0 } else { -3.0 };
            let segments = segments_from_coords(&[
                [100.0 + jitter, 480.0, 250.0 + jitter, 290.0],
                [540.0 - jitter, 480.0, 390.0 - jitter, 290.0],
            ]);
            estimator.process_frame(&segments, w, h)
        })
        .last()
        .unwrap_or_default();

    for side in Side::BOTH {
        match estimator.current().get(side) {
            Some(fit) => println!(
                "{:>5}: x = {:.4} * y + {:.2} (history={})",
                side.as_str(),
                fit.slope,
                fit.intercept,
                estimator.history(side).len()
            ),
            None => println!("{:>5}: not found", side.as_str()),
        }
    }

    let annotated = render_lanes(&frame, &lanes, &roi, &params.render);
    let changed = annotated
        .pixels()
        .zip(frame.pixels())
        .filter(|(a, b)| a != b)
        .count();
    println!("annotated pixels changed: {changed}/{}", w * h);
}
