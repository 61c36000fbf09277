use lane_detector::config::overlay;
use lane_detector::diagnostics::StreamReport;
use lane_detector::image::io::{load_rgb_image, read_json_file, save_rgb_image, write_json_file};
use lane_detector::{render_lanes_with_segments, LaneEstimator, Roi, Segment, Side};
use log::{debug, warn};
use std::env;
use std::path::Path;
use std::time::Instant;

fn main() {
    env_logger::init();
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = overlay::load_config(Path::new(&config_path))?;
    let params = &config.params;

    let mut estimator = LaneEstimator::new(params.estimator.clone());
    let mut report = StreamReport::default();
    let mut frame_size: Option<(usize, usize)> = None;

    for (index, input) in config.frames.iter().enumerate() {
        let io_start = Instant::now();
        let frame = load_rgb_image(&input.image)?;
        let segments: Vec<Segment> = read_json_file(&input.segments)?;
        report.timing.add_since("load", io_start);

        let (width, height) = (frame.width() as usize, frame.height() as usize);
        match frame_size {
            Some(size) if size != (width, height) => {
                warn!(
                    "{} is {}x{}, previous frames were {}x{}",
                    input.image.display(),
                    width,
                    height,
                    size.0,
                    size.1
                );
            }
            None => frame_size = Some((width, height)),
            _ => {}
        }

        let frame_report = estimator.process_frame_with_diagnostics(&segments, width, height);
        report.timing.add("estimate", frame_report.elapsed_ms);

        let render_start = Instant::now();
        let roi = Roi::for_frame(height, &params.roi);
        let annotated = render_lanes_with_segments(
            &frame,
            &frame_report.estimate(),
            &segments,
            &roi,
            &params.render,
        );
        report.timing.add_since("render", render_start);

        let save_start = Instant::now();
        let out_path = config.output.frame_path(index, input);
        save_rgb_image(&annotated, &out_path)?;
        report.timing.add_since("save", save_start);
        debug!("frame {index}: wrote {}", out_path.display());

        report.frames.push(frame_report);
    }

    println!(
        "Processed {} frames into {}",
        report.frames.len(),
        config.output.dir.display()
    );
    for side in Side::BOTH {
        println!(
            "  {:>5}: detected in {} frames",
            side.as_str(),
            report.detections(side)
        );
    }
    println!(
        "  both boundaries available in {} frames",
        report.complete_frames()
    );
    println!("  total_ms: {:.3}", report.timing.total_ms);

    if let Some(path) = &config.output.report_json {
        write_json_file(path, &report)?;
        println!("JSON report written to {}", path.display());
    }

    Ok(())
}

fn usage() -> String {
    "Usage: lane_overlay <config.json>".to_string()
}
