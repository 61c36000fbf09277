//! I/O helpers for frames and JSON.
//!
//! - `load_rgb_image`: read a PNG/JPEG/etc. as an 8-bit RGB frame.
//! - `save_rgb_image`: write an RGB frame to disk (format from extension).
//! - `read_json_file`: deserialize a value from a JSON file.
//! - `write_json_file`: pretty-print a serializable value to disk.
use super::RgbImage;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path).map_err(|e| format!("Failed to open {}: {e}", path.display()))?;
    Ok(img.into_rgb8())
}

/// Save an RGB frame, creating parent directories.
pub fn save_rgb_image(frame: &RgbImage, path: &Path) -> Result<(), String> {
    ensure_parent_dir(path)?;
    frame
        .save(path)
        .map_err(|e| format!("Failed to save {}: {e}", path.display()))
}

/// Deserialize a JSON file into `T`.
pub fn read_json_file<T: DeserializeOwned>(path: &Path) -> Result<T, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("Failed to parse {}: {e}", path.display()))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("Failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("Failed to write JSON {}: {e}", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::Rgb;
    use crate::segments::Segment;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("lane_detector_io_{name}_{}", std::process::id()))
    }

    #[test]
    fn png_round_trip_is_lossless() {
        let dir = scratch_dir("png");
        let path = dir.join("nested").join("frame.png");
        let mut frame = RgbImage::from_pixel(8, 6, Rgb([10, 20, 30]));
        frame.put_pixel(3, 2, Rgb([255, 0, 128]));
        save_rgb_image(&frame, &path).unwrap();
        let loaded = load_rgb_image(&path).unwrap();
        assert_eq!(loaded, frame);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn segments_json_round_trip() {
        let dir = scratch_dir("json");
        let path = dir.join("segments.json");
        let segments = vec![Segment::from([1.0, 2.0, 3.0, 4.0])];
        write_json_file(&path, &segments).unwrap();
        let loaded: Vec<Segment> = read_json_file(&path).unwrap();
        assert_eq!(loaded, segments);
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_rgb_image(Path::new("/nonexistent/frame.png")).unwrap_err();
        assert!(err.contains("/nonexistent/frame.png"), "{err}");
    }
}
