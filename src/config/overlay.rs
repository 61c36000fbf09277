use crate::estimator::LaneParams;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Config for the `lane_overlay` tool.
///
/// ```json
/// {
///   "frames": [
///     { "image": "frames/0000.png", "segments": "segments/0000.json" }
///   ],
///   "output": { "dir": "out", "report_json": "out/report.json" },
///   "params": { "estimator": { "smoothing_window": 5 } }
/// }
/// ```
#[derive(Debug, Deserialize)]
pub struct LaneToolConfig {
    /// Frames of one stream, in temporal order.
    pub frames: Vec<FrameInput>,
    pub output: OverlayOutputConfig,
    #[serde(default)]
    pub params: LaneParams,
}

#[derive(Debug, Deserialize)]
pub struct FrameInput {
    pub image: PathBuf,
    /// JSON array of segments detected in `image`.
    pub segments: PathBuf,
}

#[derive(Debug, Deserialize)]
pub struct OverlayOutputConfig {
    /// Directory receiving the annotated frames.
    pub dir: PathBuf,
    #[serde(default)]
    pub report_json: Option<PathBuf>,
}

impl OverlayOutputConfig {
    /// Path of the annotated frame written for `input`.
    pub fn frame_path(&self, index: usize, input: &FrameInput) -> PathBuf {
        let stem = input
            .image
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| format!("{index:05}"));
        self.dir.join(format!("{stem}_lanes.png"))
    }
}

pub fn load_config(path: &Path) -> Result<LaneToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    let config: LaneToolConfig = serde_json::from_str(&data)
        .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))?;
    if config.frames.is_empty() {
        return Err(format!("Config {} lists no frames", path.display()));
    }
    Ok(config)
}
