//! Parameter types for the estimator and the overlay.
//!
//! Every field has a default, so a JSON config only needs to name the knobs it
//! changes. The slope threshold and window length are the empirically tuned
//! values for a forward-facing dashboard camera at VGA-like resolutions.

use crate::classify::ClassifierOptions;
use crate::render::RenderOptions;
use crate::roi::RoiOptions;
use crate::smoothing::DEFAULT_SMOOTHING_WINDOW;
use serde::{Deserialize, Serialize};

/// Parameters owned by a [`LaneEstimator`](crate::LaneEstimator).
#[derive(Clone, Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct EstimatorParams {
    /// Number of recent fits averaged per side.
    pub smoothing_window: usize,
    pub classifier: ClassifierOptions,
}

impl Default for EstimatorParams {
    fn default() -> Self {
        Self {
            smoothing_window: DEFAULT_SMOOTHING_WINDOW,
            classifier: ClassifierOptions::default(),
        }
    }
}

/// Full parameter set for estimating and drawing lanes.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct LaneParams {
    pub estimator: EstimatorParams,
    pub roi: RoiOptions,
    pub render: RenderOptions,
}
