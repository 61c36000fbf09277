use serde::{Deserialize, Serialize};

/// Which of the two ego-lane boundaries a quantity belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "left",
            Side::Right => "right",
        }
    }
}

/// Straight lane boundary in the vertical-independent form `x = slope * y + intercept`.
///
/// Lane boundaries are closer to vertical than horizontal in a forward-facing
/// camera, so parametrizing x as a function of y keeps the slope bounded.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    pub slope: f64,
    pub intercept: f64,
}

impl LineFit {
    pub fn new(slope: f64, intercept: f64) -> Self {
        Self { slope, intercept }
    }

    /// Horizontal coordinate of the line at image row `y`.
    #[inline]
    pub fn x_at(&self, y: f64) -> f64 {
        self.slope * y + self.intercept
    }

    pub fn is_finite(&self) -> bool {
        self.slope.is_finite() && self.intercept.is_finite()
    }
}

/// Left/right boundary pair; either side may be missing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LaneEstimate {
    pub left: Option<LineFit>,
    pub right: Option<LineFit>,
}

impl LaneEstimate {
    pub fn new(left: Option<LineFit>, right: Option<LineFit>) -> Self {
        Self { left, right }
    }

    pub fn get(&self, side: Side) -> Option<LineFit> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// True when neither boundary is available.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// True when both boundaries are available.
    pub fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}
