use serde::{Deserialize, Serialize};

/// Release displacement (px) beyond which a drag commits
pub const COMMIT_THRESHOLD_PX: f64 = 100.0;

/// Committed swipe direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    /// Horizontal sign of the fly-out animation
    pub fn sign(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// Result of releasing a drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecisionOutcome {
    Left,
    Right,
    Cancelled,
}

impl DecisionOutcome {
    pub fn direction(self) -> Option<Direction> {
        match self {
            DecisionOutcome::Left => Some(Direction::Left),
            DecisionOutcome::Right => Some(Direction::Right),
            DecisionOutcome::Cancelled => None,
        }
    }
}

impl From<Direction> for DecisionOutcome {
    fn from(value: Direction) -> Self {
        match value {
            Direction::Left => DecisionOutcome::Left,
            Direction::Right => DecisionOutcome::Right,
        }
    }
}

/// Classify a release against the default 100px threshold
#[inline]
pub fn resolve(dx: f64) -> DecisionOutcome {
    DecisionResolver::default().resolve(dx)
}

/// Threshold classifier for gesture releases
///
/// Both bounds are strict: a release at exactly `threshold_px` cancels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecisionResolver {
    threshold_px: f64,
}

impl DecisionResolver {
    pub fn new(threshold_px: f64) -> Self {
        Self { threshold_px }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold_px
    }

    #[inline]
    pub fn resolve(&self, dx: f64) -> DecisionOutcome {
        if dx > self.threshold_px {
            DecisionOutcome::Right
        } else if dx < -self.threshold_px {
            DecisionOutcome::Left
        } else {
            DecisionOutcome::Cancelled
        }
    }
}

impl Default for DecisionResolver {
    fn default() -> Self {
        Self::new(COMMIT_THRESHOLD_PX)
    }
}
