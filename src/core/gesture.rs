use crate::core::error::EngineError;
use crate::models::{Point, SwipeThresholds};

/// Badge hint shown while dragging
///
/// Advisory only; the commit decision never looks at it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VisualIntent {
    #[default]
    None,
    Like,
    Dislike,
}

/// Snapshot of a live drag
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GestureFrame {
    pub dx: f64,
    pub dy: f64,
    pub rotation_degrees: f64,
    pub intent: VisualIntent,
}

#[derive(Debug, Clone, Copy)]
struct GestureState {
    origin: Point,
    last: GestureFrame,
}

/// Converts pointer samples into displacement relative to the press origin
#[derive(Debug, Clone)]
pub struct GestureTracker {
    intent_px: f64,
    rotation_per_px: f64,
    state: Option<GestureState>,
}

impl GestureTracker {
    pub fn new(thresholds: &SwipeThresholds) -> Self {
        Self {
            intent_px: thresholds.intent_px,
            rotation_per_px: thresholds.rotation_per_px,
            state: None,
        }
    }

    pub fn is_tracking(&self) -> bool {
        self.state.is_some()
    }

    /// Start tracking from `origin`
    pub fn begin(&mut self, origin: Point) -> Result<(), EngineError> {
        if self.state.is_some() {
            return Err(EngineError::GestureInProgress);
        }
        self.state = Some(GestureState {
            origin,
            last: GestureFrame::default(),
        });
        Ok(())
    }

    /// Feed a new pointer sample; `None` when no gesture is live
    pub fn update(&mut self, point: Point) -> Option<GestureFrame> {
        let (intent_px, rotation_per_px) = (self.intent_px, self.rotation_per_px);
        let state = self.state.as_mut()?;

        let dx = point.x - state.origin.x;
        let dy = point.y - state.origin.y;
        let intent = if dx > intent_px {
            VisualIntent::Like
        } else if dx < -intent_px {
            VisualIntent::Dislike
        } else {
            VisualIntent::None
        };

        state.last = GestureFrame {
            dx,
            dy,
            rotation_degrees: dx * rotation_per_px,
            intent,
        };
        Some(state.last)
    }

    /// Finish the gesture, returning the last `(dx, dy)`
    ///
    /// The tracker is cleared whatever the caller does with the result.
    pub fn end(&mut self) -> Option<(f64, f64)> {
        self.state.take().map(|state| (state.last.dx, state.last.dy))
    }

    /// Drop any live gesture without resolving it
    pub fn cancel(&mut self) {
        self.state = None;
    }
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new(&SwipeThresholds::default())
    }
}
