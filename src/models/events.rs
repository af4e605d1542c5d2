use serde::{Deserialize, Serialize};

/// Pointer position in client pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerPhase {
    Begin,
    Move,
    End,
}

/// Raw pointer or touch sample scoped to the front card
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f64,
    pub y: f64,
}

impl PointerEvent {
    pub fn begin(x: f64, y: f64) -> Self {
        Self { phase: PointerPhase::Begin, x, y }
    }

    pub fn moved(x: f64, y: f64) -> Self {
        Self { phase: PointerPhase::Move, x, y }
    }

    pub fn end(x: f64, y: f64) -> Self {
        Self { phase: PointerPhase::End, x, y }
    }

    pub fn point(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Button-driven triggers that bypass the gesture tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Like,
    Dislike,
    Undo,
    Reset,
}
