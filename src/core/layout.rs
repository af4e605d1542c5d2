use crate::core::decision::Direction;
use crate::core::gesture::GestureFrame;

/// Horizontal distance a committed card flies off screen
pub const FLY_OUT_PX: f64 = 1000.0;

const SCALE_STEP: f64 = 0.05;
const OFFSET_STEP_PX: f64 = 10.0;
const BASE_Z_INDEX: i32 = 10;

/// Resting placement of one card in the visible stack
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackPlacement {
    pub scale: f64,
    pub translate_y: f64,
    pub z_index: i32,
}

/// Placements for a window of `count` cards, front card first
///
/// Each card behind the front one shrinks by 5% and drops 10px.
pub fn stack_layout(count: usize) -> Vec<StackPlacement> {
    (0..count)
        .map(|depth| StackPlacement {
            scale: 1.0 - depth as f64 * SCALE_STEP,
            translate_y: depth as f64 * OFFSET_STEP_PX,
            z_index: BASE_Z_INDEX - depth as i32,
        })
        .collect()
}

/// Transform applied to the front card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub translate_x: f64,
    pub translate_y: f64,
    pub rotate_degrees: f64,
    pub opacity: f64,
}

impl CardTransform {
    /// CSS `transform` value
    pub fn to_css(&self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            self.translate_x, self.translate_y, self.rotate_degrees
        )
    }
}

pub fn drag_transform(frame: &GestureFrame) -> CardTransform {
    CardTransform {
        translate_x: frame.dx,
        translate_y: frame.dy,
        rotate_degrees: frame.rotation_degrees,
        opacity: 1.0,
    }
}

/// Exit transform for a committed card
pub fn fly_out(direction: Direction, dy: f64, rotation_per_px: f64) -> CardTransform {
    let fly_x = direction.sign() * FLY_OUT_PX;
    CardTransform {
        translate_x: fly_x,
        translate_y: dy,
        rotate_degrees: fly_x * rotation_per_px,
        opacity: 0.0,
    }
}
