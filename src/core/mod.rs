// Core engine exports
pub mod deck;
pub mod decision;
pub mod engine;
pub mod error;
pub mod gesture;
pub mod layout;

pub use deck::{Deck, DeckState};
pub use decision::{resolve, DecisionOutcome, Direction, DecisionResolver};
pub use engine::{Commit, Release, SwipeEngine};
pub use error::EngineError;
pub use gesture::{GestureFrame, GestureTracker, VisualIntent};
pub use layout::{drag_transform, fly_out, stack_layout, CardTransform, StackPlacement};
