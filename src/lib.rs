//! Swipe Deck - card swipe engine for like/dislike decks
//!
//! This library provides the gesture-to-decision state machine behind a
//! swipe card UI, plus the matching variant built on it (undo, match draw,
//! conversations and a persisted profile). Rendering stays outside, behind
//! the [`session::Renderer`] trait.

pub mod config;
pub mod core;
pub mod models;
pub mod services;
pub mod session;

// Re-export commonly used types
pub use crate::core::{resolve, Deck, DeckState, DecisionOutcome, Direction, EngineError, GestureTracker, SwipeEngine, VisualIntent};
pub use crate::models::{Action, Candidate, Card, Match, PointerEvent, Profile, SwipeThresholds, Tally};
pub use crate::session::{Renderer, SwipeSession};
