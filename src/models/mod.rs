// Model exports
pub mod domain;
pub mod events;
pub mod profile;

pub use domain::{Candidate, Card, Conversation, DisplayName, Match, Message, MessageDirection, SwipeThresholds, Tally};
pub use events::{Action, Point, PointerEvent, PointerPhase};
pub use profile::Profile;
