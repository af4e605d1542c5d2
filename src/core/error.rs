use thiserror::Error;

/// Errors raised by the swipe state machine
///
/// None of these are fatal; callers log and ignore the rejected input.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("deck is exhausted")]
    DeckExhausted,

    #[error("nothing to undo")]
    NothingToUndo,

    #[error("a gesture is already in progress")]
    GestureInProgress,

    #[error("no active card")]
    NoActiveCard,

    #[error("previous card is still settling")]
    AdvancePending,

    #[error("unknown match")]
    UnknownMatch,
}
