use crate::core::decision::Direction;
use crate::core::error::EngineError;
use crate::models::Tally;

/// Cursor state of a deck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckState {
    Active(usize),
    Exhausted,
}

/// Ordered entities plus a cursor and the like/dislike tally
///
/// Invariant: `cursor <= entities.len()`; equality is the exhausted state.
/// The cursor only moves through `advance`, `retreat` and `reset`.
#[derive(Debug, Clone)]
pub struct Deck<T> {
    entities: Vec<T>,
    cursor: usize,
    tally: Tally,
}

impl<T> Deck<T> {
    pub fn new(entities: Vec<T>) -> Self {
        Self {
            entities,
            cursor: 0,
            tally: Tally::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn state(&self) -> DeckState {
        if self.cursor < self.entities.len() {
            DeckState::Active(self.cursor)
        } else {
            DeckState::Exhausted
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state() == DeckState::Exhausted
    }

    /// Front card, if any
    pub fn current(&self) -> Option<&T> {
        self.entities.get(self.cursor)
    }

    /// Up to `n` entities from the cursor, front-most first
    pub fn peek_window(&self, n: usize) -> &[T] {
        let end = self.cursor.saturating_add(n).min(self.entities.len());
        &self.entities[self.cursor.min(end)..end]
    }

    pub fn record(&mut self, direction: Direction) {
        match direction {
            Direction::Right => self.tally.likes += 1,
            Direction::Left => self.tally.dislikes += 1,
        }
    }

    pub fn advance(&mut self) -> Result<DeckState, EngineError> {
        if self.is_exhausted() {
            return Err(EngineError::DeckExhausted);
        }
        self.cursor += 1;
        Ok(self.state())
    }

    /// Step back one card
    ///
    /// The tally is not tracked per card, so the like counter is decremented
    /// when non-zero and the dislike counter otherwise.
    pub fn retreat(&mut self) -> Result<DeckState, EngineError> {
        if self.cursor == 0 {
            return Err(EngineError::NothingToUndo);
        }
        self.cursor -= 1;
        if self.tally.likes > 0 {
            self.tally.likes -= 1;
        } else if self.tally.dislikes > 0 {
            self.tally.dislikes -= 1;
        }
        Ok(self.state())
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
        self.tally = Tally::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn deck(n: u32) -> Deck<u32> {
        Deck::new((0..n).collect())
    }

    #[test]
    fn test_peek_window_front_first() {
        let mut d = deck(5);
        assert_eq!(d.peek_window(3), &[0, 1, 2]);
        d.advance().unwrap();
        d.advance().unwrap();
        d.advance().unwrap();
        assert_eq!(d.peek_window(3), &[3, 4]);
    }

    #[test]
    fn test_advance_to_exhausted() {
        let mut d = deck(2);
        assert_eq!(d.advance(), Ok(DeckState::Active(1)));
        assert_eq!(d.advance(), Ok(DeckState::Exhausted));
        assert_eq!(d.advance(), Err(EngineError::DeckExhausted));
        assert!(d.peek_window(3).is_empty());
        assert!(d.current().is_none());
    }

    #[test]
    fn test_empty_deck_starts_exhausted() {
        let d = deck(0);
        assert_eq!(d.state(), DeckState::Exhausted);
        assert!(d.peek_window(3).is_empty());
    }

    #[test]
    fn test_retreat_prefers_likes() {
        let mut d = deck(5);
        for direction in [Direction::Right, Direction::Left, Direction::Right] {
            d.record(direction);
            d.advance().unwrap();
        }

        assert_eq!(d.retreat(), Ok(DeckState::Active(2)));
        assert_eq!(d.tally(), Tally { likes: 1, dislikes: 1 });
    }

    #[test]
    fn test_retreat_falls_back_to_dislikes() {
        let mut d = deck(3);
        d.record(Direction::Left);
        d.advance().unwrap();

        d.retreat().unwrap();
        assert_eq!(d.tally(), Tally::default());
        assert_eq!(d.retreat(), Err(EngineError::NothingToUndo));
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut d = deck(3);
        d.record(Direction::Right);
        d.advance().unwrap();

        d.reset();
        d.reset();
        assert_eq!(d.state(), DeckState::Active(0));
        assert_eq!(d.tally(), Tally::default());
    }
}
