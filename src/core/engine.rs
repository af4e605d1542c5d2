use crate::core::{
    deck::{Deck, DeckState},
    decision::{DecisionOutcome, DecisionResolver, Direction},
    error::EngineError,
    gesture::{GestureFrame, GestureTracker},
    layout::{fly_out, CardTransform},
};
use crate::models::{Point, SwipeThresholds, Tally};

/// A committed swipe waiting for its settle delay
#[derive(Debug, Clone)]
pub struct Commit<T> {
    /// Deck generation the commit belongs to; a reset invalidates it
    pub ticket: u64,
    pub direction: Direction,
    /// The card that was swiped, captured before the cursor moves
    pub entity: T,
    pub tally: Tally,
    pub transform: CardTransform,
}

/// What a pointer release turned into
#[derive(Debug, Clone)]
pub enum Release<T> {
    Cancelled,
    Committed(Commit<T>),
}

impl<T> Release<T> {
    pub fn outcome(&self) -> DecisionOutcome {
        match self {
            Release::Cancelled => DecisionOutcome::Cancelled,
            Release::Committed(commit) => commit.direction.into(),
        }
    }
}

/// Synchronous swipe state machine: deck, tracker and resolver
///
/// The cursor advance after a commit is split into [`SwipeEngine::commit`]
/// and [`SwipeEngine::settle`] so the caller can hold the exit animation in
/// between. While a commit is pending the leaving card accepts no input.
#[derive(Debug, Clone)]
pub struct SwipeEngine<T> {
    deck: Deck<T>,
    tracker: GestureTracker,
    resolver: DecisionResolver,
    rotation_per_px: f64,
    window_size: usize,
    generation: u64,
    pending: bool,
}

impl<T: Clone> SwipeEngine<T> {
    pub fn new(entities: Vec<T>, thresholds: SwipeThresholds, window_size: usize) -> Self {
        Self {
            deck: Deck::new(entities),
            tracker: GestureTracker::new(&thresholds),
            resolver: DecisionResolver::new(thresholds.commit_px),
            rotation_per_px: thresholds.rotation_per_px,
            window_size,
            generation: 0,
            pending: false,
        }
    }

    pub fn deck(&self) -> &Deck<T> {
        &self.deck
    }

    pub fn tally(&self) -> Tally {
        self.deck.tally()
    }

    /// Cards to render, front-most first
    pub fn window(&self) -> &[T] {
        self.deck.peek_window(self.window_size)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn is_dragging(&self) -> bool {
        self.tracker.is_tracking()
    }

    fn ensure_interactive(&self) -> Result<(), EngineError> {
        if self.pending {
            return Err(EngineError::AdvancePending);
        }
        if self.deck.is_exhausted() {
            return Err(EngineError::NoActiveCard);
        }
        Ok(())
    }

    /// Pointer down on the front card
    pub fn press(&mut self, point: Point) -> Result<(), EngineError> {
        self.ensure_interactive()?;
        self.tracker.begin(point)
    }

    pub fn drag(&mut self, point: Point) -> Option<GestureFrame> {
        self.tracker.update(point)
    }

    /// Pointer up; `Ok(None)` when no gesture was live
    pub fn release(&mut self) -> Result<Option<Release<T>>, EngineError> {
        let Some((dx, dy)) = self.tracker.end() else {
            return Ok(None);
        };

        match self.resolver.resolve(dx).direction() {
            None => Ok(Some(Release::Cancelled)),
            Some(direction) => self
                .commit(direction, dy)
                .map(|commit| Some(Release::Committed(commit))),
        }
    }

    /// Commit the front card without a drag, as the like/dislike buttons do
    pub fn commit(&mut self, direction: Direction, dy: f64) -> Result<Commit<T>, EngineError> {
        self.ensure_interactive()?;
        let entity = self
            .deck
            .current()
            .cloned()
            .ok_or(EngineError::NoActiveCard)?;

        self.tracker.cancel();
        self.deck.record(direction);
        self.pending = true;

        Ok(Commit {
            ticket: self.generation,
            direction,
            entity,
            tally: self.deck.tally(),
            transform: fly_out(direction, dy, self.rotation_per_px),
        })
    }

    /// Advance past a committed card once its exit animation is done
    ///
    /// Returns `None` when the ticket predates a reset.
    pub fn settle(&mut self, ticket: u64) -> Option<DeckState> {
        if ticket != self.generation || !self.pending {
            return None;
        }
        self.pending = false;
        self.deck.advance().ok()
    }

    pub fn undo(&mut self) -> Result<DeckState, EngineError> {
        if self.pending {
            return Err(EngineError::AdvancePending);
        }
        self.tracker.cancel();
        self.deck.retreat()
    }

    pub fn reset(&mut self) {
        self.deck.reset();
        self.tracker.cancel();
        self.pending = false;
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gesture::VisualIntent;

    fn engine(n: u32) -> SwipeEngine<u32> {
        SwipeEngine::new((0..n).collect(), SwipeThresholds::default(), 3)
    }

    fn swipe(engine: &mut SwipeEngine<u32>, dx: f64) -> Release<u32> {
        engine.press(Point::new(0.0, 0.0)).unwrap();
        engine.drag(Point::new(dx, 4.0));
        engine.release().unwrap().unwrap()
    }

    #[test]
    fn test_drag_commit_right() {
        let mut e = engine(3);
        let Release::Committed(commit) = swipe(&mut e, 150.0) else {
            panic!("expected commit");
        };

        assert_eq!(commit.direction, Direction::Right);
        assert_eq!(commit.entity, 0);
        assert_eq!(commit.tally.likes, 1);
        assert_eq!(commit.transform.translate_y, 4.0);
        assert!(e.is_pending());
        assert_eq!(e.deck().cursor(), 0);

        assert_eq!(e.settle(commit.ticket), Some(DeckState::Active(1)));
        assert_eq!(e.window(), &[1, 2]);
    }

    #[test]
    fn test_cancelled_release_keeps_cursor() {
        let mut e = engine(3);
        e.press(Point::new(0.0, 0.0)).unwrap();
        let frame = e.drag(Point::new(60.0, 0.0)).unwrap();
        assert_eq!(frame.intent, VisualIntent::Like);

        let release = e.release().unwrap().unwrap();
        assert_eq!(release.outcome(), DecisionOutcome::Cancelled);
        assert_eq!(e.deck().cursor(), 0);
        assert_eq!(e.tally(), Tally::default());
        assert!(!e.is_pending());
    }

    #[test]
    fn test_pending_commit_blocks_input() {
        let mut e = engine(3);
        let commit = e.commit(Direction::Left, 0.0).unwrap();

        assert_eq!(e.press(Point::default()), Err(EngineError::AdvancePending));
        assert_eq!(e.commit(Direction::Right, 0.0).unwrap_err(), EngineError::AdvancePending);
        assert_eq!(e.undo(), Err(EngineError::AdvancePending));

        e.settle(commit.ticket);
        assert!(e.press(Point::default()).is_ok());
    }

    #[test]
    fn test_settle_after_reset_is_stale() {
        let mut e = engine(3);
        let commit = e.commit(Direction::Right, 0.0).unwrap();
        e.reset();

        assert_eq!(e.settle(commit.ticket), None);
        assert_eq!(e.deck().state(), DeckState::Active(0));
        assert_eq!(e.tally(), Tally::default());
    }

    #[test]
    fn test_exhausted_deck_rejects_press() {
        let mut e = engine(1);
        let commit = e.commit(Direction::Right, 0.0).unwrap();
        assert_eq!(e.settle(commit.ticket), Some(DeckState::Exhausted));

        assert_eq!(e.press(Point::default()), Err(EngineError::NoActiveCard));
        assert!(e.window().is_empty());
    }

    #[test]
    fn test_release_without_press_is_noop() {
        let mut e = engine(2);
        assert!(e.release().unwrap().is_none());
        assert!(e.drag(Point::new(300.0, 0.0)).is_none());
    }
}
