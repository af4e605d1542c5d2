use crate::core::EngineError;
use crate::models::{Match, Message, MessageDirection};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use uuid::Uuid;

/// Default chance that a like turns into a match
pub const DEFAULT_MATCH_PROBABILITY: f64 = 0.5;

/// Source of the yes/no match draw
pub trait MatchDraw: Send {
    fn draw(&mut self, probability: f64) -> bool;
}

/// Draw backed by a real RNG
pub struct RandomDraw {
    rng: StdRng,
}

impl RandomDraw {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomDraw {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchDraw for RandomDraw {
    fn draw(&mut self, probability: f64) -> bool {
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// Scripted draw for tests and demos; repeats `fallback` once the script runs out
pub struct FixedDraw {
    outcomes: VecDeque<bool>,
    fallback: bool,
}

impl FixedDraw {
    pub fn always(outcome: bool) -> Self {
        Self {
            outcomes: VecDeque::new(),
            fallback: outcome,
        }
    }

    pub fn sequence(outcomes: impl IntoIterator<Item = bool>) -> Self {
        Self {
            outcomes: outcomes.into_iter().collect(),
            fallback: false,
        }
    }
}

impl MatchDraw for FixedDraw {
    fn draw(&mut self, _probability: f64) -> bool {
        self.outcomes.pop_front().unwrap_or(self.fallback)
    }
}

/// All matches made in a session, oldest first
#[derive(Debug, Clone)]
pub struct MatchBook<T> {
    matches: Vec<Match<T>>,
}

impl<T> MatchBook<T> {
    pub fn new() -> Self {
        Self { matches: Vec::new() }
    }

    pub fn record(&mut self, entity: T) -> &Match<T> {
        self.matches.push(Match::new(entity));
        &self.matches[self.matches.len() - 1]
    }

    pub fn get(&self, id: Uuid) -> Option<&Match<T>> {
        self.matches.iter().find(|m| m.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Match<T>> {
        self.matches.iter()
    }

    /// Matches ordered for the chat list: latest activity first
    pub fn by_recent_activity(&self) -> Vec<&Match<T>> {
        let mut ordered: Vec<&Match<T>> = self.matches.iter().collect();
        ordered.sort_by_key(|m| {
            std::cmp::Reverse(
                m.conversation
                    .last()
                    .map(|msg| msg.sent_at)
                    .unwrap_or(m.matched_at),
            )
        });
        ordered
    }

    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn send(&mut self, id: Uuid, text: impl Into<String>) -> Result<&Message, EngineError> {
        self.append(id, text.into(), MessageDirection::Sent)
    }

    pub fn receive(&mut self, id: Uuid, text: impl Into<String>) -> Result<&Message, EngineError> {
        self.append(id, text.into(), MessageDirection::Received)
    }

    fn append(
        &mut self,
        id: Uuid,
        text: String,
        direction: MessageDirection,
    ) -> Result<&Message, EngineError> {
        let entry = self
            .matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(EngineError::UnknownMatch)?;
        Ok(entry.conversation.push(text, direction))
    }
}

impl<T> Default for MatchBook<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Draws matches for liked entities and keeps the resulting match book
pub struct Matchmaker<T> {
    draw: Box<dyn MatchDraw>,
    probability: f64,
    book: MatchBook<T>,
}

impl<T: Clone> Matchmaker<T> {
    pub fn new(draw: Box<dyn MatchDraw>, probability: f64) -> Self {
        Self {
            draw,
            probability,
            book: MatchBook::new(),
        }
    }

    pub fn with_random_draw(probability: f64) -> Self {
        Self::new(Box::new(RandomDraw::new()), probability)
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// One draw for a liked entity; a hit is recorded in the book
    pub fn consider(&mut self, liked: &T) -> Option<Match<T>> {
        if !self.draw.draw(self.probability) {
            return None;
        }
        Some(self.book.record(liked.clone()).clone())
    }

    pub fn book(&self) -> &MatchBook<T> {
        &self.book
    }

    pub fn book_mut(&mut self) -> &mut MatchBook<T> {
        &mut self.book
    }
}
