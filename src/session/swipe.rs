use crate::config::{EngineSettings, MatchingSettings};
use crate::core::{Commit, DeckState, DecisionOutcome, Direction, EngineError, GestureFrame, Release, SwipeEngine};
use crate::models::{Action, Match, Message, PointerEvent, PointerPhase, Tally};
use crate::services::Matchmaker;
use crate::session::renderer::Renderer;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// What a pointer event did
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerResponse {
    /// No gesture was live; the event was dropped
    Ignored,
    Tracking,
    Dragged(GestureFrame),
    Released(DecisionOutcome),
}

struct SessionState<T, R> {
    engine: SwipeEngine<T>,
    renderer: R,
    matchmaker: Option<Matchmaker<T>>,
}

impl<T: Clone, R: Renderer<T>> SessionState<T, R> {
    fn render_window(&mut self) {
        let exhausted = self.engine.deck().is_exhausted();
        self.renderer.render(self.engine.window(), exhausted);
    }
}

/// One user's swipe session
///
/// Owns the engine, the renderer and the optional matchmaker behind a single
/// lock, so input handlers and the delayed settle/reveal tasks never
/// interleave. Cloning yields another handle to the same session.
pub struct SwipeSession<T, R> {
    state: Arc<Mutex<SessionState<T, R>>>,
    tasks: Arc<Mutex<Vec<JoinHandle<()>>>>,
    settle_delay: Duration,
    reveal_delay: Duration,
}

impl<T, R> Clone for SwipeSession<T, R> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            tasks: Arc::clone(&self.tasks),
            settle_delay: self.settle_delay,
            reveal_delay: self.reveal_delay,
        }
    }
}

impl<T, R> SwipeSession<T, R>
where
    T: Clone + Send + 'static,
    R: Renderer<T>,
{
    /// Plain like/dislike deck
    pub fn new(entities: Vec<T>, renderer: R, settings: &EngineSettings) -> Self {
        Self::build(entities, renderer, settings, None, Duration::ZERO)
    }

    /// Deck whose likes may turn into matches
    pub fn with_matching(
        entities: Vec<T>,
        renderer: R,
        settings: &EngineSettings,
        matchmaker: Matchmaker<T>,
        matching: &MatchingSettings,
    ) -> Self {
        Self::build(entities, renderer, settings, Some(matchmaker), matching.reveal_delay())
    }

    fn build(
        entities: Vec<T>,
        renderer: R,
        settings: &EngineSettings,
        matchmaker: Option<Matchmaker<T>>,
        reveal_delay: Duration,
    ) -> Self {
        let engine = SwipeEngine::new(entities, settings.thresholds(), settings.window_size);
        Self {
            state: Arc::new(Mutex::new(SessionState {
                engine,
                renderer,
                matchmaker,
            })),
            tasks: Arc::new(Mutex::new(Vec::new())),
            settle_delay: settings.settle_delay(),
            reveal_delay,
        }
    }

    /// Initial render of the stack and counters
    pub async fn start(&self) {
        let mut state = self.state.lock().await;
        let tally = state.engine.tally();
        state.render_window();
        state.renderer.render_tally(tally);
        tracing::info!("Session started with {} cards", state.engine.deck().len());
    }

    pub async fn handle_pointer(&self, event: PointerEvent) -> Result<PointerResponse, EngineError> {
        let mut state = self.state.lock().await;

        match event.phase {
            PointerPhase::Begin => {
                if let Err(e) = state.engine.press(event.point()) {
                    tracing::warn!("Ignoring press: {}", e);
                    return Err(e);
                }
                Ok(PointerResponse::Tracking)
            }
            PointerPhase::Move => match state.engine.drag(event.point()) {
                Some(frame) => {
                    state.renderer.render_drag(&frame);
                    Ok(PointerResponse::Dragged(frame))
                }
                None => Ok(PointerResponse::Ignored),
            },
            PointerPhase::End => match state.engine.release()? {
                None => Ok(PointerResponse::Ignored),
                Some(Release::Cancelled) => {
                    state.renderer.render_snap_back();
                    tracing::debug!("Swipe cancelled");
                    Ok(PointerResponse::Released(DecisionOutcome::Cancelled))
                }
                Some(Release::Committed(commit)) => {
                    let outcome: DecisionOutcome = commit.direction.into();
                    self.dispatch(&mut state, commit).await;
                    Ok(PointerResponse::Released(outcome))
                }
            },
        }
    }

    /// Button triggers; like/dislike skip the gesture tracker entirely
    pub async fn handle_action(&self, action: Action) -> Result<(), EngineError> {
        let mut state = self.state.lock().await;

        match action {
            Action::Like | Action::Dislike => {
                let direction = if action == Action::Like {
                    Direction::Right
                } else {
                    Direction::Left
                };
                let commit = state.engine.commit(direction, 0.0).map_err(|e| {
                    tracing::warn!("Ignoring {:?}: {}", action, e);
                    e
                })?;
                self.dispatch(&mut state, commit).await;
            }
            Action::Undo => {
                let deck_state = state.engine.undo().map_err(|e| {
                    tracing::warn!("Ignoring undo: {}", e);
                    e
                })?;
                let tally = state.engine.tally();
                state.render_window();
                state.renderer.render_tally(tally);
                tracing::info!("Undo to {:?}", deck_state);
            }
            Action::Reset => {
                state.engine.reset();
                state.render_window();
                state.renderer.render_tally(Tally::default());
                tracing::info!("Deck reset");
            }
        }
        Ok(())
    }

    /// Commit pipeline: counters, match draw, fly-out, then a delayed advance
    async fn dispatch(&self, state: &mut SessionState<T, R>, commit: Commit<T>) {
        tracing::info!(
            "Committed {:?} at card {} ({} likes, {} nopes)",
            commit.direction,
            state.engine.deck().cursor(),
            commit.tally.likes,
            commit.tally.dislikes
        );

        state.renderer.render_fly_out(&commit.transform);
        state.renderer.render_tally(commit.tally);

        if commit.direction == Direction::Right {
            // draw against the swiped card; the cursor has not moved yet
            let matched = state
                .matchmaker
                .as_mut()
                .and_then(|matchmaker| matchmaker.consider(&commit.entity));
            if let Some(matched) = matched {
                tracing::info!("Match {} created", matched.id);
                self.schedule_reveal(matched).await;
            }
        }

        self.schedule_settle(commit.ticket).await;
    }

    async fn schedule_settle(&self, ticket: u64) {
        let state = Arc::clone(&self.state);
        let delay = self.settle_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut state = state.lock().await;
            match state.engine.settle(ticket) {
                Some(deck_state) => {
                    if deck_state == DeckState::Exhausted {
                        tracing::info!("Deck exhausted");
                    }
                    state.render_window();
                }
                None => tracing::debug!("Dropping stale settle for generation {}", ticket),
            }
        });
        self.track(handle).await;
    }

    async fn schedule_reveal(&self, matched: Match<T>) {
        let state = Arc::clone(&self.state);
        let delay = self.reveal_delay;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            state.lock().await.renderer.reveal_match(&matched);
        });
        self.track(handle).await;
    }

    async fn track(&self, handle: JoinHandle<()>) {
        let mut tasks = self.tasks.lock().await;
        tasks.retain(|task| !task.is_finished());
        tasks.push(handle);
    }

    /// Wait for every scheduled settle and reveal to run
    pub async fn settled(&self) {
        loop {
            let handles = std::mem::take(&mut *self.tasks.lock().await);
            if handles.is_empty() {
                break;
            }
            for handle in handles {
                if let Err(e) = handle.await {
                    tracing::error!("Scheduled task failed: {}", e);
                }
            }
        }
    }

    pub async fn tally(&self) -> Tally {
        self.state.lock().await.engine.tally()
    }

    pub async fn deck_state(&self) -> DeckState {
        self.state.lock().await.engine.deck().state()
    }

    pub async fn cursor(&self) -> usize {
        self.state.lock().await.engine.deck().cursor()
    }

    pub async fn window(&self) -> Vec<T> {
        self.state.lock().await.engine.window().to_vec()
    }

    /// Matches so far, oldest first; empty for the plain deck
    pub async fn matches(&self) -> Vec<Match<T>> {
        let state = self.state.lock().await;
        state
            .matchmaker
            .as_ref()
            .map(|m| m.book().iter().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn send_message(&self, match_id: Uuid, text: &str) -> Result<Message, EngineError> {
        let mut state = self.state.lock().await;
        let matchmaker = state.matchmaker.as_mut().ok_or(EngineError::UnknownMatch)?;
        matchmaker.book_mut().send(match_id, text).cloned()
    }

    pub async fn receive_message(&self, match_id: Uuid, text: &str) -> Result<Message, EngineError> {
        let mut state = self.state.lock().await;
        let matchmaker = state.matchmaker.as_mut().ok_or(EngineError::UnknownMatch)?;
        matchmaker.book_mut().receive(match_id, text).cloned()
    }

    /// Hand the renderer to `f`, e.g. to inspect a recording renderer
    pub async fn with_renderer<F, O>(&self, f: F) -> O
    where
        F: FnOnce(&R) -> O,
    {
        f(&self.state.lock().await.renderer)
    }
}
