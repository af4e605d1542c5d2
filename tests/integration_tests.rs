// Integration tests for Swipe Deck

use std::time::Duration;
use swipe_deck::config::{EngineSettings, MatchingSettings};
use swipe_deck::core::{DeckState, DecisionOutcome, EngineError, GestureFrame, VisualIntent};
use swipe_deck::core::CardTransform;
use swipe_deck::models::{Action, Match, MessageDirection, PointerEvent, Tally};
use swipe_deck::services::{FixedDraw, Matchmaker};
use swipe_deck::session::{PointerResponse, Renderer, SwipeSession};
use tokio_test::{assert_err, assert_ok};

#[derive(Debug, Clone, PartialEq)]
enum Call {
    Render { window: Vec<u32>, exhausted: bool },
    Drag(VisualIntent),
    SnapBack,
    FlyOut(f64),
    Tally(Tally),
    Reveal(u32),
}

#[derive(Debug, Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl Renderer<u32> for Recorder {
    fn render(&mut self, window: &[u32], exhausted: bool) {
        self.calls.push(Call::Render {
            window: window.to_vec(),
            exhausted,
        });
    }

    fn render_drag(&mut self, frame: &GestureFrame) {
        self.calls.push(Call::Drag(frame.intent));
    }

    fn render_snap_back(&mut self) {
        self.calls.push(Call::SnapBack);
    }

    fn render_fly_out(&mut self, transform: &CardTransform) {
        self.calls.push(Call::FlyOut(transform.translate_x));
    }

    fn render_tally(&mut self, tally: Tally) {
        self.calls.push(Call::Tally(tally));
    }

    fn reveal_match(&mut self, matched: &Match<u32>) {
        self.calls.push(Call::Reveal(matched.entity));
    }
}

fn instant() -> EngineSettings {
    EngineSettings {
        settle_delay_ms: 0,
        ..EngineSettings::default()
    }
}

fn instant_matching() -> MatchingSettings {
    MatchingSettings {
        reveal_delay_ms: 0,
        ..MatchingSettings::default()
    }
}

fn cards(n: u32) -> Vec<u32> {
    (1..=n).collect()
}

async fn drag(session: &SwipeSession<u32, Recorder>, dx: f64) -> PointerResponse {
    assert_ok!(session.handle_pointer(PointerEvent::begin(200.0, 400.0)).await);
    assert_ok!(session.handle_pointer(PointerEvent::moved(200.0 + dx, 410.0)).await);
    session
        .handle_pointer(PointerEvent::end(200.0 + dx, 410.0))
        .await
        .unwrap()
}

async fn calls(session: &SwipeSession<u32, Recorder>) -> Vec<Call> {
    session.with_renderer(|r| r.calls.clone()).await
}

#[tokio::test]
async fn test_start_renders_first_window() {
    let session = SwipeSession::new(cards(5), Recorder::default(), &instant());
    session.start().await;

    assert_eq!(
        calls(&session).await,
        vec![
            Call::Render { window: vec![1, 2, 3], exhausted: false },
            Call::Tally(Tally::default()),
        ]
    );
}

#[tokio::test]
async fn test_five_card_run_to_exhaustion() {
    let session = SwipeSession::new(cards(5), Recorder::default(), &instant());
    session.start().await;

    for dx in [150.0, 120.0, -180.0, 101.0, 300.0] {
        let response = drag(&session, dx).await;
        assert!(matches!(response, PointerResponse::Released(DecisionOutcome::Left | DecisionOutcome::Right)));
        session.settled().await;
    }

    assert_eq!(session.tally().await, Tally { likes: 4, dislikes: 1 });
    assert_eq!(session.cursor().await, 5);
    assert_eq!(session.deck_state().await, DeckState::Exhausted);
    assert!(session.window().await.is_empty());

    let recorded = calls(&session).await;
    assert_eq!(recorded.last(), Some(&Call::Render { window: vec![], exhausted: true }));
    assert!(recorded.contains(&Call::FlyOut(-1000.0)));
}

#[tokio::test]
async fn test_short_drag_snaps_back() {
    let session = SwipeSession::new(cards(3), Recorder::default(), &instant());

    let response = drag(&session, 60.0).await;
    assert_eq!(response, PointerResponse::Released(DecisionOutcome::Cancelled));
    session.settled().await;

    assert_eq!(session.cursor().await, 0);
    assert_eq!(session.tally().await, Tally::default());
    assert_eq!(calls(&session).await, vec![Call::Drag(VisualIntent::Like), Call::SnapBack]);
}

#[tokio::test]
async fn test_pointer_without_press_is_ignored() {
    let session = SwipeSession::new(cards(3), Recorder::default(), &instant());

    let moved = session.handle_pointer(PointerEvent::moved(500.0, 0.0)).await;
    let ended = session.handle_pointer(PointerEvent::end(500.0, 0.0)).await;

    assert_eq!(moved, Ok(PointerResponse::Ignored));
    assert_eq!(ended, Ok(PointerResponse::Ignored));
    assert!(calls(&session).await.is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_advance_waits_for_settle_delay() {
    let session = SwipeSession::new(cards(3), Recorder::default(), &EngineSettings::default());

    assert_ok!(session.handle_action(Action::Like).await);
    assert_eq!(session.tally().await.likes, 1);

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(session.cursor().await, 0);

    session.settled().await;
    assert_eq!(session.cursor().await, 1);
    assert_eq!(session.window().await, vec![2, 3]);
}

#[tokio::test(start_paused = true)]
async fn test_input_rejected_while_settling() {
    let session = SwipeSession::new(cards(3), Recorder::default(), &EngineSettings::default());

    assert_ok!(session.handle_action(Action::Dislike).await);
    assert_eq!(session.handle_action(Action::Like).await, Err(EngineError::AdvancePending));
    assert_eq!(
        session.handle_pointer(PointerEvent::begin(0.0, 0.0)).await,
        Err(EngineError::AdvancePending)
    );
    assert_err!(session.handle_action(Action::Undo).await);

    // the pending advance still lands
    session.settled().await;
    assert_eq!(session.cursor().await, 1);
    assert_eq!(session.tally().await, Tally { likes: 0, dislikes: 1 });
}

#[tokio::test(start_paused = true)]
async fn test_reset_discards_pending_settle() {
    let session = SwipeSession::new(cards(3), Recorder::default(), &EngineSettings::default());

    assert_ok!(session.handle_action(Action::Like).await);
    assert_ok!(session.handle_action(Action::Reset).await);
    session.settled().await;

    assert_eq!(session.deck_state().await, DeckState::Active(0));
    assert_eq!(session.tally().await, Tally::default());
    assert_eq!(session.window().await, vec![1, 2, 3]);
}

#[tokio::test]
async fn test_undo_restores_previous_card() {
    let session = SwipeSession::new(cards(5), Recorder::default(), &instant());

    for action in [Action::Like, Action::Like, Action::Dislike] {
        assert_ok!(session.handle_action(action).await);
        session.settled().await;
    }
    assert_eq!(session.cursor().await, 3);

    assert_ok!(session.handle_action(Action::Undo).await);
    assert_eq!(session.cursor().await, 2);
    assert_eq!(session.tally().await, Tally { likes: 1, dislikes: 1 });

    let recorded = calls(&session).await;
    assert!(recorded.ends_with(&[
        Call::Render { window: vec![3, 4, 5], exhausted: false },
        Call::Tally(Tally { likes: 1, dislikes: 1 }),
    ]));
}

#[tokio::test]
async fn test_undo_at_start_fails() {
    let session = SwipeSession::new(cards(2), Recorder::default(), &instant());
    assert_eq!(session.handle_action(Action::Undo).await, Err(EngineError::NothingToUndo));
}

#[tokio::test]
async fn test_match_uses_swiped_card() {
    let matchmaker = Matchmaker::new(Box::new(FixedDraw::always(true)), 0.5);
    let session = SwipeSession::with_matching(
        cards(3),
        Recorder::default(),
        &instant(),
        matchmaker,
        &instant_matching(),
    );

    drag(&session, 140.0).await;
    session.settled().await;

    let matches = session.matches().await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity, 1);
    assert!(calls(&session).await.contains(&Call::Reveal(1)));
    assert_eq!(session.window().await, vec![2, 3]);
}

#[tokio::test]
async fn test_dislike_never_draws() {
    // a single winning draw; only a like may consume it
    let matchmaker = Matchmaker::new(Box::new(FixedDraw::sequence([true])), 0.5);
    let session = SwipeSession::with_matching(
        cards(3),
        Recorder::default(),
        &instant(),
        matchmaker,
        &instant_matching(),
    );

    assert_ok!(session.handle_action(Action::Dislike).await);
    session.settled().await;
    assert!(session.matches().await.is_empty());

    assert_ok!(session.handle_action(Action::Like).await);
    session.settled().await;
    let matches = session.matches().await;
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].entity, 2);
}

#[tokio::test(start_paused = true)]
async fn test_match_reveal_is_delayed() {
    let matchmaker = Matchmaker::new(Box::new(FixedDraw::always(true)), 0.5);
    let session = SwipeSession::with_matching(
        cards(2),
        Recorder::default(),
        &EngineSettings::default(),
        matchmaker,
        &MatchingSettings::default(),
    );

    assert_ok!(session.handle_action(Action::Like).await);
    tokio::time::sleep(Duration::from_millis(350)).await;
    assert!(!calls(&session).await.contains(&Call::Reveal(1)));

    session.settled().await;
    assert!(calls(&session).await.contains(&Call::Reveal(1)));
}

#[tokio::test]
async fn test_chat_with_match() {
    let matchmaker = Matchmaker::new(Box::new(FixedDraw::always(true)), 0.5);
    let session = SwipeSession::with_matching(
        cards(2),
        Recorder::default(),
        &instant(),
        matchmaker,
        &instant_matching(),
    );

    assert_ok!(session.handle_action(Action::Like).await);
    session.settled().await;
    let match_id = session.matches().await[0].id;

    let sent = session.send_message(match_id, "Hi! Nice photo").await.unwrap();
    assert_eq!(sent.direction, MessageDirection::Sent);
    assert_ok!(session.receive_message(match_id, "Thanks :)").await);

    let conversation = &session.matches().await[0].conversation;
    assert_eq!(conversation.len(), 2);
    assert_eq!(conversation.last().unwrap().text, "Thanks :)");
}

#[tokio::test]
async fn test_plain_deck_has_no_matches() {
    let session = SwipeSession::new(cards(2), Recorder::default(), &instant());
    assert_ok!(session.handle_action(Action::Like).await);
    session.settled().await;

    assert!(session.matches().await.is_empty());
    assert_err!(session.send_message(uuid::Uuid::new_v4(), "hello?").await);
}
