use serde::Deserialize;
use std::error::Error;
use std::fs;
use swipe_deck::config::{LoggingSettings, Settings};
use swipe_deck::models::{Action, Candidate, Card, DisplayName, PointerEvent};
use swipe_deck::services::{FileStore, Matchmaker, ProfileStore};
use swipe_deck::session::{Renderer, SwipeSession, TracingRenderer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

/// Deck file: `[[cards]]` for the plain deck, `[[candidates]]` for matching
#[derive(Debug, Default, Deserialize)]
struct DeckFile {
    #[serde(default)]
    cards: Vec<Card>,
    #[serde(default)]
    candidates: Vec<Candidate>,
}

/// One scripted user interaction
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Step {
    /// Press at the origin, move to `(dx, dy)`, release
    Drag { dx: f64, dy: f64 },
    Pointer(PointerEvent),
    Action(Action),
    /// Wait for pending animations to finish
    Settle,
}

fn init_tracing(logging: &LoggingSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }
}

async fn replay<T, R>(session: &SwipeSession<T, R>, steps: &[Step])
where
    T: DisplayName + Clone + Send + 'static,
    R: Renderer<T>,
{
    session.start().await;

    for step in steps {
        let result = match *step {
            Step::Drag { dx, dy } => {
                let mut result = session.handle_pointer(PointerEvent::begin(0.0, 0.0)).await.map(|_| ());
                if result.is_ok() {
                    // halfway sample so the badge shows before release
                    let _ = session.handle_pointer(PointerEvent::moved(dx / 2.0, dy / 2.0)).await;
                    let _ = session.handle_pointer(PointerEvent::moved(dx, dy)).await;
                    result = session.handle_pointer(PointerEvent::end(dx, dy)).await.map(|_| ());
                }
                result
            }
            Step::Pointer(event) => session.handle_pointer(event).await.map(|_| ()),
            Step::Action(action) => session.handle_action(action).await,
            Step::Settle => {
                session.settled().await;
                Ok(())
            }
        };
        if let Err(e) = result {
            warn!("Step {:?} rejected: {}", step, e);
        }
    }

    session.settled().await;
    let tally = session.tally().await;
    let deck_state = session.deck_state().await;
    info!("Finished: {} likes, {} nopes, state {:?}", tally.likes, tally.dislikes, deck_state);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let loaded = Settings::load();
    init_tracing(&loaded.as_ref().map(|s| s.logging.clone()).unwrap_or_default());

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Configuration loaded successfully");

    let deck: DeckFile = toml::from_str(&fs::read_to_string(&settings.demo.deck_path)?)?;
    let steps: Vec<Step> = serde_json::from_str(&fs::read_to_string(&settings.demo.script_path)?)?;

    info!("Replaying {} steps from {}", steps.len(), settings.demo.script_path);

    if settings.demo.matching {
        let profiles = ProfileStore::with_key(
            FileStore::new(&settings.storage.path),
            settings.storage.profile_key.clone(),
        );
        match profiles.load()? {
            Some(profile) => info!("Welcome back, {}", profile.name),
            None => warn!("No profile saved yet; fill in your profile to get matches"),
        }

        let matchmaker = Matchmaker::with_random_draw(settings.matching.probability);
        let session = SwipeSession::with_matching(
            deck.candidates,
            TracingRenderer,
            &settings.engine,
            matchmaker,
            &settings.matching,
        );
        replay(&session, &steps).await;

        for matched in session.matches().await {
            info!("Matched with {} at {}", matched.entity.name, matched.matched_at.format("%H:%M"));
        }
    } else {
        let session = SwipeSession::new(deck.cards, TracingRenderer, &settings.engine);
        replay(&session, &steps).await;
    }

    Ok(())
}
