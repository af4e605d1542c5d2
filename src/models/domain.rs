use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Card shown by the demo deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: u32,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub name: String,
    pub description: String,
}

/// Dating candidate shown by the matching deck
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub age: u8,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub interests: Vec<String>,
}

/// Short human label for logs and alt text
pub trait DisplayName {
    fn display_name(&self) -> &str;
}

impl DisplayName for Card {
    fn display_name(&self) -> &str {
        &self.name
    }
}

impl DisplayName for Candidate {
    fn display_name(&self) -> &str {
        &self.name
    }
}

/// Like and dislike counters for a deck run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub likes: u32,
    pub dislikes: u32,
}

impl Tally {
    pub fn total(&self) -> u32 {
        self.likes + self.dislikes
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageDirection {
    Sent,
    Received,
}

/// A single chat line inside a match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub direction: MessageDirection,
    pub sent_at: DateTime<Utc>,
}

impl Message {
    /// Timestamp as shown next to the bubble, e.g. `14:05`
    pub fn display_time(&self) -> String {
        self.sent_at.format("%H:%M").to_string()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    messages: Vec<Message>,
}

impl Conversation {
    pub fn push(&mut self, text: impl Into<String>, direction: MessageDirection) -> &Message {
        self.messages.push(Message {
            text: text.into(),
            direction,
            sent_at: Utc::now(),
        });
        // just pushed
        &self.messages[self.messages.len() - 1]
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Successful match against a liked entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Match<T> {
    pub id: Uuid,
    pub entity: T,
    pub matched_at: DateTime<Utc>,
    pub conversation: Conversation,
}

impl<T> Match<T> {
    pub fn new(entity: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            entity,
            matched_at: Utc::now(),
            conversation: Conversation::default(),
        }
    }
}

/// Pixel thresholds and factors driving the gesture pipeline
///
/// `intent_px` only toggles the like/nope badges; `commit_px` alone decides
/// whether a release commits.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    pub commit_px: f64,
    pub intent_px: f64,
    pub rotation_per_px: f64,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            commit_px: 100.0,
            intent_px: 50.0,
            rotation_per_px: 0.1,
        }
    }
}
