// Service exports
pub mod matchmaker;
pub mod profile;
pub mod storage;

pub use matchmaker::{FixedDraw, MatchBook, MatchDraw, Matchmaker, RandomDraw};
pub use profile::{ProfileError, ProfileStore, PROFILE_KEY};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
