use crate::models::Profile;
use crate::services::storage::{KeyValueStore, StorageError};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Slot the profile is stored under
pub const PROFILE_KEY: &str = "userProfile";

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("Invalid profile: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

impl From<serde_json::Error> for ProfileError {
    fn from(value: serde_json::Error) -> Self {
        ProfileError::Storage(StorageError::Serialization(value))
    }
}

/// Loads and saves the single profile slot
pub struct ProfileStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> ProfileStore<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, PROFILE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored profile, or `None` on first start
    pub fn load(&self) -> Result<Option<Profile>, ProfileError> {
        match self.store.get(&self.key)? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Validate and overwrite the slot
    pub fn save(&mut self, profile: &Profile) -> Result<(), ProfileError> {
        profile.validate()?;
        self.store.set(&self.key, serde_json::to_string(profile)?)?;
        tracing::info!("Saved profile for {}", profile.name);
        Ok(())
    }

    /// Forget the stored profile (logout)
    pub fn clear(&mut self) -> Result<(), ProfileError> {
        self.store.remove(&self.key)?;
        tracing::info!("Cleared stored profile");
        Ok(())
    }

    pub fn into_inner(self) -> S {
        self.store
    }
}
