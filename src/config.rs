use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::models::SwipeThresholds;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub engine: EngineSettings,
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub storage: StorageSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
    #[serde(default)]
    pub demo: DemoSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    #[serde(default = "default_commit_threshold")]
    pub commit_threshold_px: f64,
    #[serde(default = "default_intent_threshold")]
    pub intent_threshold_px: f64,
    #[serde(default = "default_rotation_factor")]
    pub rotation_per_px: f64,
    #[serde(default = "default_window_size")]
    pub window_size: usize,
    #[serde(default = "default_settle_delay")]
    pub settle_delay_ms: u64,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            commit_threshold_px: default_commit_threshold(),
            intent_threshold_px: default_intent_threshold(),
            rotation_per_px: default_rotation_factor(),
            window_size: default_window_size(),
            settle_delay_ms: default_settle_delay(),
        }
    }
}

impl EngineSettings {
    pub fn thresholds(&self) -> SwipeThresholds {
        SwipeThresholds {
            commit_px: self.commit_threshold_px,
            intent_px: self.intent_threshold_px,
            rotation_per_px: self.rotation_per_px,
        }
    }

    pub fn settle_delay(&self) -> Duration {
        Duration::from_millis(self.settle_delay_ms)
    }
}

fn default_commit_threshold() -> f64 { 100.0 }
fn default_intent_threshold() -> f64 { 50.0 }
fn default_rotation_factor() -> f64 { 0.1 }
fn default_window_size() -> usize { 3 }
fn default_settle_delay() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    #[serde(default = "default_match_probability")]
    pub probability: f64,
    #[serde(default = "default_reveal_delay")]
    pub reveal_delay_ms: u64,
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            probability: default_match_probability(),
            reveal_delay_ms: default_reveal_delay(),
        }
    }
}

impl MatchingSettings {
    pub fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}

fn default_match_probability() -> f64 { 0.5 }
fn default_reveal_delay() -> u64 { 400 }

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    #[serde(default = "default_storage_path")]
    pub path: String,
    #[serde(default = "default_profile_key")]
    pub profile_key: String,
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_storage_path(),
            profile_key: default_profile_key(),
        }
    }
}

fn default_storage_path() -> String { "data/local_storage.json".to_string() }
fn default_profile_key() -> String { crate::services::PROFILE_KEY.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "pretty".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct DemoSettings {
    #[serde(default = "default_deck_path")]
    pub deck_path: String,
    #[serde(default = "default_script_path")]
    pub script_path: String,
    /// Use the matching variant (undo, match draw, profile) instead of the plain deck
    #[serde(default)]
    pub matching: bool,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            deck_path: default_deck_path(),
            script_path: default_script_path(),
            matching: false,
        }
    }
}

fn default_deck_path() -> String { "demo/cards.toml".to_string() }
fn default_script_path() -> String { "demo/script.json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SWIPE__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SWIPE__ENGINE__SETTLE_DELAY_MS -> engine.settle_delay_ms
            .add_source(
                Environment::with_prefix("SWIPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SWIPE")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_engine_settings() {
        let engine = EngineSettings::default();
        let thresholds = engine.thresholds();
        assert_eq!(thresholds, SwipeThresholds::default());
        assert_eq!(engine.window_size, 3);
        assert_eq!(engine.settle_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_default_matching() {
        let matching = MatchingSettings::default();
        assert_eq!(matching.probability, 0.5);
        assert_eq!(matching.reveal_delay(), Duration::from_millis(400));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let settings: Settings = toml::from_str(
            r#"
            [engine]
            settle_delay_ms = 0

            [demo]
            matching = true
            "#,
        )
        .unwrap();

        assert_eq!(settings.engine.settle_delay_ms, 0);
        assert_eq!(settings.engine.commit_threshold_px, 100.0);
        assert!(settings.demo.matching);
        assert_eq!(settings.storage.profile_key, "userProfile");
        assert_eq!(settings.logging.level, "info");
    }
}
