//! Configuration management for Serstation

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::error::{ConfigError, Result};
use crate::seed::{self, SeedFile};
use crate::state::AppState;
use crate::types::Session;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub profile: ProfileConfig,
    #[serde(default)]
    pub feed: FeedConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Identity used by the mock login
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeedConfig {
    /// Group selected at start-up
    pub default_group: Option<String>,
    /// TOML seed replacing the built-in groups and posts
    pub seed_file: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub tick_rate_ms: u64,
    /// How many ticks a toast stays on screen
    pub toast_ticks: u64,
    pub colors: bool,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            id: "1".to_string(),
            username: "CarLover2024".to_string(),
            avatar: Some("🚗".to_string()),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            toast_ticks: 30,
            colors: true,
        }
    }
}

impl ProfileConfig {
    pub fn session(&self) -> Session {
        Session {
            id: self.id.clone(),
            username: self.username.clone(),
            avatar: self.avatar.clone(),
        }
    }
}

impl FeedConfig {
    pub fn seed_path(&self) -> Option<PathBuf> {
        self.seed_file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file yields the default configuration. Environment
    /// overrides are applied either way.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        let mut config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            Self::default()
        };
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Apply `SERSTATION_TICK_MS` and `NO_COLOR`
    pub fn apply_env_overrides(&mut self) {
        if let Some(tick_rate_ms) = std::env::var("SERSTATION_TICK_MS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            self.ui.tick_rate_ms = tick_rate_ms;
        }

        if std::env::var_os("NO_COLOR").is_some() {
            self.ui.colors = false;
        }
    }

    /// Initial feed state: the configured seed (or the built-in one) with
    /// the default group selected.
    pub fn initial_state(&self, now: DateTime<Utc>) -> Result<AppState> {
        let seed = match self.feed.seed_path() {
            Some(path) => SeedFile::load(&path)?,
            None => seed::builtin(),
        };

        let mut state = seed.into_state(now)?;
        state.selected_group_id = self.feed.default_group.clone();
        Ok(state)
    }
}

/// Resolve the configuration file path following XDG Base Directory spec
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("SERSTATION_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("serstation").join("config.toml"))
}
