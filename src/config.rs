//! Game and AI opponent configuration.

use crate::games::tictactoe::{Mark, check_board_size};
use crate::llm_client::{LlmConfig, LlmProvider};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "strictly_grid.toml";

/// Settings for a game session and its AI opponent.
///
/// Every field has a default, so an empty or missing file is valid.
#[derive(Debug, Clone, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(default)]
pub struct GameConfig {
    /// LLM provider (anthropic or openai).
    #[getter(skip)]
    llm_provider: LlmProvider,

    /// LLM model name.
    llm_model: String,

    /// Maximum tokens for an AI move response.
    #[getter(skip)]
    llm_max_tokens: u32,

    /// Sampling temperature for AI moves.
    #[getter(skip)]
    llm_temperature: f32,

    /// Seconds to wait for the model before falling back.
    #[getter(skip)]
    request_timeout_secs: u64,

    /// Side length of the board at startup.
    #[getter(skip)]
    board_size: usize,

    /// Marker the human plays.
    #[getter(skip)]
    human_marker: Mark,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            llm_provider: LlmProvider::Anthropic,
            llm_model: "claude-3-7-sonnet-20250219".to_string(),
            llm_max_tokens: 300,
            llm_temperature: 0.2,
            request_timeout_secs: 60,
            board_size: 3,
            human_marker: Mark::X,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        info!(
            provider = %config.llm_provider,
            model = %config.llm_model,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Checks values that the game would otherwise reject later.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_board_size(self.board_size)
            .map_err(|e| ConfigError::new(format!("Invalid board_size: {}", e)))?;
        if !(0.0..=1.0).contains(&self.llm_temperature) {
            return Err(ConfigError::new(format!(
                "llm_temperature must be within 0.0..=1.0, got {}",
                self.llm_temperature
            )));
        }
        if self.llm_max_tokens == 0 {
            return Err(ConfigError::new("llm_max_tokens must be positive".to_string()));
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::new("request_timeout_secs must be positive".to_string()));
        }
        Ok(())
    }

    /// LLM provider.
    pub fn llm_provider(&self) -> LlmProvider {
        self.llm_provider
    }

    /// Maximum tokens for an AI move response.
    pub fn llm_max_tokens(&self) -> u32 {
        self.llm_max_tokens
    }

    /// Sampling temperature for AI moves.
    pub fn llm_temperature(&self) -> f32 {
        self.llm_temperature
    }

    /// Timeout for one model call.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Side length of the board at startup.
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Marker the human plays.
    pub fn human_marker(&self) -> Mark {
        self.human_marker
    }

    /// Creates the LLM connection settings from the environment.
    ///
    /// Requires `ANTHROPIC_API_KEY` or `OPENAI_API_KEY`, depending on the
    /// provider. A missing or blank key is an error that must be resolved
    /// before any AI turn can run.
    #[instrument(skip(self), fields(provider = ?self.llm_provider, model = %self.llm_model))]
    pub fn create_llm_config(&self) -> Result<LlmConfig, ConfigError> {
        debug!("Creating LLM config");
        self.llm_config_from(|var| std::env::var(var).ok())
    }

    /// Resolves the API key through `lookup`, keyed by environment variable name.
    fn llm_config_from(
        &self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<LlmConfig, ConfigError> {
        let var = self.llm_provider.api_key_var();
        let api_key = lookup(var)
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ConfigError::new(format!("{} environment variable not set", var)))?;
        Ok(self.llm_config_with_key(api_key))
    }

    /// Creates the LLM connection settings with an operator-supplied key.
    pub fn llm_config_with_key(&self, api_key: String) -> LlmConfig {
        LlmConfig::new(self.llm_provider, api_key, self.llm_model.clone())
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
