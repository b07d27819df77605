//! Explicit generator configuration
//!
//! Everything the generator reads is carried in these structs and
//! passed in at construction. Nothing is read from ambient state after
//! startup.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{GeneratorError, GeneratorResult};

pub const DEFAULT_MODELS: [&str; 2] = ["gemini-1.5-flash", "gemini-1.5-pro"];
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Generic phrases that mark decade-level rather than year-level content
pub const DEFAULT_BANNED_PHRASES: [&str; 5] = [
    "throughout the decade",
    "during this era",
    "during this period",
    "in those days",
    "the decade saw",
];

/// Scoring knobs for the content validator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorSettings {
    pub banned_phrases: Vec<String>,
    /// Content scoring below this must be regenerated
    pub regeneration_threshold: u8,
    pub penalty_per_note: u32,
    pub bonus_per_year_mention: u32,
    pub max_year_bonus: u32,
    pub min_music_hits: usize,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            banned_phrases: DEFAULT_BANNED_PHRASES.iter().map(|p| p.to_string()).collect(),
            regeneration_threshold: 60,
            penalty_per_note: 10,
            bonus_per_year_mention: 2,
            max_year_bonus: 20,
            min_music_hits: 2,
        }
    }
}

/// Orchestrator configuration, shared read-only across requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    /// Model candidates in priority order
    pub models: Vec<String>,
    pub chat_timeout: Duration,
    pub year_timeout: Duration,
    pub max_retries: u32,
    pub backoff_base: Duration,
    pub context_char_limit: usize,
    pub validator: ValidatorSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            models: DEFAULT_MODELS.iter().map(|m| m.to_string()).collect(),
            chat_timeout: Duration::from_secs(30),
            year_timeout: Duration::from_secs(45),
            max_retries: 3,
            backoff_base: Duration::from_millis(1000),
            context_char_limit: 2000,
            validator: ValidatorSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from process environment variables
    ///
    /// Environment variables:
    /// - GENERATOR_MODELS: comma-separated model ids in priority order
    /// - GENERATOR_CHAT_TIMEOUT_SECS / GENERATOR_YEAR_TIMEOUT_SECS
    /// - GENERATOR_MAX_RETRIES
    pub fn from_env() -> GeneratorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> GeneratorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(models) = lookup("GENERATOR_MODELS") {
            config.models = parse_model_list(&models);
        }
        if let Some(secs) = lookup("GENERATOR_CHAT_TIMEOUT_SECS") {
            let secs = parse_number("GENERATOR_CHAT_TIMEOUT_SECS", &secs)?;
            config.chat_timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = lookup("GENERATOR_YEAR_TIMEOUT_SECS") {
            let secs = parse_number("GENERATOR_YEAR_TIMEOUT_SECS", &secs)?;
            config.year_timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = lookup("GENERATOR_MAX_RETRIES") {
            config.max_retries = parse_number("GENERATOR_MAX_RETRIES", &retries)?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn with_models(mut self, models: Vec<String>) -> Self {
        self.models = models;
        self
    }

    /// Reject configurations the generator cannot run with
    pub fn validate(&self) -> GeneratorResult<()> {
        if self.models.is_empty() {
            return Err(GeneratorError::config("model candidate list is empty"));
        }
        if self.chat_timeout.is_zero() || self.year_timeout.is_zero() {
            return Err(GeneratorError::config("provider timeouts must be non-zero"));
        }
        Ok(())
    }
}

/// Connection settings for the Gemini REST backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeminiSettings {
    pub api_key: String,
    pub base_url: String,
}

impl GeminiSettings {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read GEMINI_API_KEY (required) and GEMINI_BASE_URL (optional)
    pub fn from_env() -> GeneratorResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> GeneratorResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("GEMINI_API_KEY")
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
            .ok_or_else(|| GeneratorError::config("GEMINI_API_KEY must be set"))?;

        let settings = Self::new(api_key);
        Ok(match lookup("GEMINI_BASE_URL") {
            Some(url) if !url.trim().is_empty() => settings.with_base_url(url.trim()),
            _ => settings,
        })
    }
}

/// Split "model-a, model-b" into an ordered list, dropping blanks
pub fn parse_model_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|model| !model.is_empty())
        .map(str::to_string)
        .collect()
}

fn parse_number<T: std::str::FromStr>(field: &str, value: &str) -> GeneratorResult<T>
where
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| {
        GeneratorError::config(format!("{field} has invalid value '{value}': {e}"))
    })
}
