//! Core types used throughout the era content generator

pub mod content;
pub mod context;

pub use content::*;
pub use context::*;

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Identifier attached to every log line of one orchestration
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for RequestId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Result of one provider invocation, classified once at the gateway
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProviderOutcome {
    Success(String),
    RateLimited,
    Timeout,
    OtherFailure(String),
}

impl ProviderOutcome {
    /// Only rate limiting is worth retrying against the same model
    pub fn is_retryable(&self) -> bool {
        matches!(self, ProviderOutcome::RateLimited)
    }
}

impl fmt::Display for ProviderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderOutcome::Success(text) => write!(f, "success ({} chars)", text.chars().count()),
            ProviderOutcome::RateLimited => write!(f, "rate limited"),
            ProviderOutcome::Timeout => write!(f, "timed out"),
            ProviderOutcome::OtherFailure(message) => write!(f, "failed: {message}"),
        }
    }
}

/// Specificity assessment of one piece of structured content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationReport {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub specificity_score: u8,
    pub requires_regeneration: bool,
}

/// Decade a year belongs to, e.g. 1975 -> 1970
pub fn decade_of(year: u16) -> u16 {
    year - year % 10
}
