//! Generator-specific data types

use std::fmt;
use std::time::Duration;

use shared::{DecadeContext, RequestId, StructuredContent};

/// Failure reported by a [`crate::traits::TextBackend`] before classification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendFailure {
    RateLimited { message: String },
    Failed { message: String },
}

impl fmt::Display for BackendFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendFailure::RateLimited { message } => write!(f, "rate limited: {message}"),
            BackendFailure::Failed { message } => write!(f, "{message}"),
        }
    }
}

/// What the caller asked for
#[derive(Debug, Clone, PartialEq)]
pub enum RequestKind {
    FreeformChat {
        decade: u16,
        question: String,
        context: String,
    },
    StructuredYearContent {
        year: u16,
    },
}

/// One inbound generation call; built once, consumed by the generator
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    pub id: RequestId,
    pub kind: RequestKind,
    pub models: Vec<String>,
}

impl GenerationRequest {
    /// Freeform chat request with the decade context already serialized
    pub fn chat(
        context: &DecadeContext,
        question: impl Into<String>,
        decade: u16,
        models: Vec<String>,
    ) -> Result<Self, serde_json::Error> {
        Ok(Self {
            id: RequestId::new(),
            kind: RequestKind::FreeformChat {
                decade,
                question: question.into(),
                context: serde_json::to_string_pretty(context)?,
            },
            models,
        })
    }

    pub fn year_content(year: u16, models: Vec<String>) -> Self {
        Self {
            id: RequestId::new(),
            kind: RequestKind::StructuredYearContent { year },
            models,
        }
    }
}

/// Where a generated output came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Model(String),
    /// Apology text or synthesized content after every model failed
    Fallback,
}

/// Output of a generation, before the source is stripped for callers
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedOutput {
    Text(String),
    Content(StructuredContent),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    pub output: GeneratedOutput,
    pub source: ContentSource,
}

impl Generation {
    pub fn is_fallback(&self) -> bool {
        self.source == ContentSource::Fallback
    }
}

/// Why one model attempt was abandoned
#[derive(Debug, Clone, PartialEq)]
pub enum AttemptFailure {
    RateLimited,
    Timeout,
    Other(String),
    ValidationFailed { score: u8, errors: Vec<String> },
}

impl fmt::Display for AttemptFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptFailure::RateLimited => write!(f, "rate limit retries exhausted"),
            AttemptFailure::Timeout => write!(f, "timed out"),
            AttemptFailure::Other(message) => write!(f, "{message}"),
            AttemptFailure::ValidationFailed { score, errors } => {
                write!(f, "specificity score {score} below threshold ({} notes)", errors.len())
            }
        }
    }
}

/// Record of a failed model in the chain, kept for logging and tests
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFailure {
    pub model: String,
    pub failure: AttemptFailure,
    pub elapsed: Duration,
}
