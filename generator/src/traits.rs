//! Generator trait definitions for dependency injection

use async_trait::async_trait;

use shared::DecadeContext;
use crate::types::BackendFailure;

/// Remote generative-text backend
///
/// Implementations report a rate-limit signal through
/// [`BackendFailure::RateLimited`]; every other problem is
/// [`BackendFailure::Failed`]. Calls may hang: the gateway bounds them.
#[mockall::automock]
#[async_trait]
pub trait TextBackend: Send + Sync {
    /// Generate text for `prompt` using the model named `model`
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, BackendFailure>;
}

/// Retrieval context provider keyed by decade
#[mockall::automock]
pub trait ContextSource: Send + Sync {
    /// Context snippets for `decade`; falls back to a minimal context instead of failing
    fn context_for(&self, decade: u16) -> DecadeContext;
}
