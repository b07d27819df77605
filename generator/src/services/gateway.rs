//! Single bounded call to one model of the text backend

use std::time::Duration;

use shared::{request_debug, ProviderOutcome, RequestId};

use crate::traits::TextBackend;
use crate::types::BackendFailure;

/// Wraps a [`TextBackend`] and classifies every call into a [`ProviderOutcome`]
pub struct ProviderGateway<B: TextBackend> {
    backend: B,
}

impl<B: TextBackend> ProviderGateway<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Invoke `model` with `prompt`, racing the call against `timeout`.
    ///
    /// When the timer wins the backend future is dropped; the remote side
    /// may keep working on it.
    pub async fn invoke(
        &self,
        request_id: RequestId,
        model: &str,
        prompt: &str,
        timeout: Duration,
    ) -> ProviderOutcome {
        request_debug!(
            request_id,
            model = model,
            "Invoking model ({} prompt chars)",
            prompt.chars().count()
        );

        let call = self.backend.generate_content(model, prompt);
        match tokio::time::timeout(timeout, call).await {
            Ok(Ok(text)) => ProviderOutcome::Success(text),
            Ok(Err(failure)) => classify(failure),
            Err(_) => ProviderOutcome::Timeout,
        }
    }
}

/// Map a backend failure onto the retry taxonomy
pub fn classify(failure: BackendFailure) -> ProviderOutcome {
    match failure {
        BackendFailure::RateLimited { .. } => ProviderOutcome::RateLimited,
        BackendFailure::Failed { message } => ProviderOutcome::OtherFailure(message),
    }
}
