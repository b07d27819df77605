//! Ordered model fallback with per-model retries

use std::time::Duration;

use shared::logging::log_error;
use shared::{request_info, request_warn, ProviderOutcome, RequestId};

use crate::core::RetryPolicy;
use crate::error::{GeneratorError, GeneratorResult};
use crate::services::gateway::ProviderGateway;
use crate::traits::TextBackend;
use crate::types::{AttemptFailure, ModelFailure};

/// Result of running the chain over every candidate model
#[derive(Debug, Clone, PartialEq)]
pub enum ChainOutcome<T> {
    /// A model produced an accepted value; later models were never called
    Produced {
        value: T,
        model: String,
        failures: Vec<ModelFailure>,
    },
    /// Every model failed, in candidate order
    Exhausted { failures: Vec<ModelFailure> },
}

impl<T> ChainOutcome<T> {
    pub fn failures(&self) -> &[ModelFailure] {
        match self {
            ChainOutcome::Produced { failures, .. } | ChainOutcome::Exhausted { failures } => {
                failures
            }
        }
    }
}

/// Tries models in priority order until one yields an accepted value
pub struct ModelChain<B: TextBackend> {
    gateway: ProviderGateway<B>,
    retry: RetryPolicy,
}

impl<B: TextBackend> ModelChain<B> {
    pub fn new(gateway: ProviderGateway<B>, retry: RetryPolicy) -> Self {
        Self { gateway, retry }
    }

    /// Run `prompt` against each model in `models` until `accept` takes a reply.
    ///
    /// `accept` turns raw model text into the caller's value or rejects it;
    /// a rejection moves on to the next model like any other failure.
    pub async fn run<T, F>(
        &self,
        request_id: RequestId,
        models: &[String],
        prompt: &str,
        timeout: Duration,
        mut accept: F,
    ) -> GeneratorResult<ChainOutcome<T>>
    where
        F: FnMut(&str, String) -> Result<T, AttemptFailure>,
    {
        if models.is_empty() {
            return Err(GeneratorError::config("no model candidates configured"));
        }

        let mut failures = Vec::new();

        for (position, model) in models.iter().enumerate() {
            request_info!(
                request_id,
                model = %model,
                "Attempting model {}/{}",
                position + 1,
                models.len()
            );
            let started = tokio::time::Instant::now();

            let outcome = self
                .retry
                .call_with_retry(request_id, model, || {
                    self.gateway.invoke(request_id, model, prompt, timeout)
                })
                .await;

            let failure = match outcome {
                ProviderOutcome::Success(text) => match accept(model, text) {
                    Ok(value) => {
                        request_info!(request_id, model = %model, "✅ Generated response");
                        return Ok(ChainOutcome::Produced {
                            value,
                            model: model.clone(),
                            failures,
                        });
                    }
                    Err(rejection) => rejection,
                },
                ProviderOutcome::RateLimited => AttemptFailure::RateLimited,
                ProviderOutcome::Timeout => AttemptFailure::Timeout,
                ProviderOutcome::OtherFailure(message) => AttemptFailure::Other(message),
            };

            request_warn!(request_id, model = %model, "❌ Model failed: {}", failure);
            failures.push(ModelFailure {
                model: model.clone(),
                failure,
                elapsed: started.elapsed(),
            });

            if position + 1 < models.len() {
                request_info!(request_id, "➡️ Falling back to next available model");
            }
        }

        if let Some(last) = failures.last() {
            log_error(&request_id, &format!("All {} models", models.len()), &last.failure);
        }
        Ok(ChainOutcome::Exhausted { failures })
    }
}
