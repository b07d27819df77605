//! Generator implementation with dependency injection

use shared::logging::log_success;
use shared::{
    decade_of, request_info, request_warn, DecadeContext, RequestId, StructuredContent,
};

use crate::config::GeneratorConfig;
use crate::core::{synthesize, ContentValidator, PromptBuilder, RetryPolicy};
use crate::error::{GeneratorError, GeneratorResult};
use crate::services::{ChainOutcome, ModelChain, ProviderGateway};
use crate::traits::{ContextSource, TextBackend};
use crate::types::{
    AttemptFailure, ContentSource, GeneratedOutput, Generation, GenerationRequest, RequestKind,
};

/// Returned to chat callers when every model has failed
pub const APOLOGY_MESSAGE: &str = "I'm sorry, I'm having trouble connecting to my knowledge system right now. Please try again in a few moments.";

/// Earliest year the structured content path accepts
pub const MIN_YEAR: u16 = 1950;
/// Latest year the structured content path accepts
pub const MAX_YEAR: u16 = 2025;

/// Resilient content generator over an injected text backend
pub struct Generator<B: TextBackend> {
    config: GeneratorConfig,
    prompts: PromptBuilder,
    validator: ContentValidator,
    chain: ModelChain<B>,
}

impl<B: TextBackend> Generator<B> {
    /// Create a generator, rejecting configurations it cannot run with
    pub fn new(backend: B, config: GeneratorConfig) -> GeneratorResult<Self> {
        config.validate()?;

        let validator = ContentValidator::new(config.validator.clone())?;
        let chain = ModelChain::new(
            ProviderGateway::new(backend),
            RetryPolicy::from_config(&config),
        );

        Ok(Self {
            prompts: PromptBuilder::from_config(&config),
            validator,
            chain,
            config,
        })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Run one request through the model chain.
    ///
    /// Provider failures never escape: an exhausted chain resolves to the
    /// apology text or synthesized content.
    pub async fn generate(&self, request: &GenerationRequest) -> GeneratorResult<Generation> {
        match &request.kind {
            RequestKind::FreeformChat {
                decade,
                question,
                context,
            } => {
                let prompt = self.prompts.chat_prompt(context, question, *decade);
                let timeout = self.config.chat_timeout;
                let outcome = self
                    .chain
                    .run(request.id, &request.models, &prompt, timeout, |_, text| {
                        if text.trim().is_empty() {
                            Err(AttemptFailure::Other("empty response".to_string()))
                        } else {
                            Ok(text)
                        }
                    })
                    .await?;

                Ok(match outcome {
                    ChainOutcome::Produced { value, model, .. } => Generation {
                        output: GeneratedOutput::Text(value),
                        source: ContentSource::Model(model),
                    },
                    ChainOutcome::Exhausted { .. } => Generation {
                        output: GeneratedOutput::Text(APOLOGY_MESSAGE.to_string()),
                        source: ContentSource::Fallback,
                    },
                })
            }
            RequestKind::StructuredYearContent { year } => {
                let year = *year;
                let prompt = self.prompts.year_content_prompt(year);
                let timeout = self.config.year_timeout;
                let outcome = self
                    .chain
                    .run(request.id, &request.models, &prompt, timeout, |model, text| {
                        self.accept_year_content(request.id, model, &text, year)
                    })
                    .await?;

                Ok(match outcome {
                    ChainOutcome::Produced { value, model, .. } => Generation {
                        output: GeneratedOutput::Content(value),
                        source: ContentSource::Model(model),
                    },
                    ChainOutcome::Exhausted { .. } => {
                        request_warn!(request.id, year, "Synthesizing fallback content");
                        Generation {
                            output: GeneratedOutput::Content(synthesize(year)),
                            source: ContentSource::Fallback,
                        }
                    }
                })
            }
        }
    }

    /// Answer a question in the voice of someone living in `decade`
    pub async fn generate_chat_response(
        &self,
        context: &DecadeContext,
        question: &str,
        decade: u16,
    ) -> GeneratorResult<String> {
        if question.trim().is_empty() {
            return Err(GeneratorError::invalid_request("question must not be empty"));
        }

        let models = self.config.models.clone();
        let request = GenerationRequest::chat(context, question, decade, models)?;
        request_info!(request.id, decade, "Generating chat response");

        let generation = self.generate(&request).await?;
        let from_model = !generation.is_fallback();
        match generation.output {
            GeneratedOutput::Text(text) => {
                if from_model {
                    log_success(&request.id, "Chat response generated");
                }
                Ok(text)
            }
            GeneratedOutput::Content(_) => Err(GeneratorError::invalid_request(
                "chat request produced structured content",
            )),
        }
    }

    /// Structured, validated content for a single year
    pub async fn generate_year_content(&self, year: u16) -> GeneratorResult<StructuredContent> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(GeneratorError::invalid_request(format!(
                "year {year} outside supported range {MIN_YEAR}..={MAX_YEAR}"
            )));
        }

        let request = GenerationRequest::year_content(year, self.config.models.clone());
        request_info!(request.id, year, decade = decade_of(year), "Generating year content");

        let generation = self.generate(&request).await?;
        let from_model = !generation.is_fallback();
        match generation.output {
            GeneratedOutput::Content(content) => {
                if from_model {
                    log_success(&request.id, &format!("Content for {year} generated"));
                }
                Ok(content)
            }
            GeneratedOutput::Text(_) => Err(GeneratorError::invalid_request(
                "year request produced plain text",
            )),
        }
    }

    /// Fetch the decade's context from `source`, then answer the question
    pub async fn answer_question<C: ContextSource + ?Sized>(
        &self,
        source: &C,
        question: &str,
        decade: u16,
    ) -> GeneratorResult<String> {
        let context = source.context_for(decade);
        self.generate_chat_response(&context, question, decade).await
    }

    fn accept_year_content(
        &self,
        request_id: RequestId,
        model: &str,
        text: &str,
        year: u16,
    ) -> Result<StructuredContent, AttemptFailure> {
        let content = StructuredContent::from_model_text(text)
            .map_err(|e| AttemptFailure::Other(format!("unparseable content: {e}")))?;

        let report = self.validator.validate(&content, year);
        if report.requires_regeneration {
            return Err(AttemptFailure::ValidationFailed {
                score: report.specificity_score,
                errors: report.errors,
            });
        }

        if !report.is_valid {
            request_warn!(
                request_id,
                model = model,
                score = report.specificity_score,
                "Accepting content with {} validation notes",
                report.errors.len()
            );
        }
        Ok(content)
    }
}
