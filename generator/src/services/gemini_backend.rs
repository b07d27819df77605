//! Gemini REST implementation of the text backend

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::config::GeminiSettings;
use crate::traits::TextBackend;
use crate::types::BackendFailure;

/// Status string Gemini reports when a quota is exhausted
const RESOURCE_EXHAUSTED: &str = "RESOURCE_EXHAUSTED";

/// Header carrying the API key; keeps the key out of request URLs
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Calls `models/{model}:generateContent` on the Gemini API
pub struct GeminiBackend {
    client: reqwest::Client,
    settings: GeminiSettings,
}

impl GeminiBackend {
    pub fn new(settings: GeminiSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.base_url.trim_end_matches('/'),
            model
        )
    }
}

#[async_trait]
impl TextBackend for GeminiBackend {
    async fn generate_content(&self, model: &str, prompt: &str) -> Result<String, BackendFailure> {
        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(self.endpoint(model))
            .header("Content-Type", "application/json")
            .header(API_KEY_HEADER, &self.settings.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| BackendFailure::Failed {
                message: format!("Network error: {}", e.without_url()),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(classify_error_status(status, body));
        }

        let response_json: serde_json::Value =
            response.json().await.map_err(|e| BackendFailure::Failed {
                message: format!("Failed to parse response: {}", e.without_url()),
            })?;

        response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or_else(|| BackendFailure::Failed {
                message: "No content in response".to_string(),
            })
    }
}

fn classify_error_status(status: StatusCode, body: String) -> BackendFailure {
    if status == StatusCode::TOO_MANY_REQUESTS || body.contains(RESOURCE_EXHAUSTED) {
        BackendFailure::RateLimited {
            message: format!("{status}: {body}"),
        }
    } else {
        BackendFailure::Failed {
            message: format!("Server error {status}: {body}"),
        }
    }
}
