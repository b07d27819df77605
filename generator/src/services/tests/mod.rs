//! Tests for generator services
//!
//! Backends are mocked with mockall or replaced by small hand-written
//! doubles where a call must hang.


use async_trait::async_trait;

use crate::traits::TextBackend;
use crate::types::BackendFailure;

/// Backend whose calls never complete
pub struct HangingBackend;

#[async_trait]
impl TextBackend for HangingBackend {
    async fn generate_content(
        &self,
        _model: &str,
        _prompt: &str,
    ) -> Result<String, BackendFailure> {
        std::future::pending().await
    }
}
