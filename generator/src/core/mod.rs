//! Generator core logic: prompts, retries, validation and offline fallback

pub mod fallback;
pub mod prompt;
pub mod retry;
pub mod validator;

pub use fallback::synthesize;
pub use prompt::{truncate_context, PromptBuilder};
pub use retry::RetryPolicy;
pub use validator::ContentValidator;
