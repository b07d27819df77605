//! Resilient content generation over remote text models
//!
//! Requests run through an ordered chain of models with bounded timeouts,
//! rate-limit backoff and specificity validation. When every model fails the
//! generator still answers: an apology for chat, synthesized content for
//! year requests.

pub mod config;
pub mod core;
pub mod error;
pub mod generator_impl;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use config::{GeminiSettings, GeneratorConfig, ValidatorSettings};
pub use error::{GeneratorError, GeneratorResult};
pub use generator_impl::{Generator, APOLOGY_MESSAGE, MAX_YEAR, MIN_YEAR};
pub use services::*;
pub use traits::*;
pub use types::*;
