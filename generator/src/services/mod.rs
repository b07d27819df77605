//! Generator services implementations

pub mod context_source;
pub mod gateway;
pub mod gemini_backend;
pub mod model_chain;

#[cfg(test)]
pub mod tests;

pub use context_source::*;
pub use gateway::*;
pub use gemini_backend::*;
pub use model_chain::*;
