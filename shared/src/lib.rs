//! Shared types for the era content generator
//!
//! Contains the data model exchanged between the generator and its
//! callers (structured year content, decade context, provider outcomes,
//! validation reports), the shared error type and tracing helpers.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
