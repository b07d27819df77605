//! Test fixtures and utilities

pub mod backends;
pub mod content;

#[allow(unused_imports)]
pub use backends::*;
#[allow(unused_imports)]
pub use content::*;
