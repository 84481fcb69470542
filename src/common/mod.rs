//! Common types and utilities shared across the model and codec variants.

// Submodule declarations
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
