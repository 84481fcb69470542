//! Unified error types for the Vellum library.
//!
//! This module provides a unified error type covering both codec variants
//! and file I/O, presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
