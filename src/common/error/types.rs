//! Unified error types for the Vellum library.
//!
//! This module provides a unified error type covering both codec variants
//! and file I/O, presenting a consistent API to users.
use thiserror::Error;

/// Main error type for Vellum operations.
#[derive(Error, Debug)]
pub enum Error {
    /// File-system failure while reading or writing a drawing document
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not well-formed markup
    #[error("Malformed document: {0}")]
    MalformedDocument(String),

    /// A recognized shape element has a missing or unparseable attribute
    #[error("Invalid attribute: {0}")]
    InvalidAttribute(String),
}

/// Result type for Vellum operations.
pub type Result<T> = std::result::Result<T, Error>;
