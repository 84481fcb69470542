//! PXML: the tag-based markup format of the enhanced drawing editor.
//!
//! A document is a single `<drawing>` root whose children each describe one
//! shape, in render order:
//!
//! ```xml
//! <drawing>
//!   <dot x="12" y="34"/>
//!   <line x1="1" y1="2" x2="3" y2="4"/>
//!   <rect x="5" y="5" width="10" height="20"/>
//! </drawing>
//! ```
//!
//! Encoding and decoding are exact inverses: a round trip preserves shape
//! count, variant sequence, and every field value.

// Submodule declarations
pub mod reader;
pub mod writer;

// Re-exports
pub use reader::{decode, decode_file};
pub use writer::{encode, encode_to_file, with_pxml_extension};
