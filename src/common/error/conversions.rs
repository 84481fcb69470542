//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert parser-level
//! error types to the unified Error type.

use super::types::Error;

// Parser errors from a string source carry no I/O failures, so every
// quick-xml error here means the document itself is not well-formed.
impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::MalformedDocument(err.to_string())
    }
}

// Covers syntactically broken attributes as well as duplicates: quick-xml's
// attribute iterator rejects a repeated attribute name on one element, and
// that choice is surfaced unchanged (see DESIGN.md).
impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::MalformedDocument(err.to_string())
    }
}
