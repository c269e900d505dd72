//! moodboard-export: Pure moodboard document serializer (sans-IO)
//!
//! Converts a board snapshot into the downloadable JSON document and
//! reads such documents back for verification.

pub mod json;

pub use json::{BoardDocument, ExportError, FILENAME, MIME_TYPE, parse_document, to_json};
