//! JSON moodboard document.
//!
//! The exported file is a pretty-printed (2-space indent) UTF-8 JSON
//! object:
//!
//! ```text
//! {
//!   "theme": "coastal minimalism",
//!   "images": ["blob:http://localhost:8080/6f1c..."],
//!   "colors": ["#ff0000", "#102030"],
//!   "fonts": ["Playfair Display", "Roboto", "Open Sans"]
//! }
//! ```
//!
//! `images` holds session-scoped handles. They do not survive a page
//! reload, so a parsed document cannot restore the images themselves.
//!
//! This is a pure function with no I/O; it returns a `String`.

use moodboard_palette::{Color, ImageRef, Moodboard, SUGGESTED_FONTS};
use serde::{Deserialize, Serialize};

/// Default download file name.
pub const FILENAME: &str = "moodboard.json";

/// MIME type of the exported document.
pub const MIME_TYPE: &str = "application/json";

/// Errors that can occur when writing or reading a moodboard document.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    /// The board could not be serialized.
    #[error("failed to serialize moodboard: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The text is not a well-formed moodboard document.
    #[error("failed to parse moodboard document: {0}")]
    Parse(#[source] serde_json::Error),

    /// The document holds more colors than a board can.
    #[error("document has {count} colors, at most {max} allowed")]
    TooManyColors {
        /// Number of colors in the document.
        count: usize,
        /// The board palette cap.
        max: usize,
    },

    /// The document's font list differs from the suggested fonts.
    #[error("unexpected font list: {0:?}")]
    UnexpectedFonts(Vec<String>),
}

/// The on-disk shape of an exported moodboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardDocument {
    /// Theme text.
    pub theme: String,
    /// Session-scoped image handles.
    pub images: Vec<ImageRef>,
    /// Board palette as `#rrggbb` strings.
    pub colors: Vec<Color>,
    /// Suggested fonts.
    pub fonts: Vec<String>,
}

impl From<&Moodboard> for BoardDocument {
    fn from(board: &Moodboard) -> Self {
        Self {
            theme: board.theme().to_string(),
            images: board.images().to_vec(),
            colors: board.colors().to_vec(),
            fonts: board.fonts().iter().map(|f| (*f).to_string()).collect(),
        }
    }
}

/// Serialize a board as a pretty-printed JSON document.
///
/// # Errors
///
/// Returns [`ExportError::Serialize`] if serialization fails.
pub fn to_json(board: &Moodboard) -> Result<String, ExportError> {
    serde_json::to_string_pretty(board).map_err(ExportError::Serialize)
}

/// Parse an exported document and check it against the board
/// invariants.
///
/// `max_colors` is the palette cap the board was built with, normally
/// [`PaletteConfig::max_colors`](moodboard_palette::PaletteConfig::max_colors).
///
/// # Errors
///
/// Returns [`ExportError::Parse`] for malformed JSON or hex colors,
/// [`ExportError::TooManyColors`] when the palette exceeds `max_colors`,
/// and [`ExportError::UnexpectedFonts`] when the font list differs from
/// [`SUGGESTED_FONTS`].
pub fn parse_document(json: &str, max_colors: usize) -> Result<BoardDocument, ExportError> {
    let document: BoardDocument = serde_json::from_str(json).map_err(ExportError::Parse)?;

    if document.colors.len() > max_colors {
        return Err(ExportError::TooManyColors {
            count: document.colors.len(),
            max: max_colors,
        });
    }
    if document.fonts != SUGGESTED_FONTS {
        return Err(ExportError::UnexpectedFonts(document.fonts));
    }

    Ok(document)
}
