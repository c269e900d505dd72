//! Shared types for moodboard palette extraction and board state.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// An exact sRGB color sampled from an image.
///
/// Displays and serializes as a lowercase `#rrggbb` hex string. Two
/// colors are equal only when all three channels match exactly; no
/// binning or perceptual merging is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Create a new color from its channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Format as a lowercase `#rrggbb` string.
    #[must_use]
    pub fn to_hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Error returned when a string is not a `#rgb` or `#rrggbb` color.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid hex color: {0:?}")]
pub struct ColorParseError(pub String);

impl FromStr for Color {
    type Err = ColorParseError;

    /// Parse `#rrggbb` or the short `#rgb` form. Surrounding whitespace
    /// is ignored and hex digits are case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let invalid = || ColorParseError(s.to_string());
        let hex = trimmed.strip_prefix('#').ok_or_else(invalid)?;
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (slot, ch) in rgb.iter_mut().zip(hex.chars()) {
                    let n = ch.to_digit(16).ok_or_else(invalid)?;
                    #[expect(clippy::cast_possible_truncation)]
                    {
                        *slot = (n * 17) as u8;
                    }
                }
                Ok(Self::new(rgb[0], rgb[1], rgb[2]))
            }
            6 => {
                let channel = |range: std::ops::Range<usize>| {
                    u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
                };
                Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
            }
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// An opaque, session-scoped handle to uploaded image data.
///
/// In the browser this is a `blob:` object URL. It is only meaningful
/// for the lifetime of the page that created it, so an exported
/// moodboard cannot be reloaded with its images in a later session.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImageRef(String);

impl ImageRef {
    /// Wrap a handle string.
    #[must_use]
    pub fn new(handle: impl Into<String>) -> Self {
        Self(handle.into())
    }

    /// The handle as a string (e.g. for an `<img src>`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Configuration for palette extraction and the board palette cap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteConfig {
    /// Examine every `sample_stride`-th pixel of the decoded image.
    pub sample_stride: usize,

    /// Number of most frequent colors taken from a single image.
    pub colors_per_image: usize,

    /// Maximum number of colors kept on the board.
    pub max_colors: usize,

    /// Upper bound, in milliseconds, on reading one uploaded file.
    ///
    /// Only the browser layer waits on file reads; the pure extractor
    /// ignores this value.
    pub read_timeout_ms: u32,
}

impl PaletteConfig {
    /// Default pixel sampling stride.
    pub const DEFAULT_SAMPLE_STRIDE: usize = 4;
    /// Default number of colors taken per image.
    pub const DEFAULT_COLORS_PER_IMAGE: usize = 4;
    /// Default board palette cap.
    pub const DEFAULT_MAX_COLORS: usize = 8;
    /// Default file read timeout.
    pub const DEFAULT_READ_TIMEOUT_MS: u32 = 10_000;

    /// Check that every count and bound is non-zero.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::InvalidConfig`] naming the first zero field.
    pub fn validate(&self) -> Result<(), PaletteError> {
        let checks = [
            ("sample_stride", self.sample_stride == 0),
            ("colors_per_image", self.colors_per_image == 0),
            ("max_colors", self.max_colors == 0),
            ("read_timeout_ms", self.read_timeout_ms == 0),
        ];
        match checks.iter().find(|(_, is_zero)| *is_zero) {
            Some((name, _)) => Err(PaletteError::InvalidConfig(format!(
                "{name} must be at least 1"
            ))),
            None => Ok(()),
        }
    }

    /// This config if it passes [`validate`](Self::validate), otherwise
    /// the defaults together with the rejection.
    #[must_use]
    pub fn or_default(self) -> (Self, Option<PaletteError>) {
        match self.validate() {
            Ok(()) => (self, None),
            Err(e) => (Self::default(), Some(e)),
        }
    }
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            sample_stride: Self::DEFAULT_SAMPLE_STRIDE,
            colors_per_image: Self::DEFAULT_COLORS_PER_IMAGE,
            max_colors: Self::DEFAULT_MAX_COLORS,
            read_timeout_ms: Self::DEFAULT_READ_TIMEOUT_MS,
        }
    }
}

/// Errors that can occur while extracting a palette.
#[derive(Debug, thiserror::Error)]
pub enum PaletteError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// Palette configuration is invalid.
    #[error("invalid palette configuration: {0}")]
    InvalidConfig(String),
}
