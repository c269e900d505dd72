//! Dominant color extraction by raw frequency counting.
//!
//! Decodes image bytes (PNG, JPEG, BMP, WebP, GIF, ICO, TIFF, TGA),
//! visits every `sample_stride`-th pixel, counts exact RGB triples and
//! returns the most frequent ones. Alpha is ignored. There is no quantization, so
//! near-identical shades are counted separately.

use std::time::Duration;

use indexmap::IndexMap;
use web_time::Instant;

use crate::types::{Color, Dimensions, PaletteConfig, PaletteError};

/// Bytes per RGBA8 pixel.
const RGBA_CHANNELS: usize = 4;

/// Result of extracting a palette from one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Most frequent colors, highest count first. Ties keep the order
    /// in which the colors were first encountered during the scan.
    pub colors: Vec<Color>,
    /// Decoded image dimensions.
    pub dimensions: Dimensions,
    /// Number of pixels examined.
    pub sampled: usize,
    /// Number of distinct colors among the sampled pixels.
    pub distinct: usize,
    /// Wall-clock time spent decoding and counting.
    pub duration: Duration,
}

/// Decode `bytes` and extract up to `config.colors_per_image` dominant
/// colors.
///
/// # Errors
///
/// Returns [`PaletteError::InvalidConfig`] if the configuration fails
/// [`PaletteConfig::validate`].
/// Returns [`PaletteError::EmptyInput`] if `bytes` is empty.
/// Returns [`PaletteError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
pub fn extract_palette(bytes: &[u8], config: &PaletteConfig) -> Result<Extraction, PaletteError> {
    config.validate()?;
    if bytes.is_empty() {
        return Err(PaletteError::EmptyInput);
    }

    let start = Instant::now();
    let rgba = image::load_from_memory(bytes)?.to_rgba8();
    let dimensions = Dimensions {
        width: rgba.width(),
        height: rgba.height(),
    };

    let counts = count_colors(rgba.as_raw(), config.sample_stride);
    let sampled = counts.values().sum();
    let distinct = counts.len();
    let colors = top_colors(counts, config.colors_per_image);

    Ok(Extraction {
        colors,
        dimensions,
        sampled,
        distinct,
        duration: start.elapsed(),
    })
}

/// Count exact RGB triples over every `stride`-th pixel of an RGBA8
/// buffer.
///
/// The map preserves first-encounter order. A trailing partial pixel is
/// ignored.
#[must_use]
pub fn count_colors(rgba: &[u8], stride: usize) -> IndexMap<Color, usize> {
    let mut counts = IndexMap::new();
    for px in rgba.chunks_exact(RGBA_CHANNELS).step_by(stride.max(1)) {
        *counts.entry(Color::new(px[0], px[1], px[2])).or_insert(0) += 1;
    }
    counts
}

/// Rank colors by count, highest first, and keep the first `n`.
///
/// The sort is stable, so equal counts stay in map order.
#[must_use]
pub fn top_colors(counts: IndexMap<Color, usize>, n: usize) -> Vec<Color> {
    let mut ranked: Vec<(Color, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.into_iter().take(n).map(|(color, _)| color).collect()
}
