//! Immutable moodboard state.
//!
//! A [`Moodboard`] is a snapshot. Every update returns a new snapshot
//! and leaves the original untouched, so the UI can hold the current
//! board in a single signal and re-render whenever it is replaced.

use serde::Serialize;

use crate::types::{Color, ImageRef};

/// Font suggestions offered for every board.
pub const SUGGESTED_FONTS: [&str; 3] = ["Playfair Display", "Roboto", "Open Sans"];

/// A moodboard: theme text, uploaded images, derived palette, fonts.
///
/// Invariants:
/// - `colors` holds no duplicates and never exceeds the cap passed to
///   [`with_image`](Self::with_image).
/// - `fonts` is always [`SUGGESTED_FONTS`].
/// - `images` only grows.
///
/// Serializes with fields in the order `theme`, `images`, `colors`,
/// `fonts`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Moodboard {
    theme: String,
    images: Vec<ImageRef>,
    colors: Vec<Color>,
    fonts: [&'static str; 3],
}

impl Moodboard {
    /// An empty board with no theme, images or colors.
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: String::new(),
            images: Vec::new(),
            colors: Vec::new(),
            fonts: SUGGESTED_FONTS,
        }
    }

    /// Free-text theme or keywords.
    #[must_use]
    pub fn theme(&self) -> &str {
        &self.theme
    }

    /// Uploaded image handles, in upload order.
    #[must_use]
    pub fn images(&self) -> &[ImageRef] {
        &self.images
    }

    /// Board palette, in first-seen order.
    #[must_use]
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Suggested fonts.
    #[must_use]
    pub const fn fonts(&self) -> &[&'static str; 3] {
        &self.fonts
    }

    /// Replace the theme. No validation is applied.
    #[must_use]
    pub fn with_theme(&self, theme: impl Into<String>) -> Self {
        Self {
            theme: theme.into(),
            ..self.clone()
        }
    }

    /// Append an image and merge its palette into the board colors.
    ///
    /// New colors are appended in the order given, skipping ones already
    /// present, until the board holds `max_colors`. Once the cap is
    /// reached further colors are dropped even if they are more frequent
    /// in later images.
    #[must_use]
    pub fn with_image(&self, image: ImageRef, palette: &[Color], max_colors: usize) -> Self {
        let mut next = self.clone();
        next.images.push(image);
        next.colors = merge_colors(&self.colors, palette, max_colors);
        next
    }
}

impl Default for Moodboard {
    fn default() -> Self {
        Self::new()
    }
}

/// Union `incoming` into `existing`, preserving first-seen order and
/// truncating to `cap`.
#[must_use]
pub fn merge_colors(existing: &[Color], incoming: &[Color], cap: usize) -> Vec<Color> {
    let mut merged: Vec<Color> = Vec::with_capacity(cap.min(existing.len() + incoming.len()));
    for &color in existing.iter().chain(incoming) {
        if merged.len() >= cap {
            break;
        }
        if !merged.contains(&color) {
            merged.push(color);
        }
    }
    merged
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn gray(v: u8) -> Color {
        Color::new(v, v, v)
    }

    #[test]
    fn new_board_is_empty_with_suggested_fonts() {
        let board = Moodboard::new();
        assert_eq!(board.theme(), "");
        assert!(board.images().is_empty());
        assert!(board.colors().is_empty());
        assert_eq!(board.fonts(), &["Playfair Display", "Roboto", "Open Sans"]);
        assert_eq!(board, Moodboard::default());
    }

    #[test]
    fn with_theme_replaces_text_and_keeps_original() {
        let board = Moodboard::new();
        let themed = board.with_theme("coastal minimalism");
        assert_eq!(themed.theme(), "coastal minimalism");
        assert_eq!(board.theme(), "");
    }

    #[test]
    fn setting_same_theme_twice_is_idempotent() {
        let once = Moodboard::new().with_theme("brutalist");
        let twice = once.with_theme("brutalist");
        assert_eq!(once, twice);
    }

    #[test]
    fn with_image_appends_handle_and_colors() {
        let board = Moodboard::new().with_image(
            ImageRef::new("blob:a"),
            &[Color::new(255, 0, 0)],
            8,
        );
        assert_eq!(board.images(), &[ImageRef::new("blob:a")]);
        assert_eq!(board.colors(), &[Color::new(255, 0, 0)]);
    }

    #[test]
    fn duplicate_colors_are_removed() {
        let board = Moodboard::new()
            .with_image(ImageRef::new("blob:a"), &[gray(1), gray(2)], 8)
            .with_image(ImageRef::new("blob:b"), &[gray(2), gray(3)], 8);
        assert_eq!(board.colors(), &[gray(1), gray(2), gray(3)]);
        assert_eq!(board.images().len(), 2);
    }

    #[test]
    fn colors_capped_in_first_seen_order() {
        let board = Moodboard::new()
            .with_image(ImageRef::new("blob:a"), &[gray(1), gray(2), gray(3), gray(4)], 8)
            .with_image(ImageRef::new("blob:b"), &[gray(5), gray(6), gray(7), gray(8)], 8)
            .with_image(ImageRef::new("blob:c"), &[gray(9), gray(10)], 8);
        assert_eq!(board.colors().len(), 8);
        assert_eq!(board.colors()[7], gray(8));
        assert!(!board.colors().contains(&gray(9)));
        // Images still grow after the palette is full.
        assert_eq!(board.images().len(), 3);
    }

    #[test]
    fn merge_colors_respects_cap_on_existing() {
        let merged = merge_colors(&[gray(1), gray(2), gray(3)], &[gray(4)], 2);
        assert_eq!(merged, vec![gray(1), gray(2)]);
    }

    #[test]
    fn unbounded_cap_keeps_every_distinct_color() {
        let board = Moodboard::new().with_image(
            ImageRef::new("blob:a"),
            &[gray(1), gray(2), gray(1)],
            usize::MAX,
        );
        assert_eq!(board.colors(), &[gray(1), gray(2)]);
    }

    #[test]
    fn merge_colors_dedupes_within_incoming() {
        let merged = merge_colors(&[], &[gray(1), gray(1), gray(2)], 8);
        assert_eq!(merged, vec![gray(1), gray(2)]);
    }

    #[test]
    fn serializes_fields_in_document_order() {
        let board = Moodboard::new()
            .with_theme("dusk")
            .with_image(ImageRef::new("blob:a"), &[Color::new(0, 0, 0)], 8);
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r##"{"theme":"dusk","images":["blob:a"],"colors":["#000000"],"fonts":["Playfair Display","Roboto","Open Sans"]}"##
        );
    }
}
