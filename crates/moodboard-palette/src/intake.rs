//! Upload filtering and batch ingestion.
//!
//! Files are accepted only when their MIME type starts with `image/`.
//! When the browser reports no type, one is guessed from the file
//! extension. Accepted files whose format has no decoder in this build
//! (SVG, AVIF, HEIC, ...) are skipped as [`SkipReason::UnsupportedFormat`]
//! before any decoding is attempted.
//!
//! [`ingest_one`] takes a single upload all the way onto the board.
//! [`add_images`] runs it over an in-memory batch; the browser layer
//! runs it once per file after reading the bytes. A file that fails at
//! any step is recorded as [`Skipped`] and the batch carries on.

use std::fmt;

use image::ImageFormat;

use crate::board::Moodboard;
use crate::extract::{Extraction, extract_palette};
use crate::types::{ImageRef, PaletteConfig, PaletteError};

/// Why a file was left out of the board.
#[derive(Debug, thiserror::Error)]
pub enum SkipReason {
    /// The file is not an image.
    #[error("unsupported file type: {mime}")]
    UnsupportedType {
        /// The declared or guessed MIME type (empty when unknown).
        mime: String,
    },

    /// The file is an image, but in a format that cannot be decoded.
    #[error("unsupported image format: {mime}")]
    UnsupportedFormat {
        /// The resolved MIME type.
        mime: String,
    },

    /// The file bytes could not be read.
    #[error("failed to read file: {0}")]
    Unreadable(String),

    /// Reading the file did not finish in time.
    #[error("timed out after {after_ms} ms")]
    TimedOut {
        /// The bound that was exceeded.
        after_ms: u32,
    },

    /// The bytes could not be decoded as an image.
    #[error(transparent)]
    Undecodable(#[from] PaletteError),

    /// No session handle could be created for the image.
    #[error("failed to create image handle: {0}")]
    Handle(String),
}

/// A file that was left out of the board, with the reason.
#[derive(Debug)]
pub struct Skipped {
    /// File name as reported by the browser.
    pub name: String,
    /// Why the file was skipped.
    pub reason: SkipReason,
}

impl fmt::Display for Skipped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.reason)
    }
}

/// Outcome of ingesting a batch of files.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Names of files added to the board, in processing order.
    pub added: Vec<String>,
    /// Files that were left out.
    pub skipped: Vec<Skipped>,
}

impl BatchReport {
    /// Record an added file.
    pub fn add(&mut self, name: impl Into<String>) {
        self.added.push(name.into());
    }

    /// Record a skipped file.
    pub fn skip(&mut self, name: impl Into<String>, reason: SkipReason) {
        self.skipped.push(Skipped {
            name: name.into(),
            reason,
        });
    }

    /// Append another report's results after this one's.
    pub fn absorb(&mut self, other: Self) {
        self.added.extend(other.added);
        self.skipped.extend(other.skipped);
    }
}

/// An uploaded file held in memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    /// File name.
    pub name: String,
    /// MIME type reported by the source, if any.
    pub mime: Option<String>,
    /// Raw file contents.
    pub bytes: Vec<u8>,
}

/// A single upload that made it onto the board.
#[derive(Debug, Clone)]
pub struct Ingested {
    /// The board with the image appended.
    pub board: Moodboard,
    /// What extraction found in the image.
    pub extraction: Extraction,
}

/// Whether a MIME type names an image.
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Resolve the MIME type of a file.
///
/// A non-empty `declared` type wins. Otherwise the type is guessed from
/// the extension of `name`; `None` when neither is available.
#[must_use]
pub fn resolve_mime(declared: Option<&str>, name: &str) -> Option<String> {
    match declared.map(str::trim) {
        Some(mime) if !mime.is_empty() => Some(mime.to_string()),
        _ => ImageFormat::from_path(name)
            .ok()
            .map(|format| format.to_mime_type().to_string()),
    }
}

/// Decide whether a file should be ingested.
///
/// # Errors
///
/// Returns [`SkipReason::UnsupportedType`] unless the resolved MIME
/// type is `image/*`.
pub fn accept_upload(name: &str, declared: Option<&str>) -> Result<String, SkipReason> {
    match resolve_mime(declared, name) {
        Some(mime) if is_image_mime(&mime) => Ok(mime),
        other => Err(SkipReason::UnsupportedType {
            mime: other.unwrap_or_default(),
        }),
    }
}

/// The decoder that would handle an image, if this build has one.
///
/// The MIME type is consulted first; when it names no known format the
/// leading bytes are sniffed instead.
#[must_use]
pub fn decodable_format(mime: &str, bytes: &[u8]) -> Option<ImageFormat> {
    ImageFormat::from_mime_type(mime)
        .or_else(|| image::guess_format(bytes).ok())
        .filter(ImageFormat::reading_enabled)
}

/// Take one upload onto the board.
///
/// Checks the type and format, extracts the palette, asks `make_ref`
/// for a session handle (given the upload and its resolved MIME type)
/// and returns the board with the image appended via
/// [`Moodboard::with_image`]. `board` itself is never modified.
///
/// # Errors
///
/// Returns the [`SkipReason`] for the first step that fails;
/// `make_ref` is not called unless extraction succeeded.
pub fn ingest_one<F>(
    board: &Moodboard,
    upload: &Upload,
    config: &PaletteConfig,
    make_ref: F,
) -> Result<Ingested, SkipReason>
where
    F: FnOnce(&Upload, &str) -> Result<ImageRef, String>,
{
    let mime = accept_upload(&upload.name, upload.mime.as_deref())?;
    if decodable_format(&mime, &upload.bytes).is_none() {
        return Err(SkipReason::UnsupportedFormat { mime });
    }

    let extraction = extract_palette(&upload.bytes, config)?;
    let image = make_ref(upload, &mime).map_err(SkipReason::Handle)?;

    Ok(Ingested {
        board: board.with_image(image, &extraction.colors, config.max_colors),
        extraction,
    })
}

/// Ingest a batch of in-memory uploads, one at a time, in order.
///
/// Each upload goes through [`ingest_one`] against the board produced
/// by the previous one. Rejected and failed files leave the board
/// unchanged.
pub fn add_images<I, F>(
    board: &Moodboard,
    uploads: I,
    config: &PaletteConfig,
    mut make_ref: F,
) -> (Moodboard, BatchReport)
where
    I: IntoIterator<Item = Upload>,
    F: FnMut(&Upload, &str) -> Result<ImageRef, String>,
{
    let mut board = board.clone();
    let mut report = BatchReport::default();

    for upload in uploads {
        match ingest_one(&board, &upload, config, &mut make_ref) {
            Ok(ingested) => {
                board = ingested.board;
                report.add(upload.name);
            }
            Err(reason) => report.skip(upload.name, reason),
        }
    }

    (board, report)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::types::Color;

    fn solid_png(rgba: [u8; 4]) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(10, 10, image::Rgba(rgba));
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    fn upload(name: &str, mime: Option<&str>, bytes: Vec<u8>) -> Upload {
        Upload {
            name: name.to_string(),
            mime: mime.map(str::to_string),
            bytes,
        }
    }

    /// Handle factory that names each handle after its file.
    fn by_name(upload: &Upload, _mime: &str) -> Result<ImageRef, String> {
        Ok(ImageRef::new(format!("blob:{}", upload.name)))
    }

    #[test]
    fn is_image_mime_checks_prefix() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("image/svg+xml"));
        assert!(!is_image_mime("text/plain"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn declared_mime_wins_over_extension() {
        assert_eq!(
            resolve_mime(Some("text/plain"), "photo.png").as_deref(),
            Some("text/plain")
        );
    }

    #[test]
    fn mime_guessed_from_extension_when_missing() {
        assert_eq!(resolve_mime(None, "photo.JPG").as_deref(), Some("image/jpeg"));
        assert_eq!(resolve_mime(Some(""), "tile.webp").as_deref(), Some("image/webp"));
        assert_eq!(resolve_mime(None, "notes.txt"), None);
        assert_eq!(resolve_mime(None, "README"), None);
    }

    #[test]
    fn accept_upload_rejects_text_files() {
        let err = accept_upload("notes.txt", Some("text/plain")).unwrap_err();
        assert!(matches!(err, SkipReason::UnsupportedType { ref mime } if mime == "text/plain"));
        assert_eq!(err.to_string(), "unsupported file type: text/plain");
    }

    #[test]
    fn solid_red_upload_sets_board_colors() {
        let (board, report) = add_images(
            &Moodboard::new(),
            [upload("red.png", Some("image/png"), solid_png([255, 0, 0, 255]))],
            &PaletteConfig::default(),
            by_name,
        );
        assert_eq!(board.colors(), &[Color::new(255, 0, 0)]);
        assert_eq!(board.images(), &[ImageRef::new("blob:red.png")]);
        assert_eq!(report.added, vec!["red.png".to_string()]);
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn non_image_files_leave_board_unchanged() {
        let start = Moodboard::new().with_image(ImageRef::new("blob:x"), &[Color::new(1, 1, 1)], 8);
        let mut calls = 0;
        let (board, report) = add_images(
            &start,
            [upload("notes.txt", Some("text/plain"), b"hello".to_vec())],
            &PaletteConfig::default(),
            |u, m| {
                calls += 1;
                by_name(u, m)
            },
        );
        assert_eq!(board, start);
        assert_eq!(calls, 0);
        assert!(report.added.is_empty());
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].name, "notes.txt");
    }

    #[test]
    fn undecodable_image_is_skipped_and_batch_continues() {
        let (board, report) = add_images(
            &Moodboard::new(),
            [
                upload("broken.png", Some("image/png"), vec![0x89, 0x50, 0x00]),
                upload("blue.png", Some("image/png"), solid_png([0, 0, 255, 255])),
            ],
            &PaletteConfig::default(),
            by_name,
        );
        assert_eq!(board.images(), &[ImageRef::new("blob:blue.png")]);
        assert_eq!(board.colors(), &[Color::new(0, 0, 255)]);
        assert_eq!(report.skipped.len(), 1);
        assert!(matches!(
            report.skipped[0].reason,
            SkipReason::Undecodable(PaletteError::ImageDecode(_))
        ));
        assert!(report.skipped[0].to_string().starts_with("broken.png: "));
    }

    #[test]
    fn handle_failure_is_skipped() {
        let (board, report) = add_images(
            &Moodboard::new(),
            [upload("red.png", None, solid_png([255, 0, 0, 255]))],
            &PaletteConfig::default(),
            |_, _| Err("no window".to_string()),
        );
        assert!(board.images().is_empty());
        assert!(board.colors().is_empty());
        assert!(matches!(report.skipped[0].reason, SkipReason::Handle(_)));
    }

    #[test]
    fn palette_never_exceeds_cap_across_many_images() {
        let uploads: Vec<Upload> = (0..12u8)
            .map(|i| {
                let v = i * 20;
                upload(&format!("{i}.png"), Some("image/png"), solid_png([v, v, v, 255]))
            })
            .collect();
        let (board, report) = add_images(
            &Moodboard::new(),
            uploads,
            &PaletteConfig::default(),
            by_name,
        );
        assert_eq!(report.added.len(), 12);
        assert_eq!(board.images().len(), 12);
        assert_eq!(board.colors().len(), 8);
        // First-seen order: images 0..8 supply the palette.
        assert_eq!(board.colors()[0], Color::new(0, 0, 0));
        assert_eq!(board.colors()[7], Color::new(140, 140, 140));
    }

    #[test]
    fn tiff_upload_is_decoded() {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            10,
            10,
            image::Rgb([255, 0, 0]),
        ));
        let mut tiff = std::io::Cursor::new(Vec::new());
        img.write_to(&mut tiff, ImageFormat::Tiff).unwrap();

        let (board, report) = add_images(
            &Moodboard::new(),
            [upload("red.tiff", Some("image/tiff"), tiff.into_inner())],
            &PaletteConfig::default(),
            by_name,
        );
        assert!(report.skipped.is_empty());
        assert_eq!(board.colors(), &[Color::new(255, 0, 0)]);
    }

    #[test]
    fn svg_and_avif_are_unsupported_formats() {
        let svg = br##"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"><rect width="10" height="10" fill="#ff0000"/></svg>"##;
        let mut calls = 0;
        let (board, report) = add_images(
            &Moodboard::new(),
            [
                upload("red.svg", Some("image/svg+xml"), svg.to_vec()),
                upload("photo.avif", Some("image/avif"), vec![0; 32]),
            ],
            &PaletteConfig::default(),
            |u, m| {
                calls += 1;
                by_name(u, m)
            },
        );
        assert_eq!(board, Moodboard::new());
        assert_eq!(calls, 0);
        assert_eq!(
            report.skipped[0].to_string(),
            "red.svg: unsupported image format: image/svg+xml"
        );
        assert!(matches!(
            report.skipped[1].reason,
            SkipReason::UnsupportedFormat { ref mime } if mime == "image/avif"
        ));
    }

    #[test]
    fn decodable_format_sniffs_unknown_mime() {
        let png = solid_png([0, 0, 0, 255]);
        assert_eq!(decodable_format("image/x-custom", &png), Some(ImageFormat::Png));
        assert_eq!(decodable_format("image/png", &[]), Some(ImageFormat::Png));
        assert_eq!(decodable_format("image/svg+xml", b"<svg/>"), None);
    }

    #[test]
    fn ingest_one_returns_board_and_extraction() {
        let start = Moodboard::new().with_theme("dusk");
        let ingested = ingest_one(
            &start,
            &upload("red.png", Some("image/png"), solid_png([255, 0, 0, 255])),
            &PaletteConfig::default(),
            by_name,
        )
        .unwrap();
        assert_eq!(ingested.board.theme(), "dusk");
        assert_eq!(ingested.board.images(), &[ImageRef::new("blob:red.png")]);
        assert_eq!(ingested.extraction.sampled, 25);
        assert!(start.images().is_empty());
    }

    #[test]
    fn ingest_one_reports_empty_bytes() {
        let err = ingest_one(
            &Moodboard::new(),
            &upload("empty.png", Some("image/png"), Vec::new()),
            &PaletteConfig::default(),
            by_name,
        )
        .unwrap_err();
        assert!(matches!(err, SkipReason::Undecodable(PaletteError::EmptyInput)));
    }

    #[test]
    fn absorbed_reports_keep_both_skip_lists() {
        let config = PaletteConfig::default();
        let (board, mut first) = add_images(
            &Moodboard::new(),
            [
                upload("a.png", Some("image/png"), solid_png([1, 1, 1, 255])),
                upload("notes.txt", Some("text/plain"), b"x".to_vec()),
            ],
            &config,
            by_name,
        );
        let (_, second) = add_images(
            &board,
            [upload("broken.png", Some("image/png"), vec![0x89])],
            &config,
            by_name,
        );

        first.absorb(second);
        assert_eq!(first.added, ["a.png"]);
        let names: Vec<&str> = first.skipped.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["notes.txt", "broken.png"]);
    }

    #[test]
    fn colors_len_is_min_of_cap_and_distinct() {
        let (board, _) = add_images(
            &Moodboard::new(),
            [
                upload("a.png", Some("image/png"), solid_png([10, 10, 10, 255])),
                upload("b.png", Some("image/png"), solid_png([10, 10, 10, 255])),
                upload("c.png", Some("image/png"), solid_png([20, 20, 20, 255])),
            ],
            &PaletteConfig::default(),
            by_name,
        );
        assert_eq!(board.colors().len(), 2);
    }
}
