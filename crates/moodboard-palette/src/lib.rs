//! moodboard-palette: Palette extraction and moodboard state (sans-IO).
//!
//! Samples dominant colors from image bytes, keeps the moodboard as an
//! immutable snapshot, and ingests batches of uploads with per-file
//! skip reporting.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and returns structured data. All browser interaction
//! lives in `moodboard-io`.

pub mod board;
pub mod extract;
pub mod intake;
pub mod types;

pub use board::{Moodboard, SUGGESTED_FONTS};
pub use extract::{Extraction, extract_palette};
pub use intake::{
    BatchReport, Ingested, SkipReason, Skipped, Upload, accept_upload, add_images,
    decodable_format, ingest_one,
};
pub use types::{Color, ColorParseError, Dimensions, ImageRef, PaletteConfig, PaletteError};
