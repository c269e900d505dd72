//! moodboard-io: Browser I/O and Dioxus component library.
//!
//! Handles bounded file reads, object-URL image handles, Blob
//! downloads and analytics, and provides the UI components of the
//! moodboard generator.

pub mod analytics;
pub mod components;
pub mod download;
pub mod handle;
pub mod ingest;

pub use components::{
    BoardActions, DropZone, FontChips, ImageGrid, MoodboardGenerator, PaletteSwatches,
    UploadButton,
};
