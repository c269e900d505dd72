//! Dioxus UI components for the moodboard generator.
//!
//! Provides the upload button and drop zone, the image grid, palette
//! swatches, font chips, export actions, and the widget that ties them
//! together.

mod export;
mod gallery;
mod moodboard;
mod palette;
mod upload;

pub use export::BoardActions;
pub use gallery::ImageGrid;
pub use moodboard::MoodboardGenerator;
pub use palette::{FontChips, PaletteSwatches};
pub use upload::{DropZone, UploadButton};
