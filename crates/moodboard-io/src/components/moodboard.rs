//! The moodboard generator widget.

use dioxus::html::FileData;
use dioxus::prelude::*;
use moodboard_palette::{BatchReport, Moodboard, PaletteConfig};

use super::export::BoardActions;
use super::gallery::ImageGrid;
use super::palette::{FontChips, PaletteSwatches};
use super::upload::{DropZone, UploadButton};
use crate::{analytics, handle, ingest};

/// Props for the [`MoodboardGenerator`] component.
#[derive(Props, Clone, PartialEq)]
pub struct MoodboardGeneratorProps {
    /// Sampling and palette settings. Defaults to [`PaletteConfig::default`].
    #[props(default)]
    config: PaletteConfig,
}

/// Root widget: theme field, upload controls, image grid, palette,
/// fonts and export actions.
///
/// Owns the board snapshot for its whole lifetime. Uploaded images are
/// ingested one file at a time; files that are skipped are listed under
/// the grid until a new batch starts while none is running.
#[component]
pub fn MoodboardGenerator(props: MoodboardGeneratorProps) -> Element {
    let mut board = use_signal(Moodboard::new);
    let mut pending = use_signal(|| 0_usize);
    let mut outcome = use_signal(BatchReport::default);

    // Release every object URL when the widget goes away.
    use_drop(move || {
        for image in board.peek().images() {
            handle::revoke(image);
        }
    });

    // An invalid config falls back to the defaults; the reason is shown
    // once above the controls.
    let (config, config_error) = use_hook(move || {
        let (config, rejected) = props.config.or_default();
        let message = rejected.map(|e| {
            web_sys::console::warn_1(&format!("moodboard config rejected: {e}").into());
            format!("Using default settings: {e}")
        });
        (config, message)
    });

    let on_files = use_callback(move |files: Vec<FileData>| {
        let config = config.clone();
        spawn(async move {
            // A batch with nothing else in flight starts a fresh report;
            // overlapping batches append to it.
            if *pending.peek() == 0 {
                outcome.set(BatchReport::default());
            }
            pending += 1;
            let report = ingest::ingest_files(files, board, &config).await;
            if !report.added.is_empty() {
                analytics::track_upload();
            }
            outcome.write().absorb(report);
            pending -= 1;
        });
    });

    let on_theme = move |evt: FormEvent| {
        let next = board.peek().with_theme(evt.value());
        board.set(next);
    };

    let snapshot = board();
    let theme = snapshot.theme().to_string();
    let images = snapshot.images().to_vec();
    let colors = snapshot.colors().to_vec();
    let fonts = snapshot.fonts().to_vec();
    let skipped: Vec<String> = outcome.read().skipped.iter().map(ToString::to_string).collect();

    rsx! {
        div { class: "moodboard",
            div { class: "card",
                h2 { class: "card-title", "Dynamic Moodboard Generator" }

                if let Some(ref err) = config_error {
                    p { class: "error-text", "{err}" }
                }

                div { class: "toolbar",
                    input {
                        r#type: "text",
                        class: "theme-input",
                        placeholder: "Enter theme or keywords...",
                        value: "{theme}",
                        oninput: on_theme,
                    }
                    UploadButton { on_files: on_files }
                }

                DropZone { on_files: on_files,
                    ImageGrid { images: images }
                }

                if pending() > 0 {
                    p { class: "status-text", "Processing..." }
                }

                if !skipped.is_empty() {
                    div { class: "warning-box",
                        p { class: "warning-title", "Some files were skipped:" }
                        ul {
                            for line in skipped {
                                li { "{line}" }
                            }
                        }
                    }
                }

                PaletteSwatches { colors: colors }
                FontChips { fonts: fonts }
                BoardActions { board: snapshot }
            }
        }
    }
}
