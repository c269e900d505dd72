//! Export and share buttons.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdShare2};
use moodboard_palette::Moodboard;

use crate::{analytics, download};

/// Props for the [`BoardActions`] component.
#[derive(Props, Clone, PartialEq)]
pub struct BoardActionsProps {
    /// The board to export.
    board: Moodboard,
}

/// Export button (downloads `moodboard.json`) and a placeholder Share
/// button.
///
/// Sharing needs a backend to host the board, so the button is shown
/// disabled.
#[component]
pub fn BoardActions(props: BoardActionsProps) -> Element {
    let mut export_error = use_signal(|| Option::<String>::None);

    let export_click = move |_| {
        let outcome = moodboard_export::to_json(&props.board)
            .map_err(|e| e.to_string())
            .and_then(|json| {
                download::save_text(&json, moodboard_export::FILENAME, moodboard_export::MIME_TYPE)
                    .map_err(|e| e.to_string())
            });

        match outcome {
            Ok(()) => {
                export_error.set(None);
                analytics::track_export("json");
            }
            Err(e) => {
                web_sys::console::warn_1(&format!("export failed: {e}").into());
                export_error.set(Some(format!("Export failed: {e}")));
            }
        }
    };

    rsx! {
        div { class: "actions",
            if let Some(ref err) = export_error() {
                p { class: "error-text", "{err}" }
            }

            div { class: "button-row",
                button {
                    class: "btn btn-outline",
                    onclick: export_click,
                    Icon { class: "icon", width: 16, height: 16, icon: LdDownload }
                    "Export"
                }
                button {
                    class: "btn btn-outline",
                    disabled: true,
                    title: "Coming soon",
                    Icon { class: "icon", width: 16, height: 16, icon: LdShare2 }
                    "Share"
                }
            }
        }
    }
}
