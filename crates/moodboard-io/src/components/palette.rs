//! Color palette swatches and font suggestion chips.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdPalette, LdType};
use moodboard_palette::Color;

/// Props for the [`PaletteSwatches`] component.
#[derive(Props, Clone, PartialEq)]
pub struct PaletteSwatchesProps {
    /// Board palette in display order.
    colors: Vec<Color>,
}

/// "Color Palette" section: one swatch per color with its hex label.
#[component]
pub fn PaletteSwatches(props: PaletteSwatchesProps) -> Element {
    rsx! {
        section { class: "board-section",
            h3 { class: "section-title",
                Icon { class: "icon", width: 20, height: 20, icon: LdPalette }
                "Color Palette"
            }
            div { class: "chip-row",
                for color in props.colors {
                    div { key: "{color}", class: "swatch",
                        div {
                            class: "swatch-color",
                            background_color: "{color}",
                            title: "{color}",
                        }
                        span { class: "swatch-label", "{color}" }
                    }
                }
            }
        }
    }
}

/// Props for the [`FontChips`] component.
#[derive(Props, Clone, PartialEq)]
pub struct FontChipsProps {
    /// Suggested font family names.
    fonts: Vec<&'static str>,
}

/// "Font Suggestions" section, each name rendered in its own face.
#[component]
pub fn FontChips(props: FontChipsProps) -> Element {
    rsx! {
        section { class: "board-section",
            h3 { class: "section-title",
                Icon { class: "icon", width: 20, height: 20, icon: LdType }
                "Font Suggestions"
            }
            div { class: "chip-row",
                for font in props.fonts {
                    div { key: "{font}", class: "font-chip", font_family: "'{font}', sans-serif",
                        "{font}"
                    }
                }
            }
        }
    }
}
