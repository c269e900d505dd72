//! Grid of uploaded images.

use dioxus::prelude::*;
use moodboard_palette::ImageRef;

/// Props for the [`ImageGrid`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ImageGridProps {
    /// Image handles in upload order.
    images: Vec<ImageRef>,
}

/// Two-column grid of uploaded images, or a hint when there are none.
#[component]
pub fn ImageGrid(props: ImageGridProps) -> Element {
    if props.images.is_empty() {
        return rsx! {
            div { class: "grid-placeholder",
                "Drag and drop images here or use the upload button"
            }
        };
    }

    rsx! {
        div { class: "image-grid",
            for (position, image) in props.images.iter().enumerate().map(|(i, image)| (i + 1, image)) {
                div { key: "{image}", class: "image-tile",
                    img {
                        src: "{image}",
                        alt: "Moodboard image {position}",
                    }
                }
            }
        }
    }
}
