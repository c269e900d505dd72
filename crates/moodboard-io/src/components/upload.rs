//! Upload controls: a multi-file picker button and a drag-and-drop zone.
//!
//! Both hand the raw file list to the caller. Filtering to image types
//! happens during ingestion so picker and drop share one code path.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// Props for the [`UploadButton`] component.
#[derive(Props, Clone, PartialEq)]
pub struct UploadButtonProps {
    /// Called with every file chosen in the picker.
    on_files: EventHandler<Vec<FileData>>,
}

/// An "Upload Images" button backed by a hidden multi-select file input.
#[component]
pub fn UploadButton(props: UploadButtonProps) -> Element {
    let handle_change = move |evt: FormEvent| {
        props.on_files.call(evt.files());
    };

    rsx! {
        label { class: "btn btn-outline",
            input {
                r#type: "file",
                multiple: true,
                accept: "image/*",
                class: "hidden",
                onchange: handle_change,
            }
            Icon { class: "icon", width: 16, height: 16, icon: LdUpload }
            "Upload Images"
        }
    }
}

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Called with every file dropped on the zone.
    on_files: EventHandler<Vec<FileData>>,
    /// Zone contents (the image grid or its placeholder).
    children: Element,
}

/// A dashed drop target that highlights while a drag hovers over it.
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let mut dragging = use_signal(|| false);

    let handle_drop = move |evt: DragEvent| {
        evt.prevent_default();
        dragging.set(false);
        props.on_files.call(evt.files());
    };

    let state_class = if dragging() {
        "drop-zone dragging"
    } else {
        "drop-zone"
    };

    rsx! {
        div {
            class: "{state_class}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |evt| {
                evt.prevent_default();
                dragging.set(false);
            },
            ondrop: handle_drop,

            {props.children}
        }
    }
}
