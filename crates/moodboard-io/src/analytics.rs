//! Lightweight Simple Analytics event tracking.
//!
//! Calls the global `sa_event` function injected by the Simple
//! Analytics `<script>` tag. Every function silently no-ops when the
//! script is absent (blocked, or never added to the page).
//!
//! Event names are lowercase alphanumeric with underscores, max 200
//! characters.

use wasm_bindgen::prelude::*;

/// Longest event name Simple Analytics accepts.
const MAX_EVENT_NAME: usize = 200;

fn track_event(name: &str) {
    debug_assert!(
        name.len() <= MAX_EVENT_NAME
            && name
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_'),
        "invalid analytics event name: {name:?}"
    );

    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(func) = js_sys::Reflect::get(&window, &JsValue::from_str("sa_event")) else {
        return;
    };
    if !func.is_function() {
        return;
    }
    let func: js_sys::Function = func.unchecked_into();
    let _ = func.call1(&JsValue::NULL, &JsValue::from_str(name));
}

/// Record a successful export in the given format (`export_<format>`).
pub fn track_export(format: &str) {
    track_event(&format!("export_{format}"));
}

/// Record an upload batch that added at least one image.
pub fn track_upload() {
    track_event("upload_images");
}
