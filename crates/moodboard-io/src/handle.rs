//! Session handles for uploaded images.
//!
//! Each accepted upload is wrapped in a `Blob` and given an object URL,
//! which serves both as the `<img src>` for the grid and as the
//! [`ImageRef`] stored on the board. Object URLs live until revoked or
//! until the page unloads.

use moodboard_palette::ImageRef;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// Errors that can occur while creating an image handle.
#[derive(Debug, thiserror::Error)]
pub enum HandleError {
    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for HandleError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Create an object URL for image bytes of the given MIME type.
///
/// The handle must be released with [`revoke`] when the board that
/// holds it goes away.
///
/// # Errors
///
/// Returns [`HandleError::JsError`] if `Blob` or URL creation fails.
pub fn object_url(bytes: &[u8], mime_type: &str) -> Result<ImageRef, HandleError> {
    let array = js_sys::Uint8Array::from(bytes);
    let parts = js_sys::Array::of1(&array);

    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    Ok(ImageRef::new(url))
}

/// Release a handle created by [`object_url`].
///
/// Best-effort: the URL may already have been revoked.
pub fn revoke(image: &ImageRef) {
    let _ = web_sys::Url::revoke_object_url(image.as_str());
}
