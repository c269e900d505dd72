//! Text file downloads via Blob URLs.
//!
//! The browser offers no "save file" call to WASM code. A download is
//! started by wrapping the text in a `Blob`, pointing a detached
//! `<a download>` element at its object URL and clicking it.
//!
//! Requires a browser environment (`wasm32-unknown-unknown` target).

use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{BlobPropertyBag, Document, HtmlAnchorElement};

/// Errors that can occur when starting a download.
#[derive(Debug, thiserror::Error)]
pub enum DownloadError {
    /// A browser API call returned an error or an object was missing.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for DownloadError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// Offer `contents` to the user as a file named `filename`.
///
/// The anchor is attached to `<body>` only for the duration of the
/// click, and the object URL is revoked right after.
///
/// # Errors
///
/// Returns [`DownloadError::JsError`] if the window, document or body
/// is unavailable, or if `Blob` or object URL creation fails.
pub fn save_text(contents: &str, filename: &str, mime_type: &str) -> Result<(), DownloadError> {
    let document = document()?;
    let url = text_blob_url(contents, mime_type)?;

    let anchor = document
        .create_element("a")?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| DownloadError::JsError(format!("not an anchor element: {e:?}")))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document
        .body()
        .ok_or_else(|| DownloadError::JsError("no document body".into()))?;
    body.append_child(&anchor)?;
    anchor.click();

    // The download has started; cleanup failures are not reported.
    let _ = body.remove_child(&anchor);
    let _ = web_sys::Url::revoke_object_url(&url);

    Ok(())
}

fn document() -> Result<Document, DownloadError> {
    web_sys::window()
        .ok_or_else(|| DownloadError::JsError("no global window".into()))?
        .document()
        .ok_or_else(|| DownloadError::JsError("no document".into()))
}

/// Wrap `contents` in a typed `Blob` and return its object URL.
fn text_blob_url(contents: &str, mime_type: &str) -> Result<String, DownloadError> {
    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let opts = BlobPropertyBag::new();
    opts.set_type(mime_type);
    let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &opts)?;
    Ok(web_sys::Url::create_object_url_with_blob(&blob)?)
}
