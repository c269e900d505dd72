//! Browser-side ingestion of uploaded files.
//!
//! Files are processed one at a time, in the order given. Each step
//! reads the latest board snapshot from the signal and writes a new
//! one, so the grid and palette update as every image lands and two
//! overlapping batches cannot overwrite each other's results.

use dioxus::html::FileData;
use dioxus::prelude::*;
use futures::future::{Either, select};
use gloo_timers::future::TimeoutFuture;
use moodboard_palette::{
    BatchReport, Ingested, Moodboard, PaletteConfig, SkipReason, Upload, accept_upload,
    ingest_one,
};

use crate::handle;

/// Read a file's bytes, giving up after `timeout_ms`.
///
/// # Errors
///
/// Returns [`SkipReason::Unreadable`] if the browser fails the read and
/// [`SkipReason::TimedOut`] if it does not finish in time.
#[allow(clippy::future_not_send)] // WASM is single-threaded; FileData is !Send
pub async fn read_bounded(file: &FileData, timeout_ms: u32) -> Result<Vec<u8>, SkipReason> {
    let read = file.read_bytes();
    let timeout = TimeoutFuture::new(timeout_ms);
    futures::pin_mut!(read);
    futures::pin_mut!(timeout);

    match select(read, timeout).await {
        Either::Left((Ok(bytes), _)) => Ok(bytes.to_vec()),
        Either::Left((Err(e), _)) => Err(SkipReason::Unreadable(e.to_string())),
        Either::Right(((), _)) => Err(SkipReason::TimedOut {
            after_ms: timeout_ms,
        }),
    }
}

/// Ingest `files` into `board`.
///
/// Non-image files are skipped without being read. Every other file is
/// read within `config.read_timeout_ms` and then taken through
/// [`ingest_one`]. Failures are skipped with a console warning and the
/// batch moves on to the next file.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Signal is !Send
pub async fn ingest_files(
    files: Vec<FileData>,
    mut board: Signal<Moodboard>,
    config: &PaletteConfig,
) -> BatchReport {
    let mut report = BatchReport::default();

    for file in files {
        let name = file.name();

        let mime = match accept_upload(&name, file.content_type().as_deref()) {
            Ok(mime) => mime,
            Err(reason) => {
                report.skip(name, reason);
                continue;
            }
        };

        let bytes = match read_bounded(&file, config.read_timeout_ms).await {
            Ok(bytes) => bytes,
            Err(reason) => {
                report.skip(name, reason);
                continue;
            }
        };

        // Yield so the "Processing..." state paints before the
        // synchronous decode blocks the thread.
        TimeoutFuture::new(0).await;

        let upload = Upload {
            name,
            mime: Some(mime),
            bytes,
        };
        let outcome = ingest_one(&board.peek(), &upload, config, |upload, mime| {
            handle::object_url(&upload.bytes, mime).map_err(|e| e.to_string())
        });

        match outcome {
            Ok(Ingested { board: next, extraction }) => {
                web_sys::console::log_1(
                    &format!(
                        "{}: {}x{}, sampled {} px, {} distinct colors, {:.1} ms",
                        upload.name,
                        extraction.dimensions.width,
                        extraction.dimensions.height,
                        extraction.sampled,
                        extraction.distinct,
                        extraction.duration.as_secs_f64() * 1000.0,
                    )
                    .into(),
                );
                board.set(next);
                report.add(upload.name);
            }
            Err(reason) => report.skip(upload.name, reason),
        }
    }

    for skipped in &report.skipped {
        web_sys::console::warn_1(&format!("skipped {skipped}").into());
    }

    report
}
