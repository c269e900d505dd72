// Build scripts signal errors by panicking; there is no caller to
// return Result to. Cargo treats a non-zero exit as a build failure.
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Build script for the moodboard binary crate.
//!
//! ## Stylesheet
//!
//! Copies `site/moodboard.css` from the workspace root into `OUT_DIR`
//! so that `main.rs` can `include_str!` it via the stable
//! `MOODBOARD_CSS_PATH` environment variable instead of a fragile
//! `../../../site/` relative path.
//!
//! ## Generated `index.html`
//!
//! Generates `index.html` at the crate root, the page template the
//! Dioxus CLI serves. The app mounts into its `#main` element.

use std::path::{Path, PathBuf};
use std::{env, fs};

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap());

    // This crate lives at `<workspace>/crates/moodboard/`.
    let workspace_root = manifest_dir
        .parent()
        .and_then(Path::parent)
        .expect("could not find workspace root");
    let site_dir = workspace_root.join("site");

    copy_stylesheet(&site_dir, &out_dir);
    generate_index_html(&manifest_dir);
}

/// Copy `site/moodboard.css` into `OUT_DIR` and expose its path as
/// `MOODBOARD_CSS_PATH`.
fn copy_stylesheet(site_dir: &Path, out_dir: &Path) {
    let src = site_dir.join("moodboard.css");
    let dst = out_dir.join("moodboard.css");

    println!("cargo:rerun-if-changed={}", src.display());
    fs::copy(&src, &dst)
        .unwrap_or_else(|e| panic!("failed to copy {} to {}: {e}", src.display(), dst.display()));
    println!("cargo:rustc-env=MOODBOARD_CSS_PATH={}", dst.display());
}

/// Generate `crates/moodboard/index.html`.
///
/// Note: this writes to `manifest_dir` (the source tree) rather than
/// `OUT_DIR` because Dioxus CLI expects `index.html` at the crate root.
/// The file is gitignored.
fn generate_index_html(manifest_dir: &Path) {
    let index_html = r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <title>Moodboard Generator</title>
    <meta content="text/html;charset=utf-8" http-equiv="Content-Type" />
    <meta name="viewport" content="width=device-width, initial-scale=1" />
    <meta charset="UTF-8" />
  </head>
  <body>
    <div id="main"></div>
  </body>
</html>
"#;

    let index_path = manifest_dir.join("index.html");
    fs::write(&index_path, index_html)
        .unwrap_or_else(|e| panic!("failed to write {}: {e}", index_path.display()));
}
