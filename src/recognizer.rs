//! Thin wrapper around the external `tesseract` executable.
//!
//! Recognition itself happens out of process; this module only builds the
//! command line and hands back the per-word TSV it prints.

use std::path::Path;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::TableError;
use crate::options::{LayoutMode, RecognizerOptions};

pub(crate) fn recognizer_args(image: &Path, language: &str, layout: LayoutMode) -> Vec<String> {
    vec![
        image.to_string_lossy().into_owned(),
        "stdout".to_string(),
        "-l".to_string(),
        language.to_string(),
        "--psm".to_string(),
        layout.psm().to_string(),
        "tsv".to_string(),
    ]
}

/// Runs the recognizer on `image` and returns its TSV output.
pub fn recognize_tsv(image: &Path, options: &RecognizerOptions) -> Result<String, TableError> {
    if !image.exists() {
        return Err(TableError::Recognizer(format!(
            "input image not found: {}",
            image.display()
        )));
    }

    let args = recognizer_args(image, &options.language, options.layout);
    debug!(binary = %options.binary.display(), ?args, "running recognizer");

    let output = Command::new(&options.binary)
        .args(&args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map_err(|error| {
            TableError::Recognizer(format!(
                "failed to start '{}': {error}",
                options.binary.display()
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(TableError::Recognizer(format!(
            "'{}' exited with {}: {}",
            options.binary.display(),
            output.status,
            stderr.trim()
        )));
    }

    String::from_utf8(output.stdout)
        .map_err(|error| TableError::Recognizer(format!("output is not valid UTF-8: {error}")))
}
