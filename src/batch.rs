//! Input enumeration and the per-file load → enhance → OCR → scan pipeline

use crate::engine::OcrEngine;
use crate::error::OcrError;
use crate::preprocessing;
use crate::report::FileReport;
use crate::scanner;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Extensions picked up when scanning a directory (compared case-insensitively)
pub const IMAGE_EXTENSIONS: [&str; 3] = ["png", "jpg", "jpeg"];

/// What to do when one file's pipeline fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Record the failure and move on to the next file
    #[default]
    Continue,
    /// Abort the whole batch on the first failure
    FailFast,
}

/// A file whose pipeline failed
#[derive(Debug)]
pub struct FileFailure {
    pub file: String,
    pub error: OcrError,
}

/// Everything a batch produced, in processing order
#[derive(Debug, Default)]
pub struct BatchOutcome {
    pub reports: Vec<FileReport>,
    pub failures: Vec<FileFailure>,
}

impl BatchOutcome {
    pub fn processed(&self) -> usize {
        self.reports.len() + self.failures.len()
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve the files to scan.
///
/// A directory yields its direct regular-file entries with an image
/// extension, sorted by path. Any other existing path is scanned as-is,
/// whatever its extension.
pub fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, OcrError> {
    let metadata = fs::metadata(path).map_err(|e| OcrError::resource(path, e))?;
    if !metadata.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }

    let mut inputs = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| OcrError::resource(path, e))? {
        let entry_path = entry.map_err(|e| OcrError::resource(path, e))?.path();
        if entry_path.is_file() && has_image_extension(&entry_path) {
            inputs.push(entry_path);
        }
    }
    inputs.sort();

    tracing::debug!(
        "Found {} image file(s) in {}",
        inputs.len(),
        path.display()
    );
    Ok(inputs)
}

pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|candidate| ext.eq_ignore_ascii_case(candidate))
        })
        .unwrap_or(false)
}

/// Run the full pipeline for one file
pub fn process_file(engine: &dyn OcrEngine, path: &Path) -> Result<FileReport, OcrError> {
    let start = Instant::now();

    let image = preprocessing::load(path)?;
    let enhanced = preprocessing::autocontrast(&image);
    drop(image);

    let text = engine.recognize(&enhanced)?;
    let scan = scanner::find_xl(&text);

    tracing::debug!(
        file = %path.display(),
        engine = engine.name(),
        text_len = text.len(),
        count = scan.count(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "processed"
    );

    Ok(FileReport::new(path.display().to_string(), scan))
}

/// Sequential batch over a list of inputs
pub struct BatchRunner<'a> {
    engine: &'a dyn OcrEngine,
    policy: FailurePolicy,
}

impl<'a> BatchRunner<'a> {
    pub fn new(engine: &'a dyn OcrEngine, policy: FailurePolicy) -> Self {
        Self { engine, policy }
    }

    /// Process `inputs` in order.
    ///
    /// Under `FailFast` the first error is returned and no outcome is
    /// produced; under `Continue` errors are collected alongside reports.
    pub fn run(&self, inputs: &[PathBuf]) -> Result<BatchOutcome, OcrError> {
        let mut outcome = BatchOutcome::default();

        for (i, path) in inputs.iter().enumerate() {
            tracing::info!("Processing {} of {}: {}", i + 1, inputs.len(), path.display());

            match process_file(self.engine, path) {
                Ok(report) => outcome.reports.push(report),
                Err(e) if self.policy == FailurePolicy::FailFast => return Err(e),
                Err(e) => {
                    tracing::error!(
                        file = %path.display(),
                        code = e.code(),
                        "{}",
                        e
                    );
                    outcome.failures.push(FileFailure {
                        file: path.display().to_string(),
                        error: e,
                    });
                }
            }
        }

        Ok(outcome)
    }
}
