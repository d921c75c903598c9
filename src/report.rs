//! Per-file results and their text / CSV renderings

use crate::batch::FileFailure;
use crate::error::OcrError;
use crate::scanner::ScanResult;
use serde::{Serialize, Serializer};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// CSV header, in column order
pub const CSV_HEADER: [&str; 3] = ["file", "found", "count"];

/// Result for one processed file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    file: String,
    #[serde(serialize_with = "serialize_title_case_bool")]
    found: bool,
    count: usize,
}

impl FileReport {
    pub fn new(file: impl Into<String>, scan: ScanResult) -> Self {
        Self {
            file: file.into(),
            found: scan.found(),
            count: scan.count(),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn found(&self) -> bool {
        self.found
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

/// Booleans are written as `True` / `False` in reports
fn serialize_title_case_bool<S: Serializer>(value: &bool, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(if *value { "True" } else { "False" })
}

/// Human-readable line for one report
pub fn render_line(report: &FileReport) -> String {
    if report.found() {
        format!(
            "{}: Found {} occurrence(s) of 'XL'.",
            report.file(),
            report.count()
        )
    } else {
        format!("{}: No 'XL' found.", report.file())
    }
}

pub fn render_failure(failure: &FileFailure) -> String {
    format!("{}: Error: {}", failure.file, failure.error)
}

/// Write one line per report, in order
pub fn print_reports<W: Write>(reports: &[FileReport], out: &mut W) -> std::io::Result<()> {
    for report in reports {
        writeln!(out, "{}", render_line(report))?;
    }
    out.flush()
}

/// Write `reports` as CSV to `path`.
///
/// The header is always written, even with no rows. The report is staged in
/// a temporary file beside `path` and renamed into place, so `path` is either
/// left untouched or holds the complete report.
pub fn write_csv(path: &Path, reports: &[FileReport]) -> Result<(), OcrError> {
    let dir = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut staged = NamedTempFile::new_in(dir).map_err(|e| OcrError::report(path, e))?;

    {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(staged.as_file_mut());

        writer
            .write_record(CSV_HEADER)
            .map_err(|e| OcrError::report(path, e))?;
        for report in reports {
            writer
                .serialize(report)
                .map_err(|e| OcrError::report(path, e))?;
        }
        writer.flush().map_err(|e| OcrError::report(path, e))?;
    }

    staged
        .persist(path)
        .map_err(|e| OcrError::report(path, e.error))?;

    tracing::info!("Wrote {} report row(s) to {}", reports.len(), path.display());
    Ok(())
}
