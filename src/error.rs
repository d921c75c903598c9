use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("Required dependency missing: {0}")]
    DependencyMissing(String),

    #[error("Cannot read image {}: {reason}", path.display())]
    Resource { path: PathBuf, reason: String },

    #[error("OCR backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("Failed to encode image: {0}")]
    Encoding(String),

    #[error("Failed to write report {}: {reason}", path.display())]
    Report { path: PathBuf, reason: String },
}

impl OcrError {
    pub fn resource(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        OcrError::Resource {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    pub fn report(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        OcrError::Report {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Short machine-readable code, used in log fields
    pub fn code(&self) -> &'static str {
        match self {
            OcrError::DependencyMissing(_) => "DEPENDENCY_MISSING",
            OcrError::Resource { .. } => "RESOURCE_ERROR",
            OcrError::BackendUnavailable(_) => "BACKEND_UNAVAILABLE",
            OcrError::Encoding(_) => "ENCODING_ERROR",
            OcrError::Report { .. } => "REPORT_ERROR",
        }
    }
}
