//! Model and training-data download helpers shared by the local engines

use crate::error::OcrError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Cache root for downloaded engine assets
pub fn cache_root() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("xl-scan")
}

/// Ensure `filename` exists under `dir`, downloading it from `url` if not.
pub fn ensure_cached(url: &str, dir: &Path, filename: &str) -> Result<PathBuf, OcrError> {
    std::fs::create_dir_all(dir).map_err(|e| {
        OcrError::BackendUnavailable(format!(
            "Failed to create cache directory {}: {}",
            dir.display(),
            e
        ))
    })?;

    let path = dir.join(filename);

    if !path.exists() {
        tracing::info!("Downloading {} (this may take a moment)...", filename);
        download_file(url, &path)?;
        tracing::info!("Downloaded {} to {:?}", filename, path);
    } else {
        tracing::info!("Using cached {} from {:?}", filename, path);
    }

    Ok(path)
}

/// Download a file from URL to path using ureq
fn download_file(url: &str, path: &Path) -> Result<(), OcrError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| OcrError::BackendUnavailable(format!("Failed to download {}: {}", url, e)))?;

    let buffer = response.into_body().read_to_vec().map_err(|e| {
        OcrError::BackendUnavailable(format!("Failed to read response body: {}", e))
    })?;

    // A partially written file must never sit at `path`
    let partial = path.with_extension("partial");
    let mut file = File::create(&partial).map_err(|e| {
        OcrError::BackendUnavailable(format!("Failed to create {}: {}", partial.display(), e))
    })?;
    file.write_all(&buffer).map_err(|e| {
        OcrError::BackendUnavailable(format!("Failed to write {}: {}", partial.display(), e))
    })?;
    std::fs::rename(&partial, path).map_err(|e| {
        OcrError::BackendUnavailable(format!("Failed to move {} into place: {}", path.display(), e))
    })?;

    Ok(())
}
