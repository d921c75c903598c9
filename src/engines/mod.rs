//! OCR engine implementations
//!
//! This module contains implementations of the OcrEngine trait for different
//! OCR backends. Engines are conditionally compiled based on feature flags and
//! selected at startup by name.

#[cfg(any(feature = "engine-ocrs", feature = "engine-tesseract"))]
mod download;

#[cfg(feature = "engine-rekognition")]
pub mod rekognition;

#[cfg(feature = "engine-ocrs")]
pub mod ocrs;

#[cfg(feature = "engine-tesseract")]
pub mod tesseract;

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::OcrError;
use std::fmt;

/// Selectable OCR backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EngineKind {
    /// AWS Rekognition text detection (remote)
    Rekognition,
    /// Pure Rust neural OCR (local)
    Ocrs,
    /// Tesseract (local)
    Tesseract,
}

impl EngineKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rekognition => "rekognition",
            Self::Ocrs => "ocrs",
            Self::Tesseract => "tesseract",
        }
    }

    /// Cargo feature that compiles this engine in
    pub fn feature(&self) -> &'static str {
        match self {
            Self::Rekognition => "engine-rekognition",
            Self::Ocrs => "engine-ocrs",
            Self::Tesseract => "engine-tesseract",
        }
    }

    /// Whether this binary was built with the engine
    pub fn is_compiled(&self) -> bool {
        match self {
            Self::Rekognition => cfg!(feature = "engine-rekognition"),
            Self::Ocrs => cfg!(feature = "engine-ocrs"),
            Self::Tesseract => cfg!(feature = "engine-tesseract"),
        }
    }
}

impl fmt::Display for EngineKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Construct the engine chosen in `config`.
///
/// Fails eagerly with `DependencyMissing` when the engine was not compiled
/// in, before any image is touched.
pub fn create(config: &Config) -> Result<Box<dyn OcrEngine>, OcrError> {
    let kind = config.engine;
    if !kind.is_compiled() {
        return Err(missing(kind));
    }

    tracing::info!("Initializing {} engine...", kind);

    match kind {
        #[cfg(feature = "engine-rekognition")]
        EngineKind::Rekognition => Ok(Box::new(rekognition::RekognitionEngine::new(config)?)),
        #[cfg(feature = "engine-ocrs")]
        EngineKind::Ocrs => Ok(Box::new(ocrs::OcrsEngine::new(config)?)),
        #[cfg(feature = "engine-tesseract")]
        EngineKind::Tesseract => Ok(Box::new(tesseract::TesseractEngine::new(config)?)),
        #[allow(unreachable_patterns)]
        other => Err(missing(other)),
    }
}

fn missing(kind: EngineKind) -> OcrError {
    OcrError::DependencyMissing(format!(
        "the {} engine is not available in this build (rebuild with --features {})",
        kind,
        kind.feature()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::FailurePolicy;
    use clap::ValueEnum;

    fn config_for(engine: EngineKind) -> Config {
        Config {
            input: ".".into(),
            csv_output: None,
            engine,
            failure_policy: FailurePolicy::Continue,
            language: "eng".to_string(),
            tessdata_path: None,
            region: "us-east-1".to_string(),
        }
    }

    #[test]
    fn test_engine_names_parse() {
        for kind in EngineKind::value_variants() {
            assert_eq!(EngineKind::from_str(kind.as_str(), true), Ok(*kind));
        }
        assert!(EngineKind::from_str("cloud-vision", true).is_err());
    }

    #[test]
    fn test_missing_engine_reports_feature() {
        let err = missing(EngineKind::Tesseract);
        assert!(matches!(err, OcrError::DependencyMissing(_)));
        assert!(err.to_string().contains("engine-tesseract"));
    }

    #[cfg(not(feature = "engine-tesseract"))]
    #[test]
    fn test_create_uncompiled_engine_fails_eagerly() {
        let err = create(&config_for(EngineKind::Tesseract))
            .err()
            .expect("engine should be missing");
        assert!(matches!(err, OcrError::DependencyMissing(_)));
    }

    #[cfg(feature = "engine-rekognition")]
    #[test]
    fn test_create_rekognition_engine() {
        let engine = create(&config_for(EngineKind::Rekognition)).unwrap();
        assert_eq!(engine.name(), "rekognition");
    }
}
