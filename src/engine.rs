use crate::error::OcrError;
use crate::preprocessing::LoadedImage;

/// Trait that all OCR engines must implement
pub trait OcrEngine: Send + Sync {
    /// Returns the engine identifier (e.g., "rekognition", "ocrs")
    fn name(&self) -> &'static str;

    /// Returns a human-readable description of the engine
    fn description(&self) -> &'static str;

    /// Recognize the text in an already decoded and enhanced image.
    ///
    /// Called exactly once per image; engines never retry.
    fn recognize(&self, image: &LoadedImage) -> Result<String, OcrError>;
}
