//! Image loading and contrast enhancement ahead of OCR
//!
//! Images are decoded once per file and handed to the contrast stretch, which
//! always produces a new image so the decoded original stays untouched.

pub mod autocontrast;
pub mod loader;

use image::{DynamicImage, ImageFormat};

pub use autocontrast::autocontrast;
pub use loader::load;

/// A decoded image together with the format it was decoded from
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub image: DynamicImage,
    /// Source encoding, if it could be determined. Remote backends re-encode
    /// in this format before upload.
    pub format: Option<ImageFormat>,
}

impl LoadedImage {
    pub fn new(image: DynamicImage, format: Option<ImageFormat>) -> Self {
        Self { image, format }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}
