use super::LoadedImage;
use crate::error::OcrError;
use image::ImageReader;
use std::path::Path;

/// Open and decode the image at `path`.
///
/// The format is sniffed from the file contents, so a mislabelled extension
/// still decodes. Missing, unreadable and undecodable files all surface as
/// `OcrError::Resource`.
pub fn load(path: &Path) -> Result<LoadedImage, OcrError> {
    let reader = ImageReader::open(path)
        .map_err(|e| OcrError::resource(path, e))?
        .with_guessed_format()
        .map_err(|e| OcrError::resource(path, e))?;

    let format = reader.format();
    let image = reader.decode().map_err(|e| OcrError::resource(path, e))?;
    let loaded = LoadedImage::new(image, format);

    let (width, height) = loaded.dimensions();
    tracing::debug!(
        "Loaded {} ({}x{}, {:?}, {:?})",
        path.display(),
        width,
        height,
        loaded.image.color(),
        format
    );

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgb, RgbImage};

    #[test]
    fn test_load_png_keeps_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        RgbImage::from_pixel(8, 4, Rgb([10, 20, 30]))
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.dimensions(), (8, 4));
        assert_eq!(loaded.format, Some(ImageFormat::Png));
    }

    #[test]
    fn test_load_sniffs_format_from_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("actually_png.jpg");
        RgbImage::new(2, 2)
            .save_with_format(&path, ImageFormat::Png)
            .unwrap();

        let loaded = load(&path).unwrap();
        assert_eq!(loaded.format, Some(ImageFormat::Png));
    }

    #[test]
    fn test_load_missing_file_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("nope.png")).unwrap_err();
        assert!(matches!(err, OcrError::Resource { .. }));
    }

    #[test]
    fn test_load_garbage_is_resource_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"definitely not an image").unwrap();

        let err = load(&path).unwrap_err();
        assert!(matches!(err, OcrError::Resource { .. }));
    }
}
