//! AWS Rekognition engine implementation
//!
//! Remote OCR through the Rekognition `DetectText` API. The image is
//! re-encoded in its source format (PNG when that is unknown) and uploaded
//! inline. Credentials come from the standard AWS provider chain; the region
//! is resolved once at startup.

use crate::config::Config;
use crate::engine::OcrEngine;
use crate::error::OcrError;
use crate::preprocessing::LoadedImage;
use aws_config::BehaviorVersion;
use aws_sdk_rekognition::config::Region;
use aws_sdk_rekognition::error::DisplayErrorContext;
use aws_sdk_rekognition::primitives::Blob;
use aws_sdk_rekognition::types::Image;
use aws_sdk_rekognition::Client;
use image::ImageFormat;
use std::io::Cursor;
use tokio::runtime::Runtime;

/// OCR Engine backed by AWS Rekognition
pub struct RekognitionEngine {
    client: Client,
    /// The SDK is async-only; calls are driven to completion on this runtime
    runtime: Runtime,
    region: String,
}

impl RekognitionEngine {
    /// Build a Rekognition client for the configured region
    pub fn new(config: &Config) -> Result<Self, OcrError> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                OcrError::BackendUnavailable(format!("Failed to start async runtime: {}", e))
            })?;

        let sdk_config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(config.region.clone()))
                .load(),
        );
        let client = Client::new(&sdk_config);

        tracing::info!("Rekognition engine initialized (region: {})", config.region);

        Ok(Self {
            client,
            runtime,
            region: config.region.clone(),
        })
    }
}

impl OcrEngine for RekognitionEngine {
    fn name(&self) -> &'static str {
        "rekognition"
    }

    fn description(&self) -> &'static str {
        "AWS Rekognition text detection - remote, requires AWS credentials"
    }

    fn recognize(&self, image: &LoadedImage) -> Result<String, OcrError> {
        let format = upload_format(image);
        let bytes = encode(image, format)?;

        tracing::debug!(
            "Sending {} bytes ({:?}) to Rekognition in {}",
            bytes.len(),
            format,
            self.region
        );

        let request = self
            .client
            .detect_text()
            .image(Image::builder().bytes(Blob::new(bytes)).build());

        let output = self.runtime.block_on(request.send()).map_err(|e| {
            OcrError::BackendUnavailable(format!("DetectText failed: {}", DisplayErrorContext(&e)))
        })?;

        let detections = output.text_detections();
        tracing::debug!("Rekognition returned {} detections", detections.len());

        Ok(join_detections(
            detections.iter().map(|detection| detection.detected_text()),
        ))
    }
}

/// The source format when it can be written back out, PNG otherwise.
///
/// `DetectText` accepts only JPEG and PNG; BMP, GIF, TIFF or WebP sources
/// are still sent as-is and the service rejects them with an
/// `InvalidImageFormatException`, reported as `BackendUnavailable`.
fn upload_format(image: &LoadedImage) -> ImageFormat {
    match image.format {
        Some(format) if format.writing_enabled() => format,
        _ => ImageFormat::Png,
    }
}

fn encode(image: &LoadedImage, format: ImageFormat) -> Result<Vec<u8>, OcrError> {
    let mut buffer = Cursor::new(Vec::new());
    image
        .image
        .write_to(&mut buffer, format)
        .map_err(|e| OcrError::Encoding(format!("{:?}: {}", format, e)))?;
    Ok(buffer.into_inner())
}

/// Join detected text fragments in response order with single spaces.
/// Absent and empty fragments are skipped.
fn join_detections<'a>(texts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    texts
        .into_iter()
        .flatten()
        .filter(|text| !text.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
