//! Photo variant pipeline.
//!
//! Decodes an uploaded image, downscales it to each configured variant width
//! (never upscaling), and encodes WebP renditions. Runs synchronously within
//! the upload request; there is no queue or retry.

use std::io::Cursor;

use carvoy_opendal::PhotoVariant;
use image::imageops::FilterType;
use image::{DynamicImage, ImageFormat, ImageReader};

use crate::service::{Result, ServiceError};

/// Tracing target for the image pipeline.
const TRACING_TARGET: &str = "carvoy_server::service::image";

/// Content types accepted by the photo upload endpoint.
const SUPPORTED_CONTENT_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
];

/// One encoded WebP rendition.
#[derive(Debug, Clone)]
pub struct ProcessedVariant {
    /// Which rendition this is.
    pub variant: PhotoVariant,
    /// Encoded WebP bytes.
    pub data: Vec<u8>,
    /// Actual output width in pixels.
    pub width: u32,
    /// Actual output height in pixels.
    pub height: u32,
}

/// Stateless image processor producing the WebP variant family.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageProcessor;

impl ImageProcessor {
    /// Creates a new processor.
    pub fn new() -> Self {
        Self
    }

    /// Returns whether the content type is accepted for upload.
    pub fn is_supported_content_type(content_type: &str) -> bool {
        SUPPORTED_CONTENT_TYPES
            .iter()
            .any(|(ct, _)| *ct == content_type)
    }

    /// Returns the file extension for a supported content type.
    pub fn extension_for(content_type: &str) -> Option<&'static str> {
        SUPPORTED_CONTENT_TYPES
            .iter()
            .find(|(ct, _)| *ct == content_type)
            .map(|(_, ext)| *ext)
    }

    /// Decodes the upload and produces all WebP variants, smallest first.
    ///
    /// Images narrower than a variant's target width are re-encoded at their
    /// original size rather than upscaled.
    pub fn process(&self, data: &[u8]) -> Result<Vec<ProcessedVariant>> {
        let image = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| ServiceError::image(format!("unreadable image data: {}", e)))?
            .decode()
            .map_err(|e| ServiceError::image(format!("failed to decode image: {}", e)))?;

        tracing::debug!(
            target: TRACING_TARGET,
            width = image.width(),
            height = image.height(),
            "decoded uploaded image"
        );

        PhotoVariant::ALL
            .into_iter()
            .map(|variant| self.encode_variant(&image, variant))
            .collect()
    }

    /// Downscales (if needed) and encodes a single variant.
    fn encode_variant(
        &self,
        image: &DynamicImage,
        variant: PhotoVariant,
    ) -> Result<ProcessedVariant> {
        let target_width = variant.width();

        let resized = if image.width() > target_width {
            let target_height = (u64::from(image.height()) * u64::from(target_width)
                / u64::from(image.width())) as u32;
            image.resize_exact(target_width, target_height.max(1), FilterType::Lanczos3)
        } else {
            image.clone()
        };

        let mut buffer = Vec::new();
        resized
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::WebP)
            .map_err(|e| ServiceError::image(format!("failed to encode WebP: {}", e)))?;

        tracing::debug!(
            target: TRACING_TARGET,
            variant = variant.suffix(),
            width = resized.width(),
            height = resized.height(),
            bytes = buffer.len(),
            "encoded photo variant"
        );

        Ok(ProcessedVariant {
            variant,
            width: resized.width(),
            height: resized.height(),
            data: buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use image::RgbImage;

    use super::*;

    /// Encodes a solid-color test image as PNG bytes.
    fn png_fixture(width: u32, height: u32) -> Vec<u8> {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(
            width,
            height,
            image::Rgb([120, 80, 40]),
        ));
        let mut buffer = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .unwrap();
        buffer
    }

    #[test]
    fn supported_content_types() {
        assert!(ImageProcessor::is_supported_content_type("image/jpeg"));
        assert!(ImageProcessor::is_supported_content_type("image/png"));
        assert!(ImageProcessor::is_supported_content_type("image/webp"));
        assert!(!ImageProcessor::is_supported_content_type("image/gif"));
        assert!(!ImageProcessor::is_supported_content_type("application/pdf"));

        assert_eq!(ImageProcessor::extension_for("image/png"), Some("png"));
        assert_eq!(ImageProcessor::extension_for("text/html"), None);
    }

    #[test]
    fn produces_one_rendition_per_variant() {
        let variants = ImageProcessor::new().process(&png_fixture(2000, 1000)).unwrap();
        assert_eq!(variants.len(), PhotoVariant::ALL.len());

        for processed in &variants {
            assert_eq!(processed.width, processed.variant.width());
            // WebP files start with a RIFF container header.
            assert_eq!(&processed.data[..4], b"RIFF");
            assert_eq!(&processed.data[8..12], b"WEBP");
        }

        // Aspect ratio 2:1 is preserved.
        let thumb = &variants[0];
        assert_eq!(thumb.height, thumb.width / 2);
    }

    #[test]
    fn never_upscales_small_images() {
        let variants = ImageProcessor::new().process(&png_fixture(100, 60)).unwrap();

        for processed in variants {
            assert_eq!(processed.width, 100);
            assert_eq!(processed.height, 60);
        }
    }

    #[test]
    fn rejects_garbage_data() {
        let err = ImageProcessor::new().process(b"definitely not an image").unwrap_err();
        assert!(matches!(err, ServiceError::Image(_)));
    }
}
