//! PNG export format
//!
//! Exports rendered bitmaps to PNG using the `image` crate.

use image::{ImageBuffer, ImageEncoder, RgbaImage};
use scrawl_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, RenderOutput},
};

/// Encode RGBA bitmap data to PNG.
///
/// Returns a valid PNG with proper IHDR, IDAT, and IEND chunks.
pub fn encode_bitmap_to_png(bitmap: &BitmapData) -> Result<Vec<u8>> {
    // Validate buffer size before processing
    let expected_size = (bitmap.width * bitmap.height * 4) as usize;
    if bitmap.data.len() < expected_size {
        return Err(ExportError::EncodingFailed(format!(
            "Buffer too small: expected {} bytes for {}x{} RGBA, got {}",
            expected_size,
            bitmap.width,
            bitmap.height,
            bitmap.data.len()
        ))
        .into());
    }

    let img: RgbaImage = ImageBuffer::from_raw(bitmap.width, bitmap.height, bitmap.data.clone())
        .ok_or_else(|| {
            ExportError::EncodingFailed("Failed to create image buffer from RGBA data".into())
        })?;

    let mut png_data = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new_with_quality(
        &mut png_data,
        image::codecs::png::CompressionType::Default,
        image::codecs::png::FilterType::Sub,
    );

    encoder
        .write_image(img.as_raw(), bitmap.width, bitmap.height, image::ExtendedColorType::Rgba8)
        .map_err(|e| ExportError::EncodingFailed(format!("PNG encoding failed: {}", e)))?;

    Ok(png_data)
}

/// PNG exporter for rendering results
pub struct PngExporter;

impl PngExporter {
    /// Create a new PNG exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for PngExporter {
    fn name(&self) -> &'static str {
        "png"
    }

    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>> {
        match output {
            RenderOutput::Bitmap(bitmap) => encode_bitmap_to_png(bitmap),
            _ => Err(ExportError::FormatNotSupported(
                "PNG exporter only supports bitmap output".into(),
            )
            .into()),
        }
    }

    fn extension(&self) -> &'static str {
        "png"
    }

    fn mime_type(&self) -> &'static str {
        "image/png"
    }
}

impl Default for PngExporter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_exporter_creation() {
        let exporter = PngExporter::new();
        assert_eq!(exporter.name(), "png");
        assert_eq!(exporter.extension(), "png");
        assert_eq!(exporter.mime_type(), "image/png");
    }

    #[test]
    fn test_png_export_rgba() {
        let exporter = PngExporter::new();

        let bitmap = BitmapData {
            width: 2,
            height: 2,
            data: vec![
                255, 0, 0, 255, // Red
                0, 255, 0, 255, // Green
                0, 0, 255, 255, // Blue
                255, 255, 255, 255, // White
            ],
        };

        let png_data = exporter.export(&RenderOutput::Bitmap(bitmap)).unwrap();

        // PNG should start with PNG magic bytes
        assert_eq!(&png_data[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
        assert!(png_data.len() > 50);
    }

    #[test]
    fn test_png_rejects_short_buffer() {
        let exporter = PngExporter::new();
        let bitmap = BitmapData { width: 4, height: 4, data: vec![0u8; 8] };
        assert!(exporter.export(&RenderOutput::Bitmap(bitmap)).is_err());
    }

    #[test]
    fn test_png_rejects_vector_output() {
        use scrawl_core::types::{VectorData, VectorFormat};
        let exporter = PngExporter::new();
        let vector = VectorData { format: VectorFormat::Svg, data: "<svg/>".into() };
        assert!(exporter.export(&RenderOutput::Vector(vector)).is_err());
    }
}
