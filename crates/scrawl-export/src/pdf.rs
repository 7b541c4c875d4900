//! PDF export format
//!
//! Places the rendered bitmap onto A4 pages with the `pdf-writer` crate:
//! 10mm margins and a 190mm-wide image box. Content taller than one image box
//! is sliced vertically, one slice per page, so nothing gets clipped.

use flate2::write::ZlibEncoder;
use flate2::Compression;
use pdf_writer::{Content, Filter, Name, Pdf, Rect, Ref};
use scrawl_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{BitmapData, RenderOutput},
};
use std::io::Write;

const MM_TO_PT: f32 = 72.0 / 25.4;

// A4 portrait
const PAGE_WIDTH: f32 = 210.0 * MM_TO_PT;
const PAGE_HEIGHT: f32 = 297.0 * MM_TO_PT;

// Image box: 10mm margins, 190 x 142.5mm
const MARGIN: f32 = 10.0 * MM_TO_PT;
const BOX_WIDTH: f32 = 190.0 * MM_TO_PT;
const BOX_HEIGHT: f32 = 142.5 * MM_TO_PT;

/// PDF exporter for rendering results
///
/// One vertical slice of the bitmap per page, each slice at the image box's
/// aspect ratio so nothing is stretched; a short final slice is placed at
/// proportional height.
pub struct PdfExporter;

impl PdfExporter {
    /// Create a new PDF exporter
    pub fn new() -> Self {
        Self
    }

    fn export_bitmap(&self, bitmap: &BitmapData) -> Result<Vec<u8>> {
        if bitmap.width == 0 || bitmap.height == 0 {
            return Err(ExportError::EncodingFailed("empty bitmap".into()).into());
        }
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

        // Rows per page at the image box's aspect ratio (190 : 142.5 = 4 : 3)
        let rows_per_page = ((bitmap.width as f32 * BOX_HEIGHT / BOX_WIDTH) as u32).max(1);
        let page_count = bitmap.height.div_ceil(rows_per_page);

        log::debug!(
            "PdfExporter: {}x{} bitmap, {} rows/page, {} page(s)",
            bitmap.width,
            bitmap.height,
            rows_per_page,
            page_count
        );

        let mut pdf = Pdf::new();
        let mut alloc = Ref::new(1);
        let catalog_id = alloc.bump();
        let page_tree_id = alloc.bump();

        let mut page_ids = Vec::with_capacity(page_count as usize);
        for _ in 0..page_count {
            page_ids.push(alloc.bump());
        }

        pdf.catalog(catalog_id).pages(page_tree_id);
        {
            let mut pages = pdf.pages(page_tree_id);
            pages.kids(page_ids.iter().copied());
            pages.count(page_count as i32);
        }

        for (index, &page_id) in page_ids.iter().enumerate() {
            let image_id = alloc.bump();
            let content_id = alloc.bump();

            let top_row = index as u32 * rows_per_page;
            let rows = rows_per_page.min(bitmap.height - top_row);

            {
                let mut page = pdf.page(page_id);
                page.media_box(Rect::new(0.0, 0.0, PAGE_WIDTH, PAGE_HEIGHT));
                page.parent(page_tree_id);
                page.contents(content_id);
                page.resources().x_objects().pair(Name(b"Im0"), image_id);
            }

            let compressed = compress_rgb_slice(bitmap, top_row, rows)?;
            {
                let mut image = pdf.image_xobject(image_id, &compressed);
                image.filter(Filter::FlateDecode);
                image.width(bitmap.width as i32);
                image.height(rows as i32);
                image.color_space().device_rgb();
                image.bits_per_component(8);
            }

            // A short final slice shrinks the box rather than stretching
            let box_height = BOX_HEIGHT * rows as f32 / rows_per_page as f32;
            let mut content = Content::new();
            content.save_state();
            content.transform([
                BOX_WIDTH,
                0.0,
                0.0,
                box_height,
                MARGIN,
                PAGE_HEIGHT - MARGIN - box_height,
            ]);
            content.x_object(Name(b"Im0"));
            content.restore_state();
            pdf.stream(content_id, &content.finish());
        }

        Ok(pdf.finish())
    }
}

/// Strip alpha from a row range and deflate it for a FlateDecode image stream
fn compress_rgb_slice(bitmap: &BitmapData, top_row: u32, rows: u32) -> Result<Vec<u8>> {
    let start = (top_row * bitmap.width * 4) as usize;
    let end = ((top_row + rows) * bitmap.width * 4) as usize;

    let mut rgb = Vec::with_capacity((rows * bitmap.width * 3) as usize);
    for px in bitmap.data[start..end].chunks_exact(4) {
        rgb.extend_from_slice(&px[..3]);
    }

    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(&rgb)
        .map_err(|e| ExportError::EncodingFailed(format!("deflate failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| ExportError::EncodingFailed(format!("deflate failed: {}", e)).into())
}

impl Exporter for PdfExporter {
    fn name(&self) -> &'static str {
        "pdf"
    }

    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>> {
        match output {
            RenderOutput::Bitmap(bitmap) => self.export_bitmap(bitmap),
            _ => Err(ExportError::FormatNotSupported(
                "PDF exporter only supports bitmap output".into(),
            )
            .into()),
        }
    }

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn mime_type(&self) -> &'static str {
        "application/pdf"
    }
}

impl Default for PdfExporter {
    fn default() -> Self {
        Self::new()
    }
}
