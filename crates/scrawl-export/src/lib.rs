//! Export formats for scrawl
//!
//! The last pipeline stage: rendered output becomes bytes users can save.
//!
//! - [`PngExporter`] - bitmap output to PNG via the `image` crate
//! - [`SvgExporter`] - vector output passed through as an SVG document
//! - [`PdfExporter`] - bitmap output onto A4 pages, as many as the content
//!   height needs

pub mod pdf;
pub mod png;
pub mod svg;

pub use pdf::PdfExporter;
pub use png::PngExporter;
pub use svg::SvgExporter;
