//! SVG export format
//!
//! The vector renderer already produces a complete SVG document; this
//! exporter hands its bytes through and rejects everything else.

use scrawl_core::{
    error::{ExportError, Result},
    traits::Exporter,
    types::{RenderOutput, VectorFormat},
};

/// SVG exporter for vector rendering results
pub struct SvgExporter;

impl SvgExporter {
    /// Create a new SVG exporter
    pub fn new() -> Self {
        Self
    }
}

impl Exporter for SvgExporter {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>> {
        match output {
            RenderOutput::Vector(vector) if vector.format == VectorFormat::Svg => {
                Ok(vector.data.clone().into_bytes())
            },
            _ => Err(ExportError::FormatNotSupported(
                "SVG exporter requires vector output from an SVG renderer".into(),
            )
            .into()),
        }
    }

    fn extension(&self) -> &'static str {
        "svg"
    }

    fn mime_type(&self) -> &'static str {
        "image/svg+xml"
    }
}

impl Default for SvgExporter {
    fn default() -> Self {
        Self::new()
    }
}
