//! The contracts that bind every backend together
//!
//! Three traits, one per pipeline role. Swap an implementation without
//! touching user code:
//!
//! - [`Scribe`] - Where characters become strokes
//! - [`Renderer`] - Where strokes become images
//! - [`Exporter`] - Where images become files

use crate::{
    error::Result,
    types::{RenderOutput, ScriptResult},
    RenderParams, StyleParams,
};

/// Where characters learn to look handwritten
///
/// A scribe walks input text, turns each character into a jittered stroke
/// path, and lays the strokes out left to right, wrapping at the page edge.
/// One call is one complete pass; the result never outlives the parameters
/// that produced it.
pub trait Scribe: Send + Sync {
    /// Identify yourself in logs and error messages
    fn name(&self) -> &'static str;

    /// Transform text into positioned strokes
    fn scribe(&self, text: &str, style: &StyleParams) -> Result<ScriptResult>;
}

/// Where strokes become visible
///
/// Rasterizers turn strokes into pixels. Vector renderers turn them into
/// markup. Both implement this trait.
pub trait Renderer: Send + Sync {
    /// Your renderer's signature
    fn name(&self) -> &'static str;

    /// Convert strokes to visual output over a paper backdrop
    fn render(&self, script: &ScriptResult, params: &RenderParams) -> Result<RenderOutput>;
}

/// The final step: images become files
///
/// Exporters know how to encode rendered output into the format users
/// actually want - PNG, SVG, PDF.
pub trait Exporter: Send + Sync {
    /// Who are you?
    fn name(&self) -> &'static str;

    /// Encode the rendered output as bytes
    fn export(&self, output: &RenderOutput) -> Result<Vec<u8>>;

    /// What file extension should be used?
    fn extension(&self) -> &'static str;

    /// What MIME type identifies your format?
    fn mime_type(&self) -> &'static str;
}
