//! The engine that drives text through three stages to become paper

// this_file: crates/scrawl-core/src/pipeline.rs

use crate::{
    error::{Result, ScrawlError},
    traits::{Exporter, Renderer, Scribe},
    types::RenderOutput,
    RenderParams, StyleParams,
};
use std::sync::Arc;

/// Pipeline for handwriting synthesis: Scribe → Render → Export
///
/// Every invocation is one complete, synchronous pass: all strokes are
/// regenerated from the current style, the surface is repainted from scratch,
/// and the exporter reads a fully settled render. There is no incremental
/// update and no cross-pass cache, so changed parameters always show up in the
/// very next call.
///
/// ```ignore
/// use scrawl_core::Pipeline;
///
/// let pipeline = Pipeline::builder()
///     .scribe(Arc::new(HandwritingScribe::new()))
///     .renderer(Arc::new(SkiaRenderer::new()))
///     .exporter(Arc::new(PngExporter::new()))
///     .build()?;
///
/// let bytes = pipeline.process("Hello, world!", &style, &render_params)?;
/// ```
pub struct Pipeline {
    scribe: Option<Arc<dyn Scribe>>,
    renderer: Option<Arc<dyn Renderer>>,
    exporter: Option<Arc<dyn Exporter>>,
}

impl Pipeline {
    /// Start building a new pipeline
    pub fn builder() -> PipelineBuilder {
        PipelineBuilder::new()
    }

    /// Send text through all three stages and get the final bytes
    pub fn process(
        &self,
        text: &str,
        style: &StyleParams,
        render_params: &RenderParams,
    ) -> Result<Vec<u8>> {
        let exporter = self
            .exporter
            .as_ref()
            .ok_or_else(|| ScrawlError::ConfigError("No exporter configured".into()))?;

        let rendered = self.render(text, style, render_params)?;
        exporter.export(&rendered)
    }

    /// Run only the scribing and rendering stages
    ///
    /// Useful for callers that paint to a live surface and export separately.
    pub fn render(
        &self,
        text: &str,
        style: &StyleParams,
        render_params: &RenderParams,
    ) -> Result<RenderOutput> {
        let scribe = self
            .scribe
            .as_ref()
            .ok_or_else(|| ScrawlError::ConfigError("No scribe configured".into()))?;
        let renderer = self
            .renderer
            .as_ref()
            .ok_or_else(|| ScrawlError::ConfigError("No renderer configured".into()))?;

        log::debug!("Scribing with backend: {}", scribe.name());
        let script = scribe.scribe(text, style)?;
        log::debug!(
            "Rendering {} strokes (content height {:.0}) with backend: {}",
            script.strokes.len(),
            script.content_height,
            renderer.name()
        );
        renderer.render(&script, render_params)
    }
}

/// Build pipelines your way, piece by piece
pub struct PipelineBuilder {
    scribe: Option<Arc<dyn Scribe>>,
    renderer: Option<Arc<dyn Renderer>>,
    exporter: Option<Arc<dyn Exporter>>,
}

impl PipelineBuilder {
    /// Start with a clean slate
    pub fn new() -> Self {
        Self { scribe: None, renderer: None, exporter: None }
    }

    /// Choose who turns characters into strokes
    pub fn scribe(mut self, scribe: Arc<dyn Scribe>) -> Self {
        self.scribe = Some(scribe);
        self
    }

    /// Choose who turns strokes into images
    pub fn renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = Some(renderer);
        self
    }

    /// Choose who packages the final output
    pub fn exporter(mut self, exporter: Arc<dyn Exporter>) -> Self {
        self.exporter = Some(exporter);
        self
    }

    /// Create the pipeline, ready to run
    pub fn build(self) -> Result<Pipeline> {
        Ok(Pipeline {
            scribe: self.scribe,
            renderer: self.renderer,
            exporter: self.exporter,
        })
    }
}

impl Default for PipelineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BitmapData, ScriptResult, Stroke};
    use crate::Color;
    use kurbo::{BezPath, Point};
    use std::sync::Arc;

    // Mock implementations for testing
    struct MockScribe;
    impl Scribe for MockScribe {
        fn name(&self) -> &'static str {
            "MockScribe"
        }
        fn scribe(&self, text: &str, style: &StyleParams) -> Result<ScriptResult> {
            let strokes = text
                .chars()
                .filter(|ch| *ch != ' ')
                .enumerate()
                .map(|(i, ch)| {
                    let anchor = Point::new(i as f64 * 10.0, 80.0);
                    let mut path = BezPath::new();
                    path.move_to(anchor);
                    path.line_to(Point::new(anchor.x + style.letter_size, anchor.y));
                    Stroke { ch, anchor, path, width: style.stroke_width, color: Color::INK }
                })
                .collect();
            Ok(ScriptResult { strokes, content_height: 80.0 + style.line_spacing })
        }
    }

    struct MockRenderer;
    impl Renderer for MockRenderer {
        fn name(&self) -> &'static str {
            "MockRenderer"
        }
        fn render(&self, script: &ScriptResult, params: &RenderParams) -> Result<RenderOutput> {
            let width = params.canvas_width;
            let height = (script.content_height.ceil() as u32).max(1);
            Ok(RenderOutput::Bitmap(BitmapData {
                width,
                height,
                data: vec![0u8; (width * height * 4) as usize],
            }))
        }
    }

    struct MockExporter;
    impl Exporter for MockExporter {
        fn name(&self) -> &'static str {
            "MockExporter"
        }
        fn export(&self, output: &RenderOutput) -> Result<Vec<u8>> {
            match output {
                RenderOutput::Bitmap(bitmap) => Ok(bitmap.data.clone()),
                RenderOutput::Vector(vector) => Ok(vector.data.clone().into_bytes()),
            }
        }
        fn extension(&self) -> &'static str {
            "bin"
        }
        fn mime_type(&self) -> &'static str {
            "application/octet-stream"
        }
    }

    fn full_pipeline() -> Pipeline {
        let pipeline = Pipeline::builder()
            .scribe(Arc::new(MockScribe))
            .renderer(Arc::new(MockRenderer))
            .exporter(Arc::new(MockExporter))
            .build();
        match pipeline {
            Ok(pipeline) => pipeline,
            Err(e) => unreachable!("pipeline build failed: {e}"),
        }
    }

    #[test]
    fn test_pipeline_builder() {
        let pipeline = Pipeline::builder()
            .scribe(Arc::new(MockScribe))
            .renderer(Arc::new(MockRenderer))
            .exporter(Arc::new(MockExporter))
            .build();
        assert!(pipeline.is_ok());
    }

    #[test]
    fn test_pipeline_process() {
        let pipeline = full_pipeline();
        let result =
            pipeline.process("Hello", &StyleParams::default(), &RenderParams::default());
        match result {
            Ok(bytes) => assert!(!bytes.is_empty()),
            Err(e) => unreachable!("pipeline process failed: {e}"),
        }
    }

    #[test]
    fn test_pipeline_missing_scribe() {
        let pipeline = Pipeline::builder()
            .renderer(Arc::new(MockRenderer))
            .exporter(Arc::new(MockExporter))
            .build();
        let pipeline = match pipeline {
            Ok(pipeline) => pipeline,
            Err(e) => unreachable!("pipeline build failed: {e}"),
        };
        let result = pipeline.process("Hello", &StyleParams::default(), &RenderParams::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_pipeline_missing_renderer() {
        let pipeline = Pipeline::builder()
            .scribe(Arc::new(MockScribe))
            .exporter(Arc::new(MockExporter))
            .build();
        let pipeline = match pipeline {
            Ok(pipeline) => pipeline,
            Err(e) => unreachable!("pipeline build failed: {e}"),
        };
        let result = pipeline.process("Hello", &StyleParams::default(), &RenderParams::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_pipeline_missing_exporter() {
        let pipeline = Pipeline::builder()
            .scribe(Arc::new(MockScribe))
            .renderer(Arc::new(MockRenderer))
            .build();
        let pipeline = match pipeline {
            Ok(pipeline) => pipeline,
            Err(e) => unreachable!("pipeline build failed: {e}"),
        };
        let result = pipeline.process("Hello", &StyleParams::default(), &RenderParams::default());
        assert!(result.is_err());

        // Render-only still works without an exporter
        let rendered = pipeline.render("Hello", &StyleParams::default(), &RenderParams::default());
        assert!(rendered.is_ok());
    }

    #[test]
    fn test_pipeline_empty_text() {
        let pipeline = full_pipeline();
        let result = pipeline.process("", &StyleParams::default(), &RenderParams::default());
        assert!(result.is_ok());
    }
}
