//! Skia Renderer - rasterization via tiny-skia
//!
//! Turns laid-out strokes into an anti-aliased RGBA bitmap: paints the paper
//! backdrop (solid color or a generated lined/grid/dotted pattern), then
//! strokes every path with round caps and joins, the way a felt pen would
//! leave the line.
//!
//! The surface is sized from the script's content height, never below the
//! configured minimum, so exporters can see everything the scribe produced.

use kurbo::PathEl;
use scrawl_core::{
    error::{RenderError, Result},
    traits::Renderer,
    types::{BitmapData, RenderOutput, ScriptResult},
    Backdrop, Color, RenderParams,
};
use tiny_skia::{LineCap, LineJoin, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// tiny-skia powered renderer for scrawl output
pub struct SkiaRenderer {
    /// Maximum surface dimension to prevent memory exhaustion
    max_size: u32,
}

impl SkiaRenderer {
    pub fn new() -> Self {
        Self { max_size: 65535 }
    }

    /// Surface height for a script: content height rounded up, floored at the
    /// configured minimum.
    fn surface_height(script: &ScriptResult, params: &RenderParams) -> u32 {
        (script.content_height.ceil() as u32).max(params.min_height)
    }

    fn paint_backdrop(pixmap: &mut Pixmap, backdrop: &Backdrop, antialias: bool) {
        let paper = backdrop.paper();
        pixmap.fill(to_skia_color(paper));

        let (rule, spacing, kind) = match *backdrop {
            Backdrop::Solid(_) => return,
            Backdrop::Lined { rule, spacing, .. } => (rule, spacing, Pattern::Lined),
            Backdrop::Grid { rule, spacing, .. } => (rule, spacing, Pattern::Grid),
            Backdrop::Dotted { rule, spacing, .. } => (rule, spacing, Pattern::Dotted),
        };
        if spacing < 1.0 {
            return;
        }

        let mut paint = Paint::default();
        paint.set_color(to_skia_color(rule));
        paint.anti_alias = antialias;

        let width = pixmap.width() as f32;
        let height = pixmap.height() as f32;
        let step = spacing as f32;

        match kind {
            Pattern::Lined => {
                // A 1px rule at the bottom of each tile, like ruled paper
                let mut y = step - 1.0;
                while y < height {
                    fill_rect(pixmap, &paint, 0.0, y, width, 1.0);
                    y += step;
                }
            },
            Pattern::Grid => {
                let mut y = 0.0;
                while y < height {
                    fill_rect(pixmap, &paint, 0.0, y, width, 1.0);
                    y += step;
                }
                let mut x = 0.0;
                while x < width {
                    fill_rect(pixmap, &paint, x, 0.0, 1.0, height);
                    x += step;
                }
            },
            Pattern::Dotted => {
                let mut y = 0.0;
                while y < height {
                    let mut x = 0.0;
                    while x < width {
                        if let Some(circle) = PathBuilder::from_circle(x, y, 1.0) {
                            pixmap.fill_path(
                                &circle,
                                &paint,
                                tiny_skia::FillRule::Winding,
                                Transform::identity(),
                                None,
                            );
                        }
                        x += step;
                    }
                    y += step;
                }
            },
        }
    }
}

enum Pattern {
    Lined,
    Grid,
    Dotted,
}

fn fill_rect(pixmap: &mut Pixmap, paint: &Paint, x: f32, y: f32, w: f32, h: f32) {
    if let Some(rect) = tiny_skia::Rect::from_xywh(x, y, w, h) {
        pixmap.fill_rect(rect, paint, Transform::identity(), None);
    }
}

fn to_skia_color(color: Color) -> tiny_skia::Color {
    tiny_skia::Color::from_rgba8(color.r, color.g, color.b, color.a)
}

/// Translate a kurbo path into tiny-skia's native format
fn to_skia_path(path: &kurbo::BezPath) -> Option<tiny_skia::Path> {
    let mut builder = PathBuilder::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => builder.move_to(p.x as f32, p.y as f32),
            PathEl::LineTo(p) => builder.line_to(p.x as f32, p.y as f32),
            PathEl::QuadTo(c, p) => {
                builder.quad_to(c.x as f32, c.y as f32, p.x as f32, p.y as f32)
            },
            PathEl::CurveTo(c1, c2, p) => builder.cubic_to(
                c1.x as f32,
                c1.y as f32,
                c2.x as f32,
                c2.y as f32,
                p.x as f32,
                p.y as f32,
            ),
            PathEl::ClosePath => builder.close(),
        }
    }
    builder.finish()
}

impl Default for SkiaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl Renderer for SkiaRenderer {
    fn name(&self) -> &'static str {
        "skia"
    }

    fn render(&self, script: &ScriptResult, params: &RenderParams) -> Result<RenderOutput> {
        let width = params.canvas_width;
        let height = Self::surface_height(script, params);

        if width == 0 || height == 0 || width > self.max_size || height > self.max_size {
            return Err(RenderError::InvalidDimensions { width, height }.into());
        }

        log::debug!(
            "SkiaRenderer: {}x{} surface, {} strokes",
            width,
            height,
            script.strokes.len()
        );

        let mut pixmap =
            Pixmap::new(width, height).ok_or(RenderError::SurfaceAllocation)?;

        Self::paint_backdrop(&mut pixmap, &params.backdrop, params.antialias);

        for stroke in &script.strokes {
            let path = match to_skia_path(&stroke.path) {
                Some(path) => path,
                None => {
                    log::warn!("SkiaRenderer: unbuildable path for {:?}, skipping", stroke.ch);
                    continue;
                },
            };

            let mut paint = Paint::default();
            paint.set_color(to_skia_color(stroke.color));
            paint.anti_alias = params.antialias;

            let pen = Stroke {
                width: stroke.width as f32,
                line_cap: LineCap::Round,
                line_join: LineJoin::Round,
                ..Stroke::default()
            };

            pixmap.stroke_path(&path, &paint, &pen, Transform::identity(), None);
        }

        Ok(RenderOutput::Bitmap(BitmapData {
            width,
            height,
            data: pixmap.take(),
        }))
    }
}
