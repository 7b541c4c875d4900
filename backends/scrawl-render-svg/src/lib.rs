//! SVG Renderer: where strokes become scalable vector paths
//!
//! Unlike the raster renderer, this backend emits the laid-out strokes
//! directly as SVG path commands. The result scales without quality loss and
//! keeps each pen stroke addressable as its own `<path>` element.
//!
//! ## How it works
//!
//! 1. Takes laid-out strokes from any scribe
//! 2. Emits the paper backdrop as a rect (plus a `<pattern>` for ruled paper)
//! 3. Converts each stroke's path to SVG path data
//! 4. Returns a complete SVG document as `RenderOutput::Vector`

use kurbo::PathEl;
use scrawl_core::{
    error::{RenderError, Result},
    traits::Renderer,
    types::{RenderOutput, ScriptResult, VectorData, VectorFormat},
    Backdrop, Color, RenderParams,
};
use std::fmt::Write as FmtWrite;

/// SVG vector renderer
#[derive(Debug, Default)]
pub struct SvgRenderer;

impl SvgRenderer {
    pub fn new() -> Self {
        Self
    }
}

fn rgb(color: Color) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

/// Convert a kurbo path to SVG path data
fn path_data(path: &kurbo::BezPath) -> String {
    let mut d = String::new();
    for element in path.elements() {
        match *element {
            PathEl::MoveTo(p) => {
                let _ = write!(&mut d, "M {:.2} {:.2} ", p.x, p.y);
            },
            PathEl::LineTo(p) => {
                let _ = write!(&mut d, "L {:.2} {:.2} ", p.x, p.y);
            },
            PathEl::QuadTo(c, p) => {
                let _ = write!(&mut d, "Q {:.2} {:.2} {:.2} {:.2} ", c.x, c.y, p.x, p.y);
            },
            PathEl::CurveTo(c1, c2, p) => {
                let _ = write!(
                    &mut d,
                    "C {:.2} {:.2} {:.2} {:.2} {:.2} {:.2} ",
                    c1.x, c1.y, c2.x, c2.y, p.x, p.y
                );
            },
            PathEl::ClosePath => d.push_str("Z "),
        }
    }
    d.trim_end().to_string()
}

/// Emit the backdrop: a paper rect, plus a tile pattern for ruled styles
fn write_backdrop(svg: &mut String, backdrop: &Backdrop) -> std::fmt::Result {
    let paper = backdrop.paper();

    let pattern = match *backdrop {
        Backdrop::Solid(_) => None,
        Backdrop::Lined { rule, spacing, .. } => Some((
            spacing,
            format!(
                r#"<rect x="0" y="{:.0}" width="{:.0}" height="1" fill="{}"/>"#,
                spacing - 1.0,
                spacing,
                rgb(rule)
            ),
        )),
        Backdrop::Grid { rule, spacing, .. } => Some((
            spacing,
            format!(
                r#"<rect x="0" y="0" width="{s:.0}" height="1" fill="{c}"/><rect x="0" y="0" width="1" height="{s:.0}" fill="{c}"/>"#,
                s = spacing,
                c = rgb(rule)
            ),
        )),
        Backdrop::Dotted { rule, spacing, .. } => Some((
            spacing,
            format!(r#"<circle cx="0" cy="0" r="1" fill="{}"/>"#, rgb(rule)),
        )),
    };

    writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, rgb(paper))?;

    if let Some((spacing, tile)) = pattern {
        writeln!(
            svg,
            r#"  <defs><pattern id="paper" width="{s:.0}" height="{s:.0}" patternUnits="userSpaceOnUse">{tile}</pattern></defs>"#,
            s = spacing,
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="url(#paper)"/>"##)?;
    }

    Ok(())
}

impl Renderer for SvgRenderer {
    fn name(&self) -> &'static str {
        "svg"
    }

    fn render(&self, script: &ScriptResult, params: &RenderParams) -> Result<RenderOutput> {
        log::debug!("SvgRenderer: rendering {} strokes as vector paths", script.strokes.len());

        let width = params.canvas_width;
        let height = (script.content_height.ceil() as u32).max(params.min_height);

        let mut svg = String::new();
        let result: std::fmt::Result = (|| {
            writeln!(&mut svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
            writeln!(
                &mut svg,
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {w} {h}" width="{w}" height="{h}">"#,
                w = width,
                h = height
            )?;

            write_backdrop(&mut svg, &params.backdrop)?;

            for stroke in &script.strokes {
                writeln!(
                    &mut svg,
                    r#"  <path d="{}" fill="none" stroke="{}" stroke-width="{:.2}" stroke-linecap="round" stroke-linejoin="round"/>"#,
                    path_data(&stroke.path),
                    rgb(stroke.color),
                    stroke.width
                )?;
            }

            writeln!(&mut svg, "</svg>")
        })();
        result.map_err(|_| RenderError::PathBuildingFailed)?;

        Ok(RenderOutput::Vector(VectorData { format: VectorFormat::Svg, data: svg }))
    }
}
