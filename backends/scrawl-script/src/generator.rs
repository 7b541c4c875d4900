//! Glyph instantiation: template + anchor + style + noise → one stroke
//!
//! A pure function over everything except the injected jitter source. Every
//! coordinate of every control point gets its own independent noise sample,
//! which is what makes two renderings of the same character look like two
//! different pen movements.

use crate::jitter::JitterSource;
use crate::templates::{self, Segment};
use kurbo::{BezPath, Point};
use scrawl_core::{types::Stroke, Color, StyleParams};

/// Amplitude multiplier applied to `StyleParams::jitter`
///
/// A sampled offset lands in `[-JITTER_SCALE * jitter, +JITTER_SCALE * jitter]`
/// pixels, so at the maximum jitter of 2.0 a control point can stray up to
/// 4 pixels on each axis.
pub const JITTER_SCALE: f64 = 2.0;

/// Instantiate the glyph for `ch` at the baseline anchor.
///
/// Returns `None` for a space: the caller advances horizontally by
/// `word_spacing` and draws nothing. Every other character, mapped or not,
/// produces a stroke; unmapped ones share the fallback shape. Total over all
/// Unicode scalar values, no error conditions.
///
/// The returned path's bounding box stays within
/// `[x, x + letter_size] × [y - letter_size, y]` widened by at most
/// `JITTER_SCALE * jitter` on each side.
pub fn generate(
    ch: char,
    anchor: Point,
    style: &StyleParams,
    ink: Color,
    noise: &mut dyn JitterSource,
) -> Option<Stroke> {
    let template = templates::template_for(ch)?;

    let size = style.letter_size;
    let amplitude = JITTER_SCALE * style.jitter;
    let mut place = |ux: f64, uy: f64| {
        Point::new(
            anchor.x + ux * size + noise.sample() * amplitude,
            anchor.y + uy * size + noise.sample() * amplitude,
        )
    };

    let mut path = BezPath::new();
    for segment in template {
        match *segment {
            Segment::Move(x, y) => path.move_to(place(x, y)),
            Segment::Line(x, y) => path.line_to(place(x, y)),
            Segment::Quad(cx, cy, x, y) => {
                let ctrl = place(cx, cy);
                let end = place(x, y);
                path.quad_to(ctrl, end);
            },
            Segment::Close => path.close_path(),
        }
    }

    Some(Stroke {
        ch: ch.to_ascii_lowercase(),
        anchor,
        path,
        width: style.stroke_width,
        color: ink,
    })
}
