//! The static glyph table
//!
//! Each template is a fixed sequence of drawing commands in glyph-local
//! coordinates, normalized to one unit of `letter_size`: x grows rightward in
//! `[0, 1]`, y grows upward in `[-1, 0]`, and `(0, 0)` is the baseline anchor.
//! Every glyph therefore draws above and to the right of its anchor.
//!
//! The table is read-only and built into the binary; lookup is case-folded.
//! Space has no template at all. Any character without a bespoke entry shares
//! [`FALLBACK`], an open L-shaped stroke, so the scribe always leaves a mark
//! for visible input.

/// One drawing command, in glyph-local unit coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Segment {
    Move(f64, f64),
    Line(f64, f64),
    /// Quadratic curve: control point, then end point
    Quad(f64, f64, f64, f64),
    Close,
}

use Segment::{Close, Line, Move, Quad};

pub(crate) type Template = &'static [Segment];

/// Placeholder for characters without a bespoke shape
pub(crate) const FALLBACK: Template =
    &[Move(0.0, 0.0), Line(0.0, -0.5), Line(0.5, -0.5)];

const A: Template = &[
    Move(0.0, 0.0),
    Quad(1.0 / 3.0, -0.5, 0.5, 0.0),
    Line(1.0, 0.0),
    Move(0.25, -0.25),
    Line(0.75, -0.25),
];
const B: Template = &[
    Move(0.0, -1.0),
    Line(0.0, 0.0),
    Move(0.0, -0.25),
    Quad(0.5, -0.5, 1.0, -0.25),
    Quad(0.5, 0.0, 0.0, -0.25),
];
const C: Template = &[
    Move(1.0, -1.0 / 6.0),
    Quad(0.5, -0.5, 0.0, -0.25),
    Quad(0.5, 0.0, 1.0, -1.0 / 6.0),
];
const D: Template = &[
    Move(1.0, -1.0),
    Line(1.0, 0.0),
    Move(0.0, -0.25),
    Quad(0.5, -0.5, 1.0, -0.25),
    Quad(0.5, 0.0, 0.0, -0.25),
];
const E: Template = &[
    Move(0.0, -0.25),
    Quad(0.5, -0.5, 1.0, -0.25),
    Quad(0.5, 0.0, 0.0, -0.25),
];
const F: Template = &[
    Move(0.75, -0.9),
    Quad(0.5, -1.0, 0.25, -0.9),
    Line(0.25, 0.0),
    Move(0.0, -1.0 / 3.0),
    Line(0.5, -1.0 / 3.0),
];
const G: Template = &[
    Move(0.0, -0.25),
    Quad(0.5, -0.5, 1.0, -0.25),
    Quad(0.5, 0.0, 0.0, -0.25),
    Move(1.0, -0.25),
    Line(1.0, -0.05),
    Quad(0.75, 0.0, 0.5, -0.05),
];
const H: Template = &[
    Move(0.0, -1.0),
    Line(0.0, 0.0),
    Move(0.0, -1.0 / 3.0),
    Quad(0.5, -0.5, 1.0, -1.0 / 3.0),
    Line(1.0, 0.0),
];
const I: Template = &[
    Move(0.5, -0.75),
    Line(0.5, 0.0),
    Move(0.5, -1.0),
    Line(0.5, -0.9),
];
const J: Template = &[
    Move(0.5, -0.75),
    Line(0.5, -0.1),
    Quad(0.35, 0.0, 0.2, -0.1),
    Move(0.5, -1.0),
    Line(0.5, -0.9),
];
const K: Template = &[
    Move(0.0, -1.0),
    Line(0.0, 0.0),
    Move(1.0, -0.5),
    Line(0.0, -0.25),
    Line(1.0, 0.0),
];
const L: Template = &[Move(0.5, -1.0), Line(0.5, 0.0)];
const M: Template = &[
    Move(0.0, 0.0),
    Line(0.0, -1.0 / 3.0),
    Quad(0.25, -0.5, 0.5, -1.0 / 3.0),
    Line(0.5, 0.0),
    Move(0.5, -1.0 / 3.0),
    Quad(0.75, -0.5, 1.0, -1.0 / 3.0),
    Line(1.0, 0.0),
];
const N: Template = &[
    Move(0.0, 0.0),
    Line(0.0, -1.0 / 3.0),
    Quad(0.5, -0.5, 1.0, -1.0 / 3.0),
    Line(1.0, 0.0),
];
const O: Template = &[
    Move(0.0, -0.25),
    Quad(0.5, -0.5, 1.0, -0.25),
    Quad(0.5, 0.0, 0.0, -0.25),
    Close,
];
const P: Template = &[
    Move(0.0, -0.75),
    Line(0.0, 0.0),
    Move(0.0, -0.5),
    Quad(0.5, -0.75, 1.0, -0.5),
    Quad(0.5, -0.25, 0.0, -0.5),
];
const Q: Template = &[
    Move(1.0, -0.75),
    Line(1.0, 0.0),
    Move(0.0, -0.5),
    Quad(0.5, -0.75, 1.0, -0.5),
    Quad(0.5, -0.25, 0.0, -0.5),
];
const R: Template = &[
    Move(0.0, 0.0),
    Line(0.0, -1.0 / 3.0),
    Quad(0.5, -0.5, 1.0, -1.0 / 3.0),
];
const S: Template = &[
    Move(1.0, -1.0 / 6.0),
    Quad(0.5, -0.5, 0.0, -1.0 / 6.0),
    Quad(0.5, 0.0, 1.0, 0.0),
];
const T: Template = &[
    Move(0.5, -1.0),
    Line(0.5, -1.0 / 6.0),
    Quad(0.75, 0.0, 1.0, -0.125),
    Move(0.25, -1.0 / 3.0),
    Line(0.75, -1.0 / 3.0),
];
const U: Template = &[
    Move(0.0, -1.0 / 3.0),
    Line(0.0, -1.0 / 6.0),
    Quad(0.5, 0.0, 1.0, -1.0 / 6.0),
    Line(1.0, 0.0),
];
const V: Template = &[Move(0.0, -0.5), Line(0.5, 0.0), Line(1.0, -0.5)];
const W: Template = &[
    Move(0.0, -0.5),
    Line(0.25, 0.0),
    Line(0.5, -0.4),
    Line(0.75, 0.0),
    Line(1.0, -0.5),
];
const X: Template = &[
    Move(0.0, -0.5),
    Line(1.0, 0.0),
    Move(1.0, -0.5),
    Line(0.0, 0.0),
];
const Y: Template = &[
    Move(0.0, -0.5),
    Line(0.5, -0.2),
    Move(1.0, -0.5),
    Line(0.2, 0.0),
];
const Z: Template = &[
    Move(0.0, -0.5),
    Line(1.0, -0.5),
    Line(0.0, 0.0),
    Line(1.0, 0.0),
];

/// Look up the template for a character, case-folded.
///
/// Returns `None` for a space (no visible mark) and [`FALLBACK`] for any
/// character outside `a`-`z`; the lookup is total and never fails.
pub(crate) fn template_for(ch: char) -> Option<Template> {
    if ch == ' ' {
        return None;
    }
    Some(match ch.to_ascii_lowercase() {
        'a' => A,
        'b' => B,
        'c' => C,
        'd' => D,
        'e' => E,
        'f' => F,
        'g' => G,
        'h' => H,
        'i' => I,
        'j' => J,
        'k' => K,
        'l' => L,
        'm' => M,
        'n' => N,
        'o' => O,
        'p' => P,
        'q' => Q,
        'r' => R,
        's' => S,
        't' => T,
        'u' => U,
        'v' => V,
        'w' => W,
        'x' => X,
        'y' => Y,
        'z' => Z,
        _ => FALLBACK,
    })
}
