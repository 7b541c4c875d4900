//! Scrawl Core: three stages from text to paper
//!
//! Text enters as characters, exits as a hand-drawn-looking document. This
//! crate holds the pipeline that makes that transformation possible through
//! three distinct stages:
//!
//! 1. **Scribing** - Characters become jittered pen strokes, laid out line by line
//! 2. **Rendering** - Strokes become pixels or vectors over a paper backdrop
//! 3. **Export** - Final output emerges as PNG, SVG, or PDF
//!
//! ## The Traits That Power Everything
//!
//! Want to add your own backend? Implement one of these:
//!
//! - [`Scribe`] - Where characters become strokes
//! - [`Renderer`] - Where strokes become images
//! - [`Exporter`] - Where images become files
//!
//! Data flows through the types in [`types`] - these structures carry the
//! results from one stage to the next. Every scribing pass regenerates all
//! strokes from the current [`StyleParams`]; nothing is cached between passes,
//! so parameter changes always take effect immediately.

use serde::{Deserialize, Serialize};

pub mod error;
pub mod pipeline;
pub mod traits;

pub use error::{Result, ScrawlError};
pub use pipeline::{Pipeline, PipelineBuilder};
pub use traits::{Exporter, Renderer, Scribe};

/// The data structures that power the pipeline
pub mod types {
    use super::Color;
    use kurbo::{BezPath, Point};

    /// One drawable pen stroke: an absolute-coordinate path plus paint info.
    ///
    /// Produced fresh by every scribing pass and owned by it; the next pass
    /// discards and regenerates the whole set.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Stroke {
        /// The (case-folded) character this stroke draws
        pub ch: char,
        /// Baseline anchor the glyph was instantiated at
        pub anchor: Point,
        /// Absolute path; glyphs extend above and right of the anchor
        pub path: BezPath,
        /// Pen thickness in pixels
        pub width: f64,
        /// Ink color
        pub color: Color,
    }

    /// What emerges after scribing: strokes in reading order, plus the final
    /// cursor height so renderers and exporters can size the page.
    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct ScriptResult {
        pub strokes: Vec<Stroke>,
        /// Vertical cursor position after the last line was finished
        pub content_height: f64,
    }

    /// The two forms render output can take
    #[derive(Debug, Clone)]
    pub enum RenderOutput {
        Bitmap(BitmapData),
        Vector(VectorData),
    }

    /// Raw RGBA8 pixel data from a rasterized surface
    #[derive(Debug, Clone)]
    pub struct BitmapData {
        pub width: u32,
        pub height: u32,
        /// Tightly packed rows, 4 bytes per pixel
        pub data: Vec<u8>,
    }

    /// Scalable markup instead of pixels
    #[derive(Debug, Clone)]
    pub struct VectorData {
        pub format: VectorFormat,
        pub data: String,
    }

    /// Which vector format we're speaking
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum VectorFormat {
        Svg,
    }
}

/// How the handwriting should look
///
/// One value per control-panel slider; every field feeds every scribing pass.
/// Out-of-range values can be folded back with [`Self::clamped`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleParams {
    /// Extra horizontal gap after a non-space glyph, pixels, [2, 20]
    pub letter_spacing: f64,
    /// Horizontal advance for a space character, pixels, [10, 40]
    pub word_spacing: f64,
    /// Nominal glyph height/width unit, pixels, [8, 32]
    pub letter_size: f64,
    /// Vertical advance per line, pixels, [16, 48]
    pub line_spacing: f64,
    /// Rendered line thickness, pixels, [1, 5]
    pub stroke_width: f64,
    /// Magnitude of positional noise on every control point, [0, 2]
    pub jitter: f64,
}

impl Default for StyleParams {
    fn default() -> Self {
        Self {
            letter_spacing: 8.0,
            word_spacing: 20.0,
            letter_size: 16.0,
            line_spacing: 24.0,
            stroke_width: 2.0,
            jitter: 0.3,
        }
    }
}

impl StyleParams {
    /// Fold every field back into its documented range.
    pub fn clamped(self) -> Self {
        Self {
            letter_spacing: self.letter_spacing.clamp(2.0, 20.0),
            word_spacing: self.word_spacing.clamp(10.0, 40.0),
            letter_size: self.letter_size.clamp(8.0, 32.0),
            line_spacing: self.line_spacing.clamp(16.0, 48.0),
            stroke_width: self.stroke_width.clamp(1.0, 5.0),
            jitter: self.jitter.clamp(0.0, 2.0),
        }
    }
}

/// How rendering should look
#[derive(Debug, Clone)]
pub struct RenderParams {
    /// Paper behind the strokes; opaque from the core's point of view.
    /// Ink color travels on each [`types::Stroke`], not here.
    pub backdrop: Backdrop,
    /// Surface width in pixels
    pub canvas_width: u32,
    /// Surfaces never shrink below this height even for short content
    pub min_height: u32,
    pub antialias: bool,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            backdrop: Backdrop::Solid(Color::WHITE),
            canvas_width: 800,
            min_height: 600,
            antialias: true,
        }
    }
}

/// Paper styles: a solid color or a generated repeating pattern.
///
/// The preset constructors place a rule line or dot every [`Backdrop::TILE`]
/// pixels, drawn in [`Color::RULE`] over white.
#[derive(Debug, Clone, PartialEq)]
pub enum Backdrop {
    Solid(Color),
    Lined { paper: Color, rule: Color, spacing: f64 },
    Grid { paper: Color, rule: Color, spacing: f64 },
    Dotted { paper: Color, rule: Color, spacing: f64 },
}

impl Backdrop {
    /// Default pattern tile size in pixels
    pub const TILE: f64 = 24.0;

    pub fn lined() -> Self {
        Self::Lined { paper: Color::WHITE, rule: Color::RULE, spacing: Self::TILE }
    }

    pub fn grid() -> Self {
        Self::Grid { paper: Color::WHITE, rule: Color::RULE, spacing: Self::TILE }
    }

    pub fn dotted() -> Self {
        Self::Dotted { paper: Color::WHITE, rule: Color::RULE, spacing: Self::TILE }
    }

    /// The base paper color, whatever the pattern
    pub fn paper(&self) -> Color {
        match *self {
            Self::Solid(paper)
            | Self::Lined { paper, .. }
            | Self::Grid { paper, .. }
            | Self::Dotted { paper, .. } => paper,
        }
    }
}

/// Simple RGBA color that works everywhere
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Default ink, a dark violet pen
    pub const INK: Self = Self::rgb(0x2d, 0x1b, 0x69);
    /// Ruled-line gray used by the paper patterns
    pub const RULE: Self = Self::rgb(0xe2, 0xe8, 0xf0);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
    /// Cream paper preset
    pub const CREAM: Self = Self::rgb(0xfe, 0xf7, 0xed);
    /// Yellow paper preset
    pub const YELLOW: Self = Self::rgb(0xfe, 0xfc, 0xe8);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Parse `#rrggbb` or `rrggbb`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self::rgb(r, g, b))
    }
}
