//! Handwriting Scribe - parametric glyphs, jitter, and line layout
//!
//! This backend turns text into strokes the way a hurried hand would: each
//! character gets a small parametric path, every control point is nudged by
//! random jitter, and a cursor walks left to right, wrapping when it runs off
//! the page.
//!
//! ## How it works
//!
//! 1. Input splits on `\n` into logical lines, taken literally
//! 2. Each character looks up its template (or the fallback) and is
//!    instantiated at the cursor with fresh jitter
//! 3. The cursor advances by `word_spacing` for spaces, otherwise by
//!    `letter_size + letter_spacing`, and soft-wraps past the right margin
//! 4. The final cursor height is reported so callers can size the page

pub mod generator;
pub mod jitter;
mod templates;

pub use generator::{generate, JITTER_SCALE};
pub use jitter::{JitterSource, PenWobble, SteadyHand};

use kurbo::Point;
use parking_lot::Mutex;
use scrawl_core::{
    error::Result,
    traits::Scribe,
    types::ScriptResult,
    Color, StyleParams,
};

/// Horizontal start of every line, in canvas pixels
pub const LEFT_MARGIN: f64 = 60.0;
/// Vertical start of the first line
pub const TOP_MARGIN: f64 = 80.0;
/// Cursor positions past this trigger a soft wrap (800-wide canvas)
pub const RIGHT_MARGIN: f64 = 720.0;

/// The scribe that lays out jittered glyph strokes
///
/// Holds the ink color and the jitter source; everything else arrives fresh
/// with each [`Scribe::scribe`] call, so style changes always take full effect
/// on the next pass.
pub struct HandwritingScribe {
    ink: Color,
    // Scribe is &self + Sync; the RNG needs &mut, hence the lock
    noise: Mutex<Box<dyn JitterSource>>,
}

impl HandwritingScribe {
    /// A scribe with a thread-seeded pen; every pass looks different
    pub fn new() -> Self {
        Self::with_noise(Box::new(PenWobble::new()))
    }

    /// A scribe with a fixed seed for reproducible output
    pub fn seeded(seed: u64) -> Self {
        Self::with_noise(Box::new(PenWobble::seeded(seed)))
    }

    /// A scribe with a caller-supplied jitter source
    pub fn with_noise(noise: Box<dyn JitterSource>) -> Self {
        Self { ink: Color::INK, noise: Mutex::new(noise) }
    }

    /// Change the ink color (default is the dark violet pen)
    pub fn with_ink(mut self, ink: Color) -> Self {
        self.ink = ink;
        self
    }
}

impl Default for HandwritingScribe {
    fn default() -> Self {
        Self::new()
    }
}

impl Scribe for HandwritingScribe {
    fn name(&self) -> &'static str {
        "handwriting"
    }

    /// One full layout pass over `text`.
    ///
    /// Strokes come back in reading order: left to right, top to bottom. The
    /// wrap check is character-granular, after each advance, so a long word
    /// can split across lines. `content_height` is the cursor position after the last
    /// line, usable to size an export page.
    fn scribe(&self, text: &str, style: &StyleParams) -> Result<ScriptResult> {
        log::debug!("HandwritingScribe: scribing {} chars", text.chars().count());

        let mut noise = self.noise.lock();
        let mut strokes = Vec::new();
        let mut y = TOP_MARGIN;

        for line in text.split('\n') {
            let mut x = LEFT_MARGIN;
            for ch in line.chars() {
                if let Some(stroke) =
                    generate(ch, Point::new(x, y), style, self.ink, noise.as_mut())
                {
                    strokes.push(stroke);
                }

                if ch == ' ' {
                    x += style.word_spacing;
                } else {
                    x += style.letter_size + style.letter_spacing;
                }

                // Soft wrap, checked after placing each character
                if x > RIGHT_MARGIN {
                    y += style.line_spacing;
                    x = LEFT_MARGIN;
                }
            }
            y += style.line_spacing;
        }

        Ok(ScriptResult { strokes, content_height: y })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steady() -> HandwritingScribe {
        HandwritingScribe::with_noise(Box::new(SteadyHand))
    }

    fn zero_jitter() -> StyleParams {
        StyleParams { jitter: 0.0, ..StyleParams::default() }
    }

    #[test]
    fn empty_text_yields_no_strokes() {
        let script = steady().scribe("", &zero_jitter()).unwrap();
        assert!(script.strokes.is_empty());
        assert_eq!(script.content_height, TOP_MARGIN + 24.0);
    }

    #[test]
    fn basic_two_line_layout() {
        // "ab\ncd" at defaults: 4 strokes, bands at 80 and 104, anchors 60 and 84
        let script = steady().scribe("ab\ncd", &zero_jitter()).unwrap();
        assert_eq!(script.strokes.len(), 4);

        let anchors: Vec<(f64, f64)> =
            script.strokes.iter().map(|s| (s.anchor.x, s.anchor.y)).collect();
        assert_eq!(anchors, vec![(60.0, 80.0), (84.0, 80.0), (60.0, 104.0), (84.0, 104.0)]);
        assert_eq!(script.content_height, 128.0);
    }

    #[test]
    fn leading_space_advances_by_word_spacing() {
        let script = steady().scribe(" a", &zero_jitter()).unwrap();
        assert_eq!(script.strokes.len(), 1);
        assert_eq!(script.strokes[0].ch, 'a');
        assert_eq!(script.strokes[0].anchor.x, LEFT_MARGIN + 20.0);
    }

    #[test]
    fn strokes_carry_style_width_and_ink() {
        let style = StyleParams { stroke_width: 3.5, jitter: 0.0, ..StyleParams::default() };
        let scribe = steady().with_ink(Color::rgb(10, 20, 30));
        let script = scribe.scribe("x", &style).unwrap();
        assert_eq!(script.strokes[0].width, 3.5);
        assert_eq!(script.strokes[0].color, Color::rgb(10, 20, 30));
    }

    #[test]
    fn style_changes_take_effect_between_passes() {
        let scribe = steady();
        let narrow = StyleParams { letter_spacing: 2.0, jitter: 0.0, ..StyleParams::default() };
        let wide = StyleParams { letter_spacing: 20.0, jitter: 0.0, ..StyleParams::default() };
        let a = scribe.scribe("ab", &narrow).unwrap();
        let b = scribe.scribe("ab", &wide).unwrap();
        assert_eq!(a.strokes[1].anchor.x, 60.0 + 16.0 + 2.0);
        assert_eq!(b.strokes[1].anchor.x, 60.0 + 16.0 + 20.0);
    }
}
