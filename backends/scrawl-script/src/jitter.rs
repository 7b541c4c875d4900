//! Injectable randomness for the pen
//!
//! Jitter is the only side effect in the whole scribing stage, so it lives
//! behind a trait: production code wobbles, tests inject a seed or a steady
//! hand and get deterministic strokes.

/// A source of uniform noise in `[-1, 1]`
///
/// Amplitude scaling is the caller's job; see
/// [`JITTER_SCALE`](crate::generator::JITTER_SCALE).
pub trait JitterSource: Send {
    fn sample(&mut self) -> f64;
}

/// fastrand-backed wobble, the default pen
#[derive(Debug, Clone)]
pub struct PenWobble {
    rng: fastrand::Rng,
}

impl PenWobble {
    /// A pen seeded from the thread RNG; every pass looks different
    pub fn new() -> Self {
        Self { rng: fastrand::Rng::new() }
    }

    /// A pen with a fixed seed; identical seeds reproduce identical strokes
    pub fn seeded(seed: u64) -> Self {
        Self { rng: fastrand::Rng::with_seed(seed) }
    }
}

impl Default for PenWobble {
    fn default() -> Self {
        Self::new()
    }
}

impl JitterSource for PenWobble {
    fn sample(&mut self) -> f64 {
        self.rng.f64() * 2.0 - 1.0
    }
}

/// A hand that never shakes; sampled offsets are always zero
#[derive(Debug, Clone, Copy, Default)]
pub struct SteadyHand;

impl JitterSource for SteadyHand {
    fn sample(&mut self) -> f64 {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wobble_stays_in_unit_range() {
        let mut pen = PenWobble::seeded(7);
        for _ in 0..1000 {
            let s = pen.sample();
            assert!((-1.0..=1.0).contains(&s), "sample out of range: {s}");
        }
    }

    #[test]
    fn seeded_wobble_is_reproducible() {
        let mut a = PenWobble::seeded(42);
        let mut b = PenWobble::seeded(42);
        for _ in 0..100 {
            assert_eq!(a.sample(), b.sample());
        }
    }

    #[test]
    fn steady_hand_never_moves() {
        let mut hand = SteadyHand;
        for _ in 0..10 {
            assert_eq!(hand.sample(), 0.0);
        }
    }
}
