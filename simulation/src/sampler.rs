//! Random sampling seam
//!
//! Every random draw made by the factory and the simulator goes through
//! [`Sampler`]. Production code uses [`RngSampler`]; tests can pin each
//! draw with [`ScriptedSampler`].

use pulse_types::SampleRange;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform draws
pub trait Sampler {
    /// Next draw from `[0, 1)`
    fn next_unit(&mut self) -> f64;

    /// Continuous draw from `[min, max)`
    fn uniform(&mut self, min: f64, max: f64) -> f64 {
        self.next_unit() * (max - min) + min
    }

    /// Floored draw from `[min, max)`
    fn uniform_int(&mut self, min: i64, max: i64) -> i64 {
        let value = self.uniform(min as f64, max as f64).floor() as i64;
        // Float rounding can land on `max` for draws just below 1.0
        value.min(max - 1).max(min)
    }

    fn sample(&mut self, range: SampleRange) -> f64 {
        self.uniform(range.min, range.max)
    }

    /// Floored draw for non-negative ranges
    fn sample_count(&mut self, range: SampleRange) -> u64 {
        self.uniform_int(range.min as i64, range.max as i64).max(0) as u64
    }

    /// `true` with probability `p`
    fn chance(&mut self, p: f64) -> bool {
        self.next_unit() < p
    }
}

impl<S: Sampler + ?Sized> Sampler for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: Sampler + ?Sized> Sampler for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

// ============================================================================
// Rng-backed sampler
// ============================================================================

/// Sampler over any `rand` generator
#[derive(Debug, Clone)]
pub struct RngSampler<R> {
    rng: R,
}

impl<R: Rng> RngSampler<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSampler<ChaCha8Rng> {
    /// Reproducible stream for a given seed
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::new(ChaCha8Rng::from_entropy())
    }
}

impl<R: Rng> Sampler for RngSampler<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

// ============================================================================
// Scripted sampler
// ============================================================================

/// Replays a fixed list of unit draws, wrapping around when exhausted
#[derive(Debug, Clone)]
pub struct ScriptedSampler {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSampler {
    /// `draws` must be non-empty and lie in `[0, 1)`
    pub fn new(draws: Vec<f64>) -> Self {
        debug_assert!(!draws.is_empty(), "scripted sampler needs at least one draw");
        debug_assert!(draws.iter().all(|d| (0.0..1.0).contains(d)));
        Self { draws, cursor: 0 }
    }

    /// Same draw every time
    pub fn constant(draw: f64) -> Self {
        Self::new(vec![draw])
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl Sampler for ScriptedSampler {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}
