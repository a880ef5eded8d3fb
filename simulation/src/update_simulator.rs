use pulse_types::*;
use rand_chacha::ChaCha8Rng;

use crate::clock::{Clock, SystemClock};
use crate::sampler::{RngSampler, Sampler};

/// Per-token price movement for one full metrics update
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSwing {
    /// Shared fractional swing applied to price and market cap
    pub delta: f64,
    /// Independent fractional swing applied to volume
    pub volume_change: f64,
}

/// Which branch a token took on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    AgeOnly,
    MetricsUpdated,
}

/// Result of advancing a collection by one tick
#[derive(Debug, Clone, PartialEq)]
pub struct TickStep {
    /// Same length and order as the input
    pub tokens: Vec<Token>,
    pub metrics_updated: usize,
}

/// Simulator for live metric drift
///
/// Every call builds new tokens from the old ones; inputs are never
/// mutated, so a tick can be computed speculatively and thrown away.
pub struct UpdateSimulator<S, C> {
    sampler: S,
    clock: C,
}

impl UpdateSimulator<RngSampler<ChaCha8Rng>, SystemClock> {
    pub fn from_entropy() -> Self {
        Self::new(RngSampler::from_entropy(), SystemClock)
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSampler::seeded(seed), SystemClock)
    }
}

impl<S: Sampler, C: Clock> UpdateSimulator<S, C> {
    /// Create a new update simulator
    pub fn new(sampler: S, clock: C) -> Self {
        Self { sampler, clock }
    }

    /// Full metrics update for a single token
    pub fn advance_one(&mut self, token: &Token) -> Token {
        let swing = self.sample_swing();
        apply_swing(token, swing, self.clock.now_millis())
    }

    /// Advance every token by one tick
    pub fn advance_tick(&mut self, tokens: &[Token]) -> Vec<Token> {
        self.step(tokens).tokens
    }

    /// Advance every token by one tick and count the full updates
    pub fn step(&mut self, tokens: &[Token]) -> TickStep {
        let mut metrics_updated = 0;
        let tokens = tokens
            .iter()
            .map(|token| {
                let (next, outcome) = self.advance_with_outcome(token);
                if outcome == TickOutcome::MetricsUpdated {
                    metrics_updated += 1;
                }
                next
            })
            .collect();

        TickStep {
            tokens,
            metrics_updated,
        }
    }

    /// One tick for one token: 30% full update, otherwise age only
    pub fn advance_with_outcome(&mut self, token: &Token) -> (Token, TickOutcome) {
        if self.sampler.chance(METRICS_UPDATE_PROBABILITY) {
            (self.advance_one(token), TickOutcome::MetricsUpdated)
        } else {
            (advance_age(token), TickOutcome::AgeOnly)
        }
    }

    fn sample_swing(&mut self) -> PriceSwing {
        PriceSwing {
            delta: self.sampler.sample(PRICE_SWING_RANGE),
            volume_change: self.sampler.sample(VOLUME_SWING_RANGE),
        }
    }
}

/// Age-only advance; `updated_at` is left as is
pub fn advance_age(token: &Token) -> Token {
    Token {
        age_in_seconds: token.age_in_seconds + 1,
        ..token.clone()
    }
}

/// Apply `swing` to price, market cap and volume, accumulate the price
/// change, and age the token by one tick
pub fn apply_swing(token: &Token, swing: PriceSwing, now_millis: i64) -> Token {
    let factor = 1.0 + swing.delta;
    let metrics = TokenMetrics {
        price: token.metrics.price * factor,
        market_cap: token.metrics.market_cap * factor,
        volume: token.metrics.volume * (1.0 + swing.volume_change),
        price_change: token.metrics.price_change + swing.delta,
        ..token.metrics
    };

    Token {
        metrics,
        age_in_seconds: token.age_in_seconds + 1,
        updated_at: now_millis,
        ..token.clone()
    }
}
