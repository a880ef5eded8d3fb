use std::collections::BTreeMap;

use pulse_simulation::{Clock, RngSampler, Sampler, SystemClock, TokenFactory, UpdateSimulator};
use pulse_types::{Token, TokenCategory};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::config::{CachePolicy, FeedConfig};

/// Offset applied to the configured seed for the simulator's stream
const SIMULATOR_SEED_OFFSET: u64 = 0x9e37_79b9_7f4a_7c15;

/// Immutable view of every category at one tick
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FeedSnapshot {
    pub tick: u64,
    /// Epoch milliseconds the snapshot was taken
    pub fetched_at: i64,
    pub categories: BTreeMap<TokenCategory, Vec<Token>>,
}

impl FeedSnapshot {
    pub fn is_fresh(&self, policy: &CachePolicy, now: i64) -> bool {
        policy.is_fresh(self.fetched_at, now)
    }

    pub fn category(&self, category: TokenCategory) -> &[Token] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn total_tokens(&self) -> usize {
        self.categories.values().map(Vec::len).sum()
    }
}

/// Outcome of one feed tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub tick: u64,
    pub tokens: usize,
    pub metrics_updated: usize,
}

/// Live token feed that owns one collection per category
///
/// Each tick replaces every collection wholesale. The feed is driven from a
/// single call site; callers that share it across tasks must serialize
/// access themselves.
pub struct LiveFeed<S, C> {
    factory: TokenFactory<S, C>,
    simulator: UpdateSimulator<S, C>,
    clock: C,
    categories: BTreeMap<TokenCategory, Vec<Token>>,
    tick: u64,
}

impl LiveFeed<RngSampler<ChaCha8Rng>, SystemClock> {
    /// Build a wall-clock feed from configuration
    pub fn from_config(config: &FeedConfig) -> Self {
        let (factory_sampler, simulator_sampler) = match config.seed {
            Some(seed) => (
                RngSampler::seeded(seed),
                RngSampler::seeded(seed.wrapping_add(SIMULATOR_SEED_OFFSET)),
            ),
            None => (RngSampler::from_entropy(), RngSampler::from_entropy()),
        };

        Self::new(config.tokens_per_category, factory_sampler, simulator_sampler, SystemClock)
    }
}

impl<S: Sampler, C: Clock + Clone> LiveFeed<S, C> {
    /// Create a new feed and materialize every category
    pub fn new(tokens_per_category: usize, factory_sampler: S, simulator_sampler: S, clock: C) -> Self {
        let mut factory = TokenFactory::new(factory_sampler, clock.clone());
        let categories = factory.generate_all_categories(tokens_per_category);

        info!(
            "Materialized {} tokens per category across {} categories",
            tokens_per_category,
            categories.len()
        );

        Self {
            factory,
            simulator: UpdateSimulator::new(simulator_sampler, clock.clone()),
            clock,
            categories,
            tick: 0,
        }
    }

    /// Advance every category by one tick
    pub fn tick(&mut self) -> TickReport {
        self.tick += 1;

        let mut tokens = 0;
        let mut metrics_updated = 0;
        for collection in self.categories.values_mut() {
            let step = self.simulator.step(collection.as_slice());
            tokens += step.tokens.len();
            metrics_updated += step.metrics_updated;
            *collection = step.tokens;
        }

        debug!(
            "Tick {}: {} tokens advanced, {} metric updates",
            self.tick, tokens, metrics_updated
        );

        TickReport {
            tick: self.tick,
            tokens,
            metrics_updated,
        }
    }

    /// Grow `category` to `target` rows, continuing the ordinals
    ///
    /// Returns the number of tokens added. Never shrinks a category.
    pub fn top_up(&mut self, category: TokenCategory, target: usize) -> usize {
        let collection = self.categories.entry(category).or_default();
        let current = collection.len();
        if current >= target {
            return 0;
        }

        let added = self.factory.generate_range(category, current, target - current);
        let count = added.len();
        collection.extend(added);

        info!("Topped up {} with {} tokens ({} total)", category, count, target);
        count
    }

    /// Current rows for `category`
    pub fn category(&self, category: TokenCategory) -> &[Token] {
        self.categories.get(&category).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Ticks completed so far
    pub fn ticks(&self) -> u64 {
        self.tick
    }

    /// Clone the current state
    pub fn snapshot(&self) -> FeedSnapshot {
        FeedSnapshot {
            tick: self.tick,
            fetched_at: self.clock.now_millis(),
            categories: self.categories.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_simulation::{FixedClock, ScriptedSampler};

    const NOW: i64 = 1_700_000_000_000;

    fn feed(per_category: usize) -> LiveFeed<RngSampler<ChaCha8Rng>, FixedClock> {
        LiveFeed::new(
            per_category,
            RngSampler::seeded(1),
            RngSampler::seeded(2),
            FixedClock::new(NOW),
        )
    }

    #[test]
    fn test_materializes_every_category() {
        let feed = feed(4);
        for category in TokenCategory::ALL {
            assert_eq!(feed.category(category).len(), 4);
        }
        assert_eq!(feed.snapshot().total_tokens(), 12);
    }

    #[test]
    fn test_tick_ages_all_tokens() {
        let mut feed = feed(3);
        let before = feed.snapshot();
        let report = feed.tick();

        assert_eq!(report.tick, 1);
        assert_eq!(report.tokens, 9);
        for category in TokenCategory::ALL {
            for (old, new) in before.category(category).iter().zip(feed.category(category)) {
                assert_eq!(new.age_in_seconds, old.age_in_seconds + 1);
                assert_eq!(new.id, old.id);
            }
        }
    }

    #[test]
    fn test_scripted_tick_counts_updates() {
        let clock = FixedClock::new(NOW);
        let mut feed = LiveFeed::new(
            2,
            ScriptedSampler::constant(0.5),
            // Every chance draw is below 0.3, so every token updates
            ScriptedSampler::constant(0.1),
            clock,
        );
        let report = feed.tick();
        assert_eq!(report.metrics_updated, 6);
    }

    #[test]
    fn test_top_up_continues_ordinals() {
        let mut feed = feed(19);
        assert_eq!(feed.top_up(TokenCategory::Migrated, 21), 2);
        let rows = feed.category(TokenCategory::Migrated);
        assert_eq!(rows.len(), 21);
        assert_eq!(rows[19].name, "Crown");
        assert_eq!(rows[20].name, "Anime 1");
        assert_eq!(feed.top_up(TokenCategory::Migrated, 5), 0);
        assert_eq!(feed.category(TokenCategory::Migrated).len(), 21);
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut feed = feed(2);
        let snapshot = feed.snapshot();
        feed.tick();
        assert_eq!(snapshot.tick, 0);
        assert_ne!(snapshot.categories, feed.snapshot().categories);
    }

    #[test]
    fn test_snapshot_freshness() {
        let clock = FixedClock::new(NOW);
        let feed = LiveFeed::new(1, RngSampler::seeded(1), RngSampler::seeded(2), clock.clone());
        let snapshot = feed.snapshot();
        let policy = CachePolicy::default();

        assert!(snapshot.is_fresh(&policy, NOW + 29_000));
        clock.advance(31_000);
        assert!(!snapshot.is_fresh(&policy, clock.now_millis()));
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let config = FeedConfig {
            seed: Some(1234),
            ..FeedConfig::default()
        };
        let a = LiveFeed::from_config(&config);
        let b = LiveFeed::from_config(&config);
        let addresses = |feed: &LiveFeed<_, _>| {
            feed.category(TokenCategory::NewPairs)
                .iter()
                .map(|t| t.address.clone())
                .collect::<Vec<_>>()
        };
        assert_eq!(addresses(&a), addresses(&b));
    }
}
