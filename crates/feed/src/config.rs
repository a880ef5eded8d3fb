use std::fs;
use std::path::Path;

use pulse_types::*;
use serde::{Deserialize, Serialize};

use crate::error::FeedResult;

/// Feed configuration loaded from TOML file
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct FeedConfig {
    /// Rows materialized per category at startup
    pub tokens_per_category: usize,

    /// Interval between simulated ticks in milliseconds
    pub tick_interval_ms: u64,

    /// Seed for reproducible runs; entropy when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,

    /// Cache policy the feed's consumers apply to each snapshot
    pub cache: CachePolicy,

    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Query cache contract for snapshots handed to consumers
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct CachePolicy {
    /// Freshness window in milliseconds
    pub stale_time_ms: u64,

    /// Retention window after last use in milliseconds
    pub gc_time_ms: u64,

    /// Automatic retries on a failed fetch
    pub retry: u32,

    /// Refetch when the window regains focus
    pub refetch_on_window_focus: bool,

    /// Base delay between retries in milliseconds
    pub base_retry_delay_ms: u64,

    /// Maximum delay between retries in milliseconds
    pub max_retry_delay_ms: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl FeedConfig {
    /// Load configuration from TOML file
    pub fn load(path: impl AsRef<Path>) -> FeedResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: FeedConfig = toml::from_str(&content)?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save(&self, path: impl AsRef<Path>) -> FeedResult<()> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), content)?;
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> PulseResult<()> {
        if self.tokens_per_category == 0 {
            return Err(PulseError::invalid_parameter("tokens_per_category", "0", "greater than 0"));
        }

        if self.tick_interval_ms == 0 {
            return Err(PulseError::invalid_parameter("tick_interval_ms", "0", "greater than 0"));
        }

        if self.logging.level.parse::<tracing::Level>().is_err() {
            return Err(PulseError::invalid_parameter(
                "logging.level",
                &self.logging.level,
                "one of trace, debug, info, warn, error",
            ));
        }

        self.cache.validate()
    }
}

impl CachePolicy {
    /// Validate cache policy
    fn validate(&self) -> PulseResult<()> {
        if self.stale_time_ms == 0 {
            return Err(PulseError::invalid_parameter("cache.stale_time_ms", "0", "greater than 0"));
        }

        if self.gc_time_ms < self.stale_time_ms {
            return Err(PulseError::invalid_parameter(
                "cache.gc_time_ms",
                &self.gc_time_ms.to_string(),
                &format!("at least stale_time_ms ({})", self.stale_time_ms),
            ));
        }

        if self.max_retry_delay_ms < self.base_retry_delay_ms {
            return Err(PulseError::invalid_parameter(
                "cache.max_retry_delay_ms",
                &self.max_retry_delay_ms.to_string(),
                &format!("at least base_retry_delay_ms ({})", self.base_retry_delay_ms),
            ));
        }

        Ok(())
    }

    /// A snapshot fetched at `fetched_at` is still current at `now`
    pub fn is_fresh(&self, fetched_at: i64, now: i64) -> bool {
        now.saturating_sub(fetched_at) < self.stale_time_ms as i64
    }

    /// An unused snapshot last read at `last_used` may be dropped at `now`
    pub fn is_collectable(&self, last_used: i64, now: i64) -> bool {
        now.saturating_sub(last_used) >= self.gc_time_ms as i64
    }

    /// Whether a consumer should retry after `failures` failed attempts
    pub fn should_retry(&self, failures: u32) -> bool {
        failures <= self.retry
    }

    /// Calculate delay for retry attempt
    pub fn delay_for_attempt(&self, attempt: u32) -> u64 {
        let exponential_delay = self.base_retry_delay_ms.saturating_mul(1u64 << attempt.min(32));
        exponential_delay.min(self.max_retry_delay_ms)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            tokens_per_category: DEFAULT_TOKENS_PER_CATEGORY,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            seed: None,
            cache: CachePolicy::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for CachePolicy {
    fn default() -> Self {
        Self {
            stale_time_ms: DEFAULT_STALE_TIME_MS,
            gc_time_ms: DEFAULT_GC_TIME_MS,
            retry: DEFAULT_QUERY_RETRY,
            refetch_on_window_focus: false,
            base_retry_delay_ms: 1000,
            max_retry_delay_ms: 30_000,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_validation() {
        let mut config = FeedConfig::default();
        assert!(config.validate().is_ok());

        config.tick_interval_ms = 0;
        assert!(config.validate().is_err());

        let mut config = FeedConfig::default();
        config.cache.gc_time_ms = 1_000;
        assert!(config.validate().is_err());

        let mut config = FeedConfig::default();
        config.logging.level = "loud".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_cache_contract() {
        let policy = CachePolicy::default();
        assert_eq!(policy.stale_time_ms, 30_000);
        assert_eq!(policy.gc_time_ms, 300_000);
        assert_eq!(policy.retry, 2);
        assert!(!policy.refetch_on_window_focus);
    }

    #[test]
    fn test_freshness_windows() {
        let policy = CachePolicy::default();
        assert!(policy.is_fresh(0, 29_999));
        assert!(!policy.is_fresh(0, 30_000));
        assert!(!policy.is_collectable(0, 299_999));
        assert!(policy.is_collectable(0, 300_000));
    }

    #[test]
    fn test_retry_delay_calculation() {
        let policy = CachePolicy::default();

        assert!(policy.should_retry(1));
        assert!(policy.should_retry(2));
        assert!(!policy.should_retry(3));

        assert_eq!(policy.delay_for_attempt(0), 1000);
        assert_eq!(policy.delay_for_attempt(1), 2000);
        assert_eq!(policy.delay_for_attempt(2), 4000);

        // Should cap at max_retry_delay_ms
        assert_eq!(policy.delay_for_attempt(10), 30_000);
        assert_eq!(policy.delay_for_attempt(64), 30_000);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: FeedConfig = toml::from_str("tick_interval_ms = 500\n[cache]\nretry = 3\n").unwrap();
        assert_eq!(config.tick_interval_ms, 500);
        assert_eq!(config.tokens_per_category, 10);
        assert_eq!(config.cache.retry, 3);
        assert_eq!(config.cache.stale_time_ms, 30_000);
    }
}
