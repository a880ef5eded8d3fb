//! Constants used across the Pulse token feed

use crate::range::SampleRange;

// ============================================================================
// Identity Constants
// ============================================================================

/// Curated (name, symbol) catalog that token identities cycle through
pub const TOKEN_CATALOG: [(&str, &str); 20] = [
    ("Anime", "ANIME"),
    ("Gmail", "GMAIL"),
    ("CLAUS", "CLAUS"),
    ("$100", "$100"),
    ("X Money", "XMONEY"),
    ("SOL Christmas", "SOLXMAS"),
    ("Emma AI", "EMMA"),
    ("PUMPv2", "PUMP"),
    ("Neurosama", "NEURO"),
    ("Pepe 2.0", "PEPE2"),
    ("Wojak", "WOJAK"),
    ("Chad", "CHAD"),
    ("Moon", "MOON"),
    ("Rocket", "ROCKET"),
    ("Diamond", "DMD"),
    ("Fire", "FIRE"),
    ("Ice", "ICE"),
    ("Thunder", "THDR"),
    ("Star", "STAR"),
    ("Crown", "CROWN"),
];

/// Number of entries in the identity catalog
pub const CATALOG_SIZE: usize = TOKEN_CATALOG.len();

/// Avatar background colors, picked by the first code point of the name
pub const AVATAR_PALETTE: [&str; 8] = [
    "3b82f6", "ef4444", "22c55e", "f59e0b", "ec4899", "a855f7", "06b6d4", "f97316",
];

/// Avatar placeholder service
pub const AVATAR_BASE_URL: &str = "https://ui-avatars.com/api/";

/// Base58-style alphabet for pseudo addresses (no `0`, `O`, `I`, `l`)
pub const ADDRESS_ALPHABET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz123456789";

/// Length of a generated address
pub const ADDRESS_LENGTH: usize = 44;

// ============================================================================
// Creation Constants
// ============================================================================

/// volume = marketCap * U(0.1, 0.5)
pub const VOLUME_TO_CAP: SampleRange = SampleRange::new(0.1, 0.5);

/// liquidity = marketCap * U(0.05, 0.2)
pub const LIQUIDITY_TO_CAP: SampleRange = SampleRange::new(0.05, 0.2);

/// price = marketCap / U(1e6, 1e8)
pub const SUPPLY_RANGE: SampleRange = SampleRange::new(1_000_000.0, 100_000_000.0);

/// Initial fractional price change
pub const PRICE_CHANGE_RANGE: SampleRange = SampleRange::new(-0.5, 1.5);

pub const HOLDERS_RANGE: SampleRange = SampleRange::new(10.0, 500.0);
pub const TRANSACTIONS_RANGE: SampleRange = SampleRange::new(50.0, 5000.0);
pub const FEE_PERCENTAGE_RANGE: SampleRange = SampleRange::new(0.01, 0.05);

pub const LIKES_RANGE: SampleRange = SampleRange::new(0.0, 50.0);
pub const DISLIKES_RANGE: SampleRange = SampleRange::new(0.0, 10.0);
pub const COMMENTS_RANGE: SampleRange = SampleRange::new(0.0, 30.0);

/// Probability a fresh token starts bookmarked
pub const BOOKMARK_PROBABILITY: f64 = 0.2;

pub const TOP_HOLDER_RANGE: SampleRange = SampleRange::new(0.03, 0.75);
pub const DEV_HOLDING_RANGE: SampleRange = SampleRange::new(0.0, 0.25);
pub const SNIPER_RANGE: SampleRange = SampleRange::new(0.0, 0.5);
pub const BUNDLE_RANGE: SampleRange = SampleRange::new(0.0, 0.5);
pub const RISK_SCORE_RANGE: SampleRange = SampleRange::new(0.0, 100.0);

// ============================================================================
// Social Link Constants
// ============================================================================

pub const TWITTER_PROBABILITY: f64 = 0.5;
pub const TELEGRAM_PROBABILITY: f64 = 0.5;
pub const WEBSITE_PROBABILITY: f64 = 0.3;

pub const PLACEHOLDER_TWITTER: &str = "https://twitter.com/example";
pub const PLACEHOLDER_TELEGRAM: &str = "https://t.me/example";
pub const PLACEHOLDER_WEBSITE: &str = "https://example.com";

// ============================================================================
// Tick Constants
// ============================================================================

/// Probability that a token takes the full metrics update on a tick
pub const METRICS_UPDATE_PROBABILITY: f64 = 0.3;

/// Shared price / market cap swing per full update (±10%)
pub const PRICE_SWING_RANGE: SampleRange = SampleRange::new(-0.1, 0.1);

/// Independent, upward-skewed volume swing per full update
pub const VOLUME_SWING_RANGE: SampleRange = SampleRange::new(-0.05, 0.15);

// ============================================================================
// Feed Constants
// ============================================================================

/// Default number of rows materialized per category
pub const DEFAULT_TOKENS_PER_CATEGORY: usize = 10;

/// Default interval between simulated ticks (milliseconds)
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1500;

/// Query freshness window (milliseconds)
pub const DEFAULT_STALE_TIME_MS: u64 = 30_000;

/// Query retention window after last use (milliseconds)
pub const DEFAULT_GC_TIME_MS: u64 = 5 * 60 * 1000;

/// Automatic retries on a failed fetch
pub const DEFAULT_QUERY_RETRY: u32 = 2;

// ============================================================================
// Risk Thresholds
// ============================================================================

pub const RISK_THRESHOLD_LOW: u8 = 30;
pub const RISK_THRESHOLD_MEDIUM: u8 = 60;
pub const RISK_THRESHOLD_HIGH: u8 = 80;
