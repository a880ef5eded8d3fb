//! Token record and its metric groups

use serde::{Deserialize, Serialize};
use crate::{category::TokenCategory, view::RiskLevel};

// ============================================================================
// Token
// ============================================================================

/// A listed token as rendered in the discovery table
///
/// `id`, `address`, `category`, `name` and `symbol` never change after
/// creation. `age_in_seconds` grows by one per simulated tick.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Token {
    /// Unique per generation event
    pub id: String,
    /// 44-character pseudo address
    pub address: String,
    pub name: String,
    pub symbol: String,
    pub image_url: String,
    pub age_in_seconds: u64,
    pub category: TokenCategory,
    pub metrics: TokenMetrics,
    pub social_metrics: SocialMetrics,
    pub risk_metrics: RiskMetrics,
    #[serde(default)]
    pub social_links: SocialLinks,
    /// Epoch milliseconds
    pub created_at: i64,
    /// Epoch milliseconds of the last metrics mutation
    pub updated_at: i64,
}

impl Token {
    /// Risk bucket derived from the composite score
    pub fn risk_level(&self) -> RiskLevel {
        self.risk_metrics.level()
    }
}

// ============================================================================
// Metric Groups
// ============================================================================

/// Trading metrics. Everything but `price_change` is non-negative.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TokenMetrics {
    pub market_cap: f64,
    pub volume: f64,
    pub price: f64,
    /// Signed running sum of per-tick swings
    pub price_change: f64,
    pub holders: u32,
    pub transactions: u32,
    pub liquidity: f64,
    pub fee_percentage: f64,
}

/// Community counters, set once at creation
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialMetrics {
    pub likes: u32,
    pub dislikes: u32,
    pub comments: u32,
    pub is_bookmarked: bool,
}

/// Synthetic manipulation indicators, set once at creation
///
/// Fractions lie in `[0, 1]`, the score in `[0, 100]`. Each field is an
/// independent draw.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RiskMetrics {
    pub top_holder_percentage: f64,
    pub dev_holding_percentage: f64,
    pub sniper_percentage: f64,
    pub bundle_percentage: f64,
    pub risk_score: u8,
}

impl RiskMetrics {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_score(self.risk_score)
    }
}

/// Placeholder community links
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub telegram: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl SocialLinks {
    pub fn is_empty(&self) -> bool {
        self.twitter.is_none() && self.telegram.is_none() && self.website.is_none()
    }
}
