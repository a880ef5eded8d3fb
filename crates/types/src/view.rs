//! Sorting, preset filters and risk buckets for the token table

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{constants::*, errors::PulseError, token::Token};

// ============================================================================
// Sorting
// ============================================================================

/// Column a token list can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    Age,
    MarketCap,
    Volume,
    Price,
    PriceChange,
    Holders,
    Transactions,
    Liquidity,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    #[default]
    Descending,
}

impl SortField {
    pub const ALL: [SortField; 8] = [
        SortField::Age,
        SortField::MarketCap,
        SortField::Volume,
        SortField::Price,
        SortField::PriceChange,
        SortField::Holders,
        SortField::Transactions,
        SortField::Liquidity,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Age => "age",
            SortField::MarketCap => "marketCap",
            SortField::Volume => "volume",
            SortField::Price => "price",
            SortField::PriceChange => "priceChange",
            SortField::Holders => "holders",
            SortField::Transactions => "transactions",
            SortField::Liquidity => "liquidity",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::Age => "Age",
            SortField::MarketCap => "Market Cap",
            SortField::Volume => "Volume",
            SortField::Price => "Price",
            SortField::PriceChange => "Price Change",
            SortField::Holders => "Holders",
            SortField::Transactions => "Transactions",
            SortField::Liquidity => "Liquidity",
        }
    }

    /// Numeric key of `token` for this column
    pub fn key(&self, token: &Token) -> f64 {
        let m = &token.metrics;
        match self {
            SortField::Age => token.age_in_seconds as f64,
            SortField::MarketCap => m.market_cap,
            SortField::Volume => m.volume,
            SortField::Price => m.price,
            SortField::PriceChange => m.price_change,
            SortField::Holders => m.holders as f64,
            SortField::Transactions => m.transactions as f64,
            SortField::Liquidity => m.liquidity,
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortField::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| PulseError::UnknownSortField { value: s.to_string() })
    }
}

/// Return a sorted copy of `tokens`. Ties keep their input order.
pub fn sort_tokens(tokens: &[Token], field: SortField, direction: SortDirection) -> Vec<Token> {
    let mut sorted = tokens.to_vec();
    sorted.sort_by(|a, b| {
        let (ka, kb) = (field.key(a), field.key(b));
        match direction {
            SortDirection::Ascending => ka.total_cmp(&kb),
            SortDirection::Descending => kb.total_cmp(&ka),
        }
    });
    sorted
}

// ============================================================================
// Presets
// ============================================================================

/// Saved table filters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Preset {
    P1,
    P2,
    P3,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::P1, Preset::P2, Preset::P3];

    /// Market cap window `[min, max)`
    pub fn market_cap_bounds(&self) -> (f64, f64) {
        match self {
            Preset::P1 => (0.0, 100_000.0),
            Preset::P2 => (100_000.0, 1_000_000.0),
            Preset::P3 => (1_000_000.0, f64::INFINITY),
        }
    }

    pub fn min_holders(&self) -> u32 {
        match self {
            Preset::P1 => 0,
            Preset::P2 => 50,
            Preset::P3 => 200,
        }
    }

    pub fn matches(&self, token: &Token) -> bool {
        let (min_cap, max_cap) = self.market_cap_bounds();
        let cap = token.metrics.market_cap;
        cap >= min_cap && cap < max_cap && token.metrics.holders >= self.min_holders()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Preset::P1 => "P1",
            Preset::P2 => "P2",
            Preset::P3 => "P3",
        };
        f.write_str(label)
    }
}

impl FromStr for Preset {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "P1" | "p1" => Ok(Preset::P1),
            "P2" | "p2" => Ok(Preset::P2),
            "P3" | "p3" => Ok(Preset::P3),
            other => Err(PulseError::UnknownPreset { value: other.to_string() }),
        }
    }
}

/// Tokens matching `preset`, in input order
pub fn filter_by_preset(tokens: &[Token], preset: Preset) -> Vec<Token> {
    tokens.iter().filter(|t| preset.matches(t)).cloned().collect()
}

// ============================================================================
// Risk Buckets
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub fn from_score(score: u8) -> Self {
        if score < RISK_THRESHOLD_LOW {
            RiskLevel::Low
        } else if score < RISK_THRESHOLD_MEDIUM {
            RiskLevel::Medium
        } else if score < RISK_THRESHOLD_HIGH {
            RiskLevel::High
        } else {
            RiskLevel::Critical
        }
    }
}
