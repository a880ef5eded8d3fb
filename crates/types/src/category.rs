//! Token lifecycle categories and their creation-time ranges

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{errors::PulseError, range::SampleRange};

/// Lifecycle bucket a token is listed under
///
/// Fixed at creation. Tokens are never promoted between categories as
/// their age crosses the ranges below.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenCategory {
    /// Just listed, under five minutes old
    NewPairs,
    /// Approaching the migration window
    FinalStretch,
    /// Already graduated, up to a day old
    Migrated,
}

impl TokenCategory {
    /// All categories in display order
    pub const ALL: [TokenCategory; 3] = [
        TokenCategory::NewPairs,
        TokenCategory::FinalStretch,
        TokenCategory::Migrated,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenCategory::NewPairs => "new-pairs",
            TokenCategory::FinalStretch => "final-stretch",
            TokenCategory::Migrated => "migrated",
        }
    }

    /// Column heading
    pub fn label(&self) -> &'static str {
        match self {
            TokenCategory::NewPairs => "New Pairs",
            TokenCategory::FinalStretch => "Final Stretch",
            TokenCategory::Migrated => "Migrated",
        }
    }

    /// Age at creation, in seconds
    pub fn age_range(&self) -> SampleRange {
        match self {
            TokenCategory::NewPairs => SampleRange::new(0.0, 300.0),
            TokenCategory::FinalStretch => SampleRange::new(300.0, 3_600.0),
            TokenCategory::Migrated => SampleRange::new(3_600.0, 86_400.0),
        }
    }

    /// Market cap at creation. Ranges overlap on purpose.
    pub fn market_cap_range(&self) -> SampleRange {
        match self {
            TokenCategory::NewPairs => SampleRange::new(1_000.0, 100_000.0),
            TokenCategory::FinalStretch => SampleRange::new(50_000.0, 500_000.0),
            TokenCategory::Migrated => SampleRange::new(100_000.0, 2_000_000.0),
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TokenCategory {
    type Err = PulseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "new-pairs" => Ok(TokenCategory::NewPairs),
            "final-stretch" => Ok(TokenCategory::FinalStretch),
            "migrated" => Ok(TokenCategory::Migrated),
            other => Err(PulseError::unknown_category(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_round_trip() {
        for category in TokenCategory::ALL {
            assert_eq!(category.as_str().parse::<TokenCategory>().unwrap(), category);
            assert_eq!(category.to_string(), category.as_str());
        }
    }

    #[test]
    fn test_unknown_category_fails_fast() {
        let err = "graduated".parse::<TokenCategory>().unwrap_err();
        assert_eq!(err, PulseError::unknown_category("graduated"));
        assert!("New-Pairs".parse::<TokenCategory>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&TokenCategory::FinalStretch).unwrap();
        assert_eq!(json, "\"final-stretch\"");
        let parsed: TokenCategory = serde_json::from_str("\"migrated\"").unwrap();
        assert_eq!(parsed, TokenCategory::Migrated);
        assert!(serde_json::from_str::<TokenCategory>("\"graduated\"").is_err());
    }

    #[test]
    fn test_age_ranges_are_contiguous() {
        assert_eq!(TokenCategory::NewPairs.age_range().max, TokenCategory::FinalStretch.age_range().min);
        assert_eq!(TokenCategory::FinalStretch.age_range().max, TokenCategory::Migrated.age_range().min);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = TokenCategory::ALL.iter().map(|c| c.label()).collect();
        assert_eq!(labels, vec!["New Pairs", "Final Stretch", "Migrated"]);
    }
}
