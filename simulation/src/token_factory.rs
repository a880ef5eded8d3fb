use std::collections::BTreeMap;

use pulse_types::*;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::sampler::{RngSampler, Sampler};

/// Factory for synthetic tokens
///
/// Identity fields come from the catalog slot picked by the ordinal, every
/// metric is sampled from the category's creation regime.
pub struct TokenFactory<S, C> {
    sampler: S,
    clock: C,
    /// Disambiguates ids minted within the same millisecond
    sequence: u64,
}

impl TokenFactory<RngSampler<ChaCha8Rng>, SystemClock> {
    /// Factory on the wall clock with an entropy-seeded generator
    pub fn from_entropy() -> Self {
        Self::new(RngSampler::from_entropy(), SystemClock)
    }

    /// Factory on the wall clock with a reproducible generator
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSampler::seeded(seed), SystemClock)
    }
}

impl<S: Sampler, C: Clock> TokenFactory<S, C> {
    /// Create a new token factory
    pub fn new(sampler: S, clock: C) -> Self {
        Self {
            sampler,
            clock,
            sequence: 0,
        }
    }

    /// Generate one token for `category` at ordinal `index`
    ///
    /// Draw order: age, market cap, volume, liquidity, supply, price
    /// change, holders, transactions, fee, social counts, bookmark, risk
    /// fields, link flags, then one draw per address character.
    pub fn generate_token(&mut self, category: TokenCategory, index: usize) -> Token {
        let identity = TokenIdentity::for_index(index);
        let now = self.clock.now_millis();

        let age_in_seconds = self.sampler.sample_count(category.age_range());
        let metrics = self.sample_metrics(category);
        let social_metrics = self.sample_social();
        let risk_metrics = self.sample_risk();
        let social_links = self.sample_links();
        let address = generate_address(&mut self.sampler);

        let id = format!("{}-{}-{}-{}", category, index, now, self.sequence);
        self.sequence += 1;

        Token {
            id,
            address,
            name: identity.name,
            symbol: identity.symbol,
            image_url: identity.image_url,
            age_in_seconds,
            category,
            metrics,
            social_metrics,
            risk_metrics,
            social_links,
            created_at: now - (age_in_seconds as i64) * 1000,
            updated_at: now,
        }
    }

    /// Generate `count` tokens with ordinals `0..count`
    pub fn generate_tokens(&mut self, category: TokenCategory, count: usize) -> Vec<Token> {
        self.generate_range(category, 0, count)
    }

    /// Generate `count` tokens with ordinals starting at `start`
    pub fn generate_range(&mut self, category: TokenCategory, start: usize, count: usize) -> Vec<Token> {
        debug!("Generating {} {} tokens from ordinal {}", count, category, start);
        (start..start + count)
            .map(|index| self.generate_token(category, index))
            .collect()
    }

    /// Generate `count_per_category` tokens for every category
    pub fn generate_all_categories(&mut self, count_per_category: usize) -> BTreeMap<TokenCategory, Vec<Token>> {
        TokenCategory::ALL
            .into_iter()
            .map(|category| (category, self.generate_tokens(category, count_per_category)))
            .collect()
    }

    fn sample_metrics(&mut self, category: TokenCategory) -> TokenMetrics {
        let market_cap = self.sampler.sample(category.market_cap_range());
        let volume = market_cap * self.sampler.sample(VOLUME_TO_CAP);
        let liquidity = market_cap * self.sampler.sample(LIQUIDITY_TO_CAP);
        let price = market_cap / self.sampler.sample(SUPPLY_RANGE);
        let price_change = self.sampler.sample(PRICE_CHANGE_RANGE);

        TokenMetrics {
            market_cap,
            volume,
            price,
            price_change,
            holders: self.sampler.sample_count(HOLDERS_RANGE) as u32,
            transactions: self.sampler.sample_count(TRANSACTIONS_RANGE) as u32,
            liquidity,
            fee_percentage: self.sampler.sample(FEE_PERCENTAGE_RANGE),
        }
    }

    fn sample_social(&mut self) -> SocialMetrics {
        SocialMetrics {
            likes: self.sampler.sample_count(LIKES_RANGE) as u32,
            dislikes: self.sampler.sample_count(DISLIKES_RANGE) as u32,
            comments: self.sampler.sample_count(COMMENTS_RANGE) as u32,
            is_bookmarked: self.sampler.chance(BOOKMARK_PROBABILITY),
        }
    }

    fn sample_risk(&mut self) -> RiskMetrics {
        RiskMetrics {
            top_holder_percentage: self.sampler.sample(TOP_HOLDER_RANGE),
            dev_holding_percentage: self.sampler.sample(DEV_HOLDING_RANGE),
            sniper_percentage: self.sampler.sample(SNIPER_RANGE),
            bundle_percentage: self.sampler.sample(BUNDLE_RANGE),
            risk_score: self.sampler.sample_count(RISK_SCORE_RANGE) as u8,
        }
    }

    fn sample_links(&mut self) -> SocialLinks {
        let twitter = self.sampler.chance(TWITTER_PROBABILITY);
        let telegram = self.sampler.chance(TELEGRAM_PROBABILITY);
        let website = self.sampler.chance(WEBSITE_PROBABILITY);

        SocialLinks {
            twitter: twitter.then(|| PLACEHOLDER_TWITTER.to_string()),
            telegram: telegram.then(|| PLACEHOLDER_TELEGRAM.to_string()),
            website: website.then(|| PLACEHOLDER_WEBSITE.to_string()),
        }
    }
}

// ============================================================================
// Identity
// ============================================================================

/// Display identity derived from an ordinal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenIdentity {
    pub name: String,
    pub symbol: String,
    pub image_url: String,
}

impl TokenIdentity {
    /// Catalog slot `index mod CATALOG_SIZE`; ordinals past the first lap
    /// get a ` {lap}` suffix on the name
    pub fn for_index(index: usize) -> Self {
        let (base_name, symbol) = TOKEN_CATALOG[index % CATALOG_SIZE];
        let name = if index >= CATALOG_SIZE {
            format!("{} {}", base_name, index / CATALOG_SIZE)
        } else {
            base_name.to_string()
        };

        Self {
            name,
            symbol: symbol.to_string(),
            image_url: avatar_url(base_name),
        }
    }
}

/// Palette color for a name, keyed on its first code point
pub fn avatar_color(name: &str) -> &'static str {
    let code_point = name.chars().next().map(|c| c as usize).unwrap_or(0);
    AVATAR_PALETTE[code_point % AVATAR_PALETTE.len()]
}

/// Placeholder avatar for a catalog name
pub fn avatar_url(name: &str) -> String {
    format!(
        "{}?name={}&background={}&color=fff&size=64&bold=true",
        AVATAR_BASE_URL,
        urlencoding::encode(name),
        avatar_color(name)
    )
}

/// 44 characters from the address alphabet
pub fn generate_address<S: Sampler>(sampler: &mut S) -> String {
    (0..ADDRESS_LENGTH)
        .map(|_| {
            let i = sampler.uniform_int(0, ADDRESS_ALPHABET.len() as i64) as usize;
            ADDRESS_ALPHABET[i] as char
        })
        .collect()
}
