//! Integration tests for the live feed and its configuration

use pulse_feed::{FeedConfig, FeedError, LiveFeed};
use pulse_simulation::{FixedClock, RngSampler};
use pulse_types::*;

const NOW: i64 = 1_700_000_000_000;

#[test]
fn test_config_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pulse-feed.toml");

    let config = FeedConfig {
        tokens_per_category: 25,
        tick_interval_ms: 750,
        seed: Some(77),
        ..FeedConfig::default()
    };
    config.save(&path).unwrap();

    let loaded = FeedConfig::load(&path).unwrap();
    assert_eq!(loaded, config);
}

#[test]
fn test_invalid_config_file_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "tokens_per_category = 0\n").unwrap();

    match FeedConfig::load(&path) {
        Err(FeedError::Pulse(PulseError::InvalidParameter { parameter, .. })) => {
            assert_eq!(parameter, "tokens_per_category");
        }
        other => panic!("expected invalid parameter, got {:?}", other),
    }
}

#[test]
fn test_missing_config_file() {
    let err = FeedConfig::load("/nonexistent/pulse-feed.toml").unwrap_err();
    assert!(matches!(err, FeedError::ConfigFile(_)));
}

#[test]
fn test_feed_session() {
    let clock = FixedClock::new(NOW);
    let mut feed = LiveFeed::new(10, RngSampler::seeded(21), RngSampler::seeded(22), clock.clone());
    let initial = feed.snapshot();

    for _ in 0..20 {
        clock.advance(1_500);
        feed.tick();
    }
    let later = feed.snapshot();

    assert_eq!(later.tick, 20);
    assert_eq!(later.fetched_at, NOW + 30_000);
    for category in TokenCategory::ALL {
        let before = initial.category(category);
        let after = later.category(category);
        assert_eq!(before.len(), after.len());
        for (old, new) in before.iter().zip(after) {
            assert_eq!(new.id, old.id);
            assert_eq!(new.category, category);
            assert_eq!(new.age_in_seconds, old.age_in_seconds + 20);
            assert!(new.metrics.market_cap > 0.0);
            assert!(new.updated_at >= old.updated_at);
        }
    }
}

#[test]
fn test_snapshot_serializes_for_consumers() {
    let feed = LiveFeed::new(2, RngSampler::seeded(3), RngSampler::seeded(4), FixedClock::new(NOW));
    let json = serde_json::to_value(feed.snapshot()).unwrap();

    assert_eq!(json["tick"], 0);
    assert_eq!(json["fetchedAt"], NOW);
    assert_eq!(json["categories"]["new-pairs"].as_array().unwrap().len(), 2);
    assert_eq!(json["categories"]["final-stretch"][0]["category"], "final-stretch");
    assert!(json["categories"]["migrated"][1]["metrics"]["marketCap"].is_f64());
}

#[test]
fn test_list_views_over_live_rows() {
    let mut feed = LiveFeed::new(15, RngSampler::seeded(8), RngSampler::seeded(9), FixedClock::new(NOW));
    feed.tick();

    let rows = feed.category(TokenCategory::Migrated);
    let sorted = sort_tokens(rows, SortField::MarketCap, SortDirection::Descending);
    assert_eq!(sorted.len(), rows.len());
    assert!(sorted
        .windows(2)
        .all(|pair| pair[0].metrics.market_cap >= pair[1].metrics.market_cap));

    let new_pairs = feed.category(TokenCategory::NewPairs);
    let p1 = filter_by_preset(new_pairs, Preset::P1);
    assert!(p1.iter().all(|t| t.metrics.market_cap < 100_000.0));
}
