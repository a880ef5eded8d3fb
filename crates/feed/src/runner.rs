//! Interval driver for the live feed

use std::future::Future;
use std::time::Duration;

use pulse_simulation::{Clock, Sampler};
use tokio::time;
use tracing::{debug, info};

use crate::feed::LiveFeed;

/// Ticks between health summaries
pub const HEALTH_LOG_EVERY: u64 = 100;

/// Drive `feed` on a fixed interval until `max_ticks` is reached or
/// `shutdown` resolves. Returns the number of ticks run.
///
/// Ticks never overlap: each one completes before the next timer fire is
/// awaited, and missed fires are skipped rather than bursted.
pub async fn run_feed<S, C, F>(
    feed: &mut LiveFeed<S, C>,
    interval: Duration,
    max_ticks: Option<u64>,
    shutdown: F,
) -> u64
where
    S: Sampler,
    C: Clock + Clone,
    F: Future<Output = ()>,
{
    let mut interval_timer = time::interval(interval);
    interval_timer.set_missed_tick_behavior(time::MissedTickBehavior::Skip);
    // The first tick of a tokio interval fires immediately
    interval_timer.tick().await;

    tokio::pin!(shutdown);
    let mut iterations = 0u64;

    loop {
        if max_ticks.is_some_and(|max| iterations >= max) {
            info!("Reached tick limit of {}", iterations);
            break;
        }

        tokio::select! {
            _ = &mut shutdown => {
                info!("Shutdown requested after {} ticks", iterations);
                break;
            }
            _ = interval_timer.tick() => {
                let report = feed.tick();
                iterations += 1;

                debug!("Tick {}: {} metric updates", report.tick, report.metrics_updated);

                if report.tick % HEALTH_LOG_EVERY == 0 {
                    let snapshot = feed.snapshot();
                    info!(
                        "Feed health check - tick {}, {} tokens live",
                        snapshot.tick,
                        snapshot.total_tokens()
                    );
                }
            }
        }
    }

    iterations
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulse_simulation::{FixedClock, RngSampler};

    #[test]
    fn test_runs_until_tick_limit() {
        let mut feed = LiveFeed::new(2, RngSampler::seeded(1), RngSampler::seeded(2), FixedClock::new(0));
        let ticks = tokio_test::block_on(run_feed(
            &mut feed,
            Duration::from_millis(1),
            Some(3),
            std::future::pending(),
        ));

        assert_eq!(ticks, 3);
        assert_eq!(feed.ticks(), 3);
    }

    #[test]
    fn test_stops_on_shutdown() {
        let mut feed = LiveFeed::new(1, RngSampler::seeded(1), RngSampler::seeded(2), FixedClock::new(0));
        let ticks = tokio_test::block_on(run_feed(
            &mut feed,
            Duration::from_secs(3600),
            None,
            std::future::ready(()),
        ));

        assert_eq!(ticks, 0);
        assert_eq!(feed.ticks(), 0);
    }
}
