use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse_feed::{run_feed, FeedConfig, LiveFeed};
use pulse_types::TokenCategory;

#[derive(Parser, Debug)]
#[command(name = "pulse-feed")]
#[command(about = "Synthetic live token feed for the discovery table")]
struct Args {
    /// Path to feed configuration file
    #[arg(short, long, default_value = "pulse-feed.toml")]
    config: String,

    /// Tick interval in milliseconds
    #[arg(short, long)]
    interval_ms: Option<u64>,

    /// Rows per category
    #[arg(short, long)]
    tokens_per_category: Option<usize>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many ticks
    #[arg(long)]
    max_ticks: Option<u64>,

    /// Print the final snapshot as JSON
    #[arg(long)]
    dump: bool,

    /// Override log level
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config_found = Path::new(&args.config).exists();
    let mut config = if config_found {
        FeedConfig::load(&args.config)?
    } else {
        FeedConfig::default()
    };

    if let Some(interval_ms) = args.interval_ms {
        config.tick_interval_ms = interval_ms;
    }
    if let Some(count) = args.tokens_per_category {
        config.tokens_per_category = count;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if let Some(log_level) = args.log_level {
        config.logging.level = log_level;
    }
    config.validate()?;

    init_logging(&config);

    if !config_found {
        warn!("Config file not found, using defaults: {}", args.config);
    }

    info!("Starting Pulse feed");
    info!("Tokens per category: {}", config.tokens_per_category);
    info!("Tick interval: {}ms", config.tick_interval_ms);
    match config.seed {
        Some(seed) => info!("Seed: {}", seed),
        None => info!("Seed: entropy"),
    }

    let mut feed = LiveFeed::from_config(&config);
    for category in TokenCategory::ALL {
        info!("{}: {} tokens", category.label(), feed.category(category).len());
    }

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    let ticks = run_feed(
        &mut feed,
        Duration::from_millis(config.tick_interval_ms),
        args.max_ticks,
        shutdown,
    )
    .await;

    info!("Feed stopped after {} ticks", ticks);

    if args.dump {
        let snapshot = feed.snapshot();
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    }

    Ok(())
}

fn init_logging(config: &FeedConfig) {
    let log_level = config.logging.level.parse().unwrap_or(tracing::Level::INFO);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("pulse_feed={},pulse_simulation={}", log_level, log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
