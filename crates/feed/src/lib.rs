pub mod config;
pub mod error;
pub mod feed;
pub mod runner;

pub use config::{CachePolicy, FeedConfig, LoggingConfig};
pub use error::{FeedError, FeedResult};
pub use feed::{FeedSnapshot, LiveFeed, TickReport};
pub use runner::run_feed;
