//! Simulation engine for the Pulse token feed
//!
//! Provides:
//! - A sampling seam with seeded and scripted sources
//! - A token factory producing category-consistent records
//! - An update simulator that ages tokens and drifts their metrics
//!
//! Nothing here touches a network, exchange or ledger.

pub mod clock;
pub mod sampler;
pub mod token_factory;
pub mod update_simulator;

pub use clock::{Clock, FixedClock, SystemClock};
pub use sampler::{RngSampler, Sampler, ScriptedSampler};
pub use token_factory::{avatar_color, avatar_url, generate_address, TokenFactory, TokenIdentity};
pub use update_simulator::{advance_age, apply_swing, PriceSwing, TickOutcome, TickStep, UpdateSimulator};

