//! Shared types for the Pulse token feed
//!
//! This crate provides the token data model, category tables, constants
//! and list-view helpers used by the simulation engine and the feed service.

pub mod category;
pub mod constants;
pub mod errors;
pub mod range;
pub mod token;
pub mod view;

// Re-export all public types
pub use category::*;
pub use constants::*;
pub use errors::*;
pub use range::*;
pub use token::*;
pub use view::*;

/// Result type alias using the shared error type
pub type PulseResult<T> = std::result::Result<T, PulseError>;
