//! Hoops Elo - season-long Elo ratings for NBA teams
//!
//! This crate folds completed game results into fixed-K Elo ratings and
//! trajectories, starting from a seed snapshot, and builds chart-ready
//! reports from them.

pub mod config;
pub mod error;
pub mod rating;
pub mod report;
pub mod schedule;
pub mod service;
pub mod types;
pub mod utils;

// Re-export commonly used types and traits
pub use error::{RatingError, RatingResult, Result};
pub use types::*;

// Re-export key components
pub use rating::{EloCalculator, RatingEngine, SeedStorage};
pub use schedule::ScheduleSource;
pub use service::SeasonRunner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
