//! Elo rating engine and seed storage
//!
//! This module provides the fixed-K Elo math, the chronological season
//! fold, and the interfaces for loading and saving seed snapshots.

pub mod elo;
pub mod engine;
pub mod storage;

// Re-export commonly used types
pub use elo::{expected_score, update_rating, EloCalculator, EloConfig, DEFAULT_K_FACTOR};
pub use engine::{games_through, RatingEngine, SeasonState};
pub use storage::{InMemorySeedStorage, JsonSeedStorage, SeedStorage};
