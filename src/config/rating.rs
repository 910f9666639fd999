//! Rating system configuration

use crate::rating::elo::{EloConfig, DEFAULT_K_FACTOR};
use serde::{Deserialize, Serialize};

/// Rating parameters for a season run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RatingConfig {
    /// Maximum rating swing per game
    pub k_factor: f64,
    /// Seed for teams missing from the snapshot, only used when
    /// `season.seed_missing_teams` is enabled
    pub default_seed: f64,
}

impl Default for RatingConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
            default_seed: 1500.0,
        }
    }
}

impl RatingConfig {
    pub fn elo_config(&self) -> EloConfig {
        EloConfig {
            k_factor: self.k_factor,
        }
    }
}
