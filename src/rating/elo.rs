//! Fixed-K logistic Elo
//!
//! No home-court term and no margin-of-victory scaling: a game only
//! contributes win or loss.

use crate::error::{RatingError, RatingResult};
use crate::types::{GameOutcome, GameRatingUpdate};
use serde::{Deserialize, Serialize};

/// Default K-factor
pub const DEFAULT_K_FACTOR: f64 = 20.0;

/// Rating gap that turns into a 10:1 win expectation
const LOGISTIC_SCALE: f64 = 400.0;

/// Logistic win probability for the side rated `rating_a` against `rating_b`
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    1.0 / (1.0 + 10f64.powf((rating_b - rating_a) / LOGISTIC_SCALE))
}

/// Move `rating` toward the actual result by `k` times the surprise
pub fn update_rating(rating: f64, expected: f64, actual: f64, k: f64) -> f64 {
    rating + k * (actual - expected)
}

/// Elo parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EloConfig {
    pub k_factor: f64,
}

impl Default for EloConfig {
    fn default() -> Self {
        Self {
            k_factor: DEFAULT_K_FACTOR,
        }
    }
}

impl EloConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> RatingResult<()> {
        if !self.k_factor.is_finite() || self.k_factor <= 0.0 {
            return Err(RatingError::ConfigurationError {
                message: format!("K-factor must be positive and finite, got {}", self.k_factor),
            });
        }
        Ok(())
    }
}

/// Elo calculator for a two-team game
#[derive(Debug, Clone, Copy)]
pub struct EloCalculator {
    config: EloConfig,
}

impl Default for EloCalculator {
    fn default() -> Self {
        Self {
            config: EloConfig::default(),
        }
    }
}

impl EloCalculator {
    /// Create a new calculator, rejecting a non-positive K
    pub fn new(config: EloConfig) -> RatingResult<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Calculator with the given K-factor
    pub fn with_k(k_factor: f64) -> RatingResult<Self> {
        Self::new(EloConfig { k_factor })
    }

    pub fn k_factor(&self) -> f64 {
        self.config.k_factor
    }

    pub fn config(&self) -> EloConfig {
        self.config
    }

    /// Rate both sides of one game from the same pre-game pair.
    ///
    /// Neither new rating feeds into the other side's expectation.
    pub fn rate_game(
        &self,
        home_rating: f64,
        away_rating: f64,
        outcome: GameOutcome,
    ) -> GameRatingUpdate {
        let k = self.config.k_factor;
        let expected_home = expected_score(home_rating, away_rating);
        let expected_away = expected_score(away_rating, home_rating);

        GameRatingUpdate {
            expected_home,
            expected_away,
            new_home: update_rating(home_rating, expected_home, outcome.home_points(), k),
            new_away: update_rating(away_rating, expected_away, outcome.away_points(), k),
        }
    }
}
