//! Common types used throughout the rating pipeline

use crate::error::{RatingError, RatingResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Team identifier (full franchise name, e.g. "Boston Celtics")
pub type TeamId = String;

/// Team → rating snapshot used to start a season
pub type SeedRatings = BTreeMap<TeamId, f64>;

/// Team → post-game ratings in chronological order
pub type RatingHistory = BTreeMap<TeamId, Vec<f64>>;

/// Result of a single game from the home side's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    HomeWin,
    AwayWin,
}

impl GameOutcome {
    /// Actual score credited to the home team (1 for a win, 0 for a loss)
    pub fn home_points(self) -> f64 {
        match self {
            GameOutcome::HomeWin => 1.0,
            GameOutcome::AwayWin => 0.0,
        }
    }

    /// Actual score credited to the away team
    pub fn away_points(self) -> f64 {
        1.0 - self.home_points()
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameOutcome::HomeWin => write!(f, "HomeWin"),
            GameOutcome::AwayWin => write!(f, "AwayWin"),
        }
    }
}

/// A completed game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    /// Only used for ordering and display, never by the rating math
    pub date: Option<NaiveDate>,
    pub home: TeamId,
    pub away: TeamId,
    pub home_score: u32,
    pub away_score: u32,
}

impl Game {
    pub fn new(
        home: impl Into<TeamId>,
        away: impl Into<TeamId>,
        home_score: u32,
        away_score: u32,
    ) -> Self {
        Self {
            date: None,
            home: home.into(),
            away: away.into(),
            home_score,
            away_score,
        }
    }

    /// Attach a calendar date
    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Home wins only on a strictly higher score; an equal score counts as an away win
    pub fn outcome(&self) -> GameOutcome {
        if self.home_score > self.away_score {
            GameOutcome::HomeWin
        } else {
            GameOutcome::AwayWin
        }
    }

    pub fn is_tie(&self) -> bool {
        self.home_score == self.away_score
    }

    /// Reject records that are not a clean (team, team, score, score) tuple
    pub fn validate(&self, row: usize) -> RatingResult<()> {
        if self.home.trim().is_empty() {
            return Err(RatingError::malformed(row, "home team is blank"));
        }
        if self.away.trim().is_empty() {
            return Err(RatingError::malformed(row, "away team is blank"));
        }
        if self.home == self.away {
            return Err(RatingError::malformed(
                row,
                format!("'{}' cannot play itself", self.home),
            ));
        }
        Ok(())
    }
}

/// Rating movement of both sides for one game
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GameRatingUpdate {
    pub expected_home: f64,
    pub expected_away: f64,
    pub new_home: f64,
    pub new_away: f64,
}

/// Output of a season fold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonRatings {
    /// Rating of every seeded team after the last processed game
    pub final_ratings: SeedRatings,
    /// Post-game ratings per team; the seed is not included
    pub histories: RatingHistory,
    pub games_processed: usize,
}

impl SeasonRatings {
    /// Histories with each team's seed rating as entry zero
    pub fn histories_with_seed(&self, seed: &SeedRatings) -> RatingHistory {
        seed.iter()
            .map(|(team, &rating)| {
                let mut series = Vec::with_capacity(
                    1 + self.histories.get(team).map(Vec::len).unwrap_or_default(),
                );
                series.push(rating);
                if let Some(played) = self.histories.get(team) {
                    series.extend_from_slice(played);
                }
                (team.clone(), series)
            })
            .collect()
    }

    /// Final rating minus seed rating for every seeded team
    pub fn delta_vs_seed(&self, seed: &SeedRatings) -> BTreeMap<TeamId, f64> {
        seed.iter()
            .map(|(team, &start)| {
                let end = self.final_ratings.get(team).copied().unwrap_or(start);
                (team.clone(), end - start)
            })
            .collect()
    }

    /// Number of games a team has played in the processed prefix
    pub fn games_played(&self, team: &str) -> usize {
        self.histories.get(team).map(Vec::len).unwrap_or(0)
    }
}
