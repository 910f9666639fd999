//! Season rating engine
//!
//! Folds an ordered list of games into per-team ratings and trajectories.
//! Every call rebuilds from the seed; the engine holds no state between calls.

use crate::error::{RatingError, RatingResult};
use crate::rating::elo::EloCalculator;
use crate::types::{Game, GameRatingUpdate, RatingHistory, SeasonRatings, SeedRatings};
use chrono::NaiveDate;
use tracing::{debug, info, warn};

/// Caller-owned ratings being folded game by game
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonState {
    current: SeedRatings,
    histories: RatingHistory,
    games_processed: usize,
}

impl SeasonState {
    /// Start from a private copy of the seed; histories start empty
    pub fn from_seed(seed: &SeedRatings) -> Self {
        Self {
            current: seed.clone(),
            histories: seed.keys().map(|team| (team.clone(), Vec::new())).collect(),
            games_processed: 0,
        }
    }

    pub fn rating(&self, team: &str) -> Option<f64> {
        self.current.get(team).copied()
    }

    pub fn games_processed(&self) -> usize {
        self.games_processed
    }

    /// Apply one game. `game_index` is only used to label errors.
    pub fn apply_game(
        &mut self,
        calculator: &EloCalculator,
        game_index: usize,
        game: &Game,
    ) -> RatingResult<GameRatingUpdate> {
        game.validate(game_index)?;

        let home_rating = self.lookup(&game.home, game_index)?;
        let away_rating = self.lookup(&game.away, game_index)?;

        if game.is_tie() {
            warn!(
                "Game {} ({} vs {}) ended {}-{}; treating as an away win",
                game_index, game.home, game.away, game.home_score, game.away_score
            );
        }

        let update = calculator.rate_game(home_rating, away_rating, game.outcome());

        debug!(
            "Game {}: {} {:.1} -> {:.1}, {} {:.1} -> {:.1}",
            game_index,
            game.home,
            home_rating,
            update.new_home,
            game.away,
            away_rating,
            update.new_away
        );

        self.record(&game.home, update.new_home);
        self.record(&game.away, update.new_away);
        self.games_processed += 1;

        Ok(update)
    }

    pub fn finish(self) -> SeasonRatings {
        SeasonRatings {
            final_ratings: self.current,
            histories: self.histories,
            games_processed: self.games_processed,
        }
    }

    fn lookup(&self, team: &str, game_index: usize) -> RatingResult<f64> {
        self.rating(team).ok_or_else(|| RatingError::UnknownTeam {
            team: team.to_string(),
            game_index,
        })
    }

    fn record(&mut self, team: &str, rating: f64) {
        if let Some(current) = self.current.get_mut(team) {
            *current = rating;
        }
        self.histories
            .entry(team.to_string())
            .or_default()
            .push(rating);
    }
}

/// Rating engine: a calculator plus the season fold
#[derive(Debug, Clone, Copy, Default)]
pub struct RatingEngine {
    calculator: EloCalculator,
}

impl RatingEngine {
    pub fn new(calculator: EloCalculator) -> Self {
        Self { calculator }
    }

    pub fn calculator(&self) -> &EloCalculator {
        &self.calculator
    }

    /// Fold `games` in the order given. Fails on the first game that names a
    /// team without a seed rating; the seed itself is never modified.
    pub fn apply_season(&self, seed: &SeedRatings, games: &[Game]) -> RatingResult<SeasonRatings> {
        let mut state = SeasonState::from_seed(seed);

        for (game_index, game) in games.iter().enumerate() {
            state.apply_game(&self.calculator, game_index, game)?;
        }

        info!(
            "Applied {} games across {} teams (k = {})",
            state.games_processed(),
            seed.len(),
            self.calculator.k_factor()
        );

        Ok(state.finish())
    }

    /// Ratings as of the end of `date`: the prefix of `games` up to the first
    /// game dated after it. Undated games are always part of the prefix.
    pub fn apply_season_through(
        &self,
        seed: &SeedRatings,
        games: &[Game],
        date: NaiveDate,
    ) -> RatingResult<SeasonRatings> {
        self.apply_season(seed, games_through(games, date))
    }
}

/// Prefix of `games` up to the first game dated after `date`.
/// Undated games stay in the prefix.
pub fn games_through(games: &[Game], date: NaiveDate) -> &[Game] {
    let prefix = games
        .iter()
        .position(|game| game.date.is_some_and(|played| played > date))
        .unwrap_or(games.len());

    debug!("Rating {} of {} games through {}", prefix, games.len(), date);
    &games[..prefix]
}
