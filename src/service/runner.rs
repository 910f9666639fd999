//! Season runner
//!
//! Wires a seed snapshot and a schedule source through the rating engine
//! and into a report. Any missing input aborts the whole run.

use crate::config::{AppConfig, TeamDirectory};
use crate::error::{RatingError, Result};
use crate::rating::{games_through, EloCalculator, RatingEngine, SeedStorage};
use crate::report::{RatingsReport, ReportOptions};
use crate::schedule::ScheduleSource;
use crate::types::{Game, SeasonRatings, SeedRatings};
use chrono::NaiveDate;
use std::time::Instant;
use tracing::{error, info, warn};

/// Output of one run
#[derive(Debug, Clone)]
pub struct SeasonRun {
    /// Seed actually used, including any defaulted teams
    pub seed: SeedRatings,
    pub season: SeasonRatings,
    pub report: RatingsReport,
}

/// Runner settings that are not part of the engine
#[derive(Debug, Clone)]
pub struct RunnerOptions {
    pub season_label: String,
    pub highlight_teams: Vec<String>,
    /// Seed rating for teams absent from the snapshot; `None` makes them fatal
    pub default_seed: Option<f64>,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            season_label: config.season.label,
            highlight_teams: config.report.highlight_teams,
            default_seed: None,
        }
    }
}

/// Seed → schedule → engine → report
#[derive(Debug, Clone)]
pub struct SeasonRunner {
    engine: RatingEngine,
    directory: TeamDirectory,
    options: RunnerOptions,
}

impl SeasonRunner {
    pub fn new(engine: RatingEngine, directory: TeamDirectory, options: RunnerOptions) -> Self {
        Self {
            engine,
            directory,
            options,
        }
    }

    /// Runner for the NBA directory using the configured K and season settings
    pub fn from_config(config: &AppConfig) -> Result<Self> {
        let calculator = EloCalculator::new(config.rating.elo_config())?;

        Ok(Self::new(
            RatingEngine::new(calculator),
            TeamDirectory::nba(),
            RunnerOptions {
                season_label: config.season.label.clone(),
                highlight_teams: config.report.highlight_teams.clone(),
                default_seed: config
                    .season
                    .seed_missing_teams
                    .then_some(config.rating.default_seed),
            },
        ))
    }

    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }

    pub fn run(
        &self,
        storage: &dyn SeedStorage,
        source: &dyn ScheduleSource,
        as_of: Option<NaiveDate>,
    ) -> Result<SeasonRun> {
        let start_time = Instant::now();

        let mut seed = storage.load_seed().map_err(|e| {
            error!("Could not load initial Elo ratings: {}", e);
            e
        })?;

        let games = source.fetch_games()?;
        if games.is_empty() {
            error!("Schedule source returned no completed games");
            return Err(RatingError::EmptySchedule.into());
        }

        let rated = match as_of {
            Some(date) => games_through(&games, date),
            None => &games[..],
        };

        if let Some(default_seed) = self.options.default_seed {
            fill_missing_teams(&mut seed, rated, default_seed);
        }

        let season = self.engine.apply_season(&seed, rated)?;

        let report = RatingsReport::build(
            &season,
            &seed,
            &self.directory,
            &ReportOptions {
                season_label: self.options.season_label.clone(),
                k_factor: self.engine.calculator().k_factor(),
                highlight_teams: self.options.highlight_teams.clone(),
            },
        );

        info!(
            "Season {} rated: {} games, {} teams, {:.2}ms",
            self.options.season_label,
            season.games_processed,
            season.final_ratings.len(),
            start_time.elapsed().as_secs_f64() * 1000.0
        );

        Ok(SeasonRun {
            seed,
            season,
            report,
        })
    }
}

fn fill_missing_teams(seed: &mut SeedRatings, games: &[Game], default_seed: f64) {
    for game in games {
        for team in [&game.home, &game.away] {
            if !seed.contains_key(team) {
                warn!(
                    "'{}' has no seed rating, starting at {}",
                    team, default_seed
                );
                seed.insert(team.clone(), default_seed);
            }
        }
    }
}
