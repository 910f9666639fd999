//! Season report for the presentation layer
//!
//! Bundles the standings, trajectory, delta and table views with run
//! metadata, and renders them as JSON or a plain-text table.

pub mod views;

use crate::config::TeamDirectory;
use crate::types::{SeasonRatings, SeedRatings};
use crate::utils::{current_timestamp, generate_run_id};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;
use uuid::Uuid;

pub use views::{Deltas, DeltaBar, Standings, StandingsBar, TableRow, TrajectorySeries};

/// Output format of a rendered report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Table,
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReportFormat::Table => write!(f, "table"),
            ReportFormat::Json => write!(f, "json"),
        }
    }
}

/// Inputs to a report besides the ratings themselves
#[derive(Debug, Clone)]
pub struct ReportOptions {
    pub season_label: String,
    pub k_factor: f64,
    pub highlight_teams: Vec<String>,
}

/// Who produced a report and from what
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportMetadata {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    pub season: String,
    pub k_factor: f64,
    pub games_processed: usize,
}

/// Everything the presentation layer needs for one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingsReport {
    pub metadata: ReportMetadata,
    pub standings: Standings,
    pub trajectories: Vec<TrajectorySeries>,
    pub deltas: Deltas,
    pub table: Vec<TableRow>,
}

impl RatingsReport {
    pub fn build(
        season: &SeasonRatings,
        seed: &SeedRatings,
        directory: &TeamDirectory,
        options: &ReportOptions,
    ) -> Self {
        Self {
            metadata: ReportMetadata {
                run_id: generate_run_id(),
                generated_at: current_timestamp(),
                season: options.season_label.clone(),
                k_factor: options.k_factor,
                games_processed: season.games_processed,
            },
            standings: views::standings(season, directory),
            trajectories: views::trajectories(season, seed, directory, &options.highlight_teams),
            deltas: views::deltas(season, seed, directory),
            table: views::table(season, seed),
        }
    }

    pub fn render(&self, format: ReportFormat) -> serde_json::Result<String> {
        match format {
            ReportFormat::Json => self.to_json(),
            ReportFormat::Table => Ok(self.to_table()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Ratings table as aligned plain text
    pub fn to_table(&self) -> String {
        let width = self
            .table
            .iter()
            .map(|row| row.team.len())
            .max()
            .unwrap_or(0)
            .max("Team".len());

        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} Elo ratings ({} games, k = {})",
            self.metadata.season, self.metadata.games_processed, self.metadata.k_factor
        );
        let _ = writeln!(
            out,
            "{:>4}  {:<width$}  {:>8}  {:>7}",
            "#",
            "Team",
            "Elo",
            "Change",
            width = width
        );
        for (rank, row) in self.table.iter().enumerate() {
            let _ = writeln!(
                out,
                "{:>4}  {:<width$}  {:>8.1}  {:>+7.1}",
                rank + 1,
                row.team,
                row.rating,
                row.change,
                width = width
            );
        }
        out
    }
}
