//! Chart-ready views of a season
//!
//! Each view is plain data; drawing it is left to whatever consumes the report.

use crate::config::TeamDirectory;
use crate::types::{SeasonRatings, SeedRatings, TeamId};
use crate::utils::round_to;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Space left below the lowest bar
const STANDINGS_FLOOR_MARGIN: f64 = 100.0;
/// Space left above the highest bar
const STANDINGS_CEILING_MARGIN: f64 = 50.0;
/// Fraction of the delta spread added on each side of the axis
const DELTA_PADDING_RATIO: f64 = 0.1;

/// One bar of the current-ratings chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsBar {
    pub team: TeamId,
    pub abbreviation: String,
    pub color: String,
    pub rating: f64,
}

/// Current ratings, lowest first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standings {
    pub bars: Vec<StandingsBar>,
    pub y_range: Option<(f64, f64)>,
}

/// One line of the rating-history chart, indexed by games played
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrajectorySeries {
    pub team: TeamId,
    pub abbreviation: String,
    pub color: String,
    pub highlighted: bool,
    /// Entry zero is the seed rating
    pub ratings: Vec<f64>,
}

/// One bar of the rating-change chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeltaBar {
    pub team: TeamId,
    pub abbreviation: String,
    pub color: String,
    pub delta: f64,
}

/// Season rating changes, biggest drop first
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deltas {
    pub bars: Vec<DeltaBar>,
    pub y_range: Option<(f64, f64)>,
}

/// Row of the ratings table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRow {
    pub team: TeamId,
    pub rating: f64,
    pub change: f64,
}

pub fn standings(season: &SeasonRatings, directory: &TeamDirectory) -> Standings {
    let mut bars: Vec<StandingsBar> = season
        .final_ratings
        .iter()
        .map(|(team, &rating)| {
            let info = directory.resolve(team);
            StandingsBar {
                team: team.clone(),
                abbreviation: info.abbreviation,
                color: info.color,
                rating,
            }
        })
        .collect();
    bars.sort_by(|a, b| a.rating.total_cmp(&b.rating));

    let y_range = match (bars.first(), bars.last()) {
        (Some(low), Some(high)) => Some((
            low.rating - STANDINGS_FLOOR_MARGIN,
            high.rating + STANDINGS_CEILING_MARGIN,
        )),
        _ => None,
    };

    Standings { bars, y_range }
}

pub fn trajectories(
    season: &SeasonRatings,
    seed: &SeedRatings,
    directory: &TeamDirectory,
    highlight_teams: &[String],
) -> Vec<TrajectorySeries> {
    let highlighted: HashSet<&str> = highlight_teams.iter().map(String::as_str).collect();

    season
        .histories_with_seed(seed)
        .into_iter()
        .map(|(team, ratings)| {
            let info = directory.resolve(&team);
            TrajectorySeries {
                highlighted: highlighted.contains(team.as_str()),
                team,
                abbreviation: info.abbreviation,
                color: info.color,
                ratings,
            }
        })
        .collect()
}

pub fn deltas(season: &SeasonRatings, seed: &SeedRatings, directory: &TeamDirectory) -> Deltas {
    let mut bars: Vec<DeltaBar> = season
        .histories_with_seed(seed)
        .into_iter()
        .map(|(team, ratings)| {
            let delta = match (ratings.first(), ratings.last()) {
                (Some(first), Some(last)) => last - first,
                _ => 0.0,
            };
            let info = directory.resolve(&team);
            DeltaBar {
                team,
                abbreviation: info.abbreviation,
                color: info.color,
                delta,
            }
        })
        .collect();
    bars.sort_by(|a, b| a.delta.total_cmp(&b.delta));

    let y_range = match (bars.first(), bars.last()) {
        (Some(low), Some(high)) => {
            let padding = (high.delta - low.delta) * DELTA_PADDING_RATIO;
            Some((low.delta - padding, high.delta + padding))
        }
        _ => None,
    };

    Deltas { bars, y_range }
}

/// Table rows rounded to one decimal, highest rating first
pub fn table(season: &SeasonRatings, seed: &SeedRatings) -> Vec<TableRow> {
    let changes = season.delta_vs_seed(seed);

    let mut rows: Vec<TableRow> = season
        .final_ratings
        .iter()
        .map(|(team, &rating)| TableRow {
            team: team.clone(),
            rating: round_to(rating, 1),
            change: round_to(changes.get(team).copied().unwrap_or_default(), 1),
        })
        .collect();
    rows.sort_by(|a, b| b.rating.total_cmp(&a.rating));
    rows
}
