//! Reader for basketball-reference style schedule exports
//!
//! The export has one row per scheduled game. Games that have not been
//! played yet carry empty score cells and are skipped.

use crate::error::{RatingError, RatingResult, Result};
use crate::schedule::ScheduleSource;
use crate::types::Game;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// "Tue, Oct 22, 2024"
const LONG_DATE_FORMAT: &str = "%a, %b %e, %Y";
const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

const REQUIRED_COLUMNS: [&str; 5] = [
    "Date",
    "Visitor/Neutral",
    "away_pts",
    "Home/Neutral",
    "home_pts",
];

#[derive(Debug, Deserialize)]
struct RawScheduleRow {
    #[serde(rename = "Date")]
    date: String,
    #[serde(rename = "Visitor/Neutral")]
    visitor: String,
    away_pts: String,
    #[serde(rename = "Home/Neutral")]
    home: String,
    home_pts: String,
}

fn parse_date(raw: &str, line: usize) -> RatingResult<Option<NaiveDate>> {
    if raw.is_empty() {
        return Ok(None);
    }

    NaiveDate::parse_from_str(raw, LONG_DATE_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(raw, ISO_DATE_FORMAT))
        .map(Some)
        .map_err(|_| RatingError::malformed(line, format!("unrecognised date '{}'", raw)))
}

fn parse_score(raw: &str, column: &str, line: usize) -> RatingResult<u32> {
    raw.parse().map_err(|_| {
        RatingError::malformed(line, format!("{} '{}' is not a whole number", column, raw))
    })
}

/// Parse completed games from a schedule export, keeping file order.
///
/// `row` in a returned [`RatingError::MalformedGame`] is the 1-based line
/// number in the input, header included.
pub fn parse_schedule<R: Read>(rdr: R) -> RatingResult<Vec<Game>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr);

    let headers = reader
        .headers()
        .map_err(|e| RatingError::malformed(1, format!("unreadable header: {}", e)))?
        .clone();

    if let Some(missing) = REQUIRED_COLUMNS
        .into_iter()
        .find(|column| !headers.iter().any(|header| header == *column))
    {
        return Err(RatingError::malformed(1, format!("missing '{}' column", missing)));
    }

    let mut games = Vec::new();
    let mut unplayed = 0usize;

    for (index, result) in reader.records().enumerate() {
        let fallback_line = index + 2;
        let record = result.map_err(|e| RatingError::malformed(fallback_line, e.to_string()))?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(fallback_line);

        let raw: RawScheduleRow = record
            .deserialize(Some(&headers))
            .map_err(|e| RatingError::malformed(line, e.to_string()))?;

        if raw.away_pts.is_empty() || raw.home_pts.is_empty() {
            debug!(
                "Skipping unplayed game on line {}: {} at {}",
                line, raw.visitor, raw.home
            );
            unplayed += 1;
            continue;
        }

        let game = Game {
            date: parse_date(&raw.date, line)?,
            home: raw.home,
            away: raw.visitor,
            home_score: parse_score(&raw.home_pts, "home_pts", line)?,
            away_score: parse_score(&raw.away_pts, "away_pts", line)?,
        };
        game.validate(line)?;
        games.push(game);
    }

    debug!(
        "Parsed {} completed games, skipped {} unplayed",
        games.len(),
        unplayed
    );
    Ok(games)
}

/// Schedule source backed by an exported CSV file
#[derive(Debug, Clone)]
pub struct CsvScheduleSource {
    path: PathBuf,
}

impl CsvScheduleSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ScheduleSource for CsvScheduleSource {
    fn fetch_games(&self) -> Result<Vec<Game>> {
        let file = File::open(&self.path).map_err(|e| RatingError::ScheduleSource {
            message: format!("Failed to open {}: {}", self.path.display(), e),
        })?;

        let games = parse_schedule(file)?;
        info!(
            "Loaded {} completed games from {}",
            games.len(),
            self.path.display()
        );
        Ok(games)
    }
}
