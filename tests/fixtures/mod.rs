//! Test fixtures shared by the integration tests

#![allow(dead_code)]

use hoops_elo::types::{Game, SeedRatings};
use std::fs;
use std::path::PathBuf;

/// Header of a basketball-reference schedule export
pub const SCHEDULE_HEADER: &str =
    "Date,Start (ET),Visitor/Neutral,away_pts,Home/Neutral,home_pts,Box Score,OT,Attend.,LOG,Arena,Notes";

/// Opening week of a small four-team slate, plus one unplayed game
pub const OPENING_WEEK: &str = r#"Date,Start (ET),Visitor/Neutral,away_pts,Home/Neutral,home_pts,Box Score,OT,Attend.,LOG,Arena,Notes
"Tue, Oct 22, 2024",7:30p,New York Knicks,109,Boston Celtics,132,Box Score,,"19,156",2:04,TD Garden,
"Tue, Oct 22, 2024",10:00p,Minnesota Timberwolves,103,Los Angeles Lakers,110,Box Score,,"18,997",2:19,Crypto.com Arena,
"Thu, Oct 24, 2024",7:30p,Boston Celtics,122,New York Knicks,118,Box Score,,"19,812",2:11,Madison Square Garden (IV),
"Fri, Oct 25, 2024",10:00p,Los Angeles Lakers,107,Minnesota Timberwolves,117,Box Score,,"18,978",2:15,Target Center,
"Sat, Oct 26, 2024",8:00p,Minnesota Timberwolves,,Boston Celtics,,,,,,TD Garden,
"#;

/// Seed ratings for the four teams in [`OPENING_WEEK`]
pub fn opening_week_seed() -> SeedRatings {
    [
        ("Boston Celtics", 1650.0),
        ("New York Knicks", 1580.0),
        ("Los Angeles Lakers", 1520.0),
        ("Minnesota Timberwolves", 1600.0),
    ]
    .into_iter()
    .map(|(team, rating)| (team.to_string(), rating))
    .collect()
}

/// Seed with every team at the same rating
pub fn flat_seed(teams: &[&str], rating: f64) -> SeedRatings {
    teams
        .iter()
        .map(|team| (team.to_string(), rating))
        .collect()
}

/// Round robin where every pairing is played home and away, home team
/// winning whenever its index is lower
pub fn round_robin(teams: &[&str]) -> Vec<Game> {
    let mut games = Vec::new();
    for (i, home) in teams.iter().enumerate() {
        for (j, away) in teams.iter().enumerate() {
            if i == j {
                continue;
            }
            let (home_score, away_score) = if i < j { (110, 100) } else { (95, 105) };
            games.push(Game::new(*home, *away, home_score, away_score));
        }
    }
    games
}

/// Temp file with a unique name that is removed on drop
pub struct TempFile {
    pub path: PathBuf,
}

impl TempFile {
    pub fn new(name: &str) -> Self {
        Self {
            path: std::env::temp_dir().join(format!("hoops-elo-{}-{}", uuid::Uuid::new_v4(), name)),
        }
    }

    pub fn with_contents(name: &str, contents: &str) -> Self {
        let file = Self::new(name);
        fs::write(&file.path, contents).expect("write temp file");
        file
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
