//! Schedule acquisition
//!
//! Where completed games come from is outside the rating engine. Sources
//! only promise an ordered list of completed games.

pub mod basketball_reference;

use crate::error::Result;
use crate::types::Game;

pub use basketball_reference::{parse_schedule, CsvScheduleSource};

/// Trait for anything that can produce a season's completed games
#[cfg_attr(test, mockall::automock)]
pub trait ScheduleSource: Send + Sync {
    /// Completed games in chronological order
    fn fetch_games(&self) -> Result<Vec<Game>>;
}

/// Fixed, in-memory list of games
#[derive(Debug, Clone, Default)]
pub struct StaticScheduleSource {
    games: Vec<Game>,
}

impl StaticScheduleSource {
    pub fn new(games: Vec<Game>) -> Self {
        Self { games }
    }
}

impl ScheduleSource for StaticScheduleSource {
    fn fetch_games(&self) -> Result<Vec<Game>> {
        Ok(self.games.clone())
    }
}
