//! Static team presentation data
//!
//! Abbreviations and chart colours for the 30 NBA franchises. Built once,
//! never mutated.

use serde::Serialize;
use std::collections::HashMap;
use tracing::warn;

/// Colour used for teams missing from the directory
pub const FALLBACK_COLOR: &str = "rgb(128,128,128)";

/// Presentation data for one team
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamInfo {
    pub name: String,
    pub abbreviation: String,
    pub color: String,
}

/// (name, abbreviation, colour)
const NBA_TEAMS: [(&str, &str, &str); 30] = [
    ("Atlanta Hawks", "ATL", "rgb(200,16,46)"),
    ("Boston Celtics", "BOS", "rgb(0,122,51)"),
    ("Brooklyn Nets", "BKN", "rgb(0,0,0)"),
    ("Charlotte Hornets", "CHA", "rgb(0,120,140)"),
    ("Chicago Bulls", "CHI", "rgb(206,17,65)"),
    ("Cleveland Cavaliers", "CLE", "rgb(134,0,56)"),
    ("Dallas Mavericks", "DAL", "rgb(0,83,188)"),
    ("Denver Nuggets", "DEN", "rgb(13,34,64)"),
    ("Detroit Pistons", "DET", "rgb(200,16,46)"),
    ("Golden State Warriors", "GSW", "rgb(255,199,44)"),
    ("Houston Rockets", "HOU", "rgb(206,17,65)"),
    ("Indiana Pacers", "IND", "rgb(0,45,98)"),
    ("Los Angeles Clippers", "LAC", "rgb(200,16,46)"),
    ("Los Angeles Lakers", "LAL", "rgb(85,37,130)"),
    ("Memphis Grizzlies", "MEM", "rgb(93,118,169)"),
    ("Miami Heat", "MIA", "rgb(152,0,46)"),
    ("Milwaukee Bucks", "MIL", "rgb(0,71,27)"),
    ("Minnesota Timberwolves", "MIN", "rgb(12,35,64)"),
    ("New Orleans Pelicans", "NOP", "rgb(0,22,65)"),
    ("New York Knicks", "NYK", "rgb(0,107,182)"),
    ("Oklahoma City Thunder", "OKC", "rgb(0,125,195)"),
    ("Orlando Magic", "ORL", "rgb(0,125,197)"),
    ("Philadelphia 76ers", "PHI", "rgb(0,107,182)"),
    ("Phoenix Suns", "PHX", "rgb(29,17,96)"),
    ("Portland Trail Blazers", "POR", "rgb(224,58,62)"),
    ("Sacramento Kings", "SAC", "rgb(91,43,130)"),
    ("San Antonio Spurs", "SAS", "rgb(196,206,211)"),
    ("Toronto Raptors", "TOR", "rgb(206,17,65)"),
    ("Utah Jazz", "UTA", "rgb(0,43,92)"),
    ("Washington Wizards", "WAS", "rgb(0,43,92)"),
];

/// Name → presentation lookup
#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    teams: HashMap<String, TeamInfo>,
}

impl TeamDirectory {
    /// Directory of the current NBA franchises
    pub fn nba() -> Self {
        Self::from_entries(
            NBA_TEAMS
                .iter()
                .map(|(name, abbreviation, color)| TeamInfo {
                    name: name.to_string(),
                    abbreviation: abbreviation.to_string(),
                    color: color.to_string(),
                }),
        )
    }

    pub fn from_entries(entries: impl IntoIterator<Item = TeamInfo>) -> Self {
        Self {
            teams: entries
                .into_iter()
                .map(|info| (info.name.clone(), info))
                .collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&TeamInfo> {
        self.teams.get(name)
    }

    /// Directory entry, or the name itself on a grey fallback
    pub fn resolve(&self, name: &str) -> TeamInfo {
        match self.teams.get(name) {
            Some(info) => info.clone(),
            None => {
                warn!("No presentation data for '{}', using fallback", name);
                TeamInfo {
                    name: name.to_string(),
                    abbreviation: name.to_string(),
                    color: FALLBACK_COLOR.to_string(),
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
