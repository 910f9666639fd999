//! Error types for the rating engine and its collaborators
//!
//! Engine and parser failures are typed so callers can decide whether to
//! abort a report or skip a game. Application glue uses anyhow.

/// Result type alias for application-level code
pub type Result<T> = anyhow::Result<T>;

/// Result type alias for operations that fail with a typed [`RatingError`]
pub type RatingResult<T> = std::result::Result<T, RatingError>;

/// Custom error types for rating scenarios
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RatingError {
    #[error("Unknown team '{team}' in game {game_index}: no seed rating")]
    UnknownTeam { team: String, game_index: usize },

    #[error("Malformed game at row {row}: {reason}")]
    MalformedGame { row: usize, reason: String },

    #[error("Schedule contains no completed games")]
    EmptySchedule,

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },

    #[error("Seed storage error: {message}")]
    StorageError { message: String },

    #[error("Schedule source error: {message}")]
    ScheduleSource { message: String },
}

impl RatingError {
    /// Shorthand for a malformed record
    pub fn malformed(row: usize, reason: impl Into<String>) -> Self {
        RatingError::MalformedGame {
            row,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_team_message() {
        let err = RatingError::UnknownTeam {
            team: "Seattle SuperSonics".to_string(),
            game_index: 3,
        };
        assert_eq!(
            err.to_string(),
            "Unknown team 'Seattle SuperSonics' in game 3: no seed rating"
        );
    }

    #[test]
    fn test_typed_error_survives_anyhow() {
        let err: anyhow::Error = RatingError::malformed(7, "home_pts is not a number").into();
        match err.downcast_ref::<RatingError>() {
            Some(RatingError::MalformedGame { row, reason }) => {
                assert_eq!(*row, 7);
                assert!(reason.contains("home_pts"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
