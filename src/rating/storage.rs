//! Seed rating storage interface and implementations
//!
//! A seed is a flat team → rating snapshot, typically the previous
//! season's final ratings. It is the only state that outlives a run.

use crate::error::{RatingError, Result};
use crate::types::SeedRatings;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::RwLock;
use tracing::{debug, info};

/// Trait for seed snapshot storage operations
#[cfg_attr(test, mockall::automock)]
pub trait SeedStorage: Send + Sync {
    /// Load the seed ratings used to start a season
    fn load_seed(&self) -> Result<SeedRatings>;

    /// Persist ratings so they can seed the next season
    fn save_ratings(&self, ratings: &SeedRatings) -> Result<()>;
}

fn check_finite(ratings: &SeedRatings) -> Result<()> {
    if let Some((team, rating)) = ratings.iter().find(|(_, rating)| !rating.is_finite()) {
        return Err(RatingError::StorageError {
            message: format!("Rating for '{}' is not finite: {}", team, rating),
        }
        .into());
    }
    Ok(())
}

/// In-memory seed storage implementation
#[derive(Debug, Default)]
pub struct InMemorySeedStorage {
    ratings: RwLock<Option<SeedRatings>>,
}

impl InMemorySeedStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage preloaded with a seed
    pub fn with_seed(seed: SeedRatings) -> Self {
        Self {
            ratings: RwLock::new(Some(seed)),
        }
    }
}

impl SeedStorage for InMemorySeedStorage {
    fn load_seed(&self) -> Result<SeedRatings> {
        let ratings = self
            .ratings
            .read()
            .map_err(|_| RatingError::StorageError {
                message: "Failed to acquire seed read lock".to_string(),
            })?;

        ratings.clone().ok_or_else(|| {
            RatingError::StorageError {
                message: "No seed ratings stored".to_string(),
            }
            .into()
        })
    }

    fn save_ratings(&self, ratings: &SeedRatings) -> Result<()> {
        check_finite(ratings)?;

        let mut stored = self
            .ratings
            .write()
            .map_err(|_| RatingError::StorageError {
                message: "Failed to acquire seed write lock".to_string(),
            })?;

        *stored = Some(ratings.clone());
        Ok(())
    }
}

/// Seed snapshot stored as a JSON object of team → rating
#[derive(Debug, Clone)]
pub struct JsonSeedStorage {
    path: PathBuf,
}

impl JsonSeedStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SeedStorage for JsonSeedStorage {
    fn load_seed(&self) -> Result<SeedRatings> {
        let contents = fs::read_to_string(&self.path).map_err(|e| {
            let message = match e.kind() {
                ErrorKind::NotFound => {
                    format!("Seed snapshot not found at {}", self.path.display())
                }
                _ => format!("Failed to read {}: {}", self.path.display(), e),
            };
            RatingError::StorageError { message }
        })?;

        let seed: SeedRatings =
            serde_json::from_str(&contents).map_err(|e| RatingError::StorageError {
                message: format!("Invalid seed snapshot {}: {}", self.path.display(), e),
            })?;
        check_finite(&seed)?;

        info!(
            "Loaded {} seed ratings from {}",
            seed.len(),
            self.path.display()
        );
        Ok(seed)
    }

    fn save_ratings(&self, ratings: &SeedRatings) -> Result<()> {
        check_finite(ratings)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(ratings)?;
        fs::write(&self.path, json)?;

        debug!("Wrote {} ratings to {}", ratings.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("hoops-elo-{}-{}.json", name, uuid::Uuid::new_v4()))
    }

    fn sample_seed() -> SeedRatings {
        [
            ("Boston Celtics".to_string(), 1712.5),
            ("Detroit Pistons".to_string(), 1288.25),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_in_memory_storage_round_trip() {
        let storage = InMemorySeedStorage::new();
        assert!(storage.load_seed().is_err());

        storage.save_ratings(&sample_seed()).unwrap();
        assert_eq!(storage.load_seed().unwrap(), sample_seed());
    }

    #[test]
    fn test_in_memory_rejects_non_finite() {
        let storage = InMemorySeedStorage::with_seed(sample_seed());
        let mut bad = sample_seed();
        bad.insert("Utah Jazz".to_string(), f64::NAN);

        assert!(storage.save_ratings(&bad).is_err());
        assert_eq!(storage.load_seed().unwrap(), sample_seed());
    }

    #[test]
    fn test_json_storage_round_trip() {
        let path = temp_path("round-trip");
        let storage = JsonSeedStorage::new(&path);

        storage.save_ratings(&sample_seed()).unwrap();
        assert_eq!(storage.load_seed().unwrap(), sample_seed());

        fs::remove_file(&path).ok();
    }

    #[test]
    fn test_json_storage_missing_file() {
        let storage = JsonSeedStorage::new(temp_path("missing"));
        let err = storage.load_seed().unwrap_err();

        match err.downcast_ref::<RatingError>() {
            Some(RatingError::StorageError { message }) => {
                assert!(message.contains("not found"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_json_storage_invalid_contents() {
        let path = temp_path("invalid");
        fs::write(&path, r#"{"Boston Celtics": "strong"}"#).unwrap();

        let storage = JsonSeedStorage::new(&path);
        assert!(storage.load_seed().is_err());

        fs::remove_file(&path).ok();
    }
}
