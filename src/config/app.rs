//! Main application configuration
//!
//! This module defines the configuration structures for a season run,
//! including TOML file loading, environment variable loading and validation.

use crate::config::rating::RatingConfig;
use crate::report::ReportFormat;
use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Main application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub service: ServiceSettings,
    pub rating: RatingConfig,
    pub season: SeasonSettings,
    pub report: ReportSettings,
}

/// Process-level settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Name used in log output
    pub name: String,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

/// Inputs and outputs of one season
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonSettings {
    /// Display label, e.g. "2024-25"
    pub label: String,
    /// JSON snapshot of the prior season's final ratings
    pub seed_path: PathBuf,
    /// Schedule export with completed games
    pub schedule_path: PathBuf,
    /// Where to write this season's final ratings, if anywhere
    pub final_ratings_path: Option<PathBuf>,
    /// Only rate games played on or before this date
    pub as_of: Option<NaiveDate>,
    /// Give teams absent from the seed `rating.default_seed` instead of failing
    pub seed_missing_teams: bool,
}

/// Report output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportSettings {
    pub format: ReportFormat,
    /// Write the report here instead of stdout
    pub output_path: Option<PathBuf>,
    /// Teams drawn emphasised in the trajectory view
    pub highlight_teams: Vec<String>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            name: "hoops-elo".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl Default for SeasonSettings {
    fn default() -> Self {
        Self {
            label: "2024-25".to_string(),
            seed_path: PathBuf::from("2023-24/final_elos.json"),
            schedule_path: PathBuf::from("2025_schedule.csv"),
            final_ratings_path: None,
            as_of: None,
            seed_missing_teams: false,
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            format: ReportFormat::Table,
            output_path: None,
            highlight_teams: vec![
                "Los Angeles Lakers".to_string(),
                "Boston Celtics".to_string(),
                "Golden State Warriors".to_string(),
            ],
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        let config: AppConfig = toml::from_str(&contents)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Load configuration from environment variables with fallback to defaults
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env()?;

        validate_config(&config)?;
        Ok(config)
    }

    /// Overlay any `HOOPS_*` environment variables onto this configuration
    pub fn apply_env(&mut self) -> Result<()> {
        if let Ok(log_level) = env::var("HOOPS_LOG_LEVEL") {
            self.service.log_level = log_level;
        }
        if let Ok(k) = env::var("HOOPS_K_FACTOR") {
            self.rating.k_factor = k
                .parse()
                .map_err(|_| anyhow!("Invalid HOOPS_K_FACTOR value: {}", k))?;
        }
        if let Ok(label) = env::var("HOOPS_SEASON_LABEL") {
            self.season.label = label;
        }
        if let Ok(path) = env::var("HOOPS_SEED_PATH") {
            self.season.seed_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("HOOPS_SCHEDULE_PATH") {
            self.season.schedule_path = PathBuf::from(path);
        }
        if let Ok(path) = env::var("HOOPS_FINAL_RATINGS_PATH") {
            self.season.final_ratings_path = Some(PathBuf::from(path));
        }
        if let Ok(as_of) = env::var("HOOPS_AS_OF") {
            self.season.as_of = Some(
                as_of
                    .parse()
                    .map_err(|_| anyhow!("Invalid HOOPS_AS_OF value: {}", as_of))?,
            );
        }
        if let Ok(format) = env::var("HOOPS_REPORT_FORMAT") {
            self.report.format = ReportFormat::from_str(&format, true)
                .map_err(|_| anyhow!("Invalid HOOPS_REPORT_FORMAT value: {}", format))?;
        }
        if let Ok(path) = env::var("HOOPS_OUTPUT_PATH") {
            self.report.output_path = Some(PathBuf::from(path));
        }

        Ok(())
    }
}

/// Validate configuration values
pub fn validate_config(config: &AppConfig) -> Result<()> {
    // Validate log level
    match config.service.log_level.to_lowercase().as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => {}
        _ => return Err(anyhow!("Invalid log level: {}", config.service.log_level)),
    }

    // Validate rating settings
    config.rating.elo_config().validate()?;
    if !config.rating.default_seed.is_finite() {
        return Err(anyhow!("Default seed rating must be finite"));
    }

    // Validate season inputs
    if config.season.seed_path.as_os_str().is_empty() {
        return Err(anyhow!("Seed path cannot be empty"));
    }
    if config.season.schedule_path.as_os_str().is_empty() {
        return Err(anyhow!("Schedule path cannot be empty"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        assert!(validate_config(&config).is_ok());
        assert_eq!(config.rating.k_factor, 20.0);
        assert_eq!(config.report.format, ReportFormat::Table);
        assert_eq!(config.report.highlight_teams.len(), 3);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [rating]
            k_factor = 32.0

            [season]
            label = "2023-24"
            as_of = "2024-01-15"
            "#,
        )
        .unwrap();

        assert_eq!(config.rating.k_factor, 32.0);
        assert_eq!(config.rating.default_seed, 1500.0);
        assert_eq!(config.season.label, "2023-24");
        assert_eq!(config.season.as_of, NaiveDate::from_ymd_opt(2024, 1, 15));
        assert_eq!(config.service.log_level, "info");
    }

    #[test]
    fn test_report_format_in_toml() {
        let config: AppConfig = toml::from_str(
            r#"
            [report]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.report.format, ReportFormat::Json);
    }

    #[test]
    fn test_report_format_from_env() {
        let mut config = AppConfig::default();

        env::set_var("HOOPS_REPORT_FORMAT", "JSON");
        config.apply_env().unwrap();
        assert_eq!(config.report.format, ReportFormat::Json);

        env::set_var("HOOPS_REPORT_FORMAT", "svg");
        assert!(config.apply_env().is_err());

        env::remove_var("HOOPS_REPORT_FORMAT");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = AppConfig::default();
        config.service.log_level = "loud".to_string();
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.rating.k_factor = 0.0;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.rating.default_seed = f64::INFINITY;
        assert!(validate_config(&config).is_err());

        let mut config = AppConfig::default();
        config.season.seed_path = PathBuf::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_from_file() {
        let path = std::env::temp_dir().join(format!("hoops-elo-{}.toml", uuid::Uuid::new_v4()));
        fs::write(
            &path,
            r#"
            [service]
            log_level = "debug"

            [season]
            seed_path = "seeds/2023-24.json"
            "#,
        )
        .unwrap();

        let config = AppConfig::from_file(&path).unwrap();
        assert_eq!(config.service.log_level, "debug");
        assert_eq!(config.season.seed_path, PathBuf::from("seeds/2023-24.json"));

        fs::remove_file(&path).ok();
    }
}
