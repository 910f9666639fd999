//! Configuration management for hoops-elo
//!
//! This module handles configuration loading from TOML files and
//! environment variables, validation, default values, and the static
//! team directory used by the reports.

pub mod app;
pub mod rating;
pub mod teams;

// Re-export commonly used types
pub use app::{validate_config, AppConfig, ReportSettings, SeasonSettings, ServiceSettings};
pub use rating::RatingConfig;
pub use teams::{TeamDirectory, TeamInfo};
