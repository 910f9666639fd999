//! Season run coordination
//!
//! Connects seed storage, schedule sources, the rating engine and the
//! report builder.

pub mod runner;

pub use runner::{RunnerOptions, SeasonRun, SeasonRunner};
