//! Configuration loading and management for the Child Care Subsidy engine.
//!
//! This module provides the rate table the calculator works from, either the
//! built-in 2024-25 table or one loaded from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use ccs_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/ccs").unwrap();
//! println!("Loaded scheme: {}", config.scheme().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CcsConfig, HourlyCaps, IncomeThresholds, RateTable, SchemeMetadata, SubsidisedHours,
};
