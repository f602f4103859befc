//! Child Care Subsidy Estimation Engine
//!
//! This crate estimates the Australian Child Care Subsidy (CCS) for a family
//! from its income, care arrangements and activity level, and breaks the
//! result down into per-hour, weekly, fortnightly and annual figures.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
