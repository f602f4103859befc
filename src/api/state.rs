//! Application state for the Child Care Subsidy API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::calculation::SubsidyCalculator;
use crate::config::{CcsConfig, ConfigLoader};

/// Shared application state.
///
/// Holds the loaded scheme configuration and a calculator bound to its rate
/// table. Both are read-only and shared across handlers.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
    calculator: Arc<SubsidyCalculator>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        let calculator = SubsidyCalculator::new(config.rates().clone());
        Self {
            config: Arc::new(config),
            calculator: Arc::new(calculator),
        }
    }

    /// Returns the scheme configuration.
    pub fn config(&self) -> &CcsConfig {
        self.config.config()
    }

    /// Returns the subsidy calculator.
    pub fn calculator(&self) -> &SubsidyCalculator {
        &self.calculator
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ConfigLoader::builtin())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // axum state must be Clone
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_calculator_uses_loaded_rates() {
        let state = AppState::default();
        assert_eq!(state.calculator().rates(), state.config().rates());
    }
}
