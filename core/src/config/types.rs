//! Storefront configuration types
//!
//! Core only accepts fully parsed, validated configuration.
//! All discovery, loading, and merging happens in CLI layer.

use crate::error::ConfigError;
use crate::router::RoutePath;
use serde::{Deserialize, Serialize};

/// Navigation history settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Whether back navigation is available
    pub enabled: bool,
    /// Maximum number of history entries
    pub max_entries: usize,
}

impl HistoryConfig {
    pub const DEFAULT_MAX_ENTRIES: usize = 50;
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }
}

/// Storefront settings as read from `ipsum.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorefrontConfig {
    /// Name shown in the top navigation strip
    pub store_name: String,
    /// Path displayed on startup
    pub initial_route: RoutePath,
    pub history: HistoryConfig,
    /// One round root trigger per label in the navigation bar
    pub nav_labels: Vec<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            store_name: "Ipsum Store".to_string(),
            initial_route: RoutePath::root(),
            history: HistoryConfig::default(),
            nav_labels: vec!["Home".to_string(); 3],
        }
    }
}

impl StorefrontConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: StorefrontConfig =
            serde_json::from_str(content).map_err(|e| ConfigError::InvalidFormat {
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Override the startup path
    pub fn with_initial_route(mut self, route: impl Into<RoutePath>) -> Self {
        self.initial_route = route.into();
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "store_name".to_string(),
                value: self.store_name.clone(),
            });
        }

        if self.history.enabled && self.history.max_entries == 0 {
            return Err(ConfigError::InvalidValue {
                field: "history.max_entries".to_string(),
                value: "0".to_string(),
            });
        }

        if self.nav_labels.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "nav_labels".to_string(),
                value: "[]".to_string(),
            });
        }

        Ok(())
    }
}
