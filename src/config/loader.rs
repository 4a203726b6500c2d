//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the tier
//! catalog and default impact assumptions from YAML files.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use tracing::info;

use crate::error::{EngineError, EngineResult};
use crate::models::ImpactAssumptions;

use super::types::{ImpactConfig, TierCatalog, TierDefinition};

/// Loads and provides access to the tier catalog and impact defaults.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/
/// ├── tiers.yaml   # Customer-tier catalog
/// └── impact.yaml  # Default (full-vision) impact assumptions
/// ```
///
/// # Example
///
/// ```no_run
/// use roi_engine::config::ConfigLoader;
///
/// let config = ConfigLoader::load("./config").unwrap();
///
/// let tier = config.get_tier("Mid-Market").unwrap();
/// println!("Target price: ${}", tier.target_annual_price);
///
/// let impact = config.impact();
/// println!("TTF reduction: {}", impact.get("ttf_total_reduction_percent").unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    catalog: TierCatalog,
    impact: ImpactAssumptions,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigNotFound`] when a required file is
    /// missing and [`EngineError::ConfigParseError`] when a file contains
    /// invalid YAML or lacks a required field.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let catalog: TierCatalog = Self::load_yaml(&path.join("tiers.yaml"))?;
        let impact_config: ImpactConfig = Self::load_yaml(&path.join("impact.yaml"))?;

        info!(
            tier_count = catalog.tiers.len(),
            "Loaded tier catalog and impact defaults"
        );

        Ok(Self {
            catalog,
            impact: impact_config.impact,
        })
    }

    fn load_yaml<T: DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let contents = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path.display().to_string(),
        })?;
        serde_yaml::from_str(&contents).map_err(|e| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Looks up a tier by name.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::TierNotFound`] when the catalog has no tier
    /// with that name.
    pub fn get_tier(&self, name: &str) -> EngineResult<&TierDefinition> {
        self.catalog
            .tiers
            .get(name)
            .ok_or_else(|| EngineError::TierNotFound {
                name: name.to_string(),
            })
    }

    /// Returns the tier names in alphabetical order.
    pub fn tier_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.catalog.tiers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Returns the default impact assumptions.
    pub fn impact(&self) -> &ImpactAssumptions {
        &self.impact
    }
}
