//! Configuration loading and management for the Savings Projection Engine.
//!
//! This module provides functionality to load the customer-tier catalog and
//! the default impact assumptions from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use roi_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! let tier = config.get_tier("Mid-Market").unwrap();
//! println!("Tier covers {} employees", tier.avg_employees);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{TierCatalog, TierDefinition};
