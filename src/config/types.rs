//! Configuration types for the tier catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use std::collections::HashMap;

use serde::Deserialize;

use crate::models::{ImpactAssumptions, TierProfile};

/// One customer tier in the catalog.
///
/// A tier bundles the averages for a customer-size band together with the
/// product's target pricing for that band. [`TierDefinition::to_profile`]
/// derives the calculation input from the averages.
#[derive(Debug, Clone, Deserialize)]
pub struct TierDefinition {
    /// Human-readable employee-count band (e.g., "500-1,000").
    pub employee_range: String,
    /// Representative employee count for the band.
    pub avg_employees: u32,
    /// Annual hires as a fraction of headcount.
    pub annual_hires_percent: f64,
    /// Average annual salary across the band.
    pub avg_annual_salary: f64,
    /// Average recruiter salary across the band.
    pub avg_recruiter_salary: f64,
    /// Default recruiter headcount for the band.
    pub default_num_recruiters: u32,
    /// Target annual product price for this tier.
    pub target_annual_price: f64,
    /// Target annual value range label (e.g., "$0.5M - $0.6M").
    pub target_value_range: String,
    /// Target ROI label (e.g., "~500%").
    pub target_roi_percent: String,
}

impl TierDefinition {
    /// Builds the calculation input profile for this tier.
    ///
    /// Annual hires are derived by truncating
    /// `avg_employees * annual_hires_percent` (750 employees at 15% gives
    /// 112 hires, not 113).
    pub fn to_profile(&self) -> TierProfile {
        let annual_hires = (f64::from(self.avg_employees) * self.annual_hires_percent) as u32;
        TierProfile {
            num_employees: self.avg_employees,
            annual_hires,
            avg_annual_salary: self.avg_annual_salary,
            avg_recruiter_salary: self.avg_recruiter_salary,
            num_recruiters: self.default_num_recruiters,
        }
    }
}

/// Tier catalog file structure (`tiers.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct TierCatalog {
    /// Map of tier name to tier definition.
    pub tiers: HashMap<String, TierDefinition>,
}

/// Impact defaults file structure (`impact.yaml`).
#[derive(Debug, Clone, Deserialize)]
pub struct ImpactConfig {
    /// The default impact assumptions.
    pub impact: ImpactAssumptions,
}
