//! Impact-assumption model.
//!
//! This module contains the [`ImpactAssumptions`] mapping of named
//! impact-factor keys to fractional multipliers, supplied per calculation
//! call. The values model how strongly the product moves each benchmark;
//! most are fractions in `[0, 1]`, one is an hours-per-week count.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The 16 impact keys the calculation rules consume.
///
/// A mapping that lacks any of these keys fails with
/// [`EngineError::MissingImpactKey`] when the corresponding rule runs.
pub const IMPACT_KEYS: [&str; 16] = [
    "ttf_total_reduction_percent",
    "recruiter_total_hours_saved_per_week_per_recruiter",
    "cph_total_reduction_percent",
    "mishire_rate_reduction_percent",
    "shift_shock_turnover_reduction_percent",
    "role_def_manager_time_reduction_percent",
    "interview_scheduling_time_reduction_percent",
    "interviewer_hours_per_hire_reduction_percent",
    "time_to_productivity_reduction_percent",
    "onboarding_early_turnover_reduction_percent",
    "internal_fill_rate_increase_points",
    "internal_mobility_retention_improvement_percent_of_turnover",
    "productivity_gain_from_better_pm_percent_of_payroll_segment",
    "turnover_reduction_from_better_pm_percent_of_turnover",
    "critical_skill_shortage_cost_reduction_percent",
    "labor_budget_swp_total_saving_percent",
];

/// A mapping from impact-factor keys to fractional multipliers.
///
/// Values are not range-checked: a scenario multiplier above 100% can
/// legitimately push them outside `[0, 1]`, and the engine lets such values
/// flow through.
///
/// # Example
///
/// ```
/// use roi_engine::models::ImpactAssumptions;
///
/// let impact = ImpactAssumptions::full_vision();
/// assert_eq!(impact.get("ttf_total_reduction_percent").unwrap(), 0.30);
///
/// let half = impact.scaled(0.5);
/// assert_eq!(half.get("ttf_total_reduction_percent").unwrap(), 0.15);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ImpactAssumptions {
    values: BTreeMap<String, f64>,
}

impl ImpactAssumptions {
    /// Creates an impact mapping from raw key/value pairs.
    ///
    /// Completeness is not checked here; a missing key surfaces as
    /// [`EngineError::MissingImpactKey`] from the rule that needs it.
    pub fn new(values: BTreeMap<String, f64>) -> Self {
        Self { values }
    }

    /// Returns the full-vision impact assumptions.
    ///
    /// These are the product's assumed impact values at full deployment,
    /// matching the shipped `config/impact.yaml`.
    pub fn full_vision() -> Self {
        let values = [
            ("ttf_total_reduction_percent", 0.30),
            ("recruiter_total_hours_saved_per_week_per_recruiter", 13.0),
            ("cph_total_reduction_percent", 0.15),
            ("mishire_rate_reduction_percent", 0.35),
            ("shift_shock_turnover_reduction_percent", 0.60),
            ("role_def_manager_time_reduction_percent", 0.75),
            ("interview_scheduling_time_reduction_percent", 0.90),
            ("interviewer_hours_per_hire_reduction_percent", 0.25),
            ("time_to_productivity_reduction_percent", 0.35),
            ("onboarding_early_turnover_reduction_percent", 0.65),
            ("internal_fill_rate_increase_points", 0.20),
            (
                "internal_mobility_retention_improvement_percent_of_turnover",
                0.15,
            ),
            (
                "productivity_gain_from_better_pm_percent_of_payroll_segment",
                0.03,
            ),
            ("turnover_reduction_from_better_pm_percent_of_turnover", 0.30),
            ("critical_skill_shortage_cost_reduction_percent", 0.60),
            ("labor_budget_swp_total_saving_percent", 0.04),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self { values }
    }

    /// Looks up an impact value by key.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::MissingImpactKey`] if the key is absent.
    pub fn get(&self, key: &str) -> EngineResult<f64> {
        self.values
            .get(key)
            .copied()
            .ok_or_else(|| EngineError::MissingImpactKey {
                key: key.to_string(),
            })
    }

    /// Sets a single impact value, replacing any previous value.
    pub fn set(&mut self, key: &str, value: f64) {
        self.values.insert(key.to_string(), value);
    }

    /// Removes a key from the mapping, returning its previous value.
    pub fn remove(&mut self, key: &str) -> Option<f64> {
        self.values.remove(key)
    }

    /// Returns a copy with every value multiplied by `factor`.
    ///
    /// This is the scenario multiplier: ">100% scenario" runs pass a factor
    /// above 1.0 and the scaled values flow through unchecked.
    pub fn scaled(&self, factor: f64) -> Self {
        let values = self
            .values
            .iter()
            .map(|(k, v)| (k.clone(), v * factor))
            .collect();
        Self { values }
    }

    /// Iterates over the key/value pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.values.iter().map(|(k, v)| (k.as_str(), *v))
    }
}
