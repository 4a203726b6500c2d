//! Customer-tier profile model.
//!
//! This module contains the [`TierProfile`] type describing the numeric
//! parameters of one customer tier, supplied per calculation call.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// The numeric parameters of a customer tier.
///
/// A `TierProfile` is an immutable input to the savings calculation. Three of
/// its fields appear as divisors in the calculation rules, so
/// [`TierProfile::validate`] rejects profiles where any of them is zero or
/// negative.
///
/// # Example
///
/// ```
/// use roi_engine::models::TierProfile;
///
/// let tier = TierProfile {
///     num_employees: 750,
///     annual_hires: 112,
///     avg_annual_salary: 75_000.0,
///     avg_recruiter_salary: 70_000.0,
///     num_recruiters: 3,
/// };
/// assert!(tier.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierProfile {
    /// Total employee headcount (must be positive).
    pub num_employees: u32,
    /// Number of external hires made per year.
    pub annual_hires: u32,
    /// Average annual salary across the workforce (must be positive).
    pub avg_annual_salary: f64,
    /// Average annual salary of a recruiter (must be positive).
    pub avg_recruiter_salary: f64,
    /// Number of recruiters on staff.
    pub num_recruiters: u32,
}

impl TierProfile {
    /// Validates that every divisor-bearing field is positive.
    ///
    /// The calculation divides by employee count, average salary, and
    /// recruiter salary, so each must be strictly greater than zero.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidInput`] naming the offending field.
    pub fn validate(&self) -> EngineResult<()> {
        if self.num_employees == 0 {
            return Err(EngineError::InvalidInput {
                field: "num_employees".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        if self.avg_annual_salary <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: "avg_annual_salary".to_string(),
                message: format!("must be greater than zero, got {}", self.avg_annual_salary),
            });
        }
        if self.avg_recruiter_salary <= 0.0 {
            return Err(EngineError::InvalidInput {
                field: "avg_recruiter_salary".to_string(),
                message: format!(
                    "must be greater than zero, got {}",
                    self.avg_recruiter_salary
                ),
            });
        }
        Ok(())
    }

    /// Returns the total annual payroll (`num_employees * avg_annual_salary`).
    pub fn total_payroll(&self) -> f64 {
        f64::from(self.num_employees) * self.avg_annual_salary
    }
}
