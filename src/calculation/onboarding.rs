//! Accelerated onboarding savings (category 5).
//!
//! Faster time-to-productivity: shortening the 8-month ramp recovers part
//! of the salary paid while a new hire is not yet fully productive.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{AVG_TIME_TO_PRODUCTIVITY_MONTHS, RAMP_SALARY_VALUE_FACTOR};

/// The result of the onboarding rule.
#[derive(Debug, Clone)]
pub struct OnboardingResult {
    /// The faster time-to-productivity line item.
    pub line_item: SavingsLineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates faster time-to-productivity savings.
///
/// The new ramp is `8 * (1 - reduction)` months; each month saved recovers
/// half a month of salary (the ramp is modeled as half-productive) across
/// all annual hires.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if
/// `time_to_productivity_reduction_percent` is absent.
pub fn calculate_onboarding(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<OnboardingResult> {
    let reduction_pct = impact.get("time_to_productivity_reduction_percent")?;

    let current_ramp_months = AVG_TIME_TO_PRODUCTIVITY_MONTHS;
    let new_ramp_months = current_ramp_months * (1.0 - reduction_pct);
    let months_saved = current_ramp_months - new_ramp_months;
    let monthly_salary = tier.avg_annual_salary / 12.0;
    let savings =
        monthly_salary * months_saved * RAMP_SALARY_VALUE_FACTOR * f64::from(tier.annual_hires);

    let line_item = SavingsLineItem {
        category: SavingsCategory::AcceleratedOnboarding,
        area: "Faster Time-to-Productivity".to_string(),
        annual_savings: savings,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "time_to_productivity".to_string(),
        rule_name: "Faster Time-to-Productivity".to_string(),
        benchmark_ref: "8-month ramp (Forbes/UrbanBound)".to_string(),
        input: serde_json::json!({
            "annual_hires": tier.annual_hires,
            "avg_annual_salary": tier.avg_annual_salary,
            "time_to_productivity_reduction_percent": reduction_pct,
        }),
        output: serde_json::json!({
            "baseline_ramp_months": current_ramp_months,
            "new_ramp_months": new_ramp_months,
            "months_saved": months_saved,
            "annual_savings": savings,
        }),
        reasoning: format!(
            "{:.2} ramp months saved x ${:.2}/month x 0.5 productivity factor x {} hires = ${:.2}",
            months_saved, monthly_salary, tier.annual_hires, savings
        ),
    };

    Ok(OnboardingResult {
        line_item,
        audit_step,
    })
}
