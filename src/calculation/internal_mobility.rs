//! Improved internal mobility savings (category 6).
//!
//! Increased internal fill rate: each opening filled internally instead of
//! externally avoids the external-hire salary premium and half the
//! cost-per-hire.
//!
//! Unlike the other rules, the impact value here is absolute percentage
//! points added to the 24% baseline fill rate, not a multiplicative
//! reduction. The asymmetry is intentional and mirrors the benchmark
//! model the assumptions were sourced from.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{
    BASELINE_INTERNAL_FILL_RATE, EXTERNAL_HIRE_SALARY_PREMIUM_PERCENT,
    INTERNAL_FILL_CPH_SAVING_FACTOR, baseline_cost_per_hire,
};

/// The result of the internal mobility rule.
#[derive(Debug, Clone)]
pub struct InternalMobilityResult {
    /// The increased internal fill rate line item.
    pub line_item: SavingsLineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates internal mobility savings.
///
/// External hires avoided are `annual_hires * fill_rate_increase_points`;
/// each avoided external hire saves the 18% salary premium plus half the
/// size-dependent baseline cost-per-hire.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if
/// `internal_fill_rate_increase_points` is absent.
pub fn calculate_internal_mobility(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<InternalMobilityResult> {
    let increase_points = impact.get("internal_fill_rate_increase_points")?;

    let new_internal_fill_rate = BASELINE_INTERNAL_FILL_RATE + increase_points;
    let external_hires_avoided =
        f64::from(tier.annual_hires) * (new_internal_fill_rate - BASELINE_INTERNAL_FILL_RATE);
    let current_cph = baseline_cost_per_hire(tier.num_employees);
    let saving_per_internal_hire = tier.avg_annual_salary * EXTERNAL_HIRE_SALARY_PREMIUM_PERCENT
        + current_cph * INTERNAL_FILL_CPH_SAVING_FACTOR;
    let savings = external_hires_avoided * saving_per_internal_hire;

    let line_item = SavingsLineItem {
        category: SavingsCategory::ImprovedInternalMobility,
        area: "Increased Internal Fill Rate & Cost Savings".to_string(),
        annual_savings: savings,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "internal_fill_rate".to_string(),
        rule_name: "Increased Internal Fill Rate & Cost Savings".to_string(),
        benchmark_ref: "24% baseline fill rate, Deloitte external-hire premium".to_string(),
        input: serde_json::json!({
            "annual_hires": tier.annual_hires,
            "num_employees": tier.num_employees,
            "avg_annual_salary": tier.avg_annual_salary,
            "internal_fill_rate_increase_points": increase_points,
        }),
        output: serde_json::json!({
            "new_internal_fill_rate": new_internal_fill_rate,
            "external_hires_avoided": external_hires_avoided,
            "saving_per_internal_hire": saving_per_internal_hire,
            "annual_savings": savings,
        }),
        reasoning: format!(
            "{:.2} external hires avoided x ${:.2} saved each = ${:.2}",
            external_hires_avoided, saving_per_internal_hire, savings
        ),
    };

    Ok(InternalMobilityResult {
        line_item,
        audit_step,
    })
}
