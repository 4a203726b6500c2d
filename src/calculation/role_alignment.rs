//! Strategic role alignment savings (category 3).
//!
//! Lower early attrition from role clarity: a share of 90-day leavers quit
//! because the role did not match what was advertised ("shift shock"), and
//! clearer role definitions prevent a fraction of those exits.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{
    COST_TO_REPLACE_PERCENT_OF_SALARY, NEW_HIRES_LEAVING_IN_90_DAYS_PERCENT,
    SHIFT_SHOCK_SHARE_OF_EARLY_TURNOVER,
};

/// The result of the role alignment rule.
#[derive(Debug, Clone)]
pub struct RoleAlignmentResult {
    /// The lower early attrition line item.
    pub line_item: SavingsLineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates savings from preventing shift-shock attrition.
///
/// Baseline: 30% of new hires leave within 90 days, and 43% of those exits
/// trace to shift shock. Each prevented exit avoids a replacement cost of
/// 21% of salary.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if
/// `shift_shock_turnover_reduction_percent` is absent.
pub fn calculate_role_alignment(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<RoleAlignmentResult> {
    let reduction_pct = impact.get("shift_shock_turnover_reduction_percent")?;

    let cost_per_replacement = tier.avg_annual_salary * COST_TO_REPLACE_PERCENT_OF_SALARY;
    let early_leavers_shift_shock = f64::from(tier.annual_hires)
        * NEW_HIRES_LEAVING_IN_90_DAYS_PERCENT
        * SHIFT_SHOCK_SHARE_OF_EARLY_TURNOVER;
    let leavers_prevented = early_leavers_shift_shock * reduction_pct;
    let savings = leavers_prevented * cost_per_replacement;

    let line_item = SavingsLineItem {
        category: SavingsCategory::StrategicRoleAlignment,
        area: "Lower Early Attrition (Role Clarity)".to_string(),
        annual_savings: savings,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "shift_shock_reduction".to_string(),
        rule_name: "Lower Early Attrition (Role Clarity)".to_string(),
        benchmark_ref: "30% 90-day turnover, 43% shift-shock share, SHRM replacement cost"
            .to_string(),
        input: serde_json::json!({
            "annual_hires": tier.annual_hires,
            "avg_annual_salary": tier.avg_annual_salary,
            "shift_shock_turnover_reduction_percent": reduction_pct,
        }),
        output: serde_json::json!({
            "baseline_shift_shock_leavers": early_leavers_shift_shock,
            "leavers_prevented": leavers_prevented,
            "cost_per_replacement": cost_per_replacement,
            "annual_savings": savings,
        }),
        reasoning: format!(
            "{:.2} early leavers prevented x ${:.2} replacement cost = ${:.2}",
            leavers_prevented, cost_per_replacement, savings
        ),
    };

    Ok(RoleAlignmentResult {
        line_item,
        audit_step,
    })
}
