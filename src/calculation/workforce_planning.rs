//! Strategic workforce planning savings (category 8).
//!
//! Optimized labor budget and skill deployment: workforce planning trims a
//! small fraction off total payroll.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

/// The result of the workforce planning rule.
#[derive(Debug, Clone)]
pub struct WorkforcePlanningResult {
    /// The optimized labor budget line item.
    pub line_item: SavingsLineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates workforce planning savings.
///
/// The impact value is applied directly to total payroll; no baseline
/// constant is involved beyond payroll itself.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if
/// `labor_budget_swp_total_saving_percent` is absent.
pub fn calculate_workforce_planning(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<WorkforcePlanningResult> {
    let saving_pct = impact.get("labor_budget_swp_total_saving_percent")?;

    let total_payroll = tier.total_payroll();
    let savings = total_payroll * saving_pct;

    let line_item = SavingsLineItem {
        category: SavingsCategory::StrategicWorkforcePlanning,
        area: "Optimized Labor Budget & Skill Deployment".to_string(),
        annual_savings: savings,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "swp_labor_budget".to_string(),
        rule_name: "Optimized Labor Budget & Skill Deployment".to_string(),
        benchmark_ref: "Gartner workforce-planning labor savings".to_string(),
        input: serde_json::json!({
            "num_employees": tier.num_employees,
            "avg_annual_salary": tier.avg_annual_salary,
            "labor_budget_swp_total_saving_percent": saving_pct,
        }),
        output: serde_json::json!({
            "total_payroll": total_payroll,
            "annual_savings": savings,
        }),
        reasoning: format!(
            "${:.0} total payroll x {:.1}% = ${:.2}",
            total_payroll,
            saving_pct * 100.0,
            savings
        ),
    };

    Ok(WorkforcePlanningResult {
        line_item,
        audit_step,
    })
}
