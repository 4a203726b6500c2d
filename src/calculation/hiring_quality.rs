//! Enhanced hiring quality savings (category 2).
//!
//! Reduced mis-hire costs: better screening prevents a share of the
//! baseline mis-hires, each of which would cost a fraction of salary to
//! unwind.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{BASELINE_MISHIRE_RATE, MISHIRE_COST_PERCENT_OF_SALARY};

/// The result of the hiring quality rule.
#[derive(Debug, Clone)]
pub struct HiringQualityResult {
    /// The reduced mis-hire cost line item.
    pub line_item: SavingsLineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates reduced mis-hire savings.
///
/// Baseline mis-hires are 15% of annual hires; each mis-hire costs 30% of
/// the average salary (U.S. DoL estimate). The impact value is the fraction
/// of baseline mis-hires prevented.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if
/// `mishire_rate_reduction_percent` is absent.
pub fn calculate_hiring_quality(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<HiringQualityResult> {
    let reduction_pct = impact.get("mishire_rate_reduction_percent")?;

    let avg_cost_of_mishire = tier.avg_annual_salary * MISHIRE_COST_PERCENT_OF_SALARY;
    let current_annual_mishires = f64::from(tier.annual_hires) * BASELINE_MISHIRE_RATE;
    let mishires_reduced = current_annual_mishires * reduction_pct;
    let savings = mishires_reduced * avg_cost_of_mishire;

    let line_item = SavingsLineItem {
        category: SavingsCategory::EnhancedHiringQuality,
        area: "Reduced Mis-Hire Costs".to_string(),
        annual_savings: savings,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "mishire_reduction".to_string(),
        rule_name: "Reduced Mis-Hire Costs".to_string(),
        benchmark_ref: "U.S. DoL mis-hire cost, 15% industry mis-hire rate".to_string(),
        input: serde_json::json!({
            "annual_hires": tier.annual_hires,
            "avg_annual_salary": tier.avg_annual_salary,
            "mishire_rate_reduction_percent": reduction_pct,
        }),
        output: serde_json::json!({
            "baseline_annual_mishires": current_annual_mishires,
            "mishires_prevented": mishires_reduced,
            "cost_per_mishire": avg_cost_of_mishire,
            "annual_savings": savings,
        }),
        reasoning: format!(
            "{:.2} mis-hires prevented x ${:.2} each = ${:.2}",
            mishires_reduced, avg_cost_of_mishire, savings
        ),
    };

    Ok(HiringQualityResult {
        line_item,
        audit_step,
    })
}
