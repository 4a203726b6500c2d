//! Effective performance and development savings (category 7).
//!
//! Two line items: productivity gains from engaged performance management,
//! and reduced voluntary turnover from better growth paths. Both are
//! payroll-driven rather than hiring-driven.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{
    BASELINE_VOLUNTARY_TURNOVER, COST_TO_REPLACE_PERCENT_OF_SALARY, PM_ADDRESSABLE_PAYROLL_SEGMENT,
};

/// The result of the performance and development rule.
#[derive(Debug, Clone)]
pub struct PerformanceDevelopmentResult {
    /// The two line items, in order: productivity gains, reduced turnover.
    pub line_items: Vec<SavingsLineItem>,
    /// The audit steps recording each sub-calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates performance management savings.
///
/// The productivity item applies the impact fraction to the 20% payroll
/// segment addressable by performance management. The turnover item prices
/// prevented voluntary leavers (12% baseline) at 21% of salary each.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if either
/// `productivity_gain_from_better_pm_percent_of_payroll_segment` or
/// `turnover_reduction_from_better_pm_percent_of_turnover` is absent.
pub fn calculate_performance_development(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<PerformanceDevelopmentResult> {
    let category = SavingsCategory::EffectivePerformanceAndDevelopment;
    let mut line_items = Vec::with_capacity(2);
    let mut audit_steps = Vec::with_capacity(2);

    // 7a. Productivity gains from engaged performance management.
    let productivity_gain_pct =
        impact.get("productivity_gain_from_better_pm_percent_of_payroll_segment")?;
    let total_payroll = tier.total_payroll();
    let addressable_payroll = total_payroll * PM_ADDRESSABLE_PAYROLL_SEGMENT;
    let savings_productivity = addressable_payroll * productivity_gain_pct;

    line_items.push(SavingsLineItem {
        category,
        area: "Productivity Gains from Engaged PM".to_string(),
        annual_savings: savings_productivity,
    });
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "pm_productivity".to_string(),
        rule_name: "Productivity Gains from Engaged PM".to_string(),
        benchmark_ref: "20% addressable payroll segment".to_string(),
        input: serde_json::json!({
            "num_employees": tier.num_employees,
            "avg_annual_salary": tier.avg_annual_salary,
            "productivity_gain_percent": productivity_gain_pct,
        }),
        output: serde_json::json!({
            "total_payroll": total_payroll,
            "addressable_payroll": addressable_payroll,
            "annual_savings": savings_productivity,
        }),
        reasoning: format!(
            "${:.0} addressable payroll x {:.1}% productivity gain = ${:.2}",
            addressable_payroll,
            productivity_gain_pct * 100.0,
            savings_productivity
        ),
    });

    // 7b. Reduced voluntary turnover from better growth paths.
    let turnover_reduction_pct =
        impact.get("turnover_reduction_from_better_pm_percent_of_turnover")?;
    let voluntary_leavers = f64::from(tier.num_employees) * BASELINE_VOLUNTARY_TURNOVER;
    let leavers_prevented = voluntary_leavers * turnover_reduction_pct;
    let cost_per_replacement = tier.avg_annual_salary * COST_TO_REPLACE_PERCENT_OF_SALARY;
    let savings_turnover = leavers_prevented * cost_per_replacement;

    line_items.push(SavingsLineItem {
        category,
        area: "Reduced Turnover (Better Growth Paths)".to_string(),
        annual_savings: savings_turnover,
    });
    audit_steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: "pm_turnover".to_string(),
        rule_name: "Reduced Turnover (Better Growth Paths)".to_string(),
        benchmark_ref: "12% baseline voluntary turnover, SHRM replacement cost".to_string(),
        input: serde_json::json!({
            "num_employees": tier.num_employees,
            "avg_annual_salary": tier.avg_annual_salary,
            "turnover_reduction_percent": turnover_reduction_pct,
        }),
        output: serde_json::json!({
            "baseline_voluntary_leavers": voluntary_leavers,
            "leavers_prevented": leavers_prevented,
            "cost_per_replacement": cost_per_replacement,
            "annual_savings": savings_turnover,
        }),
        reasoning: format!(
            "{:.1} voluntary leavers prevented x ${:.2} replacement cost = ${:.2}",
            leavers_prevented, cost_per_replacement, savings_turnover
        ),
    });

    Ok(PerformanceDevelopmentResult {
        line_items,
        audit_steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mid_market() -> TierProfile {
        TierProfile {
            num_employees: 750,
            annual_hires: 112,
            avg_annual_salary: 75_000.0,
            avg_recruiter_salary: 70_000.0,
            num_recruiters: 3,
        }
    }

    /// PD-001: mid-market productivity savings
    #[test]
    fn test_productivity_savings_mid_market() {
        let result =
            calculate_performance_development(&mid_market(), &ImpactAssumptions::full_vision(), 1)
                .unwrap();

        // $56.25M payroll x 0.20 x 0.03 = $337,500
        assert_eq!(result.line_items[0].area, "Productivity Gains from Engaged PM");
        assert!((result.line_items[0].annual_savings - 337_500.0).abs() < 1e-6);
    }

    /// PD-002: mid-market turnover savings
    #[test]
    fn test_turnover_savings_mid_market() {
        let result =
            calculate_performance_development(&mid_market(), &ImpactAssumptions::full_vision(), 1)
                .unwrap();

        // 750 x 0.12 = 90 leavers; x 0.30 = 27 prevented; x $15,750 = $425,250
        assert_eq!(
            result.line_items[1].area,
            "Reduced Turnover (Better Growth Paths)"
        );
        assert!((result.line_items[1].annual_savings - 425_250.0).abs() < 1e-6);
    }

    /// PD-003: both items belong to category 7
    #[test]
    fn test_items_in_category_seven() {
        let result =
            calculate_performance_development(&mid_market(), &ImpactAssumptions::full_vision(), 1)
                .unwrap();

        assert_eq!(result.line_items.len(), 2);
        assert_eq!(result.audit_steps.len(), 2);
        for item in &result.line_items {
            assert_eq!(
                item.category,
                SavingsCategory::EffectivePerformanceAndDevelopment
            );
        }
    }

    /// PD-004: savings are payroll-driven, not hire-driven
    #[test]
    fn test_nonzero_with_zero_hires() {
        let tier = TierProfile {
            annual_hires: 0,
            num_recruiters: 0,
            ..mid_market()
        };
        let result =
            calculate_performance_development(&tier, &ImpactAssumptions::full_vision(), 1).unwrap();

        assert!(result.line_items[0].annual_savings > 0.0);
        assert!(result.line_items[1].annual_savings > 0.0);
    }

    /// PD-005: missing key surfaces as an error
    #[test]
    fn test_missing_key() {
        let mut impact = ImpactAssumptions::full_vision();
        impact.remove("turnover_reduction_from_better_pm_percent_of_turnover");

        assert!(calculate_performance_development(&mid_market(), &impact, 1).is_err());
    }

    #[test]
    fn test_audit_steps_are_sequential() {
        let result =
            calculate_performance_development(&mid_market(), &ImpactAssumptions::full_vision(), 9)
                .unwrap();

        let numbers: Vec<u32> = result.audit_steps.iter().map(|s| s.step_number).collect();
        assert_eq!(numbers, vec![9, 10]);
    }
}
