//! Hiring process optimization savings (category 1).
//!
//! This rule produces three line items: reduced time-to-fill, increased
//! recruiter productivity, and lower cost-per-hire.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{
    AVG_TIME_TO_FILL_DAYS, WORKING_HOURS_PER_YEAR, WORKING_WEEKS_PER_YEAR, baseline_cost_per_hire,
    cost_of_vacancy_per_day,
};

/// The result of the hiring process optimization rule.
#[derive(Debug, Clone)]
pub struct HiringProcessResult {
    /// The three line items, in order: time-to-fill, recruiter
    /// productivity, cost-per-hire.
    pub line_items: Vec<SavingsLineItem>,
    /// The audit steps recording each sub-calculation.
    pub audit_steps: Vec<AuditStep>,
}

/// Calculates hiring process optimization savings.
///
/// Three independent sub-calculations:
/// 1. Reduced time-to-fill: days shaved off the 44-day baseline, priced at
///    the daily vacancy cost, across all annual hires.
/// 2. Increased recruiter productivity: weekly hours saved per recruiter
///    over 50 working weeks, priced at the recruiter's hourly rate.
/// 3. Lower cost-per-hire: a percentage off the size-dependent SHRM
///    baseline, across all annual hires.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if any of
/// `ttf_total_reduction_percent`,
/// `recruiter_total_hours_saved_per_week_per_recruiter`, or
/// `cph_total_reduction_percent` is absent.
pub fn calculate_hiring_process(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<HiringProcessResult> {
    let category = SavingsCategory::HiringProcessOptimization;
    let mut line_items = Vec::with_capacity(3);
    let mut audit_steps = Vec::with_capacity(3);

    // 1a. Reduced time-to-fill.
    let ttf_reduction_pct = impact.get("ttf_total_reduction_percent")?;
    let daily_vacancy_cost = cost_of_vacancy_per_day(tier.avg_annual_salary);
    let ttf_reduction_days = AVG_TIME_TO_FILL_DAYS * ttf_reduction_pct;
    let savings_ttf = ttf_reduction_days * daily_vacancy_cost * f64::from(tier.annual_hires);

    line_items.push(SavingsLineItem {
        category,
        area: "Reduced Time-to-Fill".to_string(),
        annual_savings: savings_ttf,
    });
    audit_steps.push(AuditStep {
        step_number,
        rule_id: "ttf_reduction".to_string(),
        rule_name: "Reduced Time-to-Fill".to_string(),
        benchmark_ref: "SHRM 2022 time-to-fill".to_string(),
        input: serde_json::json!({
            "avg_annual_salary": tier.avg_annual_salary,
            "annual_hires": tier.annual_hires,
            "ttf_total_reduction_percent": ttf_reduction_pct,
        }),
        output: serde_json::json!({
            "ttf_reduction_days": ttf_reduction_days,
            "daily_vacancy_cost": daily_vacancy_cost,
            "annual_savings": savings_ttf,
        }),
        reasoning: format!(
            "{:.1} days saved x ${:.2}/day vacancy cost x {} hires = ${:.2}",
            ttf_reduction_days, daily_vacancy_cost, tier.annual_hires, savings_ttf
        ),
    });

    // 1b. Increased recruiter productivity.
    let hours_per_week = impact.get("recruiter_total_hours_saved_per_week_per_recruiter")?;
    let recruiter_hours_saved_annual =
        hours_per_week * WORKING_WEEKS_PER_YEAR * f64::from(tier.num_recruiters);
    let recruiter_hourly_rate = tier.avg_recruiter_salary / WORKING_HOURS_PER_YEAR;
    let savings_recruiter_time = recruiter_hours_saved_annual * recruiter_hourly_rate;

    line_items.push(SavingsLineItem {
        category,
        area: "Increased Recruiter Productivity".to_string(),
        annual_savings: savings_recruiter_time,
    });
    audit_steps.push(AuditStep {
        step_number: step_number + 1,
        rule_id: "recruiter_productivity".to_string(),
        rule_name: "Increased Recruiter Productivity".to_string(),
        benchmark_ref: "50 working weeks, 2080 working hours".to_string(),
        input: serde_json::json!({
            "hours_saved_per_week_per_recruiter": hours_per_week,
            "num_recruiters": tier.num_recruiters,
            "avg_recruiter_salary": tier.avg_recruiter_salary,
        }),
        output: serde_json::json!({
            "hours_saved_annual": recruiter_hours_saved_annual,
            "recruiter_hourly_rate": recruiter_hourly_rate,
            "annual_savings": savings_recruiter_time,
        }),
        reasoning: format!(
            "{:.0} hours saved annually x ${:.2}/hour = ${:.2}",
            recruiter_hours_saved_annual, recruiter_hourly_rate, savings_recruiter_time
        ),
    });

    // 1c. Lower cost-per-hire.
    let cph_reduction_pct = impact.get("cph_total_reduction_percent")?;
    let current_cph = baseline_cost_per_hire(tier.num_employees);
    let cph_reduction_amount = current_cph * cph_reduction_pct;
    let savings_cph = cph_reduction_amount * f64::from(tier.annual_hires);

    line_items.push(SavingsLineItem {
        category,
        area: "Lower Cost-Per-Hire".to_string(),
        annual_savings: savings_cph,
    });
    audit_steps.push(AuditStep {
        step_number: step_number + 2,
        rule_id: "cph_reduction".to_string(),
        rule_name: "Lower Cost-Per-Hire".to_string(),
        benchmark_ref: "SHRM 2022 cost-per-hire".to_string(),
        input: serde_json::json!({
            "num_employees": tier.num_employees,
            "annual_hires": tier.annual_hires,
            "cph_total_reduction_percent": cph_reduction_pct,
        }),
        output: serde_json::json!({
            "baseline_cost_per_hire": current_cph,
            "reduction_per_hire": cph_reduction_amount,
            "annual_savings": savings_cph,
        }),
        reasoning: format!(
            "${:.0} baseline CPH x {:.0}% reduction x {} hires = ${:.2}",
            current_cph,
            cph_reduction_pct * 100.0,
            tier.annual_hires,
            savings_cph
        ),
    });

    Ok(HiringProcessResult {
        line_items,
        audit_steps,
    })
}
