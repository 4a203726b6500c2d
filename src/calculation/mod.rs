//! Calculation logic for the Savings Projection Engine.
//!
//! This module contains the eight savings rules (hiring process
//! optimization, hiring quality, role alignment, interviewing, onboarding,
//! internal mobility, performance and development, workforce planning), the
//! industry benchmark constants they share, and the orchestrator that runs
//! them in category order and accumulates the total.

pub mod benchmarks;

mod hiring_process;
mod hiring_quality;
mod internal_mobility;
mod interviewing;
mod onboarding;
mod performance_development;
mod role_alignment;
mod workforce_planning;

pub use hiring_process::{HiringProcessResult, calculate_hiring_process};
pub use hiring_quality::{HiringQualityResult, calculate_hiring_quality};
pub use internal_mobility::{InternalMobilityResult, calculate_internal_mobility};
pub use interviewing::{InterviewingResult, calculate_interviewing};
pub use onboarding::{OnboardingResult, calculate_onboarding};
pub use performance_development::{
    PerformanceDevelopmentResult, calculate_performance_development,
};
pub use role_alignment::{RoleAlignmentResult, calculate_role_alignment};
pub use workforce_planning::{WorkforcePlanningResult, calculate_workforce_planning};

use std::time::Instant;

use chrono::Utc;
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::EngineResult;
use crate::models::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, ImpactAssumptions, SavingsLineItem,
    TierProfile,
};

/// The number of line items a calculation always produces.
pub const LINE_ITEM_COUNT: usize = 11;

/// Computes the full savings breakdown for a tier.
///
/// Runs the eight rules in category order, producing eleven line items, and
/// accumulates the total incrementally in production order. The function is
/// pure and deterministic apart from the generated calculation id and
/// timestamp; the line items and total depend only on the inputs.
///
/// Impact values are not range-checked. A fraction outside `[0, 1]`
/// (typically from a scenario multiplier above 100%) flows through the
/// formulas and is surfaced as a low-severity audit warning.
///
/// # Errors
///
/// * [`crate::error::EngineError::InvalidInput`] when the employee count,
///   average salary, or average recruiter salary is zero or negative.
/// * [`crate::error::EngineError::MissingImpactKey`] when the impact
///   mapping lacks a key one of the rules needs.
///
/// # Example
///
/// ```
/// use roi_engine::calculation::compute_all_savings;
/// use roi_engine::models::{ImpactAssumptions, TierProfile};
///
/// let tier = TierProfile {
///     num_employees: 750,
///     annual_hires: 112,
///     avg_annual_salary: 75_000.0,
///     avg_recruiter_salary: 70_000.0,
///     num_recruiters: 3,
/// };
/// let result = compute_all_savings(&tier, &ImpactAssumptions::full_vision()).unwrap();
/// assert_eq!(result.line_items.len(), 11);
/// ```
pub fn compute_all_savings(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
) -> EngineResult<CalculationResult> {
    let started = Instant::now();
    let calculation_id = Uuid::new_v4();
    debug!(calculation_id = %calculation_id, num_employees = tier.num_employees, "Starting savings calculation");

    tier.validate()?;

    let mut line_items: Vec<SavingsLineItem> = Vec::with_capacity(LINE_ITEM_COUNT);
    let mut steps: Vec<AuditStep> = Vec::with_capacity(LINE_ITEM_COUNT);
    let mut total_annual_savings = 0.0;
    let mut step_number: u32 = 1;

    // The total is accumulated in production order; per-category helpers
    // below push items and advance the step counter.
    let mut push_items = |items: Vec<SavingsLineItem>,
                          audit: Vec<AuditStep>,
                          total: &mut f64,
                          step: &mut u32| {
        *step += audit.len() as u32;
        for item in items {
            *total += item.annual_savings;
            line_items.push(item);
        }
        steps.extend(audit);
    };

    let hiring = calculate_hiring_process(tier, impact, step_number)?;
    push_items(
        hiring.line_items,
        hiring.audit_steps,
        &mut total_annual_savings,
        &mut step_number,
    );

    let quality = calculate_hiring_quality(tier, impact, step_number)?;
    push_items(
        vec![quality.line_item],
        vec![quality.audit_step],
        &mut total_annual_savings,
        &mut step_number,
    );

    let alignment = calculate_role_alignment(tier, impact, step_number)?;
    push_items(
        vec![alignment.line_item],
        vec![alignment.audit_step],
        &mut total_annual_savings,
        &mut step_number,
    );

    let interviewing = calculate_interviewing(tier, impact, step_number)?;
    push_items(
        vec![interviewing.line_item],
        vec![interviewing.audit_step],
        &mut total_annual_savings,
        &mut step_number,
    );

    let onboarding = calculate_onboarding(tier, impact, step_number)?;
    push_items(
        vec![onboarding.line_item],
        vec![onboarding.audit_step],
        &mut total_annual_savings,
        &mut step_number,
    );

    let mobility = calculate_internal_mobility(tier, impact, step_number)?;
    push_items(
        vec![mobility.line_item],
        vec![mobility.audit_step],
        &mut total_annual_savings,
        &mut step_number,
    );

    let performance = calculate_performance_development(tier, impact, step_number)?;
    push_items(
        performance.line_items,
        performance.audit_steps,
        &mut total_annual_savings,
        &mut step_number,
    );

    let planning = calculate_workforce_planning(tier, impact, step_number)?;
    push_items(
        vec![planning.line_item],
        vec![planning.audit_step],
        &mut total_annual_savings,
        &mut step_number,
    );

    let warnings = collect_range_warnings(impact);
    let duration_us = started.elapsed().as_micros() as u64;

    info!(
        calculation_id = %calculation_id,
        total_annual_savings,
        duration_us,
        "Savings calculation complete"
    );

    Ok(CalculationResult {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        line_items,
        total_annual_savings,
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

/// Flags fractional impact values outside `[0, 1]`.
///
/// Out-of-range values are legitimate under a >100% scenario multiplier, so
/// these are warnings, never errors. The hours-per-week key is a count and
/// is exempt.
fn collect_range_warnings(impact: &ImpactAssumptions) -> Vec<AuditWarning> {
    impact
        .iter()
        .filter(|(key, value)| {
            (key.ends_with("_percent") || key.ends_with("_points"))
                && !(0.0..=1.0).contains(value)
        })
        .map(|(key, value)| AuditWarning {
            code: "IMPACT_OUT_OF_RANGE".to_string(),
            message: format!("Impact value '{}' is {} (outside [0, 1])", key, value),
            severity: "low".to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SavingsCategory;

    fn mid_market() -> TierProfile {
        TierProfile {
            num_employees: 750,
            annual_hires: 112,
            avg_annual_salary: 75_000.0,
            avg_recruiter_salary: 70_000.0,
            num_recruiters: 3,
        }
    }

    #[test]
    fn test_produces_eleven_items_in_category_order() {
        let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

        assert_eq!(result.line_items.len(), LINE_ITEM_COUNT);
        let categories: Vec<u8> = result
            .line_items
            .iter()
            .map(|item| item.category.number())
            .collect();
        assert_eq!(categories, vec![1, 1, 1, 2, 3, 4, 5, 6, 7, 7, 8]);
    }

    #[test]
    fn test_total_equals_incremental_sum() {
        let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

        let mut running = 0.0;
        for item in &result.line_items {
            running += item.annual_savings;
        }
        assert_eq!(result.total_annual_savings, running);
    }

    #[test]
    fn test_every_category_appears() {
        let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

        for category in SavingsCategory::ALL {
            assert!(
                !result.items_in_category(category).is_empty(),
                "category {} missing",
                category
            );
        }
    }

    #[test]
    fn test_audit_steps_numbered_sequentially() {
        let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();

        let numbers: Vec<u32> = result
            .audit_trace
            .steps
            .iter()
            .map(|s| s.step_number)
            .collect();
        assert_eq!(numbers, (1..=11).collect::<Vec<u32>>());
    }

    #[test]
    fn test_invalid_tier_rejected_before_any_rule_runs() {
        let tier = TierProfile {
            num_employees: 0,
            ..mid_market()
        };
        let result = compute_all_savings(&tier, &ImpactAssumptions::full_vision());

        assert!(matches!(
            result.unwrap_err(),
            crate::error::EngineError::InvalidInput { .. }
        ));
    }

    #[test]
    fn test_no_warnings_for_canonical_impact() {
        let result = compute_all_savings(&mid_market(), &ImpactAssumptions::full_vision()).unwrap();
        assert!(result.audit_trace.warnings.is_empty());
    }

    #[test]
    fn test_scaled_impact_above_one_warns_but_computes() {
        let impact = ImpactAssumptions::full_vision().scaled(1.5);
        let result = compute_all_savings(&mid_market(), &impact).unwrap();

        assert!(!result.audit_trace.warnings.is_empty());
        assert_eq!(result.audit_trace.warnings[0].code, "IMPACT_OUT_OF_RANGE");
        assert_eq!(result.line_items.len(), LINE_ITEM_COUNT);
    }

    #[test]
    fn test_deterministic_line_items_across_calls() {
        let tier = mid_market();
        let impact = ImpactAssumptions::full_vision();

        let a = compute_all_savings(&tier, &impact).unwrap();
        let b = compute_all_savings(&tier, &impact).unwrap();

        assert_eq!(a.line_items, b.line_items);
        assert_eq!(a.total_annual_savings, b.total_annual_savings);
    }
}
