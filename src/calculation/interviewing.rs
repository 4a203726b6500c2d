//! Optimized interviewing savings (category 4).
//!
//! Efficient interview scheduling: each hire takes 5 interviews, each of
//! which costs an hour of recruiter coordination that automation can
//! mostly reclaim.

use crate::error::EngineResult;
use crate::models::{AuditStep, ImpactAssumptions, SavingsCategory, SavingsLineItem, TierProfile};

use super::benchmarks::{
    INTERVIEWS_PER_HIRE, RECRUITER_AVG_HOURLY_RATE, SCHEDULING_HOURS_PER_INTERVIEW,
};

/// The result of the interviewing rule.
#[derive(Debug, Clone)]
pub struct InterviewingResult {
    /// The efficient interview scheduling line item.
    pub line_item: SavingsLineItem,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Calculates interview scheduling savings.
///
/// Annual interviews are `annual_hires * 5`; the time reclaimed is priced
/// at the flat $35/hour recruiter rate rather than the tier's recruiter
/// salary, matching the benchmark source.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::MissingImpactKey`] if
/// `interview_scheduling_time_reduction_percent` is absent.
pub fn calculate_interviewing(
    tier: &TierProfile,
    impact: &ImpactAssumptions,
    step_number: u32,
) -> EngineResult<InterviewingResult> {
    let reduction_pct = impact.get("interview_scheduling_time_reduction_percent")?;

    let interviews_annually = f64::from(tier.annual_hires) * INTERVIEWS_PER_HIRE;
    let hours_saved = interviews_annually * SCHEDULING_HOURS_PER_INTERVIEW * reduction_pct;
    let savings = hours_saved * RECRUITER_AVG_HOURLY_RATE;

    let line_item = SavingsLineItem {
        category: SavingsCategory::OptimizedInterviewing,
        area: "Efficient Interview Scheduling".to_string(),
        annual_savings: savings,
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "interview_scheduling".to_string(),
        rule_name: "Efficient Interview Scheduling".to_string(),
        benchmark_ref: "5 interviews/hire, $35/hr recruiter rate (Payscale)".to_string(),
        input: serde_json::json!({
            "annual_hires": tier.annual_hires,
            "interview_scheduling_time_reduction_percent": reduction_pct,
        }),
        output: serde_json::json!({
            "interviews_annually": interviews_annually,
            "hours_saved": hours_saved,
            "annual_savings": savings,
        }),
        reasoning: format!(
            "{:.0} interviews x {:.0}% of an hour each reclaimed x ${:.0}/hour = ${:.2}",
            interviews_annually,
            reduction_pct * 100.0,
            RECRUITER_AVG_HOURLY_RATE,
            savings
        ),
    };

    Ok(InterviewingResult {
        line_item,
        audit_step,
    })
}
