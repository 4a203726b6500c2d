//! Calculation result models for the Savings Projection Engine.
//!
//! This module contains the [`CalculationResult`] type and its associated
//! structures that capture all outputs from a savings calculation, including
//! line items, the accumulated total, and audit traces.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The fixed taxonomy of savings categories.
///
/// Categories are numbered 1 through 8; line items are produced in this
/// order, and consumers group items by category for display, so both the
/// ordering and the taxonomy must be preserved.
///
/// # Example
///
/// ```
/// use roi_engine::models::SavingsCategory;
///
/// let category = SavingsCategory::HiringProcessOptimization;
/// assert_eq!(category.to_string(), "1. Hiring Process Optimization");
/// assert_eq!(category.number(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SavingsCategory {
    /// Time-to-fill, recruiter productivity, and cost-per-hire gains.
    HiringProcessOptimization,
    /// Reduced mis-hire costs.
    EnhancedHiringQuality,
    /// Lower early attrition from clearer role definitions.
    StrategicRoleAlignment,
    /// Interview scheduling efficiency.
    OptimizedInterviewing,
    /// Faster time-to-productivity for new hires.
    AcceleratedOnboarding,
    /// Higher internal fill rate and avoided external-hire costs.
    ImprovedInternalMobility,
    /// Productivity and retention gains from performance management.
    EffectivePerformanceAndDevelopment,
    /// Labor-budget optimization from workforce planning.
    StrategicWorkforcePlanning,
}

impl SavingsCategory {
    /// All categories in production order.
    pub const ALL: [SavingsCategory; 8] = [
        SavingsCategory::HiringProcessOptimization,
        SavingsCategory::EnhancedHiringQuality,
        SavingsCategory::StrategicRoleAlignment,
        SavingsCategory::OptimizedInterviewing,
        SavingsCategory::AcceleratedOnboarding,
        SavingsCategory::ImprovedInternalMobility,
        SavingsCategory::EffectivePerformanceAndDevelopment,
        SavingsCategory::StrategicWorkforcePlanning,
    ];

    /// Returns the 1-based category number used in display labels.
    pub fn number(&self) -> u8 {
        match self {
            SavingsCategory::HiringProcessOptimization => 1,
            SavingsCategory::EnhancedHiringQuality => 2,
            SavingsCategory::StrategicRoleAlignment => 3,
            SavingsCategory::OptimizedInterviewing => 4,
            SavingsCategory::AcceleratedOnboarding => 5,
            SavingsCategory::ImprovedInternalMobility => 6,
            SavingsCategory::EffectivePerformanceAndDevelopment => 7,
            SavingsCategory::StrategicWorkforcePlanning => 8,
        }
    }

    /// Returns the category label without the leading number.
    pub fn label(&self) -> &'static str {
        match self {
            SavingsCategory::HiringProcessOptimization => "Hiring Process Optimization",
            SavingsCategory::EnhancedHiringQuality => "Enhanced Hiring Quality",
            SavingsCategory::StrategicRoleAlignment => "Strategic Role Alignment",
            SavingsCategory::OptimizedInterviewing => "Optimized Interviewing",
            SavingsCategory::AcceleratedOnboarding => "Accelerated Onboarding",
            SavingsCategory::ImprovedInternalMobility => "Improved Internal Mobility",
            SavingsCategory::EffectivePerformanceAndDevelopment => {
                "Effective Performance & Development"
            }
            SavingsCategory::StrategicWorkforcePlanning => "Strategic Workforce Planning",
        }
    }
}

impl fmt::Display for SavingsCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.number(), self.label())
    }
}

/// A single savings line item.
///
/// Each line item belongs to one of the 8 fixed categories and carries a
/// human-readable area label plus the projected annual savings in dollars.
/// Line items have no identity beyond their position in the output sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavingsLineItem {
    /// The savings category this item belongs to.
    pub category: SavingsCategory,
    /// The area label shown to consumers (e.g., "Reduced Time-to-Fill").
    pub area: String,
    /// The projected annual savings in dollars.
    pub annual_savings: f64,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The industry benchmark(s) the rule's baseline constants come from.
    pub benchmark_ref: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the arithmetic.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings indicate potential issues that don't prevent calculation
/// but may require attention.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// Records every rule application made during the calculation process for
/// transparency when the projections are challenged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

/// The complete result of a savings calculation.
///
/// Captures the ordered line items, the accumulated total, and a full audit
/// trace. The total is always the incremental sum of the line items in
/// production order, never an independent recomputation.
///
/// # Example
///
/// ```
/// use roi_engine::models::{AuditTrace, CalculationResult};
/// use chrono::Utc;
/// use uuid::Uuid;
///
/// let result = CalculationResult {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: env!("CARGO_PKG_VERSION").to_string(),
///     line_items: vec![],
///     total_annual_savings: 0.0,
///     audit_trace: AuditTrace { steps: vec![], warnings: vec![], duration_us: 0 },
/// };
/// assert_eq!(result.total_annual_savings, 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// Individual savings line items in production order.
    pub line_items: Vec<SavingsLineItem>,
    /// The accumulated total of all line items' annual savings.
    pub total_annual_savings: f64,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

impl CalculationResult {
    /// Returns the line items belonging to one category, in order.
    pub fn items_in_category(&self, category: SavingsCategory) -> Vec<&SavingsLineItem> {
        self.line_items
            .iter()
            .filter(|item| item.category == category)
            .collect()
    }

    /// Returns the ROI multiple against an annual price.
    ///
    /// Returns `None` when the price is not positive.
    pub fn roi_multiple(&self, annual_price: f64) -> Option<f64> {
        if annual_price > 0.0 {
            Some(self.total_annual_savings / annual_price)
        } else {
            None
        }
    }
}
