//! Core data models for the Savings Projection Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod impact;
mod savings_result;
mod tier_profile;

pub use impact::{IMPACT_KEYS, ImpactAssumptions};
pub use savings_result::{
    AuditStep, AuditTrace, AuditWarning, CalculationResult, SavingsCategory, SavingsLineItem,
};
pub use tier_profile::TierProfile;
