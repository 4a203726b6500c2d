//! Savings Projection Engine for talent-management ROI modeling.
//!
//! This crate computes a projected annual financial-value breakdown ("savings
//! line items") for a talent-management product, given a customer-tier profile
//! (employee count, hiring volume, salaries, recruiter staffing) and a set of
//! percentage impact assumptions.

#![warn(missing_docs)]

pub mod cache;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
