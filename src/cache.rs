//! Optional memoization for the savings calculation.
//!
//! The core engine in [`crate::calculation`] is a pure function; callers
//! that recompute the same scenario repeatedly (e.g. a pricing page
//! re-rendering per keystroke) can wrap it in a [`CachedCalculator`], which
//! caches results keyed by the exact argument values. Caching stays out of
//! the engine itself so the calculation carries no policy concerns.

use std::collections::HashMap;

use tracing::debug;

use crate::calculation::compute_all_savings;
use crate::error::EngineResult;
use crate::models::{CalculationResult, ImpactAssumptions, TierProfile};

/// Cache key built from the exact bit patterns of the inputs.
///
/// `f64` is not `Hash`, so salaries and impact values are keyed by
/// `to_bits`. Two inputs hit the same entry only when every field is
/// bit-identical, mirroring exact-argument memoization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    num_employees: u32,
    annual_hires: u32,
    avg_annual_salary_bits: u64,
    avg_recruiter_salary_bits: u64,
    num_recruiters: u32,
    impact_bits: Vec<(String, u64)>,
}

impl CacheKey {
    fn new(tier: &TierProfile, impact: &ImpactAssumptions) -> Self {
        Self {
            num_employees: tier.num_employees,
            annual_hires: tier.annual_hires,
            avg_annual_salary_bits: tier.avg_annual_salary.to_bits(),
            avg_recruiter_salary_bits: tier.avg_recruiter_salary.to_bits(),
            num_recruiters: tier.num_recruiters,
            impact_bits: impact
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_bits()))
                .collect(),
        }
    }
}

/// A memoizing wrapper around [`compute_all_savings`].
///
/// Results are cached by exact argument values; errors are never cached.
/// Cached results are returned as-is, including the original calculation id
/// and timestamp.
///
/// # Example
///
/// ```
/// use roi_engine::cache::CachedCalculator;
/// use roi_engine::models::{ImpactAssumptions, TierProfile};
///
/// let tier = TierProfile {
///     num_employees: 750,
///     annual_hires: 112,
///     avg_annual_salary: 75_000.0,
///     avg_recruiter_salary: 70_000.0,
///     num_recruiters: 3,
/// };
/// let impact = ImpactAssumptions::full_vision();
///
/// let mut calculator = CachedCalculator::new();
/// let first = calculator.compute(&tier, &impact).unwrap();
/// let second = calculator.compute(&tier, &impact).unwrap();
/// assert_eq!(first.calculation_id, second.calculation_id);
/// assert_eq!(calculator.hits(), 1);
/// ```
#[derive(Debug, Default)]
pub struct CachedCalculator {
    cache: HashMap<CacheKey, CalculationResult>,
    hits: u64,
    misses: u64,
}

impl CachedCalculator {
    /// Creates an empty cached calculator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Computes the savings breakdown, serving repeats from the cache.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`compute_all_savings`]; failed
    /// calculations are not cached.
    pub fn compute(
        &mut self,
        tier: &TierProfile,
        impact: &ImpactAssumptions,
    ) -> EngineResult<CalculationResult> {
        let key = CacheKey::new(tier, impact);

        if let Some(cached) = self.cache.get(&key) {
            self.hits += 1;
            debug!(calculation_id = %cached.calculation_id, "Savings calculation served from cache");
            return Ok(cached.clone());
        }

        let result = compute_all_savings(tier, impact)?;
        self.misses += 1;
        self.cache.insert(key, result.clone());
        Ok(result)
    }

    /// Returns how many calls were served from the cache.
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Returns how many calls required a fresh calculation.
    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    /// Returns true if no results are cached.
    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }

    /// Drops all cached results and resets the hit/miss counters.
    pub fn clear(&mut self) {
        self.cache.clear();
        self.hits = 0;
        self.misses = 0;
    }
}
