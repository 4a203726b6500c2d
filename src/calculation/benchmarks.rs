//! Industry benchmark constants used by the calculation rules.
//!
//! Every baseline in the engine is a fixed literal from published research or
//! an internal assumption, not a derived value. Reference output depends on
//! these exact literals, so they live in one place with their sources noted.

/// Average time-to-fill in days (SHRM, 2022).
pub const AVG_TIME_TO_FILL_DAYS: f64 = 44.0;

/// Average cost-per-hire for companies with 500+ employees (SHRM, 2022).
pub const AVG_COST_PER_HIRE_SHRM: f64 = 4700.0;

/// Average cost-per-hire for smaller companies (SHRM, 2022).
pub const AVG_COST_PER_HIRE_SMALL_BIZ: f64 = 7645.0;

/// Employee count at which the lower SHRM cost-per-hire figure applies.
pub const CPH_LARGE_COMPANY_THRESHOLD: u32 = 500;

/// Average recruiter hourly rate in dollars (Payscale, est.).
pub const RECRUITER_AVG_HOURLY_RATE: f64 = 35.0;

/// Interviews conducted per hire (internal assumption).
pub const INTERVIEWS_PER_HIRE: f64 = 5.0;

/// Hours spent scheduling each interview (internal assumption).
pub const SCHEDULING_HOURS_PER_INTERVIEW: f64 = 1.0;

/// Mis-hire cost as a fraction of annual salary (U.S. DoL).
pub const MISHIRE_COST_PERCENT_OF_SALARY: f64 = 0.30;

/// Baseline mis-hire rate as a fraction of annual hires (industry average).
pub const BASELINE_MISHIRE_RATE: f64 = 0.15;

/// New hires leaving within 90 days as a fraction of hires (2022 survey).
pub const NEW_HIRES_LEAVING_IN_90_DAYS_PERCENT: f64 = 0.30;

/// Fraction of 90-day leavers attributable to shift shock.
pub const SHIFT_SHOCK_SHARE_OF_EARLY_TURNOVER: f64 = 0.43;

/// Cost to replace a leaver as a fraction of annual salary (SHRM).
pub const COST_TO_REPLACE_PERCENT_OF_SALARY: f64 = 0.21;

/// Average new-hire ramp to full productivity in months (Forbes/UrbanBound).
pub const AVG_TIME_TO_PRODUCTIVITY_MONTHS: f64 = 8.0;

/// Fraction of salary treated as unproductive during ramp (conservative).
pub const RAMP_SALARY_VALUE_FACTOR: f64 = 0.5;

/// External-hire salary premium over internal moves (Deloitte).
pub const EXTERNAL_HIRE_SALARY_PREMIUM_PERCENT: f64 = 0.18;

/// Fraction of cost-per-hire avoided when filling internally.
pub const INTERNAL_FILL_CPH_SAVING_FACTOR: f64 = 0.5;

/// Baseline internal fill rate as a fraction of openings (research baseline).
pub const BASELINE_INTERNAL_FILL_RATE: f64 = 0.24;

/// Payroll segment addressable by performance management gains.
pub const PM_ADDRESSABLE_PAYROLL_SEGMENT: f64 = 0.20;

/// Baseline annual voluntary turnover as a fraction of headcount.
pub const BASELINE_VOLUNTARY_TURNOVER: f64 = 0.12;

/// Vacancy cost multiplier over daily salary (internal, conservative).
pub const COST_OF_VACANCY_PER_DAY_ESTIMATE_FACTOR: f64 = 1.5;

/// Working days per year (52 weeks x 5 days).
pub const WORKING_DAYS_PER_YEAR: f64 = 260.0;

/// Working hours per year (52 weeks x 40 hours).
pub const WORKING_HOURS_PER_YEAR: f64 = 2080.0;

/// Working weeks per year, net of leave.
pub const WORKING_WEEKS_PER_YEAR: f64 = 50.0;

/// Converts an annual salary to its approximate daily equivalent.
pub fn daily_salary(annual_salary: f64) -> f64 {
    annual_salary / WORKING_DAYS_PER_YEAR
}

/// Estimates the productivity cost per unfilled day of a given role.
pub fn cost_of_vacancy_per_day(annual_salary: f64) -> f64 {
    daily_salary(annual_salary) * COST_OF_VACANCY_PER_DAY_ESTIMATE_FACTOR
}

/// Returns the baseline cost-per-hire figure for a given company size.
///
/// A step function: the SHRM average applies at or above
/// [`CPH_LARGE_COMPANY_THRESHOLD`] employees, the small-business average
/// below it.
pub fn baseline_cost_per_hire(num_employees: u32) -> f64 {
    if num_employees >= CPH_LARGE_COMPANY_THRESHOLD {
        AVG_COST_PER_HIRE_SHRM
    } else {
        AVG_COST_PER_HIRE_SMALL_BIZ
    }
}
