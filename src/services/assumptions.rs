//! Business assumptions baked into the formulas. These are not per-user
//! settings; changing one changes every computed figure.

/// Working hours in a month, used to turn a monthly salary into an hourly rate.
pub const HOURS_PER_MONTH: f64 = 160.0;

/// One person doing the manual work for every this many employees.
pub const EMPLOYEES_PER_STAFF: f64 = 70.0;

pub const WEEKS_PER_YEAR: f64 = 52.0;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Yearly growth of manual cost in the multi-year projection.
pub const MANUAL_COST_INFLATION: f64 = 0.08;

pub const PROJECTION_YEARS: u32 = 3;
