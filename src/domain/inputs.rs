use serde::{Deserialize, Serialize};

/// Inclusive range and fallback value for one user-adjustable input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldBounds {
    pub min: f64,
    pub max: f64,
    pub default: f64,
}

impl FieldBounds {
    /// Coerces `value` into the range. Non-finite values fall back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { self.default };
        // Adding 0.0 turns -0.0 into 0.0.
        value.clamp(self.min, self.max) + 0.0
    }
}

pub const INTEGRATION_COST_BOUNDS: FieldBounds = FieldBounds {
    min: 0.0,
    max: 10_000_000.0,
    default: 5_000.0,
};

pub const MONTHLY_SALARY_BOUNDS: FieldBounds = FieldBounds {
    min: 1_000.0,
    max: 10_000_000.0,
    default: 50_000.0,
};

// 168 = hours in a week.
pub const HOURS_PER_WEEK_BOUNDS: FieldBounds = FieldBounds {
    min: 0.0,
    max: 168.0,
    default: 4.0,
};

// 744 = hours in a 31-day month.
pub const ERROR_CORRECTION_HOURS_BOUNDS: FieldBounds = FieldBounds {
    min: 0.0,
    max: 744.0,
    default: 2.0,
};

pub const COMPANY_SIZE_BOUNDS: FieldBounds = FieldBounds {
    min: 70.0,
    max: 100_000.0,
    default: 70.0,
};

/// The values a visitor adjusts. Field names follow the saved-state JSON shape.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RawInputs {
    pub integration_cost: f64,
    pub monthly_salary: f64,
    pub hours_per_week: f64,
    pub error_correction_hours: f64,
    /// Total headcount. `None` means headcount is not modeled and one person
    /// does the manual work.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_size: Option<f64>,
}

impl RawInputs {
    pub fn new() -> Self {
        Self {
            integration_cost: INTEGRATION_COST_BOUNDS.default,
            monthly_salary: MONTHLY_SALARY_BOUNDS.default,
            hours_per_week: HOURS_PER_WEEK_BOUNDS.default,
            error_correction_hours: ERROR_CORRECTION_HOURS_BOUNDS.default,
            company_size: None,
        }
    }
}

impl Default for RawInputs {
    fn default() -> Self {
        Self::new()
    }
}
