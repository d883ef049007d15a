use tracing::debug;

use crate::domain::inputs::{
    FieldBounds, RawInputs, COMPANY_SIZE_BOUNDS, ERROR_CORRECTION_HOURS_BOUNDS,
    HOURS_PER_WEEK_BOUNDS, INTEGRATION_COST_BOUNDS, MONTHLY_SALARY_BOUNDS,
};

/// Returns a copy of `raw` with every field finite and inside its bounds.
///
/// Never fails: out-of-range values are pulled to the nearest bound and
/// non-finite values are replaced by the field default.
pub fn sanitize(raw: &RawInputs) -> RawInputs {
    RawInputs {
        integration_cost: sanitize_field(
            "integrationCost",
            raw.integration_cost,
            &INTEGRATION_COST_BOUNDS,
        ),
        monthly_salary: sanitize_field(
            "monthlySalary",
            raw.monthly_salary,
            &MONTHLY_SALARY_BOUNDS,
        ),
        hours_per_week: sanitize_field(
            "hoursPerWeek",
            raw.hours_per_week,
            &HOURS_PER_WEEK_BOUNDS,
        ),
        error_correction_hours: sanitize_field(
            "errorCorrectionHours",
            raw.error_correction_hours,
            &ERROR_CORRECTION_HOURS_BOUNDS,
        ),
        company_size: raw
            .company_size
            .map(|size| sanitize_field("companySize", size, &COMPANY_SIZE_BOUNDS)),
    }
}

fn sanitize_field(name: &str, value: f64, bounds: &FieldBounds) -> f64 {
    let sanitized = bounds.clamp(value);
    if sanitized != value {
        debug!(field = name, raw = value, sanitized, "input adjusted into range");
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::scenario_inputs;

    #[test]
    fn valid_inputs_are_left_untouched() {
        let inputs = scenario_inputs(5_000.0, 50_000.0, 4.0, 2.0);
        assert_eq!(sanitize(&inputs), inputs);
    }

    #[test]
    fn out_of_range_values_are_pulled_to_nearest_bound() {
        let inputs = RawInputs {
            integration_cost: -10.0,
            monthly_salary: 1.0,
            hours_per_week: 1_000.0,
            error_correction_hours: -1.0,
            company_size: Some(5.0),
        };
        let sanitized = sanitize(&inputs);

        assert_eq!(sanitized.integration_cost, 0.0);
        assert_eq!(sanitized.monthly_salary, 1_000.0);
        assert_eq!(sanitized.hours_per_week, 168.0);
        assert_eq!(sanitized.error_correction_hours, 0.0);
        assert_eq!(sanitized.company_size, Some(70.0));
    }

    #[test]
    fn non_finite_values_fall_back_to_defaults() {
        let inputs = RawInputs {
            integration_cost: f64::NAN,
            monthly_salary: f64::INFINITY,
            hours_per_week: f64::NEG_INFINITY,
            error_correction_hours: f64::NAN,
            company_size: Some(f64::NAN),
        };
        let sanitized = sanitize(&inputs);

        assert_eq!(sanitized.integration_cost, 5_000.0);
        assert_eq!(sanitized.monthly_salary, 50_000.0);
        assert_eq!(sanitized.hours_per_week, 4.0);
        assert_eq!(sanitized.error_correction_hours, 2.0);
        assert_eq!(sanitized.company_size, Some(70.0));
    }

    #[test]
    fn absent_company_size_stays_absent() {
        let sanitized = sanitize(&RawInputs::new());
        assert_eq!(sanitized.company_size, None);
    }
}
