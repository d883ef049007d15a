use crate::domain::inputs::RawInputs;

pub fn scenario_inputs(
    integration_cost: f64,
    monthly_salary: f64,
    hours_per_week: f64,
    error_correction_hours: f64,
) -> RawInputs {
    RawInputs {
        integration_cost,
        monthly_salary,
        hours_per_week,
        error_correction_hours,
        company_size: None,
    }
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-6,
        "expected {expected}, got {actual}"
    );
}
