use tracing::trace;

use crate::domain::cost_model::CostModel;
use crate::domain::inputs::{RawInputs, COMPANY_SIZE_BOUNDS};
use crate::domain::metrics::{DerivedMetrics, YearProjection};
use crate::services::assumptions::{
    EMPLOYEES_PER_STAFF, HOURS_PER_MONTH, MANUAL_COST_INFLATION, MONTHS_PER_YEAR,
    PROJECTION_YEARS, WEEKS_PER_YEAR,
};

/// Computes all output metrics from sanitized inputs.
///
/// Pure and total: a zero automation cost yields a 0% ROI rather than
/// infinity, and every savings figure is floored at zero.
pub fn derive_metrics(inputs: &RawInputs, cost_model: CostModel) -> DerivedMetrics {
    let hourly_rate = inputs.monthly_salary / HOURS_PER_MONTH;
    let staff_count = inputs.company_size.map_or(1, staff_count_for);

    let annual_manual_hours = (inputs.hours_per_week * WEEKS_PER_YEAR
        + inputs.error_correction_hours * MONTHS_PER_YEAR)
        * staff_count as f64;
    let manual_annual_cost = annual_manual_hours * hourly_rate;

    let automation_cost_1yr = cost_model.cumulative_cost(inputs.integration_cost, 1);
    let automation_cost_3yr =
        cost_model.cumulative_cost(inputs.integration_cost, PROJECTION_YEARS);

    let year1_savings = (manual_annual_cost - automation_cost_1yr).max(0.0);
    let savings_3year =
        (manual_annual_cost * PROJECTION_YEARS as f64 - automation_cost_3yr).max(0.0);

    trace!(
        hourly_rate,
        staff_count,
        manual_annual_cost,
        automation_cost_1yr,
        "derived metrics"
    );

    DerivedMetrics {
        hourly_rate,
        staff_count,
        annual_manual_hours,
        manual_annual_cost,
        automation_cost_1yr,
        automation_cost_3yr,
        year1_savings,
        savings_3year,
        monthly_savings: year1_savings / MONTHS_PER_YEAR,
        roi_percent: roi_percent(year1_savings, automation_cost_1yr),
        roi_percent_3year: roi_percent(savings_3year, automation_cost_3yr),
        breakeven_months: breakeven_months(
            inputs.integration_cost,
            manual_annual_cost,
            cost_model,
        ),
        projection: project_costs(manual_annual_cost, inputs.integration_cost, cost_model),
    }
}

/// People doing the manual work for a company of `company_size` employees.
/// Sizes below one full ratio still count as one person.
pub fn staff_count_for(company_size: f64) -> u32 {
    let size = company_size.max(COMPANY_SIZE_BOUNDS.min);
    (size / EMPLOYEES_PER_STAFF).ceil() as u32
}

fn roi_percent(savings: f64, cost: f64) -> f64 {
    if cost > 0.0 {
        (savings / cost * 100.0).max(0.0)
    } else {
        0.0
    }
}

fn breakeven_months(
    integration_cost: f64,
    manual_annual_cost: f64,
    model: CostModel,
) -> Option<f64> {
    if integration_cost <= 0.0 {
        return Some(0.0);
    }
    let monthly_manual_cost = manual_annual_cost / MONTHS_PER_YEAR;
    if monthly_manual_cost <= 0.0 {
        return None;
    }
    match model {
        CostModel::OneTime => Some(integration_cost / monthly_manual_cost),
        // The fee comes back every year, so it has to be earned back within one.
        CostModel::Recurring if integration_cost <= manual_annual_cost => {
            Some(integration_cost / monthly_manual_cost)
        }
        CostModel::Recurring => None,
    }
}

fn project_costs(
    manual_annual_cost: f64,
    integration_cost: f64,
    model: CostModel,
) -> Vec<YearProjection> {
    (1..=PROJECTION_YEARS)
        .map(|year| {
            let manual_cost =
                manual_annual_cost * (1.0 + MANUAL_COST_INFLATION).powi(year as i32 - 1);
            let automation_cost = model.cost_in_year(integration_cost, year);
            YearProjection {
                year,
                manual_cost,
                automation_cost,
                savings: (manual_cost - automation_cost).max(0.0),
            }
        })
        .collect()
}
