use serde::Serialize;

/// Manual versus automation cost for one year of the projection.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct YearProjection {
    pub year: u32,
    pub manual_cost: f64,
    pub automation_cost: f64,
    pub savings: f64,
}

/// Everything computed from a sanitized set of inputs. Never edited directly.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct DerivedMetrics {
    pub hourly_rate: f64,
    pub staff_count: u32,
    pub annual_manual_hours: f64,
    pub manual_annual_cost: f64,
    pub automation_cost_1yr: f64,
    pub automation_cost_3yr: f64,
    pub year1_savings: f64,
    pub savings_3year: f64,
    pub monthly_savings: f64,
    pub roi_percent: f64,
    pub roi_percent_3year: f64,
    /// Months until the automation has paid for itself; `None` when it never does.
    pub breakeven_months: Option<f64>,
    pub projection: Vec<YearProjection>,
}
