use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How the integration cost is paid over the projection horizon.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum CostModel {
    /// A yearly fee, charged again every year.
    #[default]
    Recurring,
    /// Paid once up front, nothing in later years.
    OneTime,
}

impl CostModel {
    /// Automation cost charged in the given 1-based projection year.
    pub fn cost_in_year(&self, integration_cost: f64, year: u32) -> f64 {
        match self {
            CostModel::Recurring => integration_cost,
            CostModel::OneTime if year <= 1 => integration_cost,
            CostModel::OneTime => 0.0,
        }
    }

    /// Cumulative automation cost over the first `years` years.
    pub fn cumulative_cost(&self, integration_cost: f64, years: u32) -> f64 {
        (1..=years)
            .map(|year| self.cost_in_year(integration_cost, year))
            .sum()
    }

    pub fn label(&self) -> &'static str {
        match self {
            CostModel::Recurring => "yearly",
            CostModel::OneTime => "one-time",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recurring_cost_is_charged_every_year() {
        let model = CostModel::Recurring;
        assert_eq!(model.cost_in_year(5_000.0, 1), 5_000.0);
        assert_eq!(model.cost_in_year(5_000.0, 3), 5_000.0);
        assert_eq!(model.cumulative_cost(5_000.0, 3), 15_000.0);
    }

    #[test]
    fn one_time_cost_is_charged_only_in_first_year() {
        let model = CostModel::OneTime;
        assert_eq!(model.cost_in_year(5_000.0, 1), 5_000.0);
        assert_eq!(model.cost_in_year(5_000.0, 2), 0.0);
        assert_eq!(model.cumulative_cost(5_000.0, 3), 5_000.0);
    }
}
