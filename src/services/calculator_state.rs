use clap::ValueEnum;
use tracing::debug;

use crate::domain::cost_model::CostModel;
use crate::domain::inputs::RawInputs;
use crate::domain::metrics::DerivedMetrics;
use crate::services::derivation::{derive_metrics, staff_count_for};
use crate::services::sanitizer::sanitize;

/// How a company-size change affects hours-per-week.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HoursPolicy {
    /// Company size drives hours until the user edits hours directly.
    #[default]
    FollowUntilOverridden,
    /// Every company-size change overwrites hours.
    AlwaysFollow,
}

/// A single edit made by the user.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputChange {
    IntegrationCost(f64),
    MonthlySalary(f64),
    HoursPerWeek(f64),
    ErrorCorrectionHours(f64),
    CompanySize(f64),
    ClearCompanySize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorState {
    pub inputs: RawInputs,
    pub cost_model: CostModel,
    pub hours_policy: HoursPolicy,
    hours_overridden: bool,
}

impl CalculatorState {
    pub fn new(inputs: RawInputs, cost_model: CostModel, hours_policy: HoursPolicy) -> Self {
        Self::restore(inputs, cost_model, hours_policy, false)
    }

    /// Rebuilds a state from saved inputs, keeping whether hours-per-week was
    /// edited directly.
    pub fn restore(
        inputs: RawInputs,
        cost_model: CostModel,
        hours_policy: HoursPolicy,
        hours_overridden: bool,
    ) -> Self {
        Self {
            inputs: sanitize(&inputs),
            cost_model,
            hours_policy,
            hours_overridden,
        }
    }

    /// Applies one edit and returns the next state. Inputs are sanitized after
    /// every change.
    pub fn apply(self, change: InputChange) -> Self {
        let mut next = self;
        match change {
            InputChange::IntegrationCost(value) => next.inputs.integration_cost = value,
            InputChange::MonthlySalary(value) => next.inputs.monthly_salary = value,
            InputChange::HoursPerWeek(value) => {
                next.inputs.hours_per_week = value;
                next.hours_overridden = true;
            }
            InputChange::ErrorCorrectionHours(value) => next.inputs.error_correction_hours = value,
            InputChange::CompanySize(value) => {
                next.inputs.company_size = Some(value);
                if next.hours_follow_company_size() {
                    let size = sanitize(&next.inputs).company_size.unwrap_or(value);
                    next.inputs.hours_per_week = staff_count_for(size) as f64;
                    debug!(
                        company_size = size,
                        hours_per_week = next.inputs.hours_per_week,
                        "hours linked to company size"
                    );
                }
            }
            InputChange::ClearCompanySize => next.inputs.company_size = None,
        }
        next.inputs = sanitize(&next.inputs);
        next
    }

    /// Applies edits in order.
    pub fn apply_all<I: IntoIterator<Item = InputChange>>(self, changes: I) -> Self {
        changes.into_iter().fold(self, Self::apply)
    }

    pub fn is_hours_overridden(&self) -> bool {
        self.hours_overridden
    }

    /// Re-links hours-per-week to company size after a direct edit.
    pub fn reset_hours_override(self) -> Self {
        Self {
            hours_overridden: false,
            ..self
        }
    }

    pub fn metrics(&self) -> DerivedMetrics {
        derive_metrics(&self.inputs, self.cost_model)
    }

    fn hours_follow_company_size(&self) -> bool {
        match self.hours_policy {
            HoursPolicy::AlwaysFollow => true,
            HoursPolicy::FollowUntilOverridden => !self.hours_overridden,
        }
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(RawInputs::new(), CostModel::default(), HoursPolicy::default())
    }
}
