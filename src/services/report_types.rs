use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::branding::BrandingConfig;
use crate::domain::cost_model::CostModel;
use crate::domain::inputs::RawInputs;
use crate::domain::metrics::DerivedMetrics;
use crate::services::calculator_state::CalculatorState;

#[derive(Serialize, Debug, Clone)]
pub struct RoiReport {
    pub vendor_name: String,
    pub currency_symbol: String,
    pub theme_color: String,
    pub logo: Option<String>,
    pub date: String,
    pub cost_model: CostModel,
    pub inputs: RawInputs,
    pub metrics: DerivedMetrics,
}

pub fn build_roi_report(
    state: &CalculatorState,
    branding: &BrandingConfig,
    date: NaiveDate,
) -> RoiReport {
    RoiReport {
        vendor_name: branding.vendor_name.clone(),
        currency_symbol: branding.currency_symbol.clone(),
        theme_color: branding.theme_color.to_hex(),
        logo: branding.logo.clone(),
        date: date.format("%Y-%m-%d").to_string(),
        cost_model: state.cost_model,
        inputs: state.inputs.clone(),
        metrics: state.metrics(),
    }
}
