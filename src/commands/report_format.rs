use roi_calculator::domain::metrics::YearProjection;
use roi_calculator::services::report_types::RoiReport;

pub fn format_roi_report(report: &RoiReport) -> String {
    let symbol = report.currency_symbol.as_str();
    let inputs = &report.inputs;
    let metrics = &report.metrics;
    let breakeven = match metrics.breakeven_months {
        Some(months) => format!("{months:.1} months"),
        None => "n/a".to_string(),
    };

    let mut lines = Vec::new();
    lines.push(format!("ROI Report: {}", report.vendor_name));
    lines.push(format!("Date: {}", report.date));
    lines.push(format!("Cost model: {}", report.cost_model.label()));
    lines.push(format!("Theme color: {}", report.theme_color));
    if let Some(logo) = &report.logo {
        lines.push(format!("Logo: {logo}"));
    }
    lines.push(String::new());
    lines.push("Inputs:".to_string());
    lines.push(format!("Integration cost: {}", format_money(symbol, inputs.integration_cost, 0)));
    lines.push(format!("Monthly salary: {}", format_money(symbol, inputs.monthly_salary, 0)));
    lines.push(format!("Hours per week: {:.1}", inputs.hours_per_week));
    lines.push(format!("Error correction hours per month: {:.1}", inputs.error_correction_hours));
    if let Some(size) = inputs.company_size {
        lines.push(format!("Company size: {size:.0}"));
    }
    lines.push(String::new());
    lines.push("Key figures:".to_string());
    lines.push(format!("Year 1 savings: {}", format_money(symbol, metrics.year1_savings, 0)));
    lines.push(format!("3-year savings: {}", format_money(symbol, metrics.savings_3year, 0)));
    lines.push(format!("Monthly savings: {}", format_money(symbol, metrics.monthly_savings, 0)));
    lines.push(format!("ROI (year 1): {:.1}%", metrics.roi_percent));
    lines.push(format!("ROI (3 years): {:.1}%", metrics.roi_percent_3year));
    lines.push(format!("Breakeven: {breakeven}"));
    lines.push(format!("Staff count: {}", metrics.staff_count));
    lines.push(format!("Hourly rate: {}", format_money(symbol, metrics.hourly_rate, 2)));
    lines.push(format!("Annual manual hours: {:.1}", metrics.annual_manual_hours));
    lines.push(String::new());
    lines.push("Manual vs Automation:".to_string());
    lines.push("Year | Manual | Automation | Savings".to_string());
    lines.push("-----|--------|------------|--------".to_string());
    for year in &metrics.projection {
        lines.push(format_projection_row(symbol, year));
    }

    lines.join("\n")
}

fn format_projection_row(symbol: &str, year: &YearProjection) -> String {
    format!(
        "{year} | {manual} | {automation} | {savings}",
        year = year.year,
        manual = format_money(symbol, year.manual_cost, 0),
        automation = format_money(symbol, year.automation_cost, 0),
        savings = format_money(symbol, year.savings, 0)
    )
}

/// Formats `value` with the currency symbol and thousands separators.
pub fn format_money(symbol: &str, value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (idx, digit) in whole.chars().enumerate() {
        if idx > 0 && (whole.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let sign = if value < 0.0 && !formatted.trim_matches(['0', '.']).is_empty() {
        "-"
    } else {
        ""
    };
    match fraction {
        Some(fraction) => format!("{sign}{symbol}{grouped}.{fraction}"),
        None => format!("{sign}{symbol}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use roi_calculator::domain::branding::BrandingConfig;
    use roi_calculator::domain::cost_model::CostModel;
    use roi_calculator::domain::inputs::RawInputs;
    use roi_calculator::services::calculator_state::{CalculatorState, HoursPolicy};
    use roi_calculator::services::report_types::build_roi_report;

    fn build_report(cost_model: CostModel, inputs: RawInputs) -> RoiReport {
        let state = CalculatorState::new(inputs, cost_model, HoursPolicy::default());
        let branding = BrandingConfig {
            vendor_name: "Acme".to_string(),
            currency_symbol: "$".to_string(),
            ..BrandingConfig::new()
        };
        build_roi_report(&state, &branding, NaiveDate::from_ymd_opt(2026, 2, 1).unwrap())
    }

    #[test]
    fn format_roi_report_includes_header_kpis_and_table() {
        let report = build_report(CostModel::Recurring, RawInputs::new());
        let output = format_roi_report(&report);

        assert!(output.contains("ROI Report: Acme"));
        assert!(output.contains("Date: 2026-02-01"));
        assert!(output.contains("Cost model: yearly"));
        assert!(output.contains("Theme color: #1e7acc"));
        assert!(output.contains("Year 1 savings: $67,500"));
        assert!(output.contains("3-year savings: $202,500"));
        assert!(output.contains("ROI (year 1): 1350.0%"));
        assert!(output.contains("Breakeven: 0.8 months"));
        assert!(output.contains("Staff count: 1"));
        assert!(output.contains("Hourly rate: $312.50"));
        assert!(output.contains("Annual manual hours: 232.0"));
        assert!(output.contains("Year | Manual | Automation | Savings"));
        assert!(output.contains("1 | $72,500 | $5,000 | $67,500"));
        assert!(output.contains("2 | $78,300 | $5,000 | $73,300"));
        assert!(!output.contains("Company size"));
        assert!(!output.contains("Logo"));
    }

    #[test]
    fn format_roi_report_uses_na_when_never_breaking_even() {
        let inputs = RawInputs {
            integration_cost: 15_000.0,
            monthly_salary: 20_000.0,
            hours_per_week: 1.0,
            error_correction_hours: 0.0,
            company_size: Some(70.0),
        };
        let output = format_roi_report(&build_report(CostModel::Recurring, inputs));

        assert!(output.contains("Breakeven: n/a"));
        assert!(output.contains("Year 1 savings: $0"));
        assert!(output.contains("ROI (year 1): 0.0%"));
        assert!(output.contains("Company size: 70"));
    }

    #[test]
    fn format_money_groups_thousands() {
        assert_eq!(format_money("₹", 0.0, 0), "₹0");
        assert_eq!(format_money("₹", 999.0, 0), "₹999");
        assert_eq!(format_money("₹", 1_000.0, 0), "₹1,000");
        assert_eq!(format_money("₹", 1_234_567.891, 2), "₹1,234,567.89");
        assert_eq!(format_money("$", -2_500.0, 0), "-$2,500");
    }
}
