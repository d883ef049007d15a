use roi_calculator::domain::branding::BrandingConfig;
use roi_calculator::services::branding_yaml::{load_branding_from_yaml_file, BrandingYamlError};
use roi_calculator::services::calculator_state::{CalculatorState, InputChange};
use roi_calculator::services::saved_state::{load_saved_state, SavedState};

use crate::commands::base_commands::InputArgs;

/// Starts from the saved state (or defaults) and applies the flag overrides.
pub fn build_state(args: &InputArgs) -> CalculatorState {
    let saved = match &args.state {
        Some(path) => load_saved_state(path),
        None => SavedState::new(),
    };
    saved
        .into_calculator(args.cost_model, args.hours_policy)
        .apply_all(input_changes(args))
}

/// Company size goes before hours so an explicit hours flag wins.
fn input_changes(args: &InputArgs) -> Vec<InputChange> {
    [
        args.integration_cost.map(InputChange::IntegrationCost),
        args.monthly_salary.map(InputChange::MonthlySalary),
        args.error_hours.map(InputChange::ErrorCorrectionHours),
        args.company_size.map(InputChange::CompanySize),
        args.hours_per_week.map(InputChange::HoursPerWeek),
    ]
    .into_iter()
    .flatten()
    .collect()
}

pub fn load_branding(args: &InputArgs) -> Result<BrandingConfig, BrandingYamlError> {
    match &args.config {
        Some(path) => load_branding_from_yaml_file(path),
        None => Ok(BrandingConfig::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::base_commands::{CliArgs, Commands};
    use assert_fs::prelude::*;
    use clap::Parser;
    use roi_calculator::domain::inputs::RawInputs;

    fn parse_inputs(extra: &[&str]) -> InputArgs {
        let mut argv = vec!["roi", "calculate"];
        argv.extend_from_slice(extra);
        match CliArgs::parse_from(argv).command {
            Commands::Calculate { inputs, .. } => inputs,
            _ => panic!("expected calculate command"),
        }
    }

    #[test]
    fn explicit_hours_win_over_company_size() {
        let args = parse_inputs(&["--company-size", "700", "--hours-per-week", "3"]);
        let state = build_state(&args);

        assert_eq!(state.inputs.company_size, Some(700.0));
        assert_eq!(state.inputs.hours_per_week, 3.0);
    }

    #[test]
    fn company_size_alone_derives_hours() {
        let args = parse_inputs(&["--company-size", "280"]);
        let state = build_state(&args);

        assert_eq!(state.inputs.hours_per_week, 4.0);
        assert_eq!(state.metrics().staff_count, 4);
    }

    #[test]
    fn no_flags_use_defaults() {
        let args = parse_inputs(&[]);
        assert_eq!(build_state(&args).inputs, RawInputs::new());
        assert_eq!(load_branding(&args).unwrap(), BrandingConfig::new());
    }

    #[test]
    fn saved_hours_edit_is_kept_when_company_size_flag_changes() {
        let state_file = assert_fs::NamedTempFile::new("state.json").unwrap();
        state_file
            .write_str(r#"{"hoursPerWeek": 6, "companySize": 140, "hoursOverridden": true}"#)
            .unwrap();
        let path = state_file.path().to_str().unwrap();

        let args = parse_inputs(&["--state", path, "--company-size", "700"]);
        let state = build_state(&args);

        assert_eq!(state.inputs.company_size, Some(700.0));
        assert_eq!(state.inputs.hours_per_week, 6.0);
    }
}
