use std::process::ExitCode;

use chrono::NaiveDate;
use tracing::info;

use roi_calculator::services::report_types::build_roi_report;
use roi_calculator::services::saved_state::{write_saved_state, SavedState};

use crate::commands::base_commands::{Commands, ReportFormat};
use crate::commands::calculator_input::{build_state, load_branding};
use crate::commands::report_format::format_roi_report;

pub fn calculate_command(cmd: Commands) -> ExitCode {
    let Commands::Calculate {
        inputs,
        date,
        format,
        output,
        save,
    } = cmd
    else {
        return ExitCode::FAILURE;
    };

    let report_date = match NaiveDate::parse_from_str(&date, "%Y-%m-%d") {
        Ok(value) => value,
        Err(_) => {
            eprintln!("Invalid report date: {date} (expected YYYY-MM-DD)");
            return ExitCode::FAILURE;
        }
    };
    let branding = match load_branding(&inputs) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load branding config: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let state = build_state(&inputs);
    let report = build_roi_report(&state, &branding, report_date);
    info!(
        year1_savings = report.metrics.year1_savings,
        roi_percent = report.metrics.roi_percent,
        "calculated roi"
    );

    let rendered = match format {
        ReportFormat::Text => Ok(format_roi_report(&report)),
        ReportFormat::Yaml => serde_yaml::to_string(&report).map_err(|e| format!("{e:?}")),
        ReportFormat::Json => serde_json::to_string_pretty(&report).map_err(|e| format!("{e:?}")),
    };
    let rendered = match rendered {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize report: {e}");
            return ExitCode::FAILURE;
        }
    };

    match &output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, &rendered) {
                eprintln!("Failed to write report: {e:?}");
                return ExitCode::FAILURE;
            }
            println!("ROI report written to {path}");
        }
        None => println!("{rendered}"),
    }

    if let Some(path) = &save {
        if let Err(e) = write_saved_state(path, &SavedState::from_calculator(&state)) {
            eprintln!("Failed to save inputs: {e:?}");
            return ExitCode::FAILURE;
        }
        println!("Inputs saved to {path}");
    }
    ExitCode::SUCCESS
}
