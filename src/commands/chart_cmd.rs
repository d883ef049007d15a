use std::process::ExitCode;

use roi_calculator::services::cost_chart::write_cost_chart_png;

use crate::commands::base_commands::Commands;
use crate::commands::calculator_input::{build_state, load_branding};

pub fn chart_command(cmd: Commands) -> ExitCode {
    let Commands::Chart { inputs, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let branding = match load_branding(&inputs) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load branding config: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let metrics = build_state(&inputs).metrics();

    match write_cost_chart_png(&output, &metrics, &branding) {
        Ok(()) => {
            println!("Cost chart written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to plot cost chart: {e:?}");
            ExitCode::FAILURE
        }
    }
}
