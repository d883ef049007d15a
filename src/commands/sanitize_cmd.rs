use std::process::ExitCode;

use roi_calculator::services::saved_state::{read_saved_state, write_saved_state};

use crate::commands::base_commands::Commands;

pub fn sanitize_command(cmd: Commands) -> ExitCode {
    let Commands::Sanitize { input, output } = cmd else {
        return ExitCode::FAILURE;
    };

    let saved = match read_saved_state(&input) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("Failed to read saved state: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let output = output.unwrap_or(input);
    match write_saved_state(&output, &saved) {
        Ok(()) => {
            println!("Sanitized state written to {output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Failed to write sanitized state: {e:?}");
            ExitCode::FAILURE
        }
    }
}
