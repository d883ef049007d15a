mod commands;

use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::calculate_cmd::calculate_command;
use crate::commands::chart_cmd::chart_command;
use crate::commands::sanitize_cmd::sanitize_command;

fn main() -> ExitCode {
    init_logging();

    let args = CliArgs::parse();
    match args.command {
        cmd @ Commands::Calculate { .. } => calculate_command(cmd),
        cmd @ Commands::Chart { .. } => chart_command(cmd),
        cmd @ Commands::Sanitize { .. } => sanitize_command(cmd),
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, name, &mut std::io::stdout());
            ExitCode::SUCCESS
        }
    }
}

// RUST_LOG overrides the default level. Logs go to stderr so reports on stdout stay clean.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
