use chrono::Local;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use roi_calculator::domain::cost_model::CostModel;
use roi_calculator::services::calculator_state::HoursPolicy;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compute savings and ROI and print a report
    Calculate {
        #[command(flatten)]
        inputs: InputArgs,
        /// Report date (YYYY-MM-DD)
        #[arg(short, long, default_value_t = default_report_date())]
        date: String,
        /// Report format
        #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
        format: ReportFormat,
        /// Write the report to this file instead of stdout
        #[arg(short, long)]
        output: Option<String>,
        /// Save the sanitized inputs to this JSON file
        #[arg(long)]
        save: Option<String>,
    },
    /// Plot manual versus automation cost per year into a PNG chart
    Chart {
        #[command(flatten)]
        inputs: InputArgs,
        /// Output PNG file
        #[arg(short, long)]
        output: String,
    },
    /// Normalize a saved state JSON file into valid ranges
    Sanitize {
        /// Saved state JSON file
        #[arg(short, long)]
        input: String,
        /// Output JSON file (defaults to overwriting the input)
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Inputs shared by every command that computes metrics. Flags override
/// values loaded from `--state`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Saved state JSON file to start from
    #[arg(long)]
    pub state: Option<String>,
    /// Branding config YAML file
    #[arg(short, long)]
    pub config: Option<String>,
    /// Whether the integration cost is a yearly fee or paid once
    #[arg(long, value_enum, default_value_t = CostModel::Recurring)]
    pub cost_model: CostModel,
    /// How company size updates hours per week
    #[arg(long, value_enum, default_value_t = HoursPolicy::FollowUntilOverridden)]
    pub hours_policy: HoursPolicy,
    /// Cost of the automation solution
    #[arg(long, allow_negative_numbers = true)]
    pub integration_cost: Option<f64>,
    /// Fully-loaded monthly salary of the staff doing the manual work
    #[arg(long, allow_negative_numbers = true)]
    pub monthly_salary: Option<f64>,
    /// Hours per week spent on manual work
    #[arg(long, allow_negative_numbers = true)]
    pub hours_per_week: Option<f64>,
    /// Additional hours per month spent correcting manual errors
    #[arg(long, allow_negative_numbers = true)]
    pub error_hours: Option<f64>,
    /// Total company headcount
    #[arg(long, allow_negative_numbers = true)]
    pub company_size: Option<f64>,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Yaml,
    Json,
}

fn default_report_date() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}
