pub mod base_commands;
pub mod calculate_cmd;
pub mod calculator_input;
pub mod chart_cmd;
pub mod report_format;
pub mod sanitize_cmd;
