pub mod assumptions;
pub mod branding_yaml;
pub mod calculator_state;
pub mod cost_chart;
pub mod derivation;
pub mod report_types;
pub mod saved_state;
pub mod sanitizer;
