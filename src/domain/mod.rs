pub mod branding;
pub mod cost_model;
pub mod inputs;
pub mod metrics;
