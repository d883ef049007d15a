use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::domain::cost_model::CostModel;
use crate::domain::inputs::{
    RawInputs, ERROR_CORRECTION_HOURS_BOUNDS, HOURS_PER_WEEK_BOUNDS, INTEGRATION_COST_BOUNDS,
    MONTHLY_SALARY_BOUNDS,
};
use crate::services::calculator_state::{CalculatorState, HoursPolicy};
use crate::services::derivation::staff_count_for;
use crate::services::sanitizer::sanitize;

#[derive(Error, Debug)]
pub enum SavedStateError {
    #[error("failed to read saved state {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write saved state {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error("failed to parse saved state json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("saved state must be a json object")]
    NotAnObject,
}

/// Inputs as persisted between sessions, plus whether hours-per-week was
/// edited directly.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedState {
    pub inputs: RawInputs,
    pub hours_overridden: bool,
}

impl SavedState {
    pub fn new() -> Self {
        Self {
            inputs: RawInputs::new(),
            hours_overridden: false,
        }
    }

    pub fn from_calculator(state: &CalculatorState) -> Self {
        Self {
            inputs: state.inputs.clone(),
            hours_overridden: state.is_hours_overridden(),
        }
    }

    pub fn into_calculator(
        self,
        cost_model: CostModel,
        hours_policy: HoursPolicy,
    ) -> CalculatorState {
        CalculatorState::restore(self.inputs, cost_model, hours_policy, self.hours_overridden)
    }
}

impl Default for SavedState {
    fn default() -> Self {
        Self::new()
    }
}

// Every field is loose so a hand-edited or stale file still loads.
#[derive(Debug, Deserialize, Default)]
#[serde(default, rename_all = "camelCase")]
struct SavedStateRecord {
    integration_cost: Option<Value>,
    monthly_salary: Option<Value>,
    hours_per_week: Option<Value>,
    error_correction_hours: Option<Value>,
    company_size: Option<Value>,
    hours_overridden: Option<Value>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SavedStateOutput<'a> {
    #[serde(flatten)]
    inputs: &'a RawInputs,
    hours_overridden: bool,
}

/// Parses a saved state from JSON.
///
/// Input fields may be numbers or numeric strings. Missing, null or
/// non-numeric fields take their default value, and the inputs are always
/// sanitized. Without an explicit `hoursOverridden` flag, hours that differ
/// from the value company size would derive count as a direct edit.
///
/// # Errors
/// - Returns an error when the document is not valid JSON.
/// - Returns an error when the document is not a JSON object.
pub fn parse_saved_state(input: &str) -> Result<SavedState, SavedStateError> {
    let document: Value = serde_json::from_str(input)?;
    if !document.is_object() {
        return Err(SavedStateError::NotAnObject);
    }
    let record: SavedStateRecord = serde_json::from_value(document)?;

    let inputs = sanitize(&RawInputs {
        integration_cost: numeric_or(record.integration_cost, INTEGRATION_COST_BOUNDS.default),
        monthly_salary: numeric_or(record.monthly_salary, MONTHLY_SALARY_BOUNDS.default),
        hours_per_week: numeric_or(record.hours_per_week, HOURS_PER_WEEK_BOUNDS.default),
        error_correction_hours: numeric_or(
            record.error_correction_hours,
            ERROR_CORRECTION_HOURS_BOUNDS.default,
        ),
        company_size: record.company_size.as_ref().and_then(numeric_value),
    });
    let hours_overridden = match record.hours_overridden {
        Some(Value::Bool(flag)) => flag,
        _ => hours_differ_from_company_size(&inputs),
    };

    Ok(SavedState {
        inputs,
        hours_overridden,
    })
}

/// Parses only the inputs of a saved state. See [`parse_saved_state`].
pub fn parse_saved_inputs(input: &str) -> Result<RawInputs, SavedStateError> {
    parse_saved_state(input).map(|state| state.inputs)
}

/// Reads a saved state from `path`, failing on I/O or parse errors.
pub fn read_saved_state<P: AsRef<Path>>(path: P) -> Result<SavedState, SavedStateError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| SavedStateError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse_saved_state(&contents)
}

pub fn read_saved_inputs<P: AsRef<Path>>(path: P) -> Result<RawInputs, SavedStateError> {
    read_saved_state(path).map(|state| state.inputs)
}

/// Reads a saved state from `path`, falling back to defaults when the file is
/// missing or corrupted.
pub fn load_saved_state<P: AsRef<Path>>(path: P) -> SavedState {
    let path = path.as_ref();
    match read_saved_state(path) {
        Ok(state) => state,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "ignoring saved state, using defaults");
            SavedState::new()
        }
    }
}

/// Writes the sanitized inputs and the override flag to `path` as
/// pretty-printed JSON.
pub fn write_saved_state<P: AsRef<Path>>(
    path: P,
    state: &SavedState,
) -> Result<(), SavedStateError> {
    let path = path.as_ref();
    let inputs = sanitize(&state.inputs);
    let json = serde_json::to_string_pretty(&SavedStateOutput {
        inputs: &inputs,
        hours_overridden: state.hours_overridden,
    })?;
    std::fs::write(path, json).map_err(|source| SavedStateError::Write {
        path: path.to_path_buf(),
        source,
    })
}

fn hours_differ_from_company_size(inputs: &RawInputs) -> bool {
    inputs
        .company_size
        .is_some_and(|size| inputs.hours_per_week != staff_count_for(size) as f64)
}

fn numeric_or(value: Option<Value>, default: f64) -> f64 {
    value.as_ref().and_then(numeric_value).unwrap_or(default)
}

fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    }
}
