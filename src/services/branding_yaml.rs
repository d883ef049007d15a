use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::branding::{
    BrandingConfig, ThemeColor, DEFAULT_CURRENCY_SYMBOL, DEFAULT_THEME_COLOR, DEFAULT_VENDOR_NAME,
};

#[derive(Error, Debug)]
pub enum BrandingYamlError {
    #[error("failed to read branding config {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse branding config: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid theme color: {0} (expected #rrggbb)")]
    InvalidThemeColor(String),
    #[error("currency symbol must not be empty")]
    EmptyCurrencySymbol,
}

#[derive(Debug, Deserialize)]
struct BrandingRecord {
    vendor_name: Option<String>,
    currency_symbol: Option<String>,
    theme_color: Option<String>,
    logo: Option<String>,
}

/// Loads a [`BrandingConfig`] from a YAML file. Missing keys take defaults.
///
/// # Errors
/// - Returns an error when the file cannot be read or parsed.
/// - Returns an error when the theme color is not a hex color.
pub fn load_branding_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<BrandingConfig, BrandingYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| BrandingYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_branding_from_yaml_str(&contents)
}

pub fn deserialize_branding_from_yaml_str(input: &str) -> Result<BrandingConfig, BrandingYamlError> {
    // An empty file is a valid config with every default.
    if input.trim().is_empty() {
        return Ok(BrandingConfig::new());
    }
    let record: BrandingRecord = serde_yaml::from_str(input)?;

    let theme_color = match record.theme_color {
        Some(value) => {
            ThemeColor::from_hex(&value).ok_or(BrandingYamlError::InvalidThemeColor(value))?
        }
        None => DEFAULT_THEME_COLOR,
    };
    let currency_symbol = match record.currency_symbol {
        Some(symbol) if symbol.trim().is_empty() => {
            return Err(BrandingYamlError::EmptyCurrencySymbol);
        }
        Some(symbol) => symbol.trim().to_string(),
        None => DEFAULT_CURRENCY_SYMBOL.to_string(),
    };

    Ok(BrandingConfig {
        vendor_name: record
            .vendor_name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_VENDOR_NAME.to_string()),
        currency_symbol,
        theme_color,
        logo: record.logo.filter(|logo| !logo.trim().is_empty()),
    })
}
