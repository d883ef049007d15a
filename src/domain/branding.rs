use serde::Serialize;

pub const DEFAULT_VENDOR_NAME: &str = "Your Vendor";
pub const DEFAULT_CURRENCY_SYMBOL: &str = "₹";
pub const DEFAULT_THEME_COLOR: ThemeColor = ThemeColor {
    red: 30,
    green: 122,
    blue: 204,
};

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl ThemeColor {
    /// Parses `#rrggbb` or `rrggbb`.
    pub fn from_hex(value: &str) -> Option<Self> {
        let hex = value.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
        Some(Self {
            red: channel(0..2)?,
            green: channel(2..4)?,
            blue: channel(4..6)?,
        })
    }

    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Vendor branding shown on reports and charts.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BrandingConfig {
    pub vendor_name: String,
    pub currency_symbol: String,
    pub theme_color: ThemeColor,
    /// Path or URL of the vendor logo. Only carried through to the report.
    pub logo: Option<String>,
}

impl BrandingConfig {
    pub fn new() -> Self {
        Self {
            vendor_name: DEFAULT_VENDOR_NAME.to_string(),
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
            theme_color: DEFAULT_THEME_COLOR,
            logo: None,
        }
    }
}

impl Default for BrandingConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colors_with_and_without_hash() {
        let expected = ThemeColor {
            red: 0xff,
            green: 0x80,
            blue: 0x00,
        };
        assert_eq!(ThemeColor::from_hex("#ff8000"), Some(expected));
        assert_eq!(ThemeColor::from_hex("FF8000"), Some(expected));
    }

    #[test]
    fn rejects_malformed_hex_colors() {
        assert_eq!(ThemeColor::from_hex("#fff"), None);
        assert_eq!(ThemeColor::from_hex("#gg0000"), None);
        assert_eq!(ThemeColor::from_hex(""), None);
    }

    #[test]
    fn default_color_formats_back_to_hex() {
        assert_eq!(DEFAULT_THEME_COLOR.to_hex(), "#1e7acc");
    }
}
