//! Threshold configuration for the automation rules.

use serde::Deserialize;

/// Default soil moisture threshold, in percent.
pub const DEFAULT_SOIL_THRESHOLD: f64 = 30.0;

/// Default high-temperature warning level, in degrees Celsius.
pub const DEFAULT_TEMP_WARNING: f64 = 35.0;

/// Static rule thresholds, immutable once loaded.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// The pump turns on below this soil moisture (percent).
    pub soil_threshold: f64,
    /// Temperatures above this raise a warning alert (deg C).
    pub temp_warning: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            soil_threshold: DEFAULT_SOIL_THRESHOLD,
            temp_warning: DEFAULT_TEMP_WARNING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_both_levels() {
        let t = Thresholds::default();
        assert_eq!(t.soil_threshold, 30.0);
        assert_eq!(t.temp_warning, 35.0);
    }

    #[test]
    fn should_fill_missing_fields_when_deserializing() {
        let t: Thresholds = serde_json::from_str(r#"{"soil_threshold": 45.0}"#).unwrap();
        assert_eq!(t.soil_threshold, 45.0);
        assert_eq!(t.temp_warning, 35.0);
    }
}
