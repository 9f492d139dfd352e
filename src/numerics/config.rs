// src/numerics/config.rs
// Tolerance configuration for approximate matrix comparison.

use std::collections::HashMap;

use crate::numerics::types::error::ConfigError;

/// Parse a `key=value,key=value` parameter string into a map.
///
/// Keys and values are whitespace-trimmed; entries without `=` or with an
/// empty key are skipped. A repeated key keeps its last value.
pub fn parse_parameters(parameters: &str) -> HashMap<String, String> {
    parameter_pairs(parameters)
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}

/// Trimmed `(key, value)` pairs in the order they appear.
fn parameter_pairs(parameters: &str) -> impl Iterator<Item = (&str, &str)> {
    parameters.split(',').filter_map(|pair| {
        let (key, value) = pair.split_once('=')?;
        let key = key.trim();
        if key.is_empty() {
            return None;
        }
        Some((key, value.trim()))
    })
}

/// Configuration for element-wise approximate equality between matrices.
///
/// Two values `a` and `b` compare equal when
/// `|a - b| <= absolute + relative * max(|a|, |b|)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComparisonConfig {
    /// Absolute tolerance, applied regardless of magnitude.
    pub absolute: f64,

    /// Relative tolerance, scaled by the larger magnitude of the pair.
    pub relative: f64,
}

impl Default for ComparisonConfig {
    /// Absolute tolerance of `1e-9` and no relative tolerance.
    fn default() -> Self {
        Self {
            absolute: 1e-9,
            relative: 0.0,
        }
    }
}

impl ComparisonConfig {
    /// Create a configuration from explicit tolerances.
    ///
    /// # Errors
    /// [`ConfigError::InvalidParameters`] when either tolerance is negative,
    /// infinite or NaN.
    pub fn new(absolute: f64, relative: f64) -> Result<Self, ConfigError> {
        Ok(Self {
            absolute: check_tolerance("absolute", absolute)?,
            relative: check_tolerance("relative", relative)?,
        })
    }

    /// Exact comparison: no tolerance at all.
    pub fn exact() -> Self {
        Self {
            absolute: 0.0,
            relative: 0.0,
        }
    }

    /// Purely absolute tolerance.
    pub fn absolute(tolerance: f64) -> Result<Self, ConfigError> {
        Self::new(tolerance, 0.0)
    }

    /// Build a configuration from a parameter string such as `"abs=1e-6,rel=1e-12"`.
    ///
    /// Recognised keys are `abs`/`absolute` and `rel`/`relative`; omitted keys
    /// keep their default. Entries are checked in order and the first bad one
    /// is reported. Setting the same tolerance twice is an error.
    pub fn from_parameters(parameters: &str) -> Result<Self, ConfigError> {
        let mut absolute = None;
        let mut relative = None;

        for (key, value) in parameter_pairs(parameters) {
            let (name, slot) = match key {
                "abs" | "absolute" => ("absolute", &mut absolute),
                "rel" | "relative" => ("relative", &mut relative),
                _ => {
                    return Err(ConfigError::InvalidParameters(format!(
                        "Unknown parameter: {}. Expected 'abs' or 'rel'",
                        key
                    )))
                }
            };
            if slot.is_some() {
                return Err(ConfigError::InvalidParameters(format!(
                    "{} tolerance given more than once",
                    name
                )));
            }
            *slot = Some(parse_tolerance(key, value)?);
        }

        let default = Self::default();
        Self::new(
            absolute.unwrap_or(default.absolute),
            relative.unwrap_or(default.relative),
        )
    }

    /// Whether `a` and `b` are equal under this tolerance.
    pub fn within(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        (a - b).abs() <= self.absolute + self.relative * a.abs().max(b.abs())
    }
}

fn parse_tolerance(key: &str, value: &str) -> Result<f64, ConfigError> {
    let tolerance = value.parse::<f64>().map_err(|_| {
        ConfigError::InvalidParameters(format!("Invalid {} value: {}", key, value))
    })?;
    check_tolerance(key, tolerance)
}

fn check_tolerance(name: &str, tolerance: f64) -> Result<f64, ConfigError> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(ConfigError::InvalidParameters(format!(
            "{} must be a finite, non-negative number (got {})",
            name, tolerance
        )));
    }
    Ok(tolerance)
}
