//! Eager domain checks applied at every public entry point.

use crate::errors::RadError;

/// Rejects NaN and infinite inputs.
pub fn ensure_finite(parameter: &str, value: f64) -> Result<f64, RadError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(RadError::invalid_parameter(
            "non-finite-input",
            parameter,
            value,
            "a finite number",
        ))
    }
}

/// Requires `lo <= value <= hi`.
pub fn ensure_closed_range(
    code: &str,
    parameter: &str,
    value: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, RadError> {
    ensure_finite(parameter, value)?;
    if (lo..=hi).contains(&value) {
        Ok(value)
    } else {
        Err(RadError::invalid_parameter(
            code,
            parameter,
            value,
            &format!("[{lo}, {hi}]"),
        ))
    }
}

/// Requires `lo < value < hi`.
pub fn ensure_open_range(
    code: &str,
    parameter: &str,
    value: f64,
    lo: f64,
    hi: f64,
) -> Result<f64, RadError> {
    ensure_finite(parameter, value)?;
    if value > lo && value < hi {
        Ok(value)
    } else {
        Err(RadError::invalid_parameter(
            code,
            parameter,
            value,
            &format!("({lo}, {hi})"),
        ))
    }
}
