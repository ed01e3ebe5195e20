//! Structured error types shared across radpat crates.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Structured payload attached to every [`RadError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Contextual key value pairs (parameter names, offending values, bounds).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Optional hint that may help the caller resolve the issue.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Creates a new error payload with the provided code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Sets a human readable hint for remediation.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for radiation pattern computations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum RadError {
    /// An input fell outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(ErrorInfo),
    /// Configuration or report (de)serialisation failed.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
    /// Execution resources (thread pools) could not be acquired.
    #[error("runtime error: {0}")]
    Runtime(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (code: {})", self.message, self.code)?;
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        if let Some(hint) = &self.hint {
            write!(f, " | hint: {hint}")?;
        }
        Ok(())
    }
}

impl RadError {
    /// Builds an [`RadError::InvalidParameter`] naming the parameter, the
    /// rejected value and the violated constraint.
    pub fn invalid_parameter(
        code: &str,
        parameter: &str,
        value: f64,
        constraint: &str,
    ) -> Self {
        RadError::InvalidParameter(
            ErrorInfo::new(code, format!("{parameter} must satisfy {constraint}"))
                .with_context("parameter", parameter)
                .with_context("value", value.to_string())
                .with_context("constraint", constraint),
        )
    }

    /// Returns a reference to the payload describing the error.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            RadError::InvalidParameter(info) | RadError::Serde(info) | RadError::Runtime(info) => {
                info
            }
        }
    }

    /// Name of the offending parameter, when the error carries one.
    pub fn parameter(&self) -> Option<&str> {
        self.info().context.get("parameter").map(String::as_str)
    }
}
