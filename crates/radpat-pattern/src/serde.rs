use std::collections::BTreeMap;
use std::iter::FromIterator;

use radpat_core::{ErrorInfo, RadError};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::report::SweepReport;

fn serde_error(code: &str, err: impl ToString) -> RadError {
    RadError::Serde(ErrorInfo::new(code, err.to_string()))
}

fn canonicalize(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let ordered = map
                .into_iter()
                .map(|(key, value)| (key, canonicalize(value)))
                .collect::<BTreeMap<_, _>>();
            Value::Object(Map::from_iter(ordered))
        }
        Value::Array(values) => Value::Array(values.into_iter().map(canonicalize).collect()),
        other => other,
    }
}

/// Serializes a value into JSON bytes with sorted object keys.
pub fn to_canonical_json_bytes<T: Serialize>(value: &T) -> Result<Vec<u8>, RadError> {
    let value = serde_json::to_value(value).map_err(|err| serde_error("json_serialize", err))?;
    let mut bytes = Vec::new();
    serde_json::to_writer(&mut bytes, &canonicalize(value))
        .map_err(|err| serde_error("json_write", err))?;
    Ok(bytes)
}

/// Deserializes a value from JSON text.
pub fn from_json_str<T: DeserializeOwned>(json: &str) -> Result<T, RadError> {
    serde_json::from_str(json).map_err(|err| serde_error("json_deserialize", err))
}

/// Serializes a value into YAML text.
pub fn to_yaml_string<T: Serialize>(value: &T) -> Result<String, RadError> {
    serde_yaml::to_string(value).map_err(|err| serde_error("yaml_serialize", err))
}

/// Deserializes a value from YAML text.
pub fn from_yaml_str<T: DeserializeOwned>(yaml: &str) -> Result<T, RadError> {
    serde_yaml::from_str(yaml).map_err(|err| serde_error("yaml_deserialize", err))
}

/// Serializes a sweep report into indented JSON.
pub fn report_to_json(report: &SweepReport) -> Result<String, RadError> {
    serde_json::to_string_pretty(report).map_err(|err| serde_error("report-serialize", err))
}

/// Deserializes a sweep report from JSON text.
pub fn report_from_json(json: &str) -> Result<SweepReport, RadError> {
    serde_json::from_str(json).map_err(|err| serde_error("report-deserialize", err))
}
