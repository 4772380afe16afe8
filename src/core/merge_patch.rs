//! Shallow merge-patch over flat records.
//!
//! The stored record is serialized to a JSON object, every allowlisted key of
//! the patch overwrites the matching key, and the result is deserialized back
//! into the record type. Keys outside the allowlist never reach the write.

use std::fmt;

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

#[derive(Debug, PartialEq)]
pub enum MergeError {
    /// patch is not an object or carries no patchable field
    EmptyPatch,
    /// patched field does not fit the record type
    InvalidField(String),
    /// record could not be turned into a JSON object
    Record(String),
}

impl fmt::Display for MergeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MergeError::EmptyPatch => write!(f, "No data provided for update"),
            MergeError::InvalidField(field) => write!(f, "Invalid value for {}", field),
            MergeError::Record(err) => write!(f, "record serialization failed: {}", err),
        }
    }
}

impl std::error::Error for MergeError {}

/// Keep only the allowlisted keys of a patch body.
pub fn filter_patch(patch: &Value, patchable: &[&str]) -> Result<Map<String, Value>, MergeError> {
    let patch = match patch {
        Value::Object(map) => map,
        _ => return Err(MergeError::EmptyPatch),
    };
    let filtered: Map<String, Value> = patch
        .iter()
        .filter(|(key, _)| patchable.contains(&key.as_str()))
        .map(|(key, val)| (key.clone(), val.clone()))
        .collect();
    if filtered.is_empty() {
        return Err(MergeError::EmptyPatch);
    }
    Ok(filtered)
}

fn to_object<T: Serialize>(record: &T) -> Result<Map<String, Value>, MergeError> {
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(other) => Err(MergeError::Record(format!("expected object, got {}", other))),
        Err(err) => Err(MergeError::Record(err.to_string())),
    }
}

/// Overlay `patch` on `current` and return the merged record.
pub fn merge_patch<T: Serialize + DeserializeOwned>(
    current: &T,
    patch: &Map<String, Value>,
) -> Result<T, MergeError> {
    let base = to_object(current)?;
    let mut merged = base.clone();
    for (key, val) in patch {
        merged.insert(key.clone(), val.clone());
    }
    if let Ok(record) = serde_json::from_value::<T>(Value::Object(merged)) {
        return Ok(record);
    }

    // name the first patched field that does not fit
    for (key, val) in patch {
        let mut single = base.clone();
        single.insert(key.clone(), val.clone());
        if serde_json::from_value::<T>(Value::Object(single)).is_err() {
            return Err(MergeError::InvalidField(key.clone()));
        }
    }
    Err(MergeError::InvalidField(
        patch.keys().cloned().collect::<Vec<String>>().join(", "),
    ))
}
