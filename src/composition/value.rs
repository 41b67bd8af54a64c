// ABOUTME: Type-checked accessors over the untyped composition value tree
// ABOUTME: Every accessor returns a typed value or MissingRequiredField at a dotted path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Type-checked accessors for `serde_json::Value` maps.
//!
//! A required accessor fails with `MissingRequiredField` for both an
//! absent key and a present key of the wrong primitive type; the two
//! cases are indistinguishable to the caller on purpose. Optional
//! accessors treat a wrong-typed value as absent.
//!
//! The `path` argument is the full dotted label reported on failure; it
//! may differ from `key` when the caller prefixes a step index or
//! appends a qualifier.

use serde_json::{Map, Value};

use crate::errors::{PlanError, PlanResult};

/// Alias for the object representation of a JSON map
pub(crate) type JsonMap = Map<String, Value>;

/// Required string field
pub(crate) fn require_str<'a>(obj: &'a JsonMap, key: &str, path: &str) -> PlanResult<&'a str> {
    obj.get(key)
        .and_then(Value::as_str)
        .ok_or_else(|| PlanError::missing_field(path))
}

/// Required numeric field; integers widen to `f64`
pub(crate) fn require_f64(obj: &JsonMap, key: &str, path: &str) -> PlanResult<f64> {
    obj.get(key)
        .and_then(Value::as_f64)
        .ok_or_else(|| PlanError::missing_field(path))
}

/// Required integer field; a fractional number is a type mismatch
pub(crate) fn require_i64(obj: &JsonMap, key: &str, path: &str) -> PlanResult<i64> {
    obj.get(key)
        .and_then(Value::as_i64)
        .ok_or_else(|| PlanError::missing_field(path))
}

/// Required map field
pub(crate) fn require_map<'a>(obj: &'a JsonMap, key: &str, path: &str) -> PlanResult<&'a JsonMap> {
    obj.get(key)
        .and_then(Value::as_object)
        .ok_or_else(|| PlanError::missing_field(path))
}

/// Required array-of-maps field.
///
/// A non-array value, or an array with any non-map element, fails at
/// `path` as a whole; element-level attribution starts only once the
/// array's shape is established.
pub(crate) fn require_map_array<'a>(
    obj: &'a JsonMap,
    key: &str,
    path: &str,
) -> PlanResult<Vec<&'a JsonMap>> {
    let array = obj
        .get(key)
        .and_then(Value::as_array)
        .ok_or_else(|| PlanError::missing_field(path))?;

    array
        .iter()
        .map(|element| {
            element
                .as_object()
                .ok_or_else(|| PlanError::missing_field(path))
        })
        .collect()
}

/// Optional string field; a wrong-typed value reads as absent
pub(crate) fn optional_str<'a>(obj: &'a JsonMap, key: &str) -> Option<&'a str> {
    obj.get(key).and_then(Value::as_str)
}

/// Optional map field; a wrong-typed value reads as absent
pub(crate) fn optional_map<'a>(obj: &'a JsonMap, key: &str) -> Option<&'a JsonMap> {
    obj.get(key).and_then(Value::as_object)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> JsonMap {
        json!({
            "name": "tempo",
            "value": 42.5,
            "count": 4,
            "nested": {"inner": true},
            "list": [{"a": 1}, {"b": 2}]
        })
        .as_object()
        .cloned()
        .unwrap()
    }

    #[test]
    fn test_require_str_present_and_absent() {
        let obj = sample();
        assert_eq!(require_str(&obj, "name", "name").unwrap(), "tempo");

        let err = require_str(&obj, "missing", "step.missing").unwrap_err();
        assert_eq!(err, PlanError::missing_field("step.missing"));
    }

    #[test]
    fn test_require_str_wrong_type_reads_as_missing() {
        let obj = sample();
        let err = require_str(&obj, "value", "step.value").unwrap_err();
        assert_eq!(err, PlanError::missing_field("step.value"));
    }

    #[test]
    fn test_require_f64_widens_integers() {
        let obj = sample();
        assert_eq!(require_f64(&obj, "count", "count").unwrap(), 4.0);
        assert_eq!(require_f64(&obj, "value", "value").unwrap(), 42.5);
    }

    #[test]
    fn test_require_i64_rejects_fractions() {
        let obj = sample();
        assert_eq!(require_i64(&obj, "count", "count").unwrap(), 4);
        assert!(require_i64(&obj, "value", "value").is_err());
    }

    #[test]
    fn test_require_map_array_rejects_non_map_elements() {
        let obj = json!({"list": [{"a": 1}, "oops"]})
            .as_object()
            .cloned()
            .unwrap();
        let err = require_map_array(&obj, "list", "list").unwrap_err();
        assert_eq!(err, PlanError::missing_field("list"));
    }

    #[test]
    fn test_optional_accessors_treat_mismatch_as_absent() {
        let obj = sample();
        assert_eq!(optional_str(&obj, "value"), None);
        assert_eq!(optional_str(&obj, "name"), Some("tempo"));
        assert!(optional_map(&obj, "name").is_none());
        assert!(optional_map(&obj, "nested").is_some());
    }
}
