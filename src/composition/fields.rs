// ABOUTME: Primitive field parsers for goal, target, and alert sub-objects
// ABOUTME: Enforces fixed field-check order and the strict target range invariant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Goal, target, and alert parsers.
//!
//! Field-presence checks run in a fixed order per object and the first
//! failing check short-circuits. Error paths use the sub-object's own
//! name (`goal.value`, `target.min`), not the enclosing step index; the
//! basic-step parser owns the step-level labels.

use super::value::{self, JsonMap};
use crate::errors::{PlanError, PlanResult};
use crate::models::{WorkoutAlert, WorkoutGoal, WorkoutTarget};

/// Parse a goal object: string `type`, numeric `value`, string `unit`,
/// in that order. No cross-field validation.
pub(crate) fn parse_goal(goal: &JsonMap) -> PlanResult<WorkoutGoal> {
    let goal_type = value::require_str(goal, "type", "goal.type")?;
    let goal_value = value::require_f64(goal, "value", "goal.value")?;
    let unit = value::require_str(goal, "unit", "goal.unit")?;

    Ok(WorkoutGoal {
        goal_type: goal_type.to_owned(),
        value: goal_value,
        unit: unit.to_owned(),
    })
}

/// Parse a target object: string `type`, numeric `min`, numeric `max`,
/// string `unit`, in that order; then the strict range rule.
///
/// `min < max` is checked only after all four fields are confirmed
/// present and typed. `min == max` is rejected, not treated as a
/// degenerate zone, and the values are never silently reordered.
pub(crate) fn parse_target(target: &JsonMap) -> PlanResult<WorkoutTarget> {
    let target_type = value::require_str(target, "type", "target.type")?;
    let min = value::require_f64(target, "min", "target.min")?;
    let max = value::require_f64(target, "max", "target.max")?;
    let unit = value::require_str(target, "unit", "target.unit")?;

    if min >= max {
        return Err(PlanError::invalid_schema(format!(
            "target.min ({min}) must be less than target.max ({max})"
        )));
    }

    Ok(WorkoutTarget {
        target_type: target_type.to_owned(),
        min,
        max,
        unit: unit.to_owned(),
    })
}

/// Parse an alert object: string `type` required, `message` optional.
/// A present non-string `message` reads as absent.
pub(crate) fn parse_alert(alert: &JsonMap) -> PlanResult<WorkoutAlert> {
    let alert_type = value::require_str(alert, "type", "alert.type")?;
    let message = value::optional_str(alert, "message").map(str::to_owned);

    Ok(WorkoutAlert {
        alert_type: alert_type.to_owned(),
        message,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn as_map(value: serde_json::Value) -> JsonMap {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_goal_field_order() {
        // with type absent the value check never runs
        let err = parse_goal(&as_map(json!({"value": "bad", "unit": 3}))).unwrap_err();
        assert_eq!(err, PlanError::missing_field("goal.type"));

        let err = parse_goal(&as_map(json!({"type": "time", "unit": "seconds"}))).unwrap_err();
        assert_eq!(err, PlanError::missing_field("goal.value"));

        let err = parse_goal(&as_map(json!({"type": "time", "value": 300}))).unwrap_err();
        assert_eq!(err, PlanError::missing_field("goal.unit"));
    }

    #[test]
    fn test_goal_accepts_integer_value() {
        let goal = parse_goal(&as_map(
            json!({"type": "time", "value": 300, "unit": "seconds"}),
        ))
        .unwrap();
        assert_eq!(goal.value, 300.0);
        assert_eq!(goal.goal_type, "time");
    }

    #[test]
    fn test_target_field_order_unit_before_range_rule() {
        // all four fields are confirmed before the range rule runs, so a
        // bad range with a missing unit reports the unit first
        let err = parse_target(&as_map(json!({"type": "pace", "min": 6, "max": 5}))).unwrap_err();
        assert_eq!(err, PlanError::missing_field("target.unit"));
    }

    #[test]
    fn test_target_rejects_inverted_range_verbatim() {
        let err = parse_target(&as_map(json!({
            "type": "pace", "min": 6, "max": 5, "unit": "minutesPerKilometer"
        })))
        .unwrap_err();
        assert_eq!(
            err,
            PlanError::invalid_schema("target.min (6) must be less than target.max (5)")
        );
    }

    #[test]
    fn test_target_rejects_equal_bounds() {
        let err = parse_target(&as_map(json!({
            "type": "power", "min": 200, "max": 200, "unit": "watts"
        })))
        .unwrap_err();
        assert!(matches!(err, PlanError::InvalidSchema(_)));
    }

    #[test]
    fn test_target_preserves_bounds_exactly() {
        let target = parse_target(&as_map(json!({
            "type": "heartRate", "min": 142.5, "max": 158.25, "unit": "bpm"
        })))
        .unwrap();
        assert_eq!(target.min, 142.5);
        assert_eq!(target.max, 158.25);
    }

    #[test]
    fn test_alert_message_optional() {
        let alert = parse_alert(&as_map(json!({"type": "haptic"}))).unwrap();
        assert_eq!(alert.message, None);

        let alert = parse_alert(&as_map(json!({"type": "speech", "message": "go"}))).unwrap();
        assert_eq!(alert.message.as_deref(), Some("go"));
    }

    #[test]
    fn test_alert_non_string_message_reads_as_absent() {
        // documented leniency: a mistyped optional message is dropped,
        // not rejected
        let alert = parse_alert(&as_map(json!({"type": "speech", "message": 12}))).unwrap();
        assert_eq!(alert.message, None);
    }

    #[test]
    fn test_alert_requires_type() {
        let err = parse_alert(&as_map(json!({"message": "go"}))).unwrap_err();
        assert_eq!(err, PlanError::missing_field("alert.type"));
    }
}
