// ABOUTME: Top-level schema validation for workout compositions
// ABOUTME: Checks required activity/steps fields and the sport/activity consistency rule
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Schema validator for the composition root.
//!
//! Checks run in a fixed order: `activity` is a map, `activity.type` is
//! a string, `steps` is an array of maps, and `activity.type` equals
//! the sport exactly. The first failing check short-circuits.

use serde_json::Value;

use super::value::{self, JsonMap};
use crate::errors::{PlanError, PlanResult};

/// Schema-validated view of a composition, borrowed from the input.
///
/// Steps are shape-checked (maps inside an array) but not yet parsed;
/// the step tree parser consumes them next.
#[derive(Debug)]
pub(crate) struct RawComposition<'a> {
    /// Ordered step descriptors, each confirmed to be a map
    pub steps: Vec<&'a JsonMap>,
    /// Optional display name
    pub display_name: Option<&'a str>,
    /// Optional free-form notes
    pub notes: Option<&'a str>,
    /// Optional activity location, never validated beyond being a string
    pub location: Option<&'a str>,
}

/// Validate the composition root against the declared schema.
///
/// # Errors
///
/// `MissingRequiredField("activity.type")` when `activity` is absent,
/// not a map, or lacks a string `type`; `MissingRequiredField("steps")`
/// when `steps` is absent, not an array, or contains a non-map element;
/// `InvalidSchema` naming both values when `activity.type` and the
/// sport disagree.
pub(crate) fn validate_schema<'a>(
    sport: &str,
    composition: &'a Value,
) -> PlanResult<RawComposition<'a>> {
    // A non-map composition cannot carry an activity, so it reports the
    // same path as a missing activity.
    let root = composition
        .as_object()
        .ok_or_else(|| PlanError::missing_field("activity.type"))?;

    let activity = value::require_map(root, "activity", "activity.type")?;
    let activity_type = value::require_str(activity, "type", "activity.type")?;
    let steps = value::require_map_array(root, "steps", "steps")?;

    if activity_type != sport {
        return Err(PlanError::invalid_schema(format!(
            "Activity type '{activity_type}' does not match sport '{sport}'"
        )));
    }

    Ok(RawComposition {
        steps,
        display_name: value::optional_str(root, "displayName"),
        notes: value::optional_str(root, "notes"),
        location: value::optional_str(activity, "location"),
    })
}
