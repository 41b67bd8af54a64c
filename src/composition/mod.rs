// ABOUTME: Composition validator and step-tree translator, the core of the bridge
// ABOUTME: Turns an untyped composition value into a validated, typed workout plan
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! # Composition Core
//!
//! Pure validation and translation: a function from (sport, untyped
//! composition) to a typed [`WorkoutPlan`] or a [`PlanError`]. There is
//! no partial or best-effort result; the first invalid element aborts
//! the whole call.
//!
//! Control flow: schema validation (`schema`) → step tree parsing
//! (`steps`), which delegates to the basic-step parser and the
//! goal/target/alert field parsers (`fields`). All stages read the
//! input through the type-checked accessors in `value`, which turn
//! absence or a primitive-type mismatch into a `MissingRequiredField`
//! at the offending dotted path, never a silent default.
//!
//! Everything in this module is synchronous, allocation-light, and free
//! of shared state, so concurrent invocations cannot interact.

mod fields;
mod schema;
mod steps;
mod value;

use serde_json::Value;

use crate::errors::PlanResult;
use crate::models::WorkoutPlan;

/// Validate a workout composition against the declared schema and
/// translate it into a typed plan.
///
/// `sport` must equal `activity.type` exactly (no case folding). The
/// composition is borrowed read-only; the returned plan is owned by the
/// caller and carries no reference back into the input.
///
/// # Errors
///
/// Returns the first [`crate::errors::PlanError`] encountered in schema
/// or step validation; no further checks run after a failure.
pub fn translate_composition(sport: &str, composition: &Value) -> PlanResult<WorkoutPlan> {
    let raw = schema::validate_schema(sport, composition)?;
    let steps = steps::parse_steps(&raw.steps)?;

    Ok(WorkoutPlan {
        sport: sport.to_owned(),
        display_name: raw.display_name.map(str::to_owned),
        notes: raw.notes.map(str::to_owned),
        location: raw.location.map(str::to_owned),
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ParsedStep;
    use serde_json::json;

    #[test]
    fn test_translate_minimal_composition() {
        let composition = json!({
            "activity": {"type": "running"},
            "steps": [
                {"kind": "warmup", "goal": {"type": "time", "value": 300, "unit": "seconds"}}
            ]
        });

        let plan = translate_composition("running", &composition).unwrap();
        assert_eq!(plan.sport, "running");
        assert_eq!(plan.step_count(), 1);
        match &plan.steps[0] {
            ParsedStep::Basic(step) => assert_eq!(step.goal.value, 300.0),
            ParsedStep::Repeat(_) => panic!("expected a basic step"),
        }
    }

    #[test]
    fn test_translate_is_idempotent() {
        let composition = json!({
            "activity": {"type": "cycling", "location": "outdoor"},
            "displayName": "Intervals",
            "steps": [
                {"kind": "warmup", "goal": {"type": "time", "value": 600, "unit": "seconds"}},
                {"kind": "repeat", "count": 4, "sequence": [
                    {"kind": "work", "goal": {"type": "power", "value": 250, "unit": "watts"}},
                    {"kind": "rest", "goal": {"type": "time", "value": 120, "unit": "seconds"}}
                ]}
            ]
        });

        let first = translate_composition("cycling", &composition).unwrap();
        let second = translate_composition("cycling", &composition).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
