// ABOUTME: Step tree parser walking the ordered descriptor list with bounded recursion
// ABOUTME: Dispatches by step kind and wraps repeat sequences with their count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Step tree parser.
//!
//! Walks the ordered step descriptors, dispatching by `kind`: leaf
//! kinds go to the basic-step parser; `repeat` opens a nested sequence
//! parsed one level deeper, where `repeat` is no longer recognized.
//! The depth bound is an explicit check against
//! [`MAX_REPEAT_DEPTH`](crate::constants::schema::MAX_REPEAT_DEPTH),
//! not an artifact of dispatch shape, so a future schema change cannot
//! silently reopen unbounded nesting.
//!
//! Parsing is fail-fast: the first invalid descriptor aborts the walk
//! with no partial result.

use super::fields;
use super::value::{self, JsonMap};
use crate::constants::schema::{KIND_REPEAT, MAX_REPEAT_DEPTH, REPEAT_INDEX_STRIDE};
use crate::errors::{PlanError, PlanResult};
use crate::models::{ParsedStep, RepeatGroup, StepKind, WorkoutStep};

/// Parse the ordered top-level step list into validated steps.
pub(crate) fn parse_steps(steps: &[&JsonMap]) -> PlanResult<Vec<ParsedStep>> {
    let mut parsed = Vec::with_capacity(steps.len());
    for (index, step) in steps.iter().enumerate() {
        parsed.push(parse_step(step, index, 0)?);
    }
    Ok(parsed)
}

/// Parse one descriptor at the given error-index label and nesting depth.
fn parse_step(step: &JsonMap, index: usize, depth: usize) -> PlanResult<ParsedStep> {
    let kind = value::require_str(step, "kind", &format!("steps[{index}].kind"))?;

    if let Some(leaf) = StepKind::from_wire(kind) {
        return parse_basic_step(step, leaf, index).map(ParsedStep::Basic);
    }

    if kind == KIND_REPEAT && depth < MAX_REPEAT_DEPTH {
        return parse_repeat_step(step, index, depth);
    }

    // Unknown kinds, and `repeat` past the depth bound, land here.
    Err(PlanError::unsupported(format!("step kind '{kind}'")))
}

/// Parse a repeat descriptor: integer `count`, array-of-maps `sequence`,
/// each element dispatched one level deeper.
fn parse_repeat_step(step: &JsonMap, index: usize, depth: usize) -> PlanResult<ParsedStep> {
    let count = value::require_i64(
        step,
        "count",
        &format!("steps[{index}].count (for repeat steps)"),
    )?;
    let sequence = value::require_map_array(
        step,
        "sequence",
        &format!("steps[{index}].sequence (for repeat steps)"),
    )?;

    let mut parsed_sequence = Vec::with_capacity(sequence.len());
    for (seq_index, element) in sequence.iter().enumerate() {
        // Composite label for error attribution only; collisions past the
        // stride are tolerated and the label never identifies a step.
        let label = index * REPEAT_INDEX_STRIDE + seq_index;
        match parse_step(element, label, depth + 1)? {
            ParsedStep::Basic(leaf) => parsed_sequence.push(leaf),
            // Unreachable while MAX_REPEAT_DEPTH is 1: the depth guard
            // above already rejected nested repeats.
            ParsedStep::Repeat(_) => {
                return Err(PlanError::unsupported(format!("step kind '{KIND_REPEAT}'")));
            }
        }
    }

    Ok(ParsedStep::Repeat(RepeatGroup {
        count,
        sequence: parsed_sequence,
    }))
}

/// Parse one leaf step: required `goal`, optional `target` and `alert`.
///
/// Sub-parser errors bubble unchanged; only the missing-goal path
/// carries this step's index label.
fn parse_basic_step(step: &JsonMap, kind: StepKind, index: usize) -> PlanResult<WorkoutStep> {
    let goal = value::require_map(step, "goal", &format!("steps[{index}].goal"))?;
    let goal = fields::parse_goal(goal)?;

    let target = value::optional_map(step, "target")
        .map(fields::parse_target)
        .transpose()?;
    let alert = value::optional_map(step, "alert")
        .map(fields::parse_alert)
        .transpose()?;

    Ok(WorkoutStep {
        kind,
        goal,
        target,
        alert,
    })
}
