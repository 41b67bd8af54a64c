// ABOUTME: Typed domain model for validated workout plans
// ABOUTME: Defines Sport, StepKind, goal/target/alert records, and the parsed plan tree
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! # Data Models
//!
//! Strongly typed output of the composition validator. Every entity here
//! is constructed fresh per validation call, never mutated after
//! construction, and discarded once the call's result is delivered.
//!
//! The repeat invariant is structural: [`RepeatGroup::sequence`] is a
//! `Vec<WorkoutStep>`, so a repeat group cannot contain another repeat
//! group by type.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sports accepted over the bridge wire.
///
/// The wire schema is externally versioned; values outside this set are
/// rejected at the bridge boundary before the validator runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    /// Outdoor or treadmill running
    Running,
    /// Road or indoor cycling
    Cycling,
    /// Pool or open-water swimming
    Swimming,
}

impl Sport {
    /// Canonical wire string for this sport
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Leaf step kinds.
///
/// `repeat` is deliberately absent: it is a dispatch case in the step
/// tree parser, not a leaf kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    /// Preparatory segment before the main work
    Warmup,
    /// Main effort segment
    Work,
    /// Recovery segment between efforts
    Rest,
    /// Wind-down segment after the main work
    Cooldown,
}

impl StepKind {
    /// Parse a wire `kind` string into a leaf kind, if it is one
    #[must_use]
    pub fn from_wire(kind: &str) -> Option<Self> {
        match kind {
            "warmup" => Some(Self::Warmup),
            "work" => Some(Self::Work),
            "rest" => Some(Self::Rest),
            "cooldown" => Some(Self::Cooldown),
            _ => None,
        }
    }

    /// Canonical wire string for this kind
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Work => "work",
            Self::Rest => "rest",
            Self::Cooldown => "cooldown",
        }
    }
}

/// Primary metric driving a step (e.g. time, distance, pace).
///
/// `type` and `unit` are free-form strings validated for presence only;
/// there is no enum-closure check against the sport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutGoal {
    /// Goal metric, e.g. "time" or "distance"
    #[serde(rename = "type")]
    pub goal_type: String,
    /// Goal value in `unit`
    pub value: f64,
    /// Unit the value is expressed in
    pub unit: String,
}

/// Acceptable value range (zone) for a metric during a step.
///
/// Invariant: `min < max` strictly. The parser rejects violations rather
/// than correcting them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTarget {
    /// Target metric, e.g. "pace" or "heartRate"
    #[serde(rename = "type")]
    pub target_type: String,
    /// Lower bound of the zone
    pub min: f64,
    /// Upper bound of the zone
    pub max: f64,
    /// Unit both bounds are expressed in
    pub unit: String,
}

/// Notification or cue triggered during a step
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutAlert {
    /// Alert kind, e.g. "speech" or "haptic"
    #[serde(rename = "type")]
    pub alert_type: String,
    /// Optional message (for speech alerts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// One validated leaf activity segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStep {
    /// Segment kind
    pub kind: StepKind,
    /// Primary goal for the segment
    pub goal: WorkoutGoal,
    /// Optional target zone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<WorkoutTarget>,
    /// Optional alert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert: Option<WorkoutAlert>,
}

/// A repeat group: an inner sequence of leaf steps executed `count` times.
///
/// The count is preserved verbatim from the wire; presence and
/// integer-ness are the only validations applied to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RepeatGroup {
    /// Number of times the sequence runs
    pub count: i64,
    /// Ordered leaf steps; repeat-of-repeat is unrepresentable here
    pub sequence: Vec<WorkoutStep>,
}

/// One validated entry in the plan's ordered step list
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ParsedStep {
    /// Leaf activity segment
    Basic(WorkoutStep),
    /// Repeat group wrapping a sequence of leaf segments
    Repeat(RepeatGroup),
}

/// Fully validated workout plan, the success output of the composition core
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutPlan {
    /// Sport the plan was validated against
    pub sport: String,
    /// Optional display name from the composition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    /// Optional free-form notes from the composition
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Optional activity location ("indoor" / "outdoor" upstream)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Ordered, validated step list
    pub steps: Vec<ParsedStep>,
}

impl WorkoutPlan {
    /// Number of top-level steps (a repeat group counts as one)
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Summary handed to the presentation collaborator
    #[must_use]
    pub fn summary(&self) -> PlanSummary {
        PlanSummary {
            sport: self.sport.clone(),
            step_count: self.step_count(),
            display_name: self.display_name.clone(),
        }
    }
}

/// Minimal plan description for the UI presentation routine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanSummary {
    /// Sport of the validated plan
    pub sport: String,
    /// Number of top-level steps
    pub step_count: usize,
    /// Optional display name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

impl PlanSummary {
    /// Human-readable preview line shown on the presentation surface
    #[must_use]
    pub fn preview_message(&self) -> String {
        format!(
            "Creating workout with {} steps for {}",
            self.step_count, self.sport
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sport_wire_names() {
        assert_eq!(Sport::Running.as_str(), "running");
        let parsed: Sport = serde_json::from_str("\"cycling\"").unwrap();
        assert_eq!(parsed, Sport::Cycling);
        assert!(serde_json::from_str::<Sport>("\"tennis\"").is_err());
    }

    #[test]
    fn test_step_kind_from_wire() {
        assert_eq!(StepKind::from_wire("warmup"), Some(StepKind::Warmup));
        assert_eq!(StepKind::from_wire("cooldown"), Some(StepKind::Cooldown));
        assert_eq!(StepKind::from_wire("repeat"), None);
        assert_eq!(StepKind::from_wire("sprint"), None);
    }

    #[test]
    fn test_plan_summary_preview() {
        let summary = PlanSummary {
            sport: "running".into(),
            step_count: 3,
            display_name: None,
        };
        assert_eq!(
            summary.preview_message(),
            "Creating workout with 3 steps for running"
        );
    }
}
