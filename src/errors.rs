// ABOUTME: Closed error taxonomy for workout composition validation and bridge reporting
// ABOUTME: Defines stable error codes, the core PlanError enum, and the PlanResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! # Error Taxonomy
//!
//! Every failure the bridge can report maps to exactly one member of a
//! closed taxonomy. All members are terminal: each represents a caller
//! input defect or an environment defect, and nothing in this crate
//! retries or suppresses them. The first failure anywhere in the
//! validation chain aborts the whole operation and is returned to the
//! immediate caller untouched.
//!
//! The taxonomy splits by owner:
//! - [`PlanError`]: the core validator's three kinds (this module)
//! - [`crate::presentation::PresentationError`]: UI collaborator conditions
//! - [`crate::platform::PlatformUnavailable`]: capability-gate condition
//!
//! [`ErrorCode`] gives every member a stable machine-readable code for
//! structured logging and wire payloads.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable machine-readable codes for every failure kind the bridge reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Structurally present fields with mutually inconsistent values
    #[serde(rename = "INVALID_SCHEMA")]
    InvalidSchema,
    /// Required field absent or wrong primitive type at a dotted path
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField,
    /// Recognized shape carrying a value this bridge does not handle
    #[serde(rename = "UNSUPPORTED_FEATURE")]
    UnsupportedFeature,
    /// Host platform does not meet the minimum capability version
    #[serde(rename = "PLATFORM_UNAVAILABLE")]
    PlatformUnavailable,
    /// No presentation surface could be located from the active window root
    #[serde(rename = "NO_PRESENTATION_SURFACE")]
    NoPresentationSurface,
    /// The presentation interaction itself failed
    #[serde(rename = "PRESENTATION_FAILED")]
    PresentationFailed,
}

impl ErrorCode {
    /// Get a user-friendly description of this error code
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidSchema => "The workout composition is structurally inconsistent",
            Self::MissingRequiredField => "A required field is missing from the composition",
            Self::UnsupportedFeature => {
                "The composition uses a feature this bridge does not support"
            }
            Self::PlatformUnavailable => "The host platform does not support planned workouts",
            Self::NoPresentationSurface => "No presentation surface is available",
            Self::PresentationFailed => "Presenting the workout preview failed",
        }
    }
}

/// Validation and translation errors produced by the composition core.
///
/// These are the only errors the pure validator can return. Message
/// payloads carry the dotted field path or the offending values so the
/// caller can attribute the failure without re-parsing the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Fields are present and typed but mutually inconsistent
    /// (sport/activity mismatch, target range ordering)
    #[error("Invalid workout composition: {0}")]
    InvalidSchema(String),
    /// A required field is absent or has the wrong primitive type
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),
    /// A recognized-shape-but-unhandled value, currently only unknown step kinds
    #[error("Unsupported feature: {0}")]
    UnsupportedFeature(String),
}

impl PlanError {
    /// Inconsistent-values error with a human-readable message
    #[must_use]
    pub fn invalid_schema(message: impl Into<String>) -> Self {
        Self::InvalidSchema(message.into())
    }

    /// Missing/mistyped field error for the given dotted path
    #[must_use]
    pub fn missing_field(path: impl Into<String>) -> Self {
        Self::MissingRequiredField(path.into())
    }

    /// Unhandled-value error with a description of the offending feature
    #[must_use]
    pub fn unsupported(feature: impl Into<String>) -> Self {
        Self::UnsupportedFeature(feature.into())
    }

    /// Stable code for structured logging and wire payloads
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidSchema(_) => ErrorCode::InvalidSchema,
            Self::MissingRequiredField(_) => ErrorCode::MissingRequiredField,
            Self::UnsupportedFeature(_) => ErrorCode::UnsupportedFeature,
        }
    }
}

/// Result type alias for the composition core
pub type PlanResult<T> = Result<T, PlanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_error_codes() {
        assert_eq!(
            PlanError::invalid_schema("x").code(),
            ErrorCode::InvalidSchema
        );
        assert_eq!(
            PlanError::missing_field("steps").code(),
            ErrorCode::MissingRequiredField
        );
        assert_eq!(
            PlanError::unsupported("step kind 'sprint'").code(),
            ErrorCode::UnsupportedFeature
        );
    }

    #[test]
    fn test_plan_error_display() {
        let err = PlanError::missing_field("steps[2].kind");
        assert_eq!(err.to_string(), "Missing required field: steps[2].kind");

        let err = PlanError::unsupported("step kind 'sprint'");
        assert_eq!(err.to_string(), "Unsupported feature: step kind 'sprint'");
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::MissingRequiredField).unwrap();
        assert_eq!(json, "\"MISSING_REQUIRED_FIELD\"");
    }

    #[test]
    fn test_error_code_descriptions_are_stable() {
        assert_eq!(
            ErrorCode::PlatformUnavailable.description(),
            "The host platform does not support planned workouts"
        );
        assert_eq!(
            ErrorCode::NoPresentationSurface.description(),
            "No presentation surface is available"
        );
    }
}
