// ABOUTME: Wire types for the plugin call surface
// ABOUTME: Request/response envelopes plus the typed params and results per method
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Plugin wire protocol.
//!
//! The envelope mirrors the remote-procedure shape of the hosting
//! bridge: a request names a method and carries untyped params; a
//! response carries exactly one of `result` or `error`. The `error`
//! side means the call was rejected; a resolved result can still
//! report `{success: false}` for validation failures, which is the
//! declared wire schema for this plugin.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::models::Sport;

/// One call arriving over the bridge
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginRequest {
    /// Method name to invoke
    pub method: String,

    /// Untyped parameters for the method
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,

    /// Request identifier for correlation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
}

impl PluginRequest {
    /// Create a request with a default numeric id
    #[must_use]
    pub fn new(method: impl Into<String>, params: Option<Value>) -> Self {
        Self {
            method: method.into(),
            params,
            id: Some(Value::Number(1.into())),
        }
    }

    /// Create a request with a specific id
    #[must_use]
    pub fn with_id(method: impl Into<String>, params: Option<Value>, id: Value) -> Self {
        Self {
            method: method.into(),
            params,
            id: Some(id),
        }
    }
}

/// Response to a plugin call.
///
/// Exactly one of `result` or `error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginResponse {
    /// Resolved value (mutually exclusive with `error`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,

    /// Rejection information (mutually exclusive with `result`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PluginError>,

    /// Request identifier for correlation
    pub id: Option<Value>,
}

impl PluginResponse {
    /// Create a resolved response
    #[must_use]
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create a rejected response
    #[must_use]
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(PluginError {
                code,
                message: message.into(),
                data: None,
            }),
            id,
        }
    }

    /// Whether the call resolved
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.error.is_none() && self.result.is_some()
    }

    /// Whether the call was rejected
    #[must_use]
    pub const fn is_error(&self) -> bool {
        self.error.is_some()
    }
}

/// Rejection payload for a plugin call
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginError {
    /// Rejection code (see [`crate::constants::errors`])
    pub code: i32,

    /// Human-readable rejection message
    pub message: String,

    /// Additional rejection information
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Typed params for `createPlannedWorkout`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlannedWorkoutParams {
    /// Sport the composition must match; the wire set is closed
    pub sport: Sport,
    /// Untyped workout composition, validated by the core
    pub composition: Value,
}

/// Declared wire result for `createPlannedWorkout`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePlannedWorkoutResult {
    /// Whether the workout was validated and presented
    pub success: bool,
    /// Human-readable failure message when `success` is false
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreatePlannedWorkoutResult {
    /// Resolved success
    #[must_use]
    pub const fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    /// Resolved failure with a human-readable message
    #[must_use]
    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

/// Typed params for `echo`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EchoParams {
    /// Value to round-trip
    pub value: String,
}
