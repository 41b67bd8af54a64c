// ABOUTME: Wire error code constants for rejected bridge calls
// ABOUTME: Defines JSON-RPC style codes and the shared rejection messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Error codes for rejected calls at the bridge boundary.
//!
//! Validation failures from the composition core are never rejections;
//! they resolve as `{success: false, error}` results. These codes cover
//! transport-level defects and the platform capability gate only.

/// Method not found
pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

/// Invalid parameters
pub const ERROR_INVALID_PARAMS: i32 = -32602;

/// Internal error
pub const ERROR_INTERNAL_ERROR: i32 = -32603;

/// Server error - host platform below the minimum capability version
pub const ERROR_PLATFORM_UNAVAILABLE: i32 = -32000;

/// Common error messages
pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";

/// Invalid parameters message prefix
pub const MSG_INVALID_PARAMS: &str = "Invalid parameters";

/// Internal error message
pub const MSG_INTERNAL_ERROR: &str = "Internal error";
