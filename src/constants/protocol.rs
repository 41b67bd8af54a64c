// ABOUTME: Bridge protocol identification and method name constants
// ABOUTME: Names the plugin surface and the methods the dispatcher recognizes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Bridge protocol constants

/// Plugin name registered on the far side of the runtime boundary
pub const PLUGIN_NAME: &str = "Workoutkit";

/// Current plugin version
pub const PLUGIN_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Validate a composition and present the resulting planned workout
pub const METHOD_CREATE_PLANNED_WORKOUT: &str = "createPlannedWorkout";

/// Round-trip a value across the bridge, for connectivity checks
pub const METHOD_ECHO: &str = "echo";
