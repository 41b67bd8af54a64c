// ABOUTME: Bridge boundary carrying untyped payloads across the runtime boundary
// ABOUTME: Declares the wire protocol types and the method dispatch handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! # Bridge Boundary
//!
//! The call surface the far runtime invokes. A [`protocol::PluginRequest`]
//! names a method and carries untyped params; the handler dispatches,
//! runs the capability gate and the composition core, and marshals the
//! outcome back as a [`protocol::PluginResponse`].
//!
//! Error surfacing is a deliberate policy split: core-taxonomy
//! validation failures resolve as `{success: false, error}` results,
//! while transport defects (unknown method, malformed params) and the
//! platform capability gate reject the call outright.

pub mod handlers;
pub mod protocol;

pub use handlers::BridgeHandler;
pub use protocol::{
    CreatePlannedWorkoutParams, CreatePlannedWorkoutResult, PluginError, PluginRequest,
    PluginResponse,
};
