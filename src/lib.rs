// ABOUTME: Main library entry point for the Workoutkit bridge
// ABOUTME: Validates workout compositions and presents planned workouts on the host platform
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

#![deny(unsafe_code)]

//! # Workoutkit Bridge
//!
//! A cross-runtime bridge exposing declarative workout compositions to a
//! native scheduling framework. Callers submit an untyped composition
//! (activity, ordered steps with goals/targets/alerts, optional repeat
//! groups); the bridge validates it against the declared schema,
//! translates it into a typed plan, presents the result on the host UI,
//! and reports success or a structured error.
//!
//! ## Architecture
//!
//! - **Composition core** ([`composition`]): pure validator and
//!   step-tree translator, the only component with real logic. No I/O,
//!   no shared state, safe to call concurrently.
//! - **Bridge boundary** ([`bridge`]): method dispatch and the
//!   resolved-vs-rejected error policy.
//! - **Collaborator seams** ([`platform`], [`presentation`]): the
//!   capability gate and the UI presentation routine, behind traits.
//!
//! ## Error policy
//!
//! Validation failures resolve as `{success: false, error}` results;
//! transport defects and an unsupported host platform reject the call.
//! The taxonomy is closed and every member is terminal ([`errors`]).
//!
//! ## Example
//!
//! ```rust
//! use serde_json::json;
//! use workoutkit_bridge::composition::translate_composition;
//!
//! let composition = json!({
//!     "activity": {"type": "running"},
//!     "steps": [
//!         {"kind": "warmup", "goal": {"type": "time", "value": 300, "unit": "seconds"}}
//!     ]
//! });
//!
//! let plan = translate_composition("running", &composition).expect("valid composition");
//! assert_eq!(plan.step_count(), 1);
//! ```

/// Bridge boundary: wire protocol and method dispatch
pub mod bridge;

/// Composition validator and step-tree translator
pub mod composition;

/// Environment-based boundary configuration
pub mod config;

/// Application constants organized by domain
pub mod constants;

/// Closed error taxonomy and stable error codes
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Typed domain model for validated plans
pub mod models;

/// Platform capability gate
pub mod platform;

/// UI presentation collaborator and surface traversal
pub mod presentation;
