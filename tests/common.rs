// ABOUTME: Shared test utilities and fixture builders for integration tests
// ABOUTME: Provides quiet logging setup and composition builders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project
#![allow(dead_code)]

//! Shared test utilities for `workoutkit_bridge`
//!
//! Common fixture builders to reduce duplication across integration
//! tests.

use serde_json::{json, Value};
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Composition with the given activity type and steps
pub fn composition(activity_type: &str, steps: Value) -> Value {
    json!({
        "activity": {"type": activity_type},
        "steps": steps
    })
}

/// A time goal in seconds
pub fn time_goal(seconds: f64) -> Value {
    json!({"type": "time", "value": seconds, "unit": "seconds"})
}

/// A leaf step with a time goal
pub fn timed_step(kind: &str, seconds: f64) -> Value {
    json!({"kind": kind, "goal": time_goal(seconds)})
}

/// A pace target zone
pub fn pace_target(min: f64, max: f64) -> Value {
    json!({"type": "pace", "min": min, "max": max, "unit": "minutesPerKilometer"})
}

/// A repeat group over the given sequence
pub fn repeat_step(count: i64, sequence: Value) -> Value {
    json!({"kind": "repeat", "count": count, "sequence": sequence})
}
