// ABOUTME: Composition schema constants shared by the step tree parser
// ABOUTME: Names the repeat dispatch kind, depth bound, and nested error-index stride
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Composition schema constants

/// Wire `kind` value that opens a repeat group
pub const KIND_REPEAT: &str = "repeat";

/// Maximum nesting depth at which a repeat group is still recognized.
/// A repeat inside a repeat's sequence is rejected, so the parser's
/// recursion depth is bounded at two levels.
pub const MAX_REPEAT_DEPTH: usize = 1;

/// Stride for composite error-index labels of steps nested inside a
/// repeat sequence: element `j` under outer step `i` is labeled
/// `i * REPEAT_INDEX_STRIDE + j`. Cosmetic, error messages only; labels
/// can collide for sequences longer than the stride and are never used
/// as identifiers.
pub const REPEAT_INDEX_STRIDE: usize = 1000;
