// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups protocol, schema, and error-code constants into focused submodules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Constants module
//!
//! Application constants organized by domain: bridge protocol
//! identification, composition schema details, and wire error codes.

pub mod errors;
pub mod protocol;
pub mod schema;

// Re-export commonly used items for easier access
pub use errors::*;
pub use protocol::*;
pub use schema::*;
