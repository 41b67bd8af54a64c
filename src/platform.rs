// ABOUTME: Platform capability gate checked before the composition core runs
// ABOUTME: Defines the host OS version type, the minimum requirement, and the gate trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! # Platform Capability Gate
//!
//! Planned workouts require a minimum host OS version. The gate runs at
//! the bridge boundary before the validator; a failing host produces a
//! rejected call (the distinct "platform unavailable" condition), never
//! one of the core's validation errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::errors::ErrorCode;

/// Minimum host OS version that supports planned workouts
pub const MIN_PLANNED_WORKOUT_OS: OsVersion = OsVersion::new(17, 0);

/// Host operating system version as a major.minor pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OsVersion {
    /// Major version component
    pub major: u32,
    /// Minor version component
    pub minor: u32,
}

impl OsVersion {
    /// Create a version from major and minor components
    #[must_use]
    pub const fn new(major: u32, minor: u32) -> Self {
        Self { major, minor }
    }
}

impl fmt::Display for OsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Capability condition reported when the host is below the minimum.
///
/// Owned by the gate, not the composition core: the bridge surfaces it
/// as a rejected call before any validation runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Planned workouts require OS {required} or later; host reports {actual}")]
pub struct PlatformUnavailable {
    /// Minimum version the feature needs
    pub required: OsVersion,
    /// Version the host reported
    pub actual: OsVersion,
}

impl PlatformUnavailable {
    /// Stable code for structured logging and wire payloads
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        ErrorCode::PlatformUnavailable
    }
}

/// Host capability description consulted by the bridge.
///
/// Implementations report the OS version of the runtime actually hosting
/// the native scheduling framework; the default check compares it
/// against [`MIN_PLANNED_WORKOUT_OS`].
pub trait PlatformGate: Send + Sync {
    /// OS version the host reports
    fn os_version(&self) -> OsVersion;

    /// Whether planned workouts are available on this host
    fn supports_planned_workouts(&self) -> bool {
        self.os_version() >= MIN_PLANNED_WORKOUT_OS
    }

    /// The capability condition for this host, if it fails the gate
    fn unavailable(&self) -> Option<PlatformUnavailable> {
        if self.supports_planned_workouts() {
            None
        } else {
            Some(PlatformUnavailable {
                required: MIN_PLANNED_WORKOUT_OS,
                actual: self.os_version(),
            })
        }
    }
}

/// Fixed host description, for embedders that detect the version once
/// at startup and for tests
#[derive(Debug, Clone, Copy)]
pub struct StaticPlatform {
    version: OsVersion,
}

impl StaticPlatform {
    /// Describe a host running the given OS version
    #[must_use]
    pub const fn new(version: OsVersion) -> Self {
        Self { version }
    }
}

impl PlatformGate for StaticPlatform {
    fn os_version(&self) -> OsVersion {
        self.version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_ordering() {
        assert!(OsVersion::new(17, 0) >= MIN_PLANNED_WORKOUT_OS);
        assert!(OsVersion::new(17, 4) > OsVersion::new(17, 0));
        assert!(OsVersion::new(16, 7) < MIN_PLANNED_WORKOUT_OS);
        assert!(OsVersion::new(18, 0) > OsVersion::new(17, 9));
    }

    #[test]
    fn test_gate_passes_at_minimum() {
        let host = StaticPlatform::new(OsVersion::new(17, 0));
        assert!(host.supports_planned_workouts());
        assert!(host.unavailable().is_none());
    }

    #[test]
    fn test_gate_rejects_below_minimum() {
        let host = StaticPlatform::new(OsVersion::new(16, 7));
        let condition = host.unavailable().unwrap();
        assert_eq!(condition.code(), ErrorCode::PlatformUnavailable);
        assert_eq!(
            condition.to_string(),
            "Planned workouts require OS 17.0 or later; host reports 16.7"
        );
    }
}
