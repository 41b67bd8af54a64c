// ABOUTME: Environment-based configuration for the bridge boundary
// ABOUTME: Owns the presentation handoff timeout policy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Bridge configuration.
//!
//! The composition core is pure and takes no configuration; everything
//! here governs the boundary around it. Values load from environment
//! variables with conservative defaults.

use std::env;
use std::time::Duration;

use crate::logging::LoggingConfig;

/// Environment variable bounding the presentation handoff, in milliseconds.
/// Unset or `0` means the boundary awaits presentation without a limit.
pub const ENV_PRESENTATION_TIMEOUT_MS: &str = "WORKOUTKIT_PRESENTATION_TIMEOUT_MS";

/// Boundary configuration for the bridge handler
#[derive(Debug, Clone, Default)]
pub struct BridgeConfig {
    /// Upper bound on the presentation handoff, if any
    pub presentation_timeout: Option<Duration>,
    /// Logging settings for the embedder to install at startup
    pub logging: LoggingConfig,
}

impl BridgeConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let presentation_timeout = env::var(ENV_PRESENTATION_TIMEOUT_MS)
            .ok()
            .and_then(|raw| raw.parse::<u64>().ok())
            .filter(|ms| *ms > 0)
            .map(Duration::from_millis);

        Self {
            presentation_timeout,
            logging: LoggingConfig::from_env(),
        }
    }

    /// Bound the presentation handoff
    #[must_use]
    pub fn with_presentation_timeout(mut self, limit: Duration) -> Self {
        self.presentation_timeout = Some(limit);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_timeout() {
        assert_eq!(BridgeConfig::default().presentation_timeout, None);
    }

    #[test]
    fn test_with_presentation_timeout() {
        let config = BridgeConfig::default().with_presentation_timeout(Duration::from_secs(5));
        assert_eq!(
            config.presentation_timeout,
            Some(Duration::from_secs(5))
        );
    }
}
