// ABOUTME: Presentation collaborator interface for showing the validated plan
// ABOUTME: Defines the presenter trait, presentation error conditions, and the UI context
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! # Presentation Layer
//!
//! Once validation succeeds, the bridge hands a [`PlanSummary`] to a
//! presenter. Presentation must happen on the UI-owning execution
//! context, so the built-in [`SurfacePresenter`] forwards the summary
//! to a dedicated task over a channel and awaits the reply; the handoff
//! is asynchronous relative to the validation call, whose own result
//! never depends on presentation internals.
//!
//! The surface to present on is found by deterministic traversal from
//! the active window root ([`surface::Surface::topmost`]).

mod presenter;
pub mod surface;

pub use presenter::{SurfacePresenter, UiContext};

use async_trait::async_trait;
use thiserror::Error;

use crate::errors::ErrorCode;
use crate::models::PlanSummary;

/// Conditions owned by the presentation collaborator.
///
/// Neither is a validation error: both mean the composition was valid
/// but the environment could not show it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PresentationError {
    /// No surface could be located from the active window root
    #[error("Unable to find a presentation surface")]
    NoPresentationSurface,
    /// The presentation interaction failed after a surface was found
    #[error("Failed to present workout preview")]
    PresentationFailed,
}

impl PresentationError {
    /// Stable code for structured logging and wire payloads
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::NoPresentationSurface => ErrorCode::NoPresentationSurface,
            Self::PresentationFailed => ErrorCode::PresentationFailed,
        }
    }
}

/// Collaborator that shows a validated plan to the user.
///
/// Implementations must run the actual presentation on the UI-owning
/// context; callers only await the outcome.
#[async_trait]
pub trait WorkoutPresenter: Send + Sync {
    /// Present the plan summary, reporting completion or the failing
    /// presentation condition.
    async fn present(&self, summary: &PlanSummary) -> Result<(), PresentationError>;
}
