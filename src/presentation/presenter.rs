// ABOUTME: UI execution context and the surface-based presenter implementation
// ABOUTME: Hands presentation work to a dedicated task and awaits its reply
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Surface presenter bound to a single UI execution context.
//!
//! The UI context is a dedicated task owning the window root; all
//! presentation runs there, serialized in arrival order. Callers hand
//! work over via an unbounded channel and receive the outcome on a
//! oneshot reply. A context whose task has shut down reports
//! `PresentationFailed` rather than panicking.

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

use super::surface::Surface;
use super::{PresentationError, WorkoutPresenter};
use crate::models::PlanSummary;

/// Work items delivered to the UI task
enum UiCommand {
    /// Present a plan summary on the topmost surface
    Present {
        summary: PlanSummary,
        reply: oneshot::Sender<Result<(), PresentationError>>,
    },
    /// Replace the active window root
    SetRoot { root: Option<Surface> },
}

/// Handle to the UI-owning task.
///
/// Cloning the handle shares the same underlying context; dropping all
/// clones shuts the task down.
#[derive(Clone)]
pub struct UiContext {
    tx: mpsc::UnboundedSender<UiCommand>,
}

impl UiContext {
    /// Spawn a UI context owning the given window root.
    ///
    /// Must be called from within a tokio runtime.
    #[must_use]
    pub fn spawn(root: Option<Surface>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        tokio::spawn(ui_loop(root, rx));
        Self { tx }
    }

    /// Replace the window root the context presents on.
    ///
    /// Takes effect for commands enqueued after this one.
    pub fn set_root(&self, root: Option<Surface>) {
        if self.tx.send(UiCommand::SetRoot { root }).is_err() {
            warn!("UI context is gone; root update dropped");
        }
    }

    fn submit(
        &self,
        summary: PlanSummary,
    ) -> Result<oneshot::Receiver<Result<(), PresentationError>>, PresentationError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(UiCommand::Present {
                summary,
                reply: reply_tx,
            })
            .map_err(|_| PresentationError::PresentationFailed)?;
        Ok(reply_rx)
    }
}

/// Single consumer loop running on the UI task
async fn ui_loop(mut root: Option<Surface>, mut rx: mpsc::UnboundedReceiver<UiCommand>) {
    while let Some(command) = rx.recv().await {
        match command {
            UiCommand::Present { summary, reply } => {
                let outcome = present_on(root.as_ref(), &summary);
                if reply.send(outcome).is_err() {
                    debug!("presentation caller went away before the reply");
                }
            }
            UiCommand::SetRoot { root: next } => root = next,
        }
    }
}

/// Locate the topmost surface and show the preview there
fn present_on(root: Option<&Surface>, summary: &PlanSummary) -> Result<(), PresentationError> {
    let Some(root) = root else {
        warn!("no window root; cannot present workout preview");
        return Err(PresentationError::NoPresentationSurface);
    };

    let top = root.topmost();
    info!(
        surface = top.name(),
        sport = %summary.sport,
        steps = summary.step_count,
        "{}",
        summary.preview_message()
    );
    Ok(())
}

/// Presenter that shows plan previews on a [`UiContext`]
pub struct SurfacePresenter {
    ui: UiContext,
}

impl SurfacePresenter {
    /// Presenter bound to the given UI context
    #[must_use]
    pub fn new(ui: UiContext) -> Self {
        Self { ui }
    }
}

#[async_trait]
impl WorkoutPresenter for SurfacePresenter {
    async fn present(&self, summary: &PlanSummary) -> Result<(), PresentationError> {
        let reply = self.ui.submit(summary.clone())?;
        reply
            .await
            .map_err(|_| PresentationError::PresentationFailed)?
    }
}
