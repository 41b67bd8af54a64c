// ABOUTME: Method dispatch for plugin calls arriving over the bridge
// ABOUTME: Runs the capability gate, the composition core, and the presentation handoff
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Bridge call handlers.
//!
//! `createPlannedWorkout` runs in three stages: the platform capability
//! gate (failure rejects the call before any validation), the pure
//! composition core (failure resolves as `{success: false, error}`),
//! and the presentation handoff (failure also resolves as
//! `{success: false, error}`, since the environment could not show a
//! plan that was itself valid). The boundary owns the timeout policy around
//! presentation; the core itself has nothing to time out.

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::protocol::{
    CreatePlannedWorkoutParams, CreatePlannedWorkoutResult, EchoParams, PluginRequest,
    PluginResponse,
};
use crate::composition;
use crate::config::BridgeConfig;
use crate::constants::errors::{
    ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_METHOD_NOT_FOUND,
    ERROR_PLATFORM_UNAVAILABLE, MSG_INTERNAL_ERROR, MSG_INVALID_PARAMS, MSG_METHOD_NOT_FOUND,
};
use crate::constants::protocol::{
    METHOD_CREATE_PLANNED_WORKOUT, METHOD_ECHO, PLUGIN_NAME, PLUGIN_VERSION,
};
use crate::platform::PlatformGate;
use crate::presentation::{PresentationError, WorkoutPresenter};

/// Default id for responses to requests that did not carry one
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

/// Dispatches plugin calls to their handlers
pub struct BridgeHandler {
    platform: Arc<dyn PlatformGate>,
    presenter: Arc<dyn WorkoutPresenter>,
    config: BridgeConfig,
}

impl BridgeHandler {
    /// Create a handler wired to the host's capability gate and presenter
    #[must_use]
    pub fn new(
        platform: Arc<dyn PlatformGate>,
        presenter: Arc<dyn WorkoutPresenter>,
        config: BridgeConfig,
    ) -> Self {
        debug!(
            plugin = PLUGIN_NAME,
            version = PLUGIN_VERSION,
            "bridge handler initialized"
        );
        Self {
            platform,
            presenter,
            config,
        }
    }

    /// Handle one plugin call.
    ///
    /// Unknown methods are rejected with the method-not-found code.
    pub async fn handle(&self, request: PluginRequest) -> PluginResponse {
        let correlation_id = Uuid::new_v4();
        debug!(
            method = %request.method,
            request_id = ?request.id,
            %correlation_id,
            "plugin call received"
        );

        match request.method.as_str() {
            METHOD_CREATE_PLANNED_WORKOUT => self.handle_create_planned_workout(request).await,
            METHOD_ECHO => Self::handle_echo(request),
            other => {
                warn!(method = %other, "unknown plugin method");
                let id = request.id.unwrap_or_else(default_request_id);
                PluginResponse::error(
                    Some(id),
                    ERROR_METHOD_NOT_FOUND,
                    format!("{MSG_METHOD_NOT_FOUND}: {other}"),
                )
            }
        }
    }

    /// Validate a composition, then hand the plan summary to the presenter.
    async fn handle_create_planned_workout(&self, request: PluginRequest) -> PluginResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);

        // Capability gate runs before anything reaches the validator.
        if let Some(condition) = self.platform.unavailable() {
            warn!(actual = %condition.actual, "planned workouts unavailable on this host");
            return PluginResponse::error(
                Some(request_id),
                ERROR_PLATFORM_UNAVAILABLE,
                condition.to_string(),
            );
        }

        let params = match request.params {
            Some(params) => match serde_json::from_value::<CreatePlannedWorkoutParams>(params) {
                Ok(params) => params,
                Err(err) => {
                    return PluginResponse::error(
                        Some(request_id),
                        ERROR_INVALID_PARAMS,
                        format!("{MSG_INVALID_PARAMS}: {err}"),
                    );
                }
            },
            None => {
                return PluginResponse::error(
                    Some(request_id),
                    ERROR_INVALID_PARAMS,
                    format!("{MSG_INVALID_PARAMS}: missing params"),
                );
            }
        };

        let sport = params.sport.as_str();
        let plan = match composition::translate_composition(sport, &params.composition) {
            Ok(plan) => plan,
            Err(err) => {
                debug!(code = ?err.code(), %err, "workout composition rejected");
                return Self::resolve(request_id, &CreatePlannedWorkoutResult::failed(err.to_string()));
            }
        };

        info!(
            sport = %plan.sport,
            steps = plan.step_count(),
            display_name = plan.display_name.as_deref().unwrap_or_default(),
            "workout composition validated"
        );

        match self.present(&plan.summary()).await {
            Ok(()) => Self::resolve(request_id, &CreatePlannedWorkoutResult::ok()),
            Err(err) => {
                warn!(code = ?err.code(), %err, "workout preview not presented");
                Self::resolve(request_id, &CreatePlannedWorkoutResult::failed(err.to_string()))
            }
        }
    }

    /// Hand the summary to the presenter under the configured timeout policy.
    async fn present(
        &self,
        summary: &crate::models::PlanSummary,
    ) -> Result<(), PresentationError> {
        match self.config.presentation_timeout {
            Some(limit) => match tokio::time::timeout(limit, self.presenter.present(summary)).await
            {
                Ok(outcome) => outcome,
                Err(_) => {
                    warn!(timeout_ms = limit.as_millis() as u64, "presentation timed out");
                    Err(PresentationError::PresentationFailed)
                }
            },
            None => self.presenter.present(summary).await,
        }
    }

    /// Round-trip a value, for connectivity checks.
    fn handle_echo(request: PluginRequest) -> PluginResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        let params = request
            .params
            .and_then(|params| serde_json::from_value::<EchoParams>(params).ok());

        match params {
            Some(params) => {
                PluginResponse::success(Some(request_id), json!({ "value": params.value }))
            }
            None => PluginResponse::error(
                Some(request_id),
                ERROR_INVALID_PARAMS,
                format!("{MSG_INVALID_PARAMS}: expected {{value}}"),
            ),
        }
    }

    /// Serialize a resolved result into the response envelope.
    fn resolve(request_id: Value, result: &CreatePlannedWorkoutResult) -> PluginResponse {
        match serde_json::to_value(result) {
            Ok(value) => PluginResponse::success(Some(request_id), value),
            Err(_) => {
                PluginResponse::error(Some(request_id), ERROR_INTERNAL_ERROR, MSG_INTERNAL_ERROR)
            }
        }
    }
}
