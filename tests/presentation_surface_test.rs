// ABOUTME: Integration tests for presentation surface traversal and the UI context
// ABOUTME: Covers deterministic topmost resolution and the no-surface condition
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

// Test modules don't need documentation
#![allow(missing_docs)]
// Allow unwrap in tests - tests should panic on failure
#![allow(clippy::unwrap_used)]

mod common;

use workoutkit_bridge::models::PlanSummary;
use workoutkit_bridge::presentation::surface::Surface;
use workoutkit_bridge::presentation::{
    PresentationError, SurfacePresenter, UiContext, WorkoutPresenter,
};

fn summary() -> PlanSummary {
    PlanSummary {
        sport: "running".into(),
        step_count: 3,
        display_name: Some("Tempo".into()),
    }
}

#[test]
fn test_topmost_descends_through_containers() {
    common::init_test_logging();
    // tabs → selected nav → visible detail
    let root = Surface::tabs(
        "main-tabs",
        Surface::navigation("workouts-nav", Surface::view("workout-detail")),
    );
    assert_eq!(root.topmost().name(), "workout-detail");
}

#[test]
fn test_topmost_follows_modal_chain() {
    let root = Surface::view("home").with_presented(
        Surface::view("settings").with_presented(Surface::view("confirmation-sheet")),
    );
    assert_eq!(root.topmost().name(), "confirmation-sheet");
}

#[test]
fn test_topmost_finds_modal_over_container_child() {
    let detail = Surface::view("detail").with_presented(Surface::view("share-sheet"));
    let root = Surface::navigation("nav", detail);
    assert_eq!(root.topmost().name(), "share-sheet");
}

#[test]
fn test_empty_containers_resolve_to_themselves() {
    let root = Surface::NavigationStack {
        name: "empty-nav".into(),
        visible: None,
        presented: None,
    };
    assert_eq!(root.topmost().name(), "empty-nav");
}

#[test]
fn test_empty_container_still_yields_its_modal() {
    let root = Surface::TabContainer {
        name: "tabs".into(),
        selected: None,
        presented: Some(Box::new(Surface::view("onboarding"))),
    };
    assert_eq!(root.topmost().name(), "onboarding");
}

#[test]
fn test_same_tree_always_resolves_to_same_surface() {
    let root = Surface::tabs(
        "tabs",
        Surface::navigation("nav", Surface::view("detail"))
    );
    let first = root.topmost().name().to_owned();
    for _ in 0..10 {
        assert_eq!(root.topmost().name(), first);
    }
}

#[tokio::test]
async fn test_presenter_reports_completion() {
    common::init_test_logging();
    let ui = UiContext::spawn(Some(Surface::navigation(
        "nav",
        Surface::view("workout-list"),
    )));
    let presenter = SurfacePresenter::new(ui);
    assert_eq!(presenter.present(&summary()).await, Ok(()));
}

#[tokio::test]
async fn test_presenter_reports_no_surface() {
    let ui = UiContext::spawn(None);
    let presenter = SurfacePresenter::new(ui);
    assert_eq!(
        presenter.present(&summary()).await,
        Err(PresentationError::NoPresentationSurface)
    );
}

#[tokio::test]
async fn test_presentations_serialize_in_arrival_order() {
    let ui = UiContext::spawn(Some(Surface::view("home")));
    let presenter = SurfacePresenter::new(ui);

    for _ in 0..5 {
        assert_eq!(presenter.present(&summary()).await, Ok(()));
    }
}

#[tokio::test]
async fn test_root_swap_changes_outcome() {
    let ui = UiContext::spawn(Some(Surface::view("home")));
    let presenter = SurfacePresenter::new(ui.clone());
    assert_eq!(presenter.present(&summary()).await, Ok(()));

    ui.set_root(None);
    assert_eq!(
        presenter.present(&summary()).await,
        Err(PresentationError::NoPresentationSurface)
    );
}
