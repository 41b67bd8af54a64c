// ABOUTME: Presentation surface tree and the deterministic topmost-surface traversal
// ABOUTME: Models navigation stacks, tab containers, and modal presentation chains
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Workoutkit Bridge Project

//! Presentation surface tree.
//!
//! The host UI is modeled as a tree of surfaces hanging off the active
//! window root. Finding where to present descends deterministically:
//! a navigation stack yields its currently visible child, a tab
//! container its currently selected child, and any surface with a modal
//! presented on top yields the modal; the descent repeats until no rule
//! applies. The same root therefore always resolves to the same
//! topmost surface.

/// One presentable surface in the host UI hierarchy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Surface {
    /// Plain content surface, possibly with a modal presented on top
    View {
        /// Identifier used in logs and tests
        name: String,
        /// Modal presented over this surface, if any
        presented: Option<Box<Surface>>,
    },
    /// Navigation stack container
    NavigationStack {
        /// Identifier used in logs and tests
        name: String,
        /// Currently visible child of the stack
        visible: Option<Box<Surface>>,
        /// Modal presented over the stack itself, if any
        presented: Option<Box<Surface>>,
    },
    /// Tab container
    TabContainer {
        /// Identifier used in logs and tests
        name: String,
        /// Currently selected tab child
        selected: Option<Box<Surface>>,
        /// Modal presented over the container itself, if any
        presented: Option<Box<Surface>>,
    },
}

impl Surface {
    /// Plain content surface with no modal
    #[must_use]
    pub fn view(name: impl Into<String>) -> Self {
        Self::View {
            name: name.into(),
            presented: None,
        }
    }

    /// Navigation stack showing the given child
    #[must_use]
    pub fn navigation(name: impl Into<String>, visible: Surface) -> Self {
        Self::NavigationStack {
            name: name.into(),
            visible: Some(Box::new(visible)),
            presented: None,
        }
    }

    /// Tab container with the given tab selected
    #[must_use]
    pub fn tabs(name: impl Into<String>, selected: Surface) -> Self {
        Self::TabContainer {
            name: name.into(),
            selected: Some(Box::new(selected)),
            presented: None,
        }
    }

    /// Present a modal on top of this surface
    #[must_use]
    pub fn with_presented(mut self, modal: Surface) -> Self {
        let slot = match &mut self {
            Self::View { presented, .. }
            | Self::NavigationStack { presented, .. }
            | Self::TabContainer { presented, .. } => presented,
        };
        *slot = Some(Box::new(modal));
        self
    }

    /// Identifier of this surface
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::View { name, .. }
            | Self::NavigationStack { name, .. }
            | Self::TabContainer { name, .. } => name,
        }
    }

    /// Next surface to descend into, if any descent rule applies.
    ///
    /// Container children take precedence over a modal presented on the
    /// container itself; a container with neither yields its modal.
    fn descend(&self) -> Option<&Surface> {
        match self {
            Self::NavigationStack {
                visible: Some(child),
                ..
            }
            | Self::TabContainer {
                selected: Some(child),
                ..
            } => Some(child),
            Self::View {
                presented: Some(modal),
                ..
            }
            | Self::NavigationStack {
                visible: None,
                presented: Some(modal),
                ..
            }
            | Self::TabContainer {
                selected: None,
                presented: Some(modal),
                ..
            } => Some(modal),
            _ => None,
        }
    }

    /// Topmost currently presented surface reachable from this root
    #[must_use]
    pub fn topmost(&self) -> &Surface {
        let mut current = self;
        while let Some(next) = current.descend() {
            current = next;
        }
        current
    }
}
