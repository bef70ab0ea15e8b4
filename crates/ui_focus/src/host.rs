//! Host seam for native focus and element-query APIs.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// Caller-supplied reference to an element that should receive focus.
pub enum FocusTarget {
    /// Element addressed by its DOM `id` attribute.
    ElementId(String),
}

impl FocusTarget {
    /// Builds a target addressing the element with DOM id `id`.
    pub fn id(id: impl Into<String>) -> Self {
        Self::ElementId(id.into())
    }
}

impl From<&str> for FocusTarget {
    fn from(value: &str) -> Self {
        Self::id(value)
    }
}

impl From<String> for FocusTarget {
    fn from(value: String) -> Self {
        Self::ElementId(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A focusable descendant reported by [`FocusHost::candidates`].
pub struct FocusCandidate<N> {
    /// Host element handle.
    pub node: N,
    /// Effective `tabIndex` of the element.
    pub tab_index: i32,
}

impl<N> FocusCandidate<N> {
    /// Creates a candidate.
    pub fn new(node: N, tab_index: i32) -> Self {
        Self { node, tab_index }
    }
}

/// Native focus APIs used by the focus trap.
///
/// Implementations are expected to be cheap handles; every method takes `&self` so a host can be
/// shared by the event handlers of several nested dialogs.
pub trait FocusHost {
    /// Element handle type.
    type Node: Clone + PartialEq + fmt::Debug;

    /// Returns the element that currently holds focus, if any.
    fn active_element(&self) -> Option<Self::Node>;

    /// Moves focus to `node` and reports whether it landed there.
    fn focus(&self, node: &Self::Node) -> bool;

    /// Returns whether `node` is `container` or one of its descendants.
    fn contains(&self, container: &Self::Node, node: &Self::Node) -> bool;

    /// Returns whether `node` is attached to the document.
    fn is_connected(&self, node: &Self::Node) -> bool;

    /// Lists focusable descendants of `container` in document order.
    ///
    /// Disabled and hidden elements are excluded. The container itself is never listed.
    fn candidates(&self, container: &Self::Node) -> Vec<FocusCandidate<Self::Node>>;

    /// Resolves a caller focus reference to an attached element.
    fn resolve(&self, target: &FocusTarget) -> Option<Self::Node>;
}
