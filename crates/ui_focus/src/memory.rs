//! In-memory focus host used by native tests and headless consumers.

use std::{cell::RefCell, rc::Rc};

use crate::host::{FocusCandidate, FocusHost, FocusTarget};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Handle to an element owned by a [`MemoryFocusHost`].
pub struct MemoryNode(usize);

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Attributes for an element appended to a [`MemoryFocusHost`].
pub struct ElementSpec {
    /// DOM `id` attribute.
    pub dom_id: Option<String>,
    /// Effective tab index. `None` means the element is not focusable at all.
    pub tab_index: Option<i32>,
    /// Disabled form control.
    pub disabled: bool,
    /// Rendered with `display: none`.
    pub hidden: bool,
}

impl ElementSpec {
    /// Non-focusable element (paragraph, wrapper, heading).
    pub fn plain() -> Self {
        Self::default()
    }

    /// Natively focusable control such as a button or input.
    pub fn button() -> Self {
        Self {
            tab_index: Some(0),
            ..Self::default()
        }
    }

    /// Element with an explicit `tabindex` attribute.
    pub fn tab_index(tab_index: i32) -> Self {
        Self {
            tab_index: Some(tab_index),
            ..Self::default()
        }
    }

    /// Sets the DOM id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.dom_id = Some(id.into());
        self
    }

    /// Marks the element disabled.
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Marks the element hidden.
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }
}

#[derive(Debug)]
struct MemoryElement {
    spec: ElementSpec,
    parent: Option<usize>,
    children: Vec<usize>,
    connected: bool,
}

#[derive(Debug)]
struct MemoryTree {
    elements: Vec<MemoryElement>,
    active: Option<usize>,
    focus_calls: usize,
}

impl MemoryTree {
    fn element(&self, node: MemoryNode) -> Option<&MemoryElement> {
        self.elements.get(node.0)
    }

    fn rendered(&self, index: usize) -> bool {
        let mut cursor = Some(index);
        while let Some(current) = cursor {
            let Some(element) = self.elements.get(current) else {
                return false;
            };
            if element.spec.hidden || !element.connected {
                return false;
            }
            cursor = element.parent;
        }
        true
    }

    fn collect(&self, index: usize, out: &mut Vec<FocusCandidate<MemoryNode>>) {
        let Some(element) = self.elements.get(index) else {
            return;
        };
        for &child in &element.children {
            let Some(child_element) = self.elements.get(child) else {
                continue;
            };
            if child_element.spec.hidden || !child_element.connected {
                continue;
            }
            if let Some(tab_index) = child_element.spec.tab_index {
                if !child_element.spec.disabled {
                    out.push(FocusCandidate::new(MemoryNode(child), tab_index));
                }
            }
            self.collect(child, out);
        }
    }
}

#[derive(Debug, Clone)]
/// Element tree with a single focus cursor.
///
/// Clones share the same tree, mirroring how every DOM handle observes one document.
pub struct MemoryFocusHost {
    inner: Rc<RefCell<MemoryTree>>,
}

impl Default for MemoryFocusHost {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryFocusHost {
    /// Creates a document containing only a body element.
    pub fn new() -> Self {
        let body = MemoryElement {
            spec: ElementSpec::plain(),
            parent: None,
            children: Vec::new(),
            connected: true,
        };
        Self {
            inner: Rc::new(RefCell::new(MemoryTree {
                elements: vec![body],
                active: None,
                focus_calls: 0,
            })),
        }
    }

    /// Returns the body element.
    pub fn body(&self) -> MemoryNode {
        MemoryNode(0)
    }

    /// Appends a connected child element under `parent`.
    pub fn append(&self, parent: MemoryNode, spec: ElementSpec) -> MemoryNode {
        let mut tree = self.inner.borrow_mut();
        let connected = tree
            .elements
            .get(parent.0)
            .map(|element| element.connected)
            .unwrap_or(false);
        let index = tree.elements.len();
        tree.elements.push(MemoryElement {
            spec,
            parent: Some(parent.0),
            children: Vec::new(),
            connected,
        });
        if let Some(parent_element) = tree.elements.get_mut(parent.0) {
            parent_element.children.push(index);
        }
        MemoryNode(index)
    }

    /// Unmounts `node` and its subtree.
    ///
    /// Focus held inside the subtree is dropped, as a browser does when the focused element is
    /// removed.
    pub fn detach(&self, node: MemoryNode) {
        let mut tree = self.inner.borrow_mut();
        let mut pending = vec![node.0];
        let mut removed = Vec::new();
        while let Some(index) = pending.pop() {
            let Some(element) = tree.elements.get_mut(index) else {
                continue;
            };
            element.connected = false;
            pending.extend(element.children.iter().copied());
            removed.push(index);
        }
        if let Some(parent) = tree.elements.get(node.0).and_then(|element| element.parent) {
            if let Some(parent_element) = tree.elements.get_mut(parent) {
                parent_element.children.retain(|child| *child != node.0);
            }
        }
        if tree.active.is_some_and(|active| removed.contains(&active)) {
            tree.active = None;
        }
    }

    /// Toggles `display: none` on an element.
    pub fn set_hidden(&self, node: MemoryNode, hidden: bool) {
        let mut tree = self.inner.borrow_mut();
        if let Some(element) = tree.elements.get_mut(node.0) {
            element.spec.hidden = hidden;
        }
    }

    /// Element currently holding focus.
    pub fn focused(&self) -> Option<MemoryNode> {
        self.inner.borrow().active.map(MemoryNode)
    }

    /// Number of successful focus moves since creation.
    pub fn focus_calls(&self) -> usize {
        self.inner.borrow().focus_calls
    }
}

impl FocusHost for MemoryFocusHost {
    type Node = MemoryNode;

    fn active_element(&self) -> Option<MemoryNode> {
        self.focused()
    }

    fn focus(&self, node: &MemoryNode) -> bool {
        let mut tree = self.inner.borrow_mut();
        let focusable = tree
            .element(*node)
            .map(|element| element.spec.tab_index.is_some() && !element.spec.disabled)
            .unwrap_or(false);
        if !focusable || !tree.rendered(node.0) {
            return false;
        }
        tree.active = Some(node.0);
        tree.focus_calls += 1;
        true
    }

    fn contains(&self, container: &MemoryNode, node: &MemoryNode) -> bool {
        let tree = self.inner.borrow();
        let mut cursor = Some(node.0);
        while let Some(current) = cursor {
            if current == container.0 {
                return true;
            }
            cursor = tree
                .elements
                .get(current)
                .and_then(|element| element.parent);
        }
        false
    }

    fn is_connected(&self, node: &MemoryNode) -> bool {
        self.inner
            .borrow()
            .element(*node)
            .map(|element| element.connected)
            .unwrap_or(false)
    }

    fn candidates(&self, container: &MemoryNode) -> Vec<FocusCandidate<MemoryNode>> {
        let tree = self.inner.borrow();
        let mut out = Vec::new();
        if tree.rendered(container.0) {
            tree.collect(container.0, &mut out);
        }
        out
    }

    fn resolve(&self, target: &FocusTarget) -> Option<MemoryNode> {
        let FocusTarget::ElementId(id) = target;
        let tree = self.inner.borrow();
        tree.elements
            .iter()
            .position(|element| element.connected && element.spec.dom_id.as_deref() == Some(id))
            .map(MemoryNode)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn candidates_skip_disabled_hidden_and_plain_elements() {
        let host = MemoryFocusHost::new();
        let panel = host.append(host.body(), ElementSpec::tab_index(-1));
        let first = host.append(panel, ElementSpec::button());
        host.append(panel, ElementSpec::button().disabled());
        host.append(panel, ElementSpec::plain());
        let hidden_group = host.append(panel, ElementSpec::plain().hidden());
        host.append(hidden_group, ElementSpec::button());
        let last = host.append(panel, ElementSpec::tab_index(3));

        let nodes: Vec<_> = host
            .candidates(&panel)
            .into_iter()
            .map(|candidate| candidate.node)
            .collect();

        assert_eq!(nodes, vec![first, last]);
    }

    #[test]
    fn detaching_focused_subtree_drops_focus() {
        let host = MemoryFocusHost::new();
        let panel = host.append(host.body(), ElementSpec::tab_index(-1));
        let button = host.append(panel, ElementSpec::button());
        assert!(host.focus(&button));

        host.detach(panel);

        assert_eq!(host.focused(), None);
        assert!(!host.is_connected(&button));
        assert!(!host.focus(&button));
    }

    #[test]
    fn resolve_ignores_detached_elements() {
        let host = MemoryFocusHost::new();
        let button = host.append(host.body(), ElementSpec::button().with_id("save"));
        assert_eq!(host.resolve(&FocusTarget::id("save")), Some(button));

        host.detach(button);

        assert_eq!(host.resolve(&FocusTarget::id("save")), None);
    }
}
