//! Ordered focus scope for a container subtree.

use crate::host::{FocusCandidate, FocusHost};

#[derive(Debug, Clone, PartialEq)]
/// Snapshot of the tabbable elements inside a container, in sequential focus order.
///
/// Scopes are recomputed whenever they are needed and never cached across dialog sessions.
pub struct FocusScope<N> {
    container: N,
    tabbable: Vec<N>,
}

impl<N: Clone + PartialEq> FocusScope<N> {
    /// Queries `host` for the current scope of `container`.
    pub fn collect<H>(host: &H, container: &N) -> Self
    where
        H: FocusHost<Node = N>,
    {
        Self::from_candidates(container.clone(), host.candidates(container))
    }

    /// Builds a scope from document-ordered candidates.
    ///
    /// Elements with a positive tab index come first in ascending order, then `tabindex=0`
    /// elements in document order. Negative tab indexes are focusable but not tabbable.
    pub fn from_candidates(container: N, candidates: Vec<FocusCandidate<N>>) -> Self {
        let mut ordered: Vec<(usize, FocusCandidate<N>)> = candidates
            .into_iter()
            .filter(|candidate| candidate.tab_index >= 0)
            .enumerate()
            .collect();
        ordered.sort_by_key(|(position, candidate)| {
            let explicit = candidate.tab_index > 0;
            let rank = if explicit { candidate.tab_index } else { 0 };
            (!explicit, rank, *position)
        });
        let tabbable = ordered
            .into_iter()
            .map(|(_, candidate)| candidate.node)
            .collect();
        Self {
            container,
            tabbable,
        }
    }

    /// Container element that owns the scope.
    pub fn container(&self) -> &N {
        &self.container
    }

    /// Tabbable elements in sequential focus order.
    pub fn tabbable(&self) -> &[N] {
        &self.tabbable
    }

    /// Returns `true` when the container has no tabbable descendants.
    pub fn is_empty(&self) -> bool {
        self.tabbable.is_empty()
    }

    /// First tabbable element.
    pub fn first(&self) -> Option<&N> {
        self.tabbable.first()
    }

    /// Last tabbable element.
    pub fn last(&self) -> Option<&N> {
        self.tabbable.last()
    }

    /// Element after `from`, wrapping to the first.
    ///
    /// Nodes outside the tab order (the container, negative tab indexes) continue from the
    /// first element.
    pub fn next(&self, from: &N) -> Option<&N> {
        match self.position(from) {
            Some(index) => self.tabbable.get((index + 1) % self.tabbable.len()),
            None => self.first(),
        }
    }

    /// Element before `from`, wrapping to the last.
    pub fn previous(&self, from: &N) -> Option<&N> {
        match self.position(from) {
            Some(0) => self.last(),
            Some(index) => self.tabbable.get(index - 1),
            None => self.last(),
        }
    }

    /// Returns whether `node` is the container or one of its tabbable elements.
    pub fn contains(&self, node: &N) -> bool {
        *node == self.container || self.position(node).is_some()
    }

    fn position(&self, node: &N) -> Option<usize> {
        self.tabbable.iter().position(|candidate| candidate == node)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn scope(candidates: &[(&'static str, i32)]) -> FocusScope<&'static str> {
        FocusScope::from_candidates(
            "panel",
            candidates
                .iter()
                .map(|(node, tab_index)| FocusCandidate::new(*node, *tab_index))
                .collect(),
        )
    }

    #[test]
    fn positive_tab_indexes_lead_sequential_order() {
        let candidates = [("a", 0), ("b", 2), ("c", -1), ("d", 1), ("e", 0), ("f", 2)];
        let scope = scope(&candidates);

        assert_eq!(scope.tabbable(), &["d", "b", "f", "a", "e"]);
    }

    #[test]
    fn next_and_previous_wrap_at_the_edges() {
        let scope = scope(&[("close", 0), ("cancel", 0), ("apply", 0)]);

        assert_eq!(scope.next(&"apply"), Some(&"close"));
        assert_eq!(scope.next(&"close"), Some(&"cancel"));
        assert_eq!(scope.previous(&"close"), Some(&"apply"));
        assert_eq!(scope.previous(&"apply"), Some(&"cancel"));
    }

    #[test]
    fn container_and_untabbable_nodes_continue_from_edges() {
        let scope = scope(&[("skip", -1), ("first", 0), ("last", 0)]);

        assert_eq!(scope.next(&"panel"), Some(&"first"));
        assert_eq!(scope.previous(&"skip"), Some(&"last"));
        assert!(scope.contains(&"panel"));
        assert!(!scope.contains(&"skip"));
    }

    #[test]
    fn empty_scope_has_no_edges() {
        let scope = scope(&[]);

        assert!(scope.is_empty());
        assert_eq!(scope.next(&"panel"), None);
        assert_eq!(scope.previous(&"panel"), None);
    }
}
