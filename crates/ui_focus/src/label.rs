//! Opaque label identifiers linking a dialog panel to its title.

use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

use serde::{Deserialize, Serialize};

static NEXT_LABEL: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
/// DOM id shared by a dialog's `aria-labelledby` and its title element.
pub struct LabelId(String);

impl LabelId {
    /// Allocates a process-unique label id.
    pub fn next() -> Self {
        let n = NEXT_LABEL.fetch_add(1, Ordering::Relaxed);
        Self(format!("ui-dialog-label-{n}"))
    }

    /// The id as a DOM attribute value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LabelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique_and_dom_safe() {
        let first = LabelId::next();
        let second = LabelId::next();

        assert_ne!(first, second);
        assert!(first
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-'));
        assert_eq!(first.to_string(), first.as_str());
    }
}
