//! Browser-location contracts used to read config and persist the current view.

use std::{cell::RefCell, rc::Rc};

/// Host service exposing the page URL.
pub trait LocationStore {
    /// Returns the full page URL.
    fn href(&self) -> String;

    /// Returns the raw fragment without the leading `#` (empty when absent).
    fn fragment(&self) -> String;

    /// Replaces the fragment. `raw` must not include the leading `#`.
    fn set_fragment(&self, raw: &str);
}

#[derive(Debug, Default)]
struct MemoryLocationState {
    href: String,
    history: Vec<String>,
}

#[derive(Debug, Clone, Default)]
/// In-memory location used by tests and headless hosts. Keeps a history of fragment writes.
pub struct MemoryLocation {
    inner: Rc<RefCell<MemoryLocationState>>,
}

impl MemoryLocation {
    /// Creates a location from a full URL.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryLocationState {
                href: href.into(),
                history: Vec::new(),
            })),
        }
    }

    /// Returns every fragment written through [`LocationStore::set_fragment`].
    pub fn history(&self) -> Vec<String> {
        self.inner.borrow().history.clone()
    }
}

impl LocationStore for MemoryLocation {
    fn href(&self) -> String {
        self.inner.borrow().href.clone()
    }

    fn fragment(&self) -> String {
        let state = self.inner.borrow();
        state
            .href
            .split_once('#')
            .map(|(_, fragment)| fragment.to_string())
            .unwrap_or_default()
    }

    fn set_fragment(&self, raw: &str) {
        let mut state = self.inner.borrow_mut();
        let base = state
            .href
            .split_once('#')
            .map(|(base, _)| base.to_string())
            .unwrap_or_else(|| state.href.clone());
        state.href = format!("{base}#{raw}");
        state.history.push(raw.to_string());
    }
}
