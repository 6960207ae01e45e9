//! Page-location adapter backed by `window.location`.

use std::rc::Rc;

use senc_host::LocationStore;

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// [`LocationStore`] over `window.location`. Inert off-browser.
pub struct WebLocation;

impl WebLocation {
    /// Calls `handler` with the new fragment (without `#`) on every `hashchange`.
    ///
    /// # Errors
    ///
    /// Returns an error when no window is available or the listener cannot be installed.
    pub fn watch_fragment(
        self,
        handler: impl Fn(String) + 'static,
    ) -> Result<HashChangeListener, String> {
        let handle = bridge::watch_location_fragment(Rc::new(handler))?;
        Ok(HashChangeListener { _handle: handle })
    }
}

impl LocationStore for WebLocation {
    fn href(&self) -> String {
        bridge::location_href().unwrap_or_default()
    }

    fn fragment(&self) -> String {
        bridge::location_fragment().unwrap_or_default()
    }

    fn set_fragment(&self, raw: &str) {
        if let Err(err) = bridge::set_location_fragment(raw) {
            bridge::console_warn(&format!("fragment update failed: {err}"));
        }
    }
}

#[derive(Debug)]
/// Keeps a `hashchange` listener registered until dropped.
pub struct HashChangeListener {
    _handle: bridge::HashChangeHandle,
}
