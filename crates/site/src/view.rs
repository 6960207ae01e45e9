//! Signal-backed [`FileView`] used by the browser page.

use std::{cell::RefCell, rc::Rc};

use leptos::*;
use senc_host::{FileParams, FileView, LoadHandler, TreeResult};

/// Reactive view state shared between the controller and the page components.
#[derive(Clone)]
pub struct SencView {
    /// Key input.
    pub key: RwSignal<String>,
    /// Path input.
    pub path: RwSignal<String>,
    /// Loading indicator.
    pub loading: RwSignal<bool>,
    /// Last rendered tree.
    pub tree: RwSignal<Option<TreeResult>>,
    /// Last reported error.
    pub error: RwSignal<Option<String>>,
    handlers: Rc<RefCell<Vec<LoadHandler>>>,
}

impl SencView {
    /// Creates empty view state in the current reactive runtime.
    pub fn new() -> Self {
        Self {
            key: create_rw_signal(String::new()),
            path: create_rw_signal(String::new()),
            loading: create_rw_signal(false),
            tree: create_rw_signal(None),
            error: create_rw_signal(None),
            handlers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Forwards the current form values to every registered load handler.
    pub fn submit(&self) {
        let params = self.file_params();
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(params.clone());
        }
    }
}

impl Default for SencView {
    fn default() -> Self {
        Self::new()
    }
}

impl FileView for SencView {
    fn file_params(&self) -> FileParams {
        FileParams::new(self.key.get_untracked(), self.path.get_untracked())
    }

    fn set_file_params(&self, params: &FileParams) {
        self.key.set(params.key.clone());
        self.path.set(params.path.clone());
    }

    fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }

    fn render_tree(&self, tree: &TreeResult) {
        self.error.set(None);
        self.tree.set(Some(tree.clone()));
    }

    fn show_error(&self, message: &str) {
        self.error.set(Some(message.to_string()));
    }

    fn on_load(&self, handler: LoadHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}
