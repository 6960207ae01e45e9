//! Presentation-surface contracts and an in-memory recording adapter.

use std::{cell::RefCell, rc::Rc};

use crate::{params::FileParams, tree::TreeResult};

/// Callback invoked when the user submits new key/path params.
pub type LoadHandler = Rc<dyn Fn(FileParams)>;

/// Rendering surface that shows the key/path form, a loading indicator and the decrypted tree.
///
/// The params held by the view are the source of truth for what the user currently sees.
pub trait FileView {
    /// Returns the params currently displayed in the form.
    fn file_params(&self) -> FileParams;

    /// Replaces the params displayed in the form.
    fn set_file_params(&self, params: &FileParams);

    /// Shows or hides the loading indicator.
    fn set_loading(&self, loading: bool);

    /// Renders a decrypted tree and clears any previous error.
    fn render_tree(&self, tree: &TreeResult);

    /// Shows a load failure.
    fn show_error(&self, message: &str);

    /// Registers a handler for user-submitted params (`load`).
    fn on_load(&self, handler: LoadHandler);
}

/// One recorded mutation of a [`MemoryFileView`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewCall {
    /// `set_file_params` was called.
    SetFileParams(FileParams),
    /// `set_loading` was called.
    SetLoading(bool),
    /// `render_tree` was called with a tree from this path.
    RenderTree(String),
    /// `show_error` was called.
    ShowError(String),
}

#[derive(Default)]
struct MemoryViewState {
    params: FileParams,
    loading: bool,
    tree: Option<TreeResult>,
    error: Option<String>,
    calls: Vec<ViewCall>,
}

#[derive(Clone, Default)]
/// Headless view that keeps state in memory and records every mutation.
pub struct MemoryFileView {
    state: Rc<RefCell<MemoryViewState>>,
    handlers: Rc<RefCell<Vec<LoadHandler>>>,
}

impl MemoryFileView {
    /// Simulates the user submitting the form with `params`.
    ///
    /// The form fields are updated first, then every `load` handler runs in registration order.
    pub fn submit(&self, params: FileParams) {
        self.state.borrow_mut().params = params.clone();
        let handlers = self.handlers.borrow().clone();
        for handler in handlers {
            handler(params.clone());
        }
    }

    /// Returns whether the loading indicator is shown.
    pub fn is_loading(&self) -> bool {
        self.state.borrow().loading
    }

    /// Returns the last rendered tree.
    pub fn tree(&self) -> Option<TreeResult> {
        self.state.borrow().tree.clone()
    }

    /// Returns the error currently shown.
    pub fn error(&self) -> Option<String> {
        self.state.borrow().error.clone()
    }

    /// Returns the recorded mutations in order.
    pub fn calls(&self) -> Vec<ViewCall> {
        self.state.borrow().calls.clone()
    }
}

impl FileView for MemoryFileView {
    fn file_params(&self) -> FileParams {
        self.state.borrow().params.clone()
    }

    fn set_file_params(&self, params: &FileParams) {
        let mut state = self.state.borrow_mut();
        state.params = params.clone();
        state.calls.push(ViewCall::SetFileParams(params.clone()));
    }

    fn set_loading(&self, loading: bool) {
        let mut state = self.state.borrow_mut();
        state.loading = loading;
        state.calls.push(ViewCall::SetLoading(loading));
    }

    fn render_tree(&self, tree: &TreeResult) {
        let mut state = self.state.borrow_mut();
        state.tree = Some(tree.clone());
        state.error = None;
        state.calls.push(ViewCall::RenderTree(tree.path.clone()));
    }

    fn show_error(&self, message: &str) {
        let mut state = self.state.borrow_mut();
        state.error = Some(message.to_string());
        state.calls.push(ViewCall::ShowError(message.to_string()));
    }

    fn on_load(&self, handler: LoadHandler) {
        self.handlers.borrow_mut().push(handler);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::tree::TreeNode;

    #[test]
    fn memory_view_records_mutations() {
        let view = MemoryFileView::default();
        let view_obj: &dyn FileView = &view;

        view_obj.set_file_params(&FileParams::new("k", "/ipfs/QmFoo"));
        view_obj.set_loading(true);
        view_obj.show_error("boom");
        view_obj.render_tree(&TreeResult {
            path: "/ipfs/QmFoo".to_string(),
            root: TreeNode::directory("", vec![]),
        });
        view_obj.set_loading(false);

        assert_eq!(view_obj.file_params(), FileParams::new("k", "/ipfs/QmFoo"));
        assert!(!view.is_loading());
        assert_eq!(view.error(), None);
        assert_eq!(
            view.calls(),
            vec![
                ViewCall::SetFileParams(FileParams::new("k", "/ipfs/QmFoo")),
                ViewCall::SetLoading(true),
                ViewCall::ShowError("boom".to_string()),
                ViewCall::RenderTree("/ipfs/QmFoo".to_string()),
                ViewCall::SetLoading(false),
            ]
        );
    }

    #[test]
    fn submit_updates_fields_before_running_handlers() {
        let view = MemoryFileView::default();
        let seen = Rc::new(Cell::new(0));
        let probe = view.clone();
        let counter = Rc::clone(&seen);
        view.on_load(Rc::new(move |params: FileParams| {
            assert_eq!(probe.file_params(), params);
            counter.set(counter.get() + 1);
        }));

        view.submit(FileParams::new("k", "/ipfs/QmFoo"));
        assert_eq!(seen.get(), 1);
        assert!(view.calls().is_empty());
    }
}
