//! Page-level wiring between the browser location and the controller.

use std::rc::Rc;

use leptos::logging;
use senc_host::{FileParams, LocationStore};

use crate::{
    config::AppConfig,
    controller::{AppServices, SencApp},
    notifications::{Notification, Topic},
    url_state,
};

/// Builds the controller for the current page and applies the params from the URL fragment.
///
/// Configuration is read from the query string. Every `params` notification is written back
/// into the fragment. The view must already be mounted.
pub fn boot(location: Rc<dyn LocationStore>, services: AppServices) -> SencApp {
    let config = AppConfig::from_url(&location.href());
    logging::log!("senc config: {config}");

    let app = SencApp::new(config, services);
    let store = Rc::clone(&location);
    app.on(Topic::Params, move |notification| {
        if let Notification::Params(params) = notification {
            url_state::store_params(&*store, params);
        }
    });

    apply_fragment(&app, &location.fragment());
    app
}

/// Feeds a raw fragment into the controller, e.g. after a `hashchange`.
///
/// A missing fragment applies empty params, which never loads.
pub fn apply_fragment(app: &SencApp, raw: &str) {
    let FileParams { key, path } = url_state::decode_fragment(raw).unwrap_or_default();
    app.set_file_params(key, path);
}

#[cfg(test)]
mod tests {
    use futures::executor::LocalPool;
    use pretty_assertions::assert_eq;
    use senc_host::{
        FileView, MemoryDecryptService, MemoryFileView, MemoryLocation, TreeNode, TreeResult,
    };

    use super::*;

    fn services(
        pool: &LocalPool,
        view: &MemoryFileView,
        data: &MemoryDecryptService,
    ) -> AppServices {
        AppServices {
            view: Rc::new(view.clone()),
            data: Rc::new(data.clone()),
            spawner: Rc::new(pool.spawner()),
        }
    }

    fn tree(path: &str) -> TreeResult {
        TreeResult {
            path: path.to_string(),
            root: TreeNode::directory("", vec![TreeNode::file("a", 1)]),
        }
    }

    #[test]
    fn fragment_params_load_and_round_trip_into_url() {
        let mut pool = LocalPool::new();
        let view = MemoryFileView::default();
        let data = MemoryDecryptService::default();
        data.insert("/ipfs/QmFoo", "abc123", tree("/ipfs/QmFoo"));
        let location = MemoryLocation::new(
            "https://viewer.example/?gateway=https%3A%2F%2Fgw.example&forceGateway=true#abc123:/ipfs/QmFoo",
        );

        let app = boot(Rc::new(location.clone()), services(&pool, &view, &data));
        assert!(view.is_loading());
        pool.run_until_stalled();

        assert_eq!(app.file_params(), FileParams::new("abc123", "/ipfs/QmFoo"));
        assert_eq!(view.tree(), Some(tree("/ipfs/QmFoo")));
        let calls = data.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].path, "/ipfs/QmFoo");
        assert_eq!(calls[0].key, "abc123");
        assert_eq!(calls[0].options.gateway.as_deref(), Some("https://gw.example"));
        assert_eq!(calls[0].options.force_gateway, Some(true));
        assert_eq!(location.history(), vec!["abc123:/ipfs/QmFoo"]);
    }

    #[test]
    fn missing_fragment_never_loads() {
        let mut pool = LocalPool::new();
        let view = MemoryFileView::default();
        let data = MemoryDecryptService::default();
        let location = MemoryLocation::new("https://viewer.example/");

        let app = boot(Rc::new(location.clone()), services(&pool, &view, &data));
        pool.run_until_stalled();

        assert_eq!(app.file_params(), FileParams::default());
        assert!(view.calls().is_empty());
        assert!(data.calls().is_empty());
        assert!(location.history().is_empty());
    }

    #[test]
    fn malformed_fragment_fills_key_only() {
        let mut pool = LocalPool::new();
        let view = MemoryFileView::default();
        let data = MemoryDecryptService::default();
        let location = MemoryLocation::new("https://viewer.example/#justakey");

        let app = boot(Rc::new(location.clone()), services(&pool, &view, &data));
        pool.run_until_stalled();

        assert_eq!(app.file_params(), FileParams::new("justakey", ""));
        assert!(data.calls().is_empty());
        assert!(location.history().is_empty());
    }

    #[test]
    fn user_submission_is_written_to_fragment() {
        let mut pool = LocalPool::new();
        let view = MemoryFileView::default();
        let data = MemoryDecryptService::default();
        data.insert("/ipfs/QmBar", "k:1", tree("/ipfs/QmBar"));
        let location = MemoryLocation::new("https://viewer.example/");

        let _app = boot(Rc::new(location.clone()), services(&pool, &view, &data));
        view.submit(FileParams::new("k:1", "/ipfs/QmBar"));
        pool.run_until_stalled();

        assert_eq!(location.history(), vec!["k%3A1:/ipfs/QmBar"]);
        assert_eq!(
            url_state::load_params(&location),
            Some(FileParams::new("k:1", "/ipfs/QmBar"))
        );
    }

    #[test]
    fn applying_the_written_fragment_again_is_a_noop() {
        let mut pool = LocalPool::new();
        let view = MemoryFileView::default();
        let data = MemoryDecryptService::default();
        data.insert("/ipfs/QmFoo", "k", tree("/ipfs/QmFoo"));
        let location = MemoryLocation::new("https://viewer.example/#k:/ipfs/QmFoo");

        let app = boot(Rc::new(location.clone()), services(&pool, &view, &data));
        pool.run_until_stalled();
        apply_fragment(&app, &location.fragment());
        pool.run_until_stalled();

        assert_eq!(data.calls().len(), 1);
        assert_eq!(location.history().len(), 1);
    }

    #[test]
    fn form_edits_during_a_load_do_not_reach_the_fragment() {
        let mut pool = LocalPool::new();
        let view = MemoryFileView::default();
        let data = MemoryDecryptService::default();
        data.insert("/ipfs/QmFoo", "abc123", tree("/ipfs/QmFoo"));
        let location = MemoryLocation::new("https://viewer.example/#abc123:/ipfs/QmFoo");

        let _app = boot(Rc::new(location.clone()), services(&pool, &view, &data));
        FileView::set_file_params(&view, &FileParams::new("abc12", "/ipfs/QmBa"));
        pool.run_until_stalled();

        assert_eq!(view.tree(), Some(tree("/ipfs/QmFoo")));
        assert_eq!(location.history(), vec!["abc123:/ipfs/QmFoo"]);
    }
}
