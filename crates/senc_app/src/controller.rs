//! Application controller: change detection and the load/decrypt/render sequence.
//!
//! The controller owns the notification channel, forwards the view's `load` submissions to
//! [`Topic::LoadFile`], and reacts to that topic by loading through the data service. Loads run on
//! an injected local executor. Every confirmed load takes a new request number and only the
//! latest request may touch the view when it completes.

use std::{
    cell::Cell,
    rc::{Rc, Weak},
};

use futures::task::{LocalSpawn, LocalSpawnExt};
use leptos::logging;
use senc_host::{
    DataOptions, DecryptService, FileParams, FileView, LoadRequest, TreeResult,
};

use crate::{
    config::AppConfig,
    error::AppError,
    notifications::{Notification, NotificationChannel, SubscriptionId, Topic},
};

/// Host service bundle injected into the controller.
#[derive(Clone)]
pub struct AppServices {
    /// Presentation surface.
    pub view: Rc<dyn FileView>,
    /// Data access and decryption service.
    pub data: Rc<dyn DecryptService>,
    /// Executor for load tasks.
    pub spawner: Rc<dyn LocalSpawn>,
}

/// Observable controller state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// No load in flight.
    Idle,
    /// A confirmed load is in flight.
    Loading,
}

struct AppInner {
    config: AppConfig,
    services: AppServices,
    channel: NotificationChannel,
    state: Cell<LoadState>,
    latest_request: Cell<u64>,
}

#[derive(Clone)]
/// Viewer controller. Clones share the same state.
pub struct SencApp {
    inner: Rc<AppInner>,
}

impl SencApp {
    /// Creates the controller and wires the view's `load` notification into [`Topic::LoadFile`].
    pub fn new(config: AppConfig, services: AppServices) -> Self {
        let app = Self {
            inner: Rc::new(AppInner {
                config,
                services,
                channel: NotificationChannel::default(),
                state: Cell::new(LoadState::Idle),
                latest_request: Cell::new(0),
            }),
        };

        let channel = app.inner.channel.clone();
        app.inner
            .services
            .view
            .on_load(Rc::new(move |params: FileParams| {
                channel.emit(&Notification::LoadFile(params));
            }));

        let weak = Rc::downgrade(&app.inner);
        app.inner.channel.subscribe(Topic::LoadFile, move |notification| {
            if let Notification::LoadFile(params) = notification {
                if let Some(app) = Self::upgrade(&weak) {
                    app.on_load_file(params);
                }
            }
        });

        app
    }

    fn upgrade(weak: &Weak<AppInner>) -> Option<Self> {
        weak.upgrade().map(|inner| Self { inner })
    }

    /// Returns the options forwarded to every data-service call.
    pub fn data_options(&self) -> DataOptions {
        self.inner.config.data_options()
    }

    /// Returns the params currently shown by the view.
    pub fn file_params(&self) -> FileParams {
        self.inner.services.view.file_params()
    }

    /// Returns whether a load is in flight.
    pub fn state(&self) -> LoadState {
        self.inner.state.get()
    }

    /// Updates the view with `(key, path)` and requests a load when the path is recognized.
    ///
    /// Unchanged params are a strict no-op: no view write, no load and no notification.
    pub fn set_file_params(&self, key: impl Into<String>, path: impl Into<String>) {
        let (key, path) = (key.into(), path.into());
        if self.file_params().matches(&key, &path) {
            return;
        }
        let params = FileParams { key, path };

        self.inner.services.view.set_file_params(&params);

        if self.inner.services.data.is_ipfs_path(&params.path) {
            self.emit(&Notification::LoadFile(params));
        }
    }

    /// Subscribes to a controller topic.
    pub fn on(&self, topic: Topic, handler: impl Fn(&Notification) + 'static) -> SubscriptionId {
        self.inner.channel.subscribe(topic, handler)
    }

    /// Removes a subscription added with [`SencApp::on`].
    pub fn off(&self, id: SubscriptionId) -> bool {
        self.inner.channel.unsubscribe(id)
    }

    /// Emits a notification on the controller channel.
    pub fn emit(&self, notification: &Notification) -> usize {
        self.inner.channel.emit(notification)
    }

    fn next_request(&self, params: &FileParams) -> LoadRequest {
        let seq = self.inner.latest_request.get() + 1;
        self.inner.latest_request.set(seq);
        LoadRequest {
            seq,
            key: params.key.clone(),
            path: self.inner.services.data.normalize_path(&params.path),
        }
    }

    fn set_state(&self, state: LoadState) {
        self.inner.state.set(state);
        self.inner
            .services
            .view
            .set_loading(state == LoadState::Loading);
    }

    fn on_load_file(&self, params: &FileParams) {
        // The view may submit directly, so the path is checked again here.
        if !self.inner.services.data.is_ipfs_path(&params.path) {
            logging::debug_warn!("ignoring load of unrecognized path `{}`", params.path);
            return;
        }

        let request = self.next_request(params);
        self.set_state(LoadState::Loading);
        logging::log!("loading {} (request {})", request.path, request.seq);

        let seq = request.seq;
        let requested = params.clone();
        let data = Rc::clone(&self.inner.services.data);
        let options = self.data_options();
        let weak = Rc::downgrade(&self.inner);
        let task = async move {
            let result = data
                .load_and_decrypt(&request.path, &request.key, &options)
                .await
                .map_err(AppError::from);
            if let Some(app) = Self::upgrade(&weak) {
                app.finish_load(request.seq, requested, result);
            }
        };

        if let Err(err) = self.inner.services.spawner.spawn_local(task) {
            self.finish_load(seq, params.clone(), Err(AppError::Spawn(err.to_string())));
        }
    }

    fn finish_load(&self, seq: u64, params: FileParams, result: Result<TreeResult, AppError>) {
        if seq != self.inner.latest_request.get() {
            logging::log!(
                "discarding stale result for request {seq} (latest {})",
                self.inner.latest_request.get()
            );
            return;
        }

        let view = &self.inner.services.view;
        match result {
            Ok(tree) => {
                view.render_tree(&tree);
                self.set_state(LoadState::Idle);
                // Persist what was loaded, not whatever the form holds by now.
                self.emit(&Notification::Loaded(params.clone()));
                self.emit(&Notification::Params(params));
            }
            Err(err) => {
                logging::warn!("load of {} failed: {err}", params.path);
                let error = err.to_string();
                self.set_state(LoadState::Idle);
                view.show_error(&error);
                self.emit(&Notification::LoadFailed { params, error });
            }
        }
    }
}
