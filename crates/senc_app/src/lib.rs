//! Application controller for the encrypted tree viewer.
//!
//! The controller keeps three things in sync: the key/path the user entered, the page URL
//! fragment, and the view rendering the decrypted tree. Fetching, decryption and rendering are
//! delegated to the host services from [`senc_host`].
//!
//! - [`notifications`]: synchronous topic pub/sub used by the controller and its listeners.
//! - [`controller`]: change detection and the load/decrypt/render sequence.
//! - [`url_state`]: `#key:path` fragment codec.
//! - [`config`]: query-string parsing into [`AppConfig`].
//! - [`bootstrap`]: page-level wiring between the location and the controller.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod bootstrap;
pub mod config;
pub mod controller;
pub mod error;
pub mod notifications;
pub mod url_state;

pub use bootstrap::{apply_fragment, boot};
pub use config::{query_param, AppConfig, QueryValue, DEFAULT_CONTAINER_ID};
pub use controller::{AppServices, LoadState, SencApp};
pub use error::AppError;
pub use notifications::{
    Notification, NotificationChannel, NotificationHandler, SubscriptionId, Topic,
};
pub use url_state::{decode_fragment, encode_fragment, load_params, store_params};
