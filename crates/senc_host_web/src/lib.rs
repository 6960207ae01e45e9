//! Browser (`wasm32`) implementations of [`senc_host`] service contracts.
//!
//! This crate is the concrete browser-side wiring layer for the page location, the JS data
//! library (`window.SencData`) and the local task executor. Native builds compile against inert
//! fallbacks so the workspace still builds and tests off-browser.
//!
//! Bridge bindings are split by domain under `bridge/`:
//! - `bridge::data`
//! - `bridge::location`
//! - `bridge::interop` (shared wasm/non-wasm transport glue)

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod bridge;
pub mod data;
pub mod location;
pub mod spawner;

pub use data::JsDecryptService;
pub use location::{HashChangeListener, WebLocation};
pub use spawner::BrowserSpawner;
