//! Shared transport interop for browser bridge domains.
//!
//! This module routes calls to target-specific implementations while preserving a uniform API
//! for higher-level bridge domain modules.

use std::rc::Rc;

use senc_host::{DataError, DataOptions, TreeResult};

#[cfg(not(target_arch = "wasm32"))]
mod non_wasm;
#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(not(target_arch = "wasm32"))]
use non_wasm as imp;
#[cfg(target_arch = "wasm32")]
use wasm as imp;

pub use imp::HashChangeHandle;

pub fn data_is_ipfs_path(path: &str) -> Option<bool> {
    imp::data_is_ipfs_path(path)
}

pub fn data_normalize_path(path: &str) -> Option<String> {
    imp::data_normalize_path(path)
}

pub async fn data_load_and_decrypt(
    path: &str,
    key: &str,
    options: &DataOptions,
) -> Result<TreeResult, DataError> {
    imp::data_load_and_decrypt(path, key, options).await
}

pub fn location_href() -> Option<String> {
    imp::location_href()
}

pub fn location_hash() -> Option<String> {
    imp::location_hash()
}

pub fn set_location_hash(raw: &str) -> Result<(), String> {
    imp::set_location_hash(raw)
}

pub fn watch_hashchange(handler: Rc<dyn Fn()>) -> Result<HashChangeHandle, String> {
    imp::watch_hashchange(handler)
}

pub fn console_warn(message: &str) {
    imp::console_warn(message);
}
