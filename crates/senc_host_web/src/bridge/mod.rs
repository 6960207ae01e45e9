//! Browser capability bridge for `senc_host_web` service adapters.
//!
//! This module is organized by host domain (`data`, `location`) while preserving a stable
//! crate-internal API for the adapters.

mod data;
mod interop;
mod location;

use std::rc::Rc;

use senc_host::{DataError, DataOptions, TreeResult};

pub use interop::HashChangeHandle;

pub fn data_is_ipfs_path(path: &str) -> Option<bool> {
    data::is_ipfs_path(path)
}

pub fn data_normalize_path(path: &str) -> Option<String> {
    data::normalize_path(path)
}

pub async fn data_load_and_decrypt(
    path: &str,
    key: &str,
    options: &DataOptions,
) -> Result<TreeResult, DataError> {
    data::load_and_decrypt(path, key, options).await
}

pub fn location_href() -> Option<String> {
    location::href()
}

pub fn location_fragment() -> Option<String> {
    location::fragment()
}

pub fn set_location_fragment(raw: &str) -> Result<(), String> {
    location::set_fragment(raw)
}

pub fn watch_location_fragment(handler: Rc<dyn Fn(String)>) -> Result<HashChangeHandle, String> {
    location::watch_fragment(handler)
}

pub fn console_warn(message: &str) {
    interop::console_warn(message);
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn data_public_api_non_wasm_parity() {
        assert_eq!(data_is_ipfs_path("/ipfs/QmFoo"), None);
        assert_eq!(data_normalize_path("/ipfs/QmFoo"), None);
        let err = block_on(data_load_and_decrypt(
            "/ipfs/QmFoo",
            "k",
            &DataOptions::default(),
        ))
        .expect_err("no data library off-browser");
        assert!(matches!(err, DataError::Unavailable(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn location_public_api_non_wasm_parity() {
        assert_eq!(location_href(), None);
        assert_eq!(location_fragment(), None);
        set_location_fragment("k:/ipfs/QmFoo").expect("set fragment is inert");
        let err = watch_location_fragment(Rc::new(|_: String| {})).expect_err("no hashchange");
        assert!(err.contains("wasm32"));
    }
}
