//! Data-service adapter backed by the page's JS data library.

use senc_host::{DataError, DataOptions, DecryptFuture, DecryptService, TreeResult};

use crate::bridge;

#[derive(Debug, Clone, Copy, Default)]
/// [`DecryptService`] that delegates to `window.SencData`.
///
/// Path checks fall back to the [`senc_host`] content-path helpers when the library is not
/// loaded; loads then fail with [`DataError::Unavailable`].
pub struct JsDecryptService;

impl DecryptService for JsDecryptService {
    fn is_ipfs_path(&self, path: &str) -> bool {
        bridge::data_is_ipfs_path(path).unwrap_or_else(|| senc_host::is_ipfs_path(path))
    }

    fn normalize_path(&self, path: &str) -> String {
        bridge::data_normalize_path(path).unwrap_or_else(|| senc_host::normalize_ipfs_path(path))
    }

    fn load_and_decrypt<'a>(
        &'a self,
        path: &'a str,
        key: &'a str,
        options: &'a DataOptions,
    ) -> DecryptFuture<'a, Result<TreeResult, DataError>> {
        Box::pin(async move { bridge::data_load_and_decrypt(path, key, options).await })
    }
}
