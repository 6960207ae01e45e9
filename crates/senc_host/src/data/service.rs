//! Load-and-decrypt service contracts.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use thiserror::Error;

use crate::{
    content_path::{is_ipfs_path, normalize_ipfs_path},
    params::DataOptions,
    tree::TreeResult,
};

/// Object-safe boxed future used by [`DecryptService`] async methods.
pub type DecryptFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Failure reported by a data service while loading or decrypting a tree.
pub enum DataError {
    /// No data backend is reachable on this host.
    #[error("data service unavailable: {0}")]
    Unavailable(String),
    /// Content could not be fetched from the node or gateway.
    #[error("fetch failed for `{path}`: {reason}")]
    Fetch {
        /// Normalized content path.
        path: String,
        /// Backend-provided reason.
        reason: String,
    },
    /// The key did not decrypt the content.
    #[error("decryption failed for `{path}`")]
    Decrypt {
        /// Normalized content path.
        path: String,
    },
    /// Decrypted data did not form a valid tree.
    #[error("malformed tree: {0}")]
    InvalidTree(String),
}

/// Host service that fetches and decrypts content-addressed trees.
pub trait DecryptService {
    /// Returns whether `path` is a content-addressed path this service can load.
    fn is_ipfs_path(&self, path: &str) -> bool;

    /// Returns the canonical form of a recognized content path.
    fn normalize_path(&self, path: &str) -> String;

    /// Fetches `path` and decrypts it with `key`.
    fn load_and_decrypt<'a>(
        &'a self,
        path: &'a str,
        key: &'a str,
        options: &'a DataOptions,
    ) -> DecryptFuture<'a, Result<TreeResult, DataError>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op data service for unsupported targets. Paths are recognized, loads always fail.
pub struct NoopDecryptService;

impl DecryptService for NoopDecryptService {
    fn is_ipfs_path(&self, path: &str) -> bool {
        is_ipfs_path(path)
    }

    fn normalize_path(&self, path: &str) -> String {
        normalize_ipfs_path(path)
    }

    fn load_and_decrypt<'a>(
        &'a self,
        _path: &'a str,
        _key: &'a str,
        _options: &'a DataOptions,
    ) -> DecryptFuture<'a, Result<TreeResult, DataError>> {
        Box::pin(async { Err(DataError::Unavailable("load_and_decrypt".to_string())) })
    }
}

/// One recorded [`MemoryDecryptService::load_and_decrypt`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadCall {
    /// Path as received (already normalized by the caller).
    pub path: String,
    /// Key as received.
    pub key: String,
    /// Options as received.
    pub options: DataOptions,
}

#[derive(Debug, Default)]
struct MemoryContent {
    trees: HashMap<String, (String, TreeResult)>,
    failures: HashMap<String, DataError>,
    calls: Vec<LoadCall>,
}

#[derive(Debug, Clone, Default)]
/// In-memory data service keyed by normalized path, recording every load call.
pub struct MemoryDecryptService {
    inner: Rc<RefCell<MemoryContent>>,
}

impl MemoryDecryptService {
    /// Publishes a tree at `path` that decrypts only with `key`.
    pub fn insert(&self, path: &str, key: impl Into<String>, tree: TreeResult) {
        self.inner
            .borrow_mut()
            .trees
            .insert(normalize_ipfs_path(path), (key.into(), tree));
    }

    /// Makes every load of `path` fail with `error`.
    pub fn fail_with(&self, path: &str, error: DataError) {
        self.inner
            .borrow_mut()
            .failures
            .insert(normalize_ipfs_path(path), error);
    }

    /// Returns the recorded load calls in order.
    pub fn calls(&self) -> Vec<LoadCall> {
        self.inner.borrow().calls.clone()
    }
}

impl DecryptService for MemoryDecryptService {
    fn is_ipfs_path(&self, path: &str) -> bool {
        is_ipfs_path(path)
    }

    fn normalize_path(&self, path: &str) -> String {
        normalize_ipfs_path(path)
    }

    fn load_and_decrypt<'a>(
        &'a self,
        path: &'a str,
        key: &'a str,
        options: &'a DataOptions,
    ) -> DecryptFuture<'a, Result<TreeResult, DataError>> {
        Box::pin(async move {
            let mut content = self.inner.borrow_mut();
            content.calls.push(LoadCall {
                path: path.to_string(),
                key: key.to_string(),
                options: options.clone(),
            });

            if let Some(err) = content.failures.get(path) {
                return Err(err.clone());
            }
            match content.trees.get(path) {
                Some((expected_key, tree)) if expected_key == key => Ok(tree.clone()),
                Some(_) => Err(DataError::Decrypt {
                    path: path.to_string(),
                }),
                None => Err(DataError::Fetch {
                    path: path.to_string(),
                    reason: "not found".to_string(),
                }),
            }
        })
    }
}
