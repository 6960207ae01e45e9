//! Typed host-domain contracts and shared models for the encrypted tree viewer.
//!
//! This crate is the API-first boundary between the viewer controller and the services it drives.
//! It exposes the shared `FileParams`/`TreeResult` models, the data-access, presentation and
//! location service traits, and no-op/in-memory adapters. Concrete browser adapters live in
//! `senc_host_web`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod content_path;
pub mod data;
pub mod location;
pub mod params;
pub mod tree;
pub mod view;

pub use content_path::{is_ipfs_path, normalize_ipfs_path};
pub use data::service::{
    DataError, DecryptFuture, DecryptService, LoadCall, MemoryDecryptService, NoopDecryptService,
};
pub use location::{LocationStore, MemoryLocation};
pub use params::{DataOptions, FileParams, LoadRequest};
pub use tree::{TreeNode, TreeNodeKind, TreeResult};
pub use view::{FileView, LoadHandler, MemoryFileView, ViewCall};
