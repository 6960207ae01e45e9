//! Controller-level load failures.

use senc_host::DataError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Reasons a confirmed load ends without rendering a tree.
pub enum AppError {
    /// The data service failed to fetch or decrypt the tree.
    #[error(transparent)]
    Data(#[from] DataError),
    /// The load task could not be scheduled on the local executor.
    #[error("could not schedule load: {0}")]
    Spawn(String),
}
