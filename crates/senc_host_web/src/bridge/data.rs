use senc_host::{DataError, DataOptions, TreeResult};

pub(crate) fn is_ipfs_path(path: &str) -> Option<bool> {
    super::interop::data_is_ipfs_path(path)
}

pub(crate) fn normalize_path(path: &str) -> Option<String> {
    super::interop::data_normalize_path(path)
}

pub(crate) async fn load_and_decrypt(
    path: &str,
    key: &str,
    options: &DataOptions,
) -> Result<TreeResult, DataError> {
    super::interop::data_load_and_decrypt(path, key, options).await
}
