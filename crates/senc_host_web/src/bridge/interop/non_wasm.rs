use super::*;

fn unsupported() -> String {
    "browser location and data APIs are only available when compiled for wasm32".to_string()
}

/// Placeholder listener handle for non-browser builds.
#[derive(Debug)]
pub struct HashChangeHandle;

pub fn data_is_ipfs_path(_path: &str) -> Option<bool> {
    None
}

pub fn data_normalize_path(_path: &str) -> Option<String> {
    None
}

pub async fn data_load_and_decrypt(
    _path: &str,
    _key: &str,
    _options: &DataOptions,
) -> Result<TreeResult, DataError> {
    Err(DataError::Unavailable(unsupported()))
}

pub fn location_href() -> Option<String> {
    None
}

pub fn location_hash() -> Option<String> {
    None
}

pub fn set_location_hash(_raw: &str) -> Result<(), String> {
    Ok(())
}

pub fn watch_hashchange(_handler: Rc<dyn Fn()>) -> Result<HashChangeHandle, String> {
    Err(unsupported())
}

pub fn console_warn(message: &str) {
    eprintln!("{message}");
}
