use js_sys::{Function, Promise, Reflect};
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use super::*;

const DATA_LIBRARY_GLOBAL: &str = "SencData";
const HASHCHANGE_EVENT: &str = "hashchange";

fn js_error_message(err: &JsValue) -> String {
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

fn data_library() -> Option<JsValue> {
    let library = Reflect::get(&js_sys::global(), &JsValue::from_str(DATA_LIBRARY_GLOBAL)).ok()?;
    if library.is_undefined() || library.is_null() {
        None
    } else {
        Some(library)
    }
}

fn library_fn(library: &JsValue, name: &str) -> Result<Function, String> {
    Reflect::get(library, &JsValue::from_str(name))
        .map_err(|err| format!("{DATA_LIBRARY_GLOBAL}.{name} lookup failed: {}", js_error_message(&err)))?
        .dyn_into::<Function>()
        .map_err(|_| format!("{DATA_LIBRARY_GLOBAL}.{name} is not a function"))
}

fn call_library(name: &str, path: &str) -> Option<JsValue> {
    let library = data_library()?;
    let func = library_fn(&library, name).ok()?;
    func.call1(&library, &JsValue::from_str(path)).ok()
}

pub fn data_is_ipfs_path(path: &str) -> Option<bool> {
    call_library("isIpfsPath", path).map(|value| value.is_truthy())
}

pub fn data_normalize_path(path: &str) -> Option<String> {
    call_library("normalizePath", path).and_then(|value| value.as_string())
}

pub async fn data_load_and_decrypt(
    path: &str,
    key: &str,
    options: &DataOptions,
) -> Result<TreeResult, DataError> {
    let library = data_library().ok_or_else(|| {
        DataError::Unavailable(format!("window.{DATA_LIBRARY_GLOBAL} is not loaded"))
    })?;
    let func = library_fn(&library, "loadAndDecrypt").map_err(DataError::Unavailable)?;
    let js_options = options
        .serialize(&Serializer::json_compatible())
        .map_err(|err| DataError::Unavailable(format!("options serialization failed: {err}")))?;

    let fetch_error = |err: JsValue| DataError::Fetch {
        path: path.to_string(),
        reason: js_error_message(&err),
    };
    let returned = func
        .call3(
            &library,
            &JsValue::from_str(path),
            &JsValue::from_str(key),
            &js_options,
        )
        .map_err(fetch_error)?;
    let value = match returned.dyn_into::<Promise>() {
        Ok(promise) => JsFuture::from(promise).await.map_err(fetch_error)?,
        Err(value) => value,
    };
    if value.is_undefined() || value.is_null() {
        return Err(DataError::Decrypt {
            path: path.to_string(),
        });
    }

    from_value::<TreeResult>(value).map_err(|err| DataError::InvalidTree(err.to_string()))
}

pub fn location_href() -> Option<String> {
    web_sys::window()?.location().href().ok()
}

pub fn location_hash() -> Option<String> {
    web_sys::window()?.location().hash().ok()
}

pub fn set_location_hash(raw: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    window
        .location()
        .set_hash(raw)
        .map_err(|err| format!("location.hash write failed: {}", js_error_message(&err)))
}

/// Registered `hashchange` listener. Dropping it removes the listener.
pub struct HashChangeHandle {
    window: web_sys::Window,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl Drop for HashChangeHandle {
    fn drop(&mut self) {
        let _ = self.window.remove_event_listener_with_callback(
            HASHCHANGE_EVENT,
            self.callback.as_ref().unchecked_ref(),
        );
    }
}

impl std::fmt::Debug for HashChangeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("HashChangeHandle")
    }
}

pub fn watch_hashchange(handler: Rc<dyn Fn()>) -> Result<HashChangeHandle, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;
    let callback = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
        handler();
    });
    window
        .add_event_listener_with_callback(HASHCHANGE_EVENT, callback.as_ref().unchecked_ref())
        .map_err(|err| format!("hashchange listener failed: {}", js_error_message(&err)))?;
    Ok(HashChangeHandle { window, callback })
}

pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
