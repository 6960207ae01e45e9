use std::rc::Rc;

use super::interop::HashChangeHandle;

pub(crate) fn href() -> Option<String> {
    super::interop::location_href()
}

pub(crate) fn fragment() -> Option<String> {
    super::interop::location_hash()
        .map(|hash| hash.strip_prefix('#').unwrap_or(&hash).to_string())
}

pub(crate) fn set_fragment(raw: &str) -> Result<(), String> {
    super::interop::set_location_hash(raw)
}

pub(crate) fn watch_fragment(handler: Rc<dyn Fn(String)>) -> Result<HashChangeHandle, String> {
    super::interop::watch_hashchange(Rc::new(move || {
        handler(fragment().unwrap_or_default());
    }))
}
