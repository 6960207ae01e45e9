//! `#key:path` fragment codec.
//!
//! The first `:` separates key from path. `%` and `:` inside either field are percent-escaped on
//! encode, so fields without those characters produce the plain `key:path` form.

use senc_host::{FileParams, LocationStore};

const DELIMITER: char = ':';

fn escape_field(field: &str) -> String {
    field.replace('%', "%25").replace(DELIMITER, "%3A")
}

fn unescape_field(field: &str) -> String {
    urlencoding::decode(field)
        .map(|decoded| decoded.into_owned())
        .unwrap_or_else(|_| field.to_string())
}

/// Decodes a raw fragment (with or without the leading `#`).
///
/// Returns `None` for an empty fragment. A fragment without a delimiter yields an empty path.
/// Nothing is validated here.
pub fn decode_fragment(raw: &str) -> Option<FileParams> {
    let raw = raw.strip_prefix('#').unwrap_or(raw);
    if raw.is_empty() {
        return None;
    }
    let (key, path) = raw.split_once(DELIMITER).unwrap_or((raw, ""));
    Some(FileParams::new(unescape_field(key), unescape_field(path)))
}

/// Encodes params as a fragment body (without the leading `#`).
pub fn encode_fragment(params: &FileParams) -> String {
    format!(
        "{}{DELIMITER}{}",
        escape_field(&params.key),
        escape_field(&params.path)
    )
}

/// Reads params from the current location fragment.
pub fn load_params<L: LocationStore + ?Sized>(location: &L) -> Option<FileParams> {
    decode_fragment(&location.fragment())
}

/// Writes params into the location fragment.
pub fn store_params<L: LocationStore + ?Sized>(location: &L, params: &FileParams) {
    location.set_fragment(&encode_fragment(params));
}
