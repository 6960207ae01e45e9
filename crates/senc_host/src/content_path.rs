//! Content-addressed path helpers shared by data-service adapters.
//!
//! Recognized forms are `/ipfs/<cid>[/...]`, `/ipns/<name>[/...]`, their `ipfs://`/`ipns://` and
//! `dweb:` spellings, and bare CIDv0 hashes (`Qm...`).

const IPFS_PREFIX: &str = "/ipfs/";
const IPNS_PREFIX: &str = "/ipns/";
const CID_V0_LEN: usize = 46;
const BASE58_ALPHABET: &str = "123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

fn is_cid_v0(raw: &str) -> bool {
    raw.len() == CID_V0_LEN
        && raw.starts_with("Qm")
        && raw.chars().all(|c| BASE58_ALPHABET.contains(c))
}

fn strip_scheme(raw: &str) -> String {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix("dweb:").unwrap_or(trimmed);
    if let Some(rest) = trimmed.strip_prefix("ipfs://") {
        return format!("{IPFS_PREFIX}{rest}");
    }
    if let Some(rest) = trimmed.strip_prefix("ipns://") {
        return format!("{IPNS_PREFIX}{rest}");
    }
    if is_cid_v0(trimmed.split('/').next().unwrap_or_default()) {
        return format!("{IPFS_PREFIX}{trimmed}");
    }
    trimmed.to_string()
}

/// Normalizes a content path to its canonical `/ipfs/...` or `/ipns/...` form.
///
/// Scheme spellings and bare CIDv0 hashes gain the namespace prefix, backslashes become `/`,
/// empty and `.` segments are dropped. Paths that are not content paths are returned with only
/// the segment cleanup applied.
pub fn normalize_ipfs_path(path: &str) -> String {
    let prefixed = strip_scheme(path);
    let mut out = String::new();
    for segment in prefixed.replace('\\', "/").split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        out.push('/');
        out.push_str(segment);
    }

    if out.is_empty() {
        "/".to_string()
    } else {
        out
    }
}

/// Returns whether `path` names content-addressed data.
///
/// The root identifier must be non-empty and made of ASCII alphanumerics (`.` and `-` are also
/// allowed under `/ipns/` for DNS names). Parent-directory segments are rejected.
pub fn is_ipfs_path(path: &str) -> bool {
    if path.trim().is_empty() {
        return false;
    }
    let normalized = normalize_ipfs_path(path);
    if normalized.split('/').any(|segment| segment == "..") {
        return false;
    }

    if let Some(rest) = normalized.strip_prefix(IPFS_PREFIX) {
        let root = rest.split('/').next().unwrap_or_default();
        return !root.is_empty() && root.chars().all(|c| c.is_ascii_alphanumeric());
    }
    if let Some(rest) = normalized.strip_prefix(IPNS_PREFIX) {
        let root = rest.split('/').next().unwrap_or_default();
        return !root.is_empty()
            && root
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-');
    }
    false
}
