//! Page configuration read once from the URL query string.

use leptos::logging;
use senc_host::DataOptions;
use serde::{Deserialize, Serialize};

/// DOM id of the element the viewer mounts into.
pub const DEFAULT_CONTAINER_ID: &str = "senc-container";

/// A query-parameter value after primitive coercion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum QueryValue {
    /// `true` or `false`, any case.
    Bool(bool),
    /// The literal `undefined`, any case.
    Undefined,
    /// Present without a value (`?name` or `?name=`).
    Empty,
    /// Any other decoded value.
    Text(String),
}

impl QueryValue {
    fn coerce(decoded: String) -> Self {
        match decoded.to_ascii_lowercase().as_str() {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            "undefined" => Self::Undefined,
            _ => Self::Text(decoded),
        }
    }

    /// Returns the text payload, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(err) => {
            logging::warn!("query value `{raw}` is not valid UTF-8 once decoded: {err}");
            spaced
        }
    }
}

/// Reads the first `name` parameter from the query part of `url`.
///
/// Returns `None` when the parameter is absent and [`QueryValue::Empty`] when it has no value.
/// Values have `+` turned into spaces, are percent-decoded, then coerced by
/// [`QueryValue`] rules. The fragment is never searched.
pub fn query_param(name: &str, url: &str) -> Option<QueryValue> {
    let without_fragment = url.split_once('#').map_or(url, |(head, _)| head);
    let (_, query) = without_fragment.split_once('?')?;

    for pair in query.split('&').filter(|part| !part.is_empty()) {
        let (key, value) = match pair.split_once('=') {
            Some((key, value)) => (key, Some(value)),
            None => (pair, None),
        };
        if key != name {
            continue;
        }
        return Some(match value {
            None | Some("") => QueryValue::Empty,
            Some(raw) => QueryValue::coerce(decode_component(raw)),
        });
    }
    None
}

/// Process-wide viewer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppConfig {
    /// Gateway base URL override (`?gateway=`).
    pub gateway: Option<String>,
    /// Gateway forcing flag (`?forceGateway=`).
    pub force_gateway: Option<bool>,
    /// DOM id of the mount container.
    pub container_id: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            gateway: None,
            force_gateway: None,
            container_id: DEFAULT_CONTAINER_ID.to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from a full page URL.
    ///
    /// Falsy `gateway` values (empty, boolean, `undefined`) collapse to `None`. `forceGateway`
    /// keeps booleans, treats other non-empty text as `true`, and drops everything else.
    pub fn from_url(href: &str) -> Self {
        let gateway = query_param("gateway", href)
            .as_ref()
            .and_then(QueryValue::as_text)
            .map(str::to_string);
        let force_gateway = match query_param("forceGateway", href) {
            Some(QueryValue::Bool(flag)) => Some(flag),
            Some(QueryValue::Text(_)) => Some(true),
            Some(QueryValue::Empty | QueryValue::Undefined) | None => None,
        };

        Self {
            gateway,
            force_gateway,
            ..Self::default()
        }
    }

    /// Projects the options forwarded to the data service.
    pub fn data_options(&self) -> DataOptions {
        DataOptions {
            gateway: self.gateway.clone(),
            force_gateway: self.force_gateway,
        }
    }
}

impl std::fmt::Display for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "gateway={} forceGateway={:?} container=#{}",
            self.gateway.as_deref().unwrap_or("default"),
            self.force_gateway,
            self.container_id
        )
    }
}
