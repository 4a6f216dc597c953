//! Helpers for reading webhook request bodies.
//!
//! Property names sent by the platform are not guaranteed to use a stable
//! casing, so lookups here ignore ASCII case.

use serde_json::{Map, Value};

use crate::error::UserFlowError;

/// A parsed request body together with the text it was parsed from.
#[derive(Debug, Clone, PartialEq)]
pub struct RequestBody {
    pub root: Value,
    pub raw: String,
}

impl RequestBody {
    /// The root as an object, if it is one.
    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.root.as_object()
    }
}

/// Parse a raw body. A blank body yields `Ok(None)`.
pub fn parse_body(raw: &str) -> Result<Option<RequestBody>, UserFlowError> {
    if raw.trim().is_empty() {
        return Ok(None);
    }

    let root = serde_json::from_str(raw).map_err(|e| UserFlowError::InvalidBody(e.to_string()))?;

    Ok(Some(RequestBody {
        root,
        raw: raw.to_string(),
    }))
}

/// First entry whose key equals `name` ignoring ASCII case.
pub fn find_ignore_case<'a, K, V, I>(entries: I, name: &str) -> Option<&'a V>
where
    K: AsRef<str> + 'a,
    V: 'a,
    I: IntoIterator<Item = (&'a K, &'a V)>,
{
    entries
        .into_iter()
        .find(|(key, _)| key.as_ref().eq_ignore_ascii_case(name))
        .map(|(_, value)| value)
}

/// String property lookup. Non-string values are returned as their JSON text
/// (useful for numbers and booleans).
pub fn get_string(object: &Map<String, Value>, name: &str) -> Option<String> {
    find_ignore_case(object, name).map(|value| match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

/// Nested object lookup.
pub fn get_object<'a>(
    object: &'a Map<String, Value>,
    name: &str,
) -> Option<&'a Map<String, Value>> {
    find_ignore_case(object, name).and_then(Value::as_object)
}
