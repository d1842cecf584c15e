//! Response envelope unwrapping and typed decoding.
//!
//! The server may return a payload bare or wrapped as
//! `{ "data": <payload> }`. Decoding is a pure function from body text
//! to a typed record so the queue components never touch raw JSON.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::QueueApiError;

/// Key of the standard response envelope.
const DATA_KEY: &str = "data";

/// Strip a `{ "data": ... }` wrapper if present.
///
/// Only an object whose sole key is `data` counts as an envelope; any
/// other value is returned unchanged.
pub fn unwrap_envelope(value: Value) -> Value {
    match value {
        Value::Object(mut map) if map.len() == 1 && map.contains_key(DATA_KEY) => {
            map.remove(DATA_KEY).unwrap_or_default()
        }
        other => other,
    }
}

/// Parse a response body into `T`, unwrapping the envelope first.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<T, QueueApiError> {
    let value: Value = serde_json::from_str(body)?;
    Ok(serde_json::from_value(unwrap_envelope(value))?)
}
