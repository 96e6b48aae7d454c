//! Response decoding and error mapping.
//!
//! Every HTTP response the dispatcher receives, success or failure,
//! goes through [`decode_response`], which turns it into either a JSON
//! success value or a typed [`RdError`].

use serde_json::{Map, Value};
use url::form_urlencoded;

use crate::error::{ApiError, RdError};

/// Decode a raw HTTP response body.
///
/// - An empty or unparseable body fails with
///   [`RdError::MalformedResponse`].
/// - A non-empty `errors` array fails with
///   [`RdError::RequestFailed`] carrying every mapped entry; the server
///   returns all validation failures for a request in one shot and the
///   caller gets the full list.
/// - Anything else is a success. A string `post_data` field in
///   URL-encoded form (`k1=v1&k2=v2`) is parsed into a JSON object
///   before returning, mirroring the request-echoing diagnostics
///   endpoints.
pub fn decode_response(http_status: u16, body: &str) -> Result<Value, RdError> {
    if body.trim().is_empty() {
        return Err(RdError::MalformedResponse {
            message: format!("empty body (HTTP {http_status})"),
        });
    }

    let mut value: Value =
        serde_json::from_str(body).map_err(|e| RdError::MalformedResponse {
            message: format!("invalid JSON (HTTP {http_status}): {e}"),
        })?;

    if let Some(entries) = value.get("errors").and_then(Value::as_array) {
        if !entries.is_empty() {
            let errors: Vec<ApiError> = entries
                .iter()
                .map(|entry| ApiError::from_entry(http_status, entry))
                .collect();
            return Err(RdError::RequestFailed { errors });
        }
    }

    if let Some(object) = value.as_object_mut() {
        if let Some(encoded) = object.get("post_data").and_then(Value::as_str) {
            let parsed = parse_post_data(encoded);
            object.insert("post_data".to_string(), Value::Object(parsed));
        }
    }

    Ok(value)
}

/// Parse a `key1=value1&key2=value2` echo into a JSON object.
fn parse_post_data(encoded: &str) -> Map<String, Value> {
    form_urlencoded::parse(encoded.as_bytes())
        .map(|(key, value)| (key.into_owned(), Value::String(value.into_owned())))
        .collect()
}
