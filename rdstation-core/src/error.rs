//! Error taxonomy for the RD Station client.
//!
//! The server reports failures as an `errors` array whose entries carry
//! an `error_type` code and a human-readable `error_message`. Each
//! entry is mapped into an [`ApiError`] with a structured
//! [`ApiErrorKind`], and the whole array is surfaced as one
//! [`RdError::RequestFailed`] so callers see every validation failure
//! from a single request at once.

use serde_json::Value;
use thiserror::Error;

/// Server-defined error categories.
///
/// One variant per documented `error_type` code. Codes the mapping does
/// not know fall back to [`ApiErrorKind::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ApiErrorKind {
    /// Invalid or expired token/credentials (401).
    Unauthorized,
    /// The client is not allowed to access the resource (403).
    AccessDenied,
    /// The authorization code has expired.
    ExpiredCodeGrant,
    /// The refresh token is no longer valid.
    InvalidRefreshToken,
    /// The resource does not exist (404).
    ResourceNotFound,
    /// Content-Type not set properly (415).
    UnsupportedMediaType,
    /// The request body is malformed for its Content-Type (400).
    BadRequest,
    /// An attribute was sent in an invalid format.
    InvalidFormat,
    /// Tags must be lowercase.
    ValuesMustBeLowercase,
    /// A field expected a string value.
    MustBeString,
    /// Attempt to write a read-only or nonexistent field.
    InvalidFields,
    /// The identifying field of an upsert reappeared in the payload.
    ConflictingField,
    /// The e-mail is already used by another contact.
    EmailAlreadyInUse,
    /// Validation: value cannot be null.
    CannotBeNull,
    /// Validation: value cannot be blank.
    CannotBeBlank,
    /// Validation: value is invalid.
    Invalid,
    /// Validation: value is already taken.
    Taken,
    /// Validation: value is too short.
    TooShort,
    /// Validation: value is too long.
    TooLong,
    /// Validation: value is in the excluded set.
    Exclusion,
    /// Validation: value is outside the allowed set.
    Inclusion,
    /// Any `error_type` outside the fixed table.
    Other(String),
}

impl ApiErrorKind {
    /// Map a server `error_type` code onto a kind.
    pub fn from_error_type(error_type: &str) -> Self {
        match error_type {
            "UNAUTHORIZED" => Self::Unauthorized,
            "ACCESS_DENIED" => Self::AccessDenied,
            "EXPIRED_CODE_GRANT" => Self::ExpiredCodeGrant,
            "INVALID_REFRESH_TOKEN" => Self::InvalidRefreshToken,
            "RESOURCE_NOT_FOUND" => Self::ResourceNotFound,
            "UNSUPPORTED_MEDIA_TYPE" => Self::UnsupportedMediaType,
            "BAD_REQUEST" => Self::BadRequest,
            "INVALID_FORMAT" => Self::InvalidFormat,
            "VALUES_MUST_BE_LOWERCASE" => Self::ValuesMustBeLowercase,
            "MUST_BE_STRING" => Self::MustBeString,
            "INVALID_FIELDS" => Self::InvalidFields,
            "CONFLICTING_FIELD" => Self::ConflictingField,
            "EMAIL_ALREADY_IN_USE" => Self::EmailAlreadyInUse,
            "CANNOT_BE_NULL" => Self::CannotBeNull,
            "CANNOT_BE_BLANK" => Self::CannotBeBlank,
            "INVALID" => Self::Invalid,
            "TAKEN" => Self::Taken,
            "TOO_SHORT" => Self::TooShort,
            "TOO_LONG" => Self::TooLong,
            "EXCLUSION" => Self::Exclusion,
            "INCLUSION" => Self::Inclusion,
            other => Self::Other(other.to_string()),
        }
    }

    /// Get the kind as the server's `error_type` code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::AccessDenied => "ACCESS_DENIED",
            Self::ExpiredCodeGrant => "EXPIRED_CODE_GRANT",
            Self::InvalidRefreshToken => "INVALID_REFRESH_TOKEN",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::UnsupportedMediaType => "UNSUPPORTED_MEDIA_TYPE",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidFormat => "INVALID_FORMAT",
            Self::ValuesMustBeLowercase => "VALUES_MUST_BE_LOWERCASE",
            Self::MustBeString => "MUST_BE_STRING",
            Self::InvalidFields => "INVALID_FIELDS",
            Self::ConflictingField => "CONFLICTING_FIELD",
            Self::EmailAlreadyInUse => "EMAIL_ALREADY_IN_USE",
            Self::CannotBeNull => "CANNOT_BE_NULL",
            Self::CannotBeBlank => "CANNOT_BE_BLANK",
            Self::Invalid => "INVALID",
            Self::Taken => "TAKEN",
            Self::TooShort => "TOO_SHORT",
            Self::TooLong => "TOO_LONG",
            Self::Exclusion => "EXCLUSION",
            Self::Inclusion => "INCLUSION",
            Self::Other(code) => code,
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single decoded entry from the server's `errors` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// HTTP status of the response the entry came from.
    pub http_status: u16,

    /// Structured error category.
    pub kind: ApiErrorKind,

    /// Human-readable message with any numeric prefix stripped.
    pub message: String,

    /// RD Station numeric code, when the message follows the
    /// `"<code>: <text>"` convention.
    pub rd_code: Option<i64>,
}

impl ApiError {
    /// Decode one entry of an `errors` array.
    ///
    /// The `error_message` is split on the first `": "`; a numeric left
    /// part becomes [`rd_code`](ApiError::rd_code) and the right part
    /// the message. Non-numeric prefixes leave the message untouched.
    pub fn from_entry(http_status: u16, entry: &Value) -> Self {
        let error_type = entry
            .get("error_type")
            .and_then(Value::as_str)
            .unwrap_or_default();
        let raw_message = entry
            .get("error_message")
            .and_then(Value::as_str)
            .unwrap_or_default();

        let (rd_code, message) = match raw_message.split_once(": ") {
            Some((prefix, rest)) => match prefix.trim().parse::<i64>() {
                Ok(code) => (Some(code), rest.to_string()),
                Err(_) => (None, raw_message.to_string()),
            },
            None => (None, raw_message.to_string()),
        };

        Self {
            http_status,
            kind: ApiErrorKind::from_error_type(error_type),
            message,
            rd_code,
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rd_code {
            Some(code) => write!(f, "{} ({}): {}", self.kind, code, self.message),
            None => write!(f, "{}: {}", self.kind, self.message),
        }
    }
}

/// Top-level error type for every client operation.
///
/// The variant alone tells the caller what to do: re-authorize
/// ([`Authentication`](RdError::Authentication)), retry later
/// ([`Network`](RdError::Network)), or fix the request payload
/// ([`RequestFailed`](RdError::RequestFailed)).
#[derive(Debug, Error)]
pub enum RdError {
    /// Transport failure after all retries were exhausted.
    #[error("network error: {message}")]
    Network { message: String },

    /// Token exchange or refresh failed; the caller must re-authorize.
    #[error("authentication failed: {message}")]
    Authentication { message: String },

    /// The response body was absent or not valid JSON.
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },

    /// The server reported one or more application-level errors.
    #[error("request failed with {} error(s)", errors.len())]
    RequestFailed { errors: Vec<ApiError> },

    /// Invalid client configuration.
    #[error("configuration error: {message}")]
    Config { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_known_error_type_mapping() {
        assert_eq!(
            ApiErrorKind::from_error_type("RESOURCE_NOT_FOUND"),
            ApiErrorKind::ResourceNotFound
        );
        assert_eq!(
            ApiErrorKind::from_error_type("VALUES_MUST_BE_LOWERCASE"),
            ApiErrorKind::ValuesMustBeLowercase
        );
    }

    #[test]
    fn test_unknown_error_type_falls_back_to_other() {
        let kind = ApiErrorKind::from_error_type("TEAPOT");
        assert_eq!(kind, ApiErrorKind::Other("TEAPOT".to_string()));
        assert_eq!(kind.as_str(), "TEAPOT");
    }

    #[test]
    fn test_error_type_roundtrip() {
        for code in ["UNAUTHORIZED", "CONFLICTING_FIELD", "TOO_LONG"] {
            assert_eq!(ApiErrorKind::from_error_type(code).as_str(), code);
        }
    }

    #[test]
    fn test_from_entry_with_numeric_prefix() {
        let entry = json!({
            "error_type": "BAD_REQUEST",
            "error_message": "822: unexpected token at 'x'"
        });
        let error = ApiError::from_entry(400, &entry);
        assert_eq!(error.kind, ApiErrorKind::BadRequest);
        assert_eq!(error.rd_code, Some(822));
        assert_eq!(error.message, "unexpected token at 'x'");
        assert_eq!(error.http_status, 400);
    }

    #[test]
    fn test_from_entry_without_numeric_prefix() {
        let entry = json!({
            "error_type": "CANNOT_BE_BLANK",
            "error_message": "email cannot be blank"
        });
        let error = ApiError::from_entry(400, &entry);
        assert_eq!(error.rd_code, None);
        assert_eq!(error.message, "email cannot be blank");
    }

    #[test]
    fn test_from_entry_non_numeric_prefix_keeps_message() {
        let entry = json!({
            "error_type": "INVALID",
            "error_message": "note: this is not a code"
        });
        let error = ApiError::from_entry(422, &entry);
        assert_eq!(error.rd_code, None);
        assert_eq!(error.message, "note: this is not a code");
    }
}
