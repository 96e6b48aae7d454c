//! Redacting wrapper for client secrets and bearer tokens.

use serde::{Deserialize, Serialize};
use zeroize::Zeroize;

/// Holds a sensitive string (client secret, access token, refresh
/// token) behind a redacting wrapper.
///
/// Both `Debug` and `Display` print `[REDACTED]`, so a `Secret` that
/// ends up in a tracing field or an error message leaks nothing.
/// Reading the actual string takes an explicit [`Secret::expose`] call,
/// which keeps every point of disclosure visible in the code. On drop
/// the backing buffer is zeroed.
#[derive(Clone, Serialize, Deserialize)]
pub struct Secret(String);

impl Secret {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the underlying string, e.g. to build an
    /// `Authorization` header. Callers must not log it.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Take the string out of the wrapper. The zeroing on drop no
    /// longer applies once the value has been moved out.
    pub fn into_inner(mut self) -> String {
        std::mem::take(&mut self.0)
    }
}

impl std::fmt::Debug for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Secret([REDACTED])")
    }
}

impl std::fmt::Display for Secret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[REDACTED]")
    }
}

impl PartialEq for Secret {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Secret {}

impl From<&str> for Secret {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Secret {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl Drop for Secret {
    fn drop(&mut self) {
        self.0.zeroize();
    }
}
