//! Resource descriptors: one immutable value per HTTP call.
//!
//! A [`ResourceDescriptor`] describes a single call against the API
//! (method, relative path, optional JSON body) independent of any
//! transport. Descriptors are produced by the pure constructor
//! functions in [`crate::resources`], with all path placeholders
//! already substituted, and consumed by the dispatcher.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// HTTP method for a resource call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl Method {
    /// Get the method as its wire representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable description of one API call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDescriptor {
    /// HTTP method to use.
    pub method: Method,

    /// Path relative to the base domain, placeholders already substituted.
    pub path: String,

    /// JSON body to send, if any.
    pub body: Option<Value>,

    /// Whether the call carries a bearer token.
    ///
    /// True for every resource except the token and revoke exchanges.
    pub requires_auth: bool,
}

impl ResourceDescriptor {
    /// Create a descriptor with the given method and relative path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            requires_auth: true,
        }
    }

    /// Create a GET descriptor.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// Create a POST descriptor.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// Create a PUT descriptor.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// Create a PATCH descriptor.
    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(Method::Patch, path)
    }

    /// Create a DELETE descriptor.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Mark the call as unauthenticated (token and revoke exchanges).
    pub fn without_auth(mut self) -> Self {
        self.requires_auth = false;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_method_as_str() {
        assert_eq!(Method::Get.as_str(), "GET");
        assert_eq!(Method::Patch.as_str(), "PATCH");
    }

    #[test]
    fn test_descriptor_defaults_to_authenticated() {
        let descriptor = ResourceDescriptor::get("platform/contacts/abc");
        assert!(descriptor.requires_auth);
        assert!(descriptor.body.is_none());
    }

    #[test]
    fn test_descriptor_builders() {
        let descriptor = ResourceDescriptor::post("auth/token")
            .with_body(json!({"client_id": "abc"}))
            .without_auth();

        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "auth/token");
        assert!(!descriptor.requires_auth);
        assert_eq!(descriptor.body.unwrap()["client_id"], "abc");
    }
}
