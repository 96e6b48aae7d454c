//! Domain model types for the RD Station client.
//!
//! This module defines:
//! - [`Credentials`] - OAuth application credentials, fixed at client construction
//! - [`TokenState`] - the mutable access/refresh token pair with its expiry

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::secret::Secret;

/// OAuth application credentials for the authorization-code flow.
///
/// Created once when the client is constructed and immutable for the
/// client's lifetime. The `code` is the one-shot authorization code
/// obtained from the RD Station callback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    /// OAuth client ID of the registered application.
    pub client_id: String,

    /// OAuth client secret of the registered application.
    pub client_secret: Secret,

    /// Authorization code from the OAuth callback.
    pub code: String,

    /// Redirect URI registered with the application, if any.
    pub redirect_uri: Option<String>,
}

impl Credentials {
    /// Create credentials for an authorization-code exchange.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<Secret>,
        code: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            code: code.into(),
            redirect_uri: None,
        }
    }

    /// Set the redirect URI registered with the application.
    pub fn with_redirect_uri(mut self, redirect_uri: impl Into<String>) -> Self {
        self.redirect_uri = Some(redirect_uri.into());
        self
    }
}

/// The bearer-token state owned by the token manager.
///
/// Invariant: `access_token` is present if and only if `expires_at` is
/// present. A past `expires_at` means the state is stale and must be
/// refreshed before use.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenState {
    /// Current bearer token, if one has been obtained.
    pub access_token: Option<Secret>,

    /// Refresh token from the last exchange, if one was issued.
    pub refresh_token: Option<Secret>,

    /// When the access token expires.
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenState {
    /// Create an empty (unauthenticated) state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether the access token has passed its expiry.
    ///
    /// Returns `false` when no expiry is recorded.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| exp < Utc::now()).unwrap_or(false)
    }

    /// Get the access token if it is present and not expired.
    pub fn valid_access_token(&self) -> Option<&Secret> {
        match (&self.access_token, self.expires_at) {
            (Some(token), Some(expires_at)) if expires_at > Utc::now() => Some(token),
            _ => None,
        }
    }

    /// Reset the state to all-null, e.g. after a revoke.
    pub fn clear(&mut self) {
        self.access_token = None;
        self.refresh_token = None;
        self.expires_at = None;
    }
}
