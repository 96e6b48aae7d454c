//! Token lifecycle management.
//!
//! [`TokenManager`] owns the credentials and the mutable
//! [`TokenState`], and guarantees the dispatcher always gets a
//! currently valid bearer token. The whole read-check-exchange-write
//! sequence runs under one async mutex, so concurrent callers that
//! observe a stale token wait on the single in-flight exchange instead
//! of racing a second one; the upstream API invalidates the previous
//! refresh token on each use, so a parallel refresh could never be
//! retried.

use chrono::{Duration, Utc};
use serde_json::Value;
use tokio::sync::Mutex;

use rdstation_core::{
    decode_response,
    model::{Credentials, TokenState},
    resource::ResourceDescriptor,
    resources,
    secret::Secret,
    RdError,
};

use crate::config::RdSettings;
use crate::dispatcher::join_url;

/// Seconds until expiry when the token response omits `expires_in`.
/// The API documents access tokens as valid for 24 hours.
const DEFAULT_EXPIRES_IN_SECONDS: i64 = 86_400;

/// Owns the credential set and the bearer-token state.
pub struct TokenManager {
    credentials: Credentials,
    settings: RdSettings,
    http: reqwest::Client,
    state: Mutex<TokenState>,
}

impl TokenManager {
    /// Create a token manager in the unauthenticated state.
    pub fn new(credentials: Credentials, settings: RdSettings, http: reqwest::Client) -> Self {
        Self {
            credentials,
            settings,
            http,
            state: Mutex::new(TokenState::new()),
        }
    }

    /// Get a valid access token, exchanging or refreshing if necessary.
    ///
    /// The first call exchanges the authorization code; later calls
    /// return the cached token until it expires, then exchange the
    /// stored refresh token. The state lock is held across the wire
    /// exchange, which serializes refreshes: under N concurrent stale
    /// callers exactly one exchange goes out and the rest reuse its
    /// result. A failed or cancelled exchange leaves the previous
    /// state untouched.
    pub async fn ensure_valid_token(&self) -> Result<Secret, RdError> {
        let mut state = self.state.lock().await;

        if let Some(token) = state.valid_access_token() {
            tracing::debug!("using cached access token");
            return Ok(token.clone());
        }

        let descriptor = match &state.refresh_token {
            Some(refresh) => {
                tracing::info!("access token expired, refreshing");
                resources::auth::refresh(&self.credentials, refresh)
            }
            None => {
                tracing::info!("no access token yet, exchanging authorization code");
                resources::auth::token_exchange(&self.credentials)
            }
        };

        let (token, fresh) = self
            .exchange(&descriptor, state.refresh_token.clone())
            .await?;

        // Overwrite only after a fully successful exchange.
        *state = fresh;

        tracing::info!("obtained access token");
        Ok(token)
    }

    /// Revoke the current grant and clear the token state.
    ///
    /// Revocation is advisory: transport errors are logged and
    /// swallowed, and the local state is cleared regardless of what
    /// the server answered.
    pub async fn revoke(&self) {
        let descriptor = resources::auth::revoke(&self.credentials);
        let url = join_url(&self.settings.base_domain, &descriptor.path);

        let mut request = self.http.post(url);
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        match request.send().await {
            Ok(response) => {
                tracing::debug!(status = response.status().as_u16(), "revoke acknowledged")
            }
            Err(err) => tracing::warn!("revoke request failed: {err}"),
        }

        self.state.lock().await.clear();
        tracing::info!("token state cleared");
    }

    /// Snapshot of the current token state.
    pub async fn token_state(&self) -> TokenState {
        self.state.lock().await.clone()
    }

    /// POST a token-endpoint descriptor and build the resulting state.
    ///
    /// `previous_refresh` is kept when the server does not rotate the
    /// refresh token.
    async fn exchange(
        &self,
        descriptor: &ResourceDescriptor,
        previous_refresh: Option<Secret>,
    ) -> Result<(Secret, TokenState), RdError> {
        let url = join_url(&self.settings.base_domain, &descriptor.path);

        let mut request = self.http.post(url);
        if let Some(body) = &descriptor.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| RdError::Network {
            message: format!("token endpoint unreachable: {e}"),
        })?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(|e| RdError::Network {
            message: format!("failed to read token response: {e}"),
        })?;

        let value = decode_response(status, &body).map_err(|err| match err {
            // Server-side rejections of the grant are authentication
            // failures for the caller, whatever the error_type.
            RdError::RequestFailed { errors } => RdError::Authentication {
                message: errors
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join("; "),
            },
            other => other,
        })?;

        let access_token = value
            .get("access_token")
            .and_then(Value::as_str)
            .map(Secret::new)
            .ok_or_else(|| RdError::Authentication {
                message: format!("token response lacks access_token (HTTP {status})"),
            })?;

        let expires_in = value
            .get("expires_in")
            .and_then(Value::as_i64)
            .unwrap_or(DEFAULT_EXPIRES_IN_SECONDS);

        let refresh_token = value
            .get("refresh_token")
            .and_then(Value::as_str)
            .map(Secret::new)
            .or(previous_refresh);

        let state = TokenState {
            access_token: Some(access_token.clone()),
            refresh_token,
            expires_at: Some(Utc::now() + Duration::seconds(expires_in)),
        };

        Ok((access_token, state))
    }
}

impl std::fmt::Debug for TokenManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenManager")
            .field("client_id", &self.credentials.client_id)
            .field("base_domain", &self.settings.base_domain)
            .finish()
    }
}
