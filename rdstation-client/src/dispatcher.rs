//! Request dispatch: descriptor in, decoded JSON out.
//!
//! The dispatcher is the single integration point for every endpoint
//! helper: it attaches the bearer token, joins the URL, sends the
//! request, and hands whatever response arrives to the decoder.
//! Transport failures (connection refused, timeout) are retried with a
//! fixed delay; a response that made it back is always decoded, never
//! retried, since application-level errors must surface to the caller.

use std::sync::Arc;

use serde_json::Value;

use rdstation_core::{
    decode_response,
    resource::{Method, ResourceDescriptor},
    RdError,
};

use crate::config::RdSettings;
use crate::token::TokenManager;

/// Join the base domain and a relative resource path.
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Patch => reqwest::Method::PATCH,
        Method::Delete => reqwest::Method::DELETE,
    }
}

/// Turns resource descriptors into decoded results.
#[derive(Debug)]
pub struct Dispatcher {
    settings: RdSettings,
    http: reqwest::Client,
    tokens: Arc<TokenManager>,
}

impl Dispatcher {
    /// Create a dispatcher sharing the given token manager.
    pub fn new(settings: RdSettings, http: reqwest::Client, tokens: Arc<TokenManager>) -> Self {
        Self {
            settings,
            http,
            tokens,
        }
    }

    /// Execute one descriptor against the API.
    ///
    /// Retries transport failures up to `max_retries` total attempts
    /// with `retry_delay` between them, then fails with
    /// [`RdError::Network`].
    pub async fn execute(&self, descriptor: &ResourceDescriptor) -> Result<Value, RdError> {
        let url = join_url(&self.settings.base_domain, &descriptor.path);
        let method = to_reqwest_method(descriptor.method);

        let mut attempt = 0u32;
        loop {
            attempt += 1;

            let mut request = self.http.request(method.clone(), &url);

            if descriptor.requires_auth {
                let token = self.tokens.ensure_valid_token().await?;
                request = request.bearer_auth(token.expose());
            }

            if let Some(body) = &descriptor.body {
                // Sets Content-Type: application/json.
                request = request.json(body);
            }

            match request.send().await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    let body = response.text().await.map_err(|e| RdError::Network {
                        message: format!("failed to read response body: {e}"),
                    })?;

                    tracing::debug!(
                        status,
                        method = %descriptor.method,
                        path = %descriptor.path,
                        "response received"
                    );

                    return decode_response(status, &body);
                }
                Err(err) if attempt < self.settings.max_retries => {
                    tracing::warn!(
                        attempt,
                        max_retries = self.settings.max_retries,
                        path = %descriptor.path,
                        "transport failure, retrying: {err}"
                    );
                    tokio::time::sleep(self.settings.retry_delay()).await;
                }
                Err(err) => {
                    return Err(RdError::Network {
                        message: format!(
                            "{} {} failed after {attempt} attempt(s): {err}",
                            descriptor.method, descriptor.path
                        ),
                    });
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url_strips_duplicate_slashes() {
        assert_eq!(
            join_url("https://api.rd.services/", "/auth/token"),
            "https://api.rd.services/auth/token"
        );
        assert_eq!(
            join_url("https://api.rd.services", "platform/contacts/abc"),
            "https://api.rd.services/platform/contacts/abc"
        );
    }
}
