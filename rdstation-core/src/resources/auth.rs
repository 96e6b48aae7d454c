//! Token endpoint descriptors.
//!
//! These are the only calls that do not carry a bearer token.

use serde_json::json;

use crate::model::Credentials;
use crate::resource::ResourceDescriptor;
use crate::secret::Secret;

/// Exchange the authorization code for the first token pair.
pub fn token_exchange(credentials: &Credentials) -> ResourceDescriptor {
    ResourceDescriptor::post("auth/token")
        .with_body(json!({
            "client_id": credentials.client_id,
            "client_secret": credentials.client_secret.expose(),
            "code": credentials.code,
        }))
        .without_auth()
}

/// Exchange a refresh token for a new token pair.
pub fn refresh(credentials: &Credentials, refresh_token: &Secret) -> ResourceDescriptor {
    ResourceDescriptor::post("auth/token")
        .with_body(json!({
            "client_id": credentials.client_id,
            "client_secret": credentials.client_secret.expose(),
            "refresh_token": refresh_token.expose(),
        }))
        .without_auth()
}

/// Revoke the current grant. Advisory; the server clears the refresh
/// token whatever state it was in.
pub fn revoke(credentials: &Credentials) -> ResourceDescriptor {
    ResourceDescriptor::post("auth/revoke")
        .with_body(json!({
            "client_id": credentials.client_id,
            "client_secret": credentials.client_secret.expose(),
            "token_type_hint": "refresh_token",
        }))
        .without_auth()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn credentials() -> Credentials {
        Credentials::new("id", "secret", "code-123")
    }

    #[test]
    fn test_token_exchange_descriptor() {
        let descriptor = token_exchange(&credentials());
        assert_eq!(descriptor.path, "auth/token");
        assert!(!descriptor.requires_auth);
        let body = descriptor.body.unwrap();
        assert_eq!(body["code"], "code-123");
        assert!(body.get("refresh_token").is_none());
    }

    #[test]
    fn test_refresh_descriptor() {
        let descriptor = refresh(&credentials(), &Secret::new("refresh-abc"));
        let body = descriptor.body.unwrap();
        assert_eq!(body["refresh_token"], "refresh-abc");
        assert!(body.get("code").is_none());
    }

    #[test]
    fn test_revoke_descriptor() {
        let descriptor = revoke(&credentials());
        assert_eq!(descriptor.path, "auth/revoke");
        assert_eq!(descriptor.body.unwrap()["token_type_hint"], "refresh_token");
    }
}
