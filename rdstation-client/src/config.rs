//! Client configuration.
//!
//! [`RdSettings`] is an explicit immutable struct handed to the token
//! manager and dispatcher at construction time. Defaults follow the
//! published API guidance: five attempts with a ten second pause
//! covers the documented webhook retry window.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use url::Url;

use rdstation_core::RdError;

/// Production API base domain.
pub const DEFAULT_BASE_DOMAIN: &str = "https://api.rd.services";

const DEFAULT_MAX_RETRIES: u32 = 5;
const DEFAULT_RETRY_DELAY_SECONDS: u64 = 10;
const DEFAULT_REQUEST_TIMEOUT_SECONDS: u64 = 30;

/// Immutable client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RdSettings {
    /// Base domain every resource path is joined onto.
    #[serde(default = "default_base_domain")]
    pub base_domain: String,

    /// Maximum total attempts for a call that keeps failing at the
    /// transport level. Responses that arrive are never retried.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Fixed pause between transport-level retries.
    #[serde(default = "default_retry_delay_seconds")]
    pub retry_delay_seconds: u64,

    /// Per-request timeout.
    #[serde(default = "default_request_timeout_seconds")]
    pub request_timeout_seconds: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_domain() -> String {
    DEFAULT_BASE_DOMAIN.to_string()
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

fn default_retry_delay_seconds() -> u64 {
    DEFAULT_RETRY_DELAY_SECONDS
}

fn default_request_timeout_seconds() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECONDS
}

fn default_user_agent() -> String {
    concat!("rdstation-rs/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for RdSettings {
    fn default() -> Self {
        Self {
            base_domain: default_base_domain(),
            max_retries: default_max_retries(),
            retry_delay_seconds: default_retry_delay_seconds(),
            request_timeout_seconds: default_request_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}

impl RdSettings {
    /// Load settings from a TOML file. Missing keys fall back to their
    /// defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RdError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| RdError::Config {
            message: format!("failed to read {}: {e}", path.display()),
        })?;
        let settings: Self = toml::from_str(&contents).map_err(|e| RdError::Config {
            message: format!("failed to parse {}: {e}", path.display()),
        })?;
        settings.validate()?;
        Ok(settings)
    }

    /// Check the settings are usable before any request goes out.
    pub fn validate(&self) -> Result<(), RdError> {
        Url::parse(&self.base_domain).map_err(|e| RdError::Config {
            message: format!("invalid base_domain '{}': {e}", self.base_domain),
        })?;
        if self.max_retries == 0 {
            return Err(RdError::Config {
                message: "max_retries must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Pause between transport retries.
    pub fn retry_delay(&self) -> Duration {
        Duration::from_secs(self.retry_delay_seconds)
    }

    /// Per-request timeout.
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = RdSettings::default();
        assert_eq!(settings.base_domain, "https://api.rd.services");
        assert_eq!(settings.max_retries, 5);
        assert_eq!(settings.retry_delay(), Duration::from_secs(10));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_falls_back_to_defaults() {
        let settings: RdSettings = toml::from_str(
            r#"
            base_domain = "https://sandbox.rd.services"
            max_retries = 2
            "#,
        )
        .unwrap();
        assert_eq!(settings.base_domain, "https://sandbox.rd.services");
        assert_eq!(settings.max_retries, 2);
        assert_eq!(settings.retry_delay_seconds, 10);
    }

    #[test]
    fn test_invalid_base_domain_rejected() {
        let settings = RdSettings {
            base_domain: "not a url".to_string(),
            ..RdSettings::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(RdError::Config { .. })
        ));
    }

    #[test]
    fn test_zero_retries_rejected() {
        let settings = RdSettings {
            max_retries: 0,
            ..RdSettings::default()
        };
        assert!(settings.validate().is_err());
    }
}
