//! # RD Station Client
//!
//! Async client for the RD Station Marketing API, built on the types
//! in `rdstation-core`:
//!
//! - [`TokenManager`] - authorization-code exchange, refresh, revoke
//! - [`Dispatcher`] - URL building, bearer header, send, retry, decode
//! - [`RdStationClient`] - facade with one typed helper per endpoint
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rdstation_client::{Credentials, RdStationClient};
//!
//! # async fn example() -> Result<(), rdstation_client::RdError> {
//! let credentials = Credentials::new("client-id", "client-secret", "auth-code");
//! let client = RdStationClient::new(credentials)?;
//!
//! let contact = client.contact_by_email("contact@example.com").await?;
//! println!("{}", contact["name"]);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod token;

pub use client::RdStationClient;
pub use config::RdSettings;
pub use dispatcher::Dispatcher;
pub use token::TokenManager;

// Re-export the core types callers need at the surface.
pub use rdstation_core::{
    ApiError,
    ApiErrorKind,
    CartAbandonedPayload,
    ConversionPayload,
    Credentials,
    Event,
    Method,
    OrderPlacedItemPayload,
    OrderPlacedPayload,
    RdError,
    ResourceDescriptor,
    Secret,
    TokenState,
    resources,
};
