//! # RD Station Core
//!
//! Transport-independent types for the RD Station Marketing API:
//!
//! - Domain types for credentials and token state
//! - Immutable [`ResourceDescriptor`] values, one per API call
//! - The error taxonomy and the response decoder / error mapper
//! - Typed event payload records
//!
//! The HTTP pipeline itself (token manager, dispatcher, retry) lives in
//! the `rdstation-client` crate; this crate never touches the network.
//!
//! ## Quick Start
//!
//! ```rust
//! use rdstation_core::{resources, response::decode_response};
//!
//! let descriptor = resources::contacts::by_email("contact@example.com");
//! assert_eq!(descriptor.path, "platform/contacts/email:contact@example.com");
//!
//! let value = decode_response(200, r#"{"name": "Dev"}"#).unwrap();
//! assert_eq!(value["name"], "Dev");
//! ```

pub mod error;
pub mod events;
pub mod model;
pub mod resource;
pub mod resources;
pub mod response;
pub mod secret;

// Re-export commonly used types at crate root
pub use error::{
    ApiError,
    ApiErrorKind,
    RdError,
};

pub use events::{
    CartAbandonedPayload,
    ConversionPayload,
    Event,
    EventFamily,
    EventType,
    LegalBasis,
    OrderPlacedItemPayload,
    OrderPlacedPayload,
};

pub use model::{
    Credentials,
    TokenState,
};

pub use resource::{
    Method,
    ResourceDescriptor,
};

pub use response::decode_response;

pub use secret::Secret;
