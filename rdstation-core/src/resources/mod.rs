//! Descriptor constructors, one pure function per API endpoint.
//!
//! Each function substitutes its path placeholders and returns an
//! immutable [`ResourceDescriptor`](crate::resource::ResourceDescriptor);
//! no shared state is touched, so concurrent use is safe by
//! construction. Endpoint groups mirror the API reference sections.

pub mod auth;
pub mod contacts;
pub mod events;
pub mod fields;
pub mod funnels;
pub mod marketing;
pub mod webhooks;
