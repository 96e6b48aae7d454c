//! Contact field endpoints under `platform/contacts/fields`.
//!
//! Fields are either default (RD Station's standard contact
//! attributes) or custom (`cf_*` identifiers created per account).

use serde_json::Value;

use crate::resource::ResourceDescriptor;

/// List all fields of the current account.
pub fn list() -> ResourceDescriptor {
    ResourceDescriptor::get("platform/contacts/fields")
}

/// Create a custom field for the current account.
pub fn create(body: Value) -> ResourceDescriptor {
    ResourceDescriptor::post("platform/contacts/fields").with_body(body)
}

/// Update a field of the current account.
pub fn update(uuid: &str, body: Value) -> ResourceDescriptor {
    ResourceDescriptor::patch(format!("platform/contacts/fields/{uuid}")).with_body(body)
}

/// Delete a field of the current account.
pub fn delete(uuid: &str) -> ResourceDescriptor {
    ResourceDescriptor::delete(format!("platform/contacts/fields/{uuid}"))
}
