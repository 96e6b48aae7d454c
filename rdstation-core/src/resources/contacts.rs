//! Contact endpoints under `platform/contacts`.

use serde_json::Value;

use crate::resource::ResourceDescriptor;

/// Fetch a contact by its UUID.
pub fn by_uuid(uuid: &str) -> ResourceDescriptor {
    ResourceDescriptor::get(format!("platform/contacts/{uuid}"))
}

/// Fetch a contact by e-mail, via the `email:` selector.
pub fn by_email(email: &str) -> ResourceDescriptor {
    ResourceDescriptor::get(format!("platform/contacts/email:{email}"))
}

/// Update the properties of a contact by UUID.
pub fn update_by_uuid(uuid: &str, body: Value) -> ResourceDescriptor {
    ResourceDescriptor::patch(format!("platform/contacts/{uuid}")).with_body(body)
}

/// Upsert a contact by identifier field and value.
///
/// `identifier` is the field that uniquely identifies the contact;
/// the API currently supports `email` and `uuid`.
pub fn upsert(identifier: &str, value: &str, body: Value) -> ResourceDescriptor {
    ResourceDescriptor::patch(format!("platform/contacts/{identifier}:{value}")).with_body(body)
}
