//! Contact funnel endpoints under `platform/contacts/{selector}/funnels`.

use serde_json::Value;

use crate::resource::ResourceDescriptor;

/// Fetch a contact's funnel status by contact UUID.
pub fn by_uuid(uuid: &str, funnel_name: &str) -> ResourceDescriptor {
    ResourceDescriptor::get(format!("platform/contacts/{uuid}/funnels/{funnel_name}"))
}

/// Fetch a contact's funnel status by contact e-mail.
pub fn by_email(email: &str, funnel_name: &str) -> ResourceDescriptor {
    ResourceDescriptor::get(format!(
        "platform/contacts/email:{email}/funnels/{funnel_name}"
    ))
}

/// Update a contact's funnel status by identifier field and value.
pub fn update(
    identifier: &str,
    value: &str,
    funnel_name: &str,
    body: Value,
) -> ResourceDescriptor {
    ResourceDescriptor::put(format!(
        "platform/contacts/{identifier}:{value}/funnels/{funnel_name}"
    ))
    .with_body(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resource::Method;
    use serde_json::json;

    #[test]
    fn test_funnel_by_uuid() {
        let descriptor = by_uuid("abc-123", "default");
        assert_eq!(descriptor.path, "platform/contacts/abc-123/funnels/default");
    }

    #[test]
    fn test_funnel_update() {
        let descriptor = update(
            "email",
            "contact@example.com",
            "default",
            json!({"lifecycle_stage": "Client"}),
        );
        assert_eq!(descriptor.method, Method::Put);
        assert_eq!(
            descriptor.path,
            "platform/contacts/email:contact@example.com/funnels/default"
        );
    }
}
