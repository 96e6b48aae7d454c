//! Webhook subscription endpoints under `integrations/webhooks`.

use serde_json::Value;

use crate::resource::ResourceDescriptor;

/// List the webhook subscriptions of the current account.
pub fn list() -> ResourceDescriptor {
    ResourceDescriptor::get("integrations/webhooks")
}

/// Create a webhook subscription.
pub fn create(body: Value) -> ResourceDescriptor {
    ResourceDescriptor::post("integrations/webhooks").with_body(body)
}

/// Update a webhook subscription by UUID.
pub fn update(uuid: &str, body: Value) -> ResourceDescriptor {
    ResourceDescriptor::put(format!("integrations/webhooks/{uuid}")).with_body(body)
}

/// Delete a webhook subscription by UUID.
pub fn delete(uuid: &str) -> ResourceDescriptor {
    ResourceDescriptor::delete(format!("integrations/webhooks/{uuid}"))
}
