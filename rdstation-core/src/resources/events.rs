//! Event endpoints under `platform/events`.

use serde_json::Value;

use crate::error::RdError;
use crate::events::Event;
use crate::resource::ResourceDescriptor;

/// Record a single event.
pub fn create(event: &Event) -> Result<ResourceDescriptor, RdError> {
    Ok(ResourceDescriptor::post("platform/events").with_body(to_body(event)?))
}

/// Record a batch of events in one call.
pub fn create_batch(events: &[Event]) -> Result<ResourceDescriptor, RdError> {
    let body: Vec<Value> = events.iter().map(to_body).collect::<Result<_, _>>()?;
    Ok(ResourceDescriptor::post("platform/events/batch").with_body(Value::Array(body)))
}

fn to_body(event: &Event) -> Result<Value, RdError> {
    serde_json::to_value(event).map_err(|e| RdError::Config {
        message: format!("event payload not serializable: {e}"),
    })
}
