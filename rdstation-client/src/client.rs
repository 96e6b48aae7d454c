//! The `RdStationClient` facade.
//!
//! One typed helper per endpoint, each pairing a descriptor
//! constructor from [`rdstation_core::resources`] with the dispatcher.

use std::sync::Arc;

use serde_json::Value;

use rdstation_core::{
    events::Event,
    model::{Credentials, TokenState},
    resource::ResourceDescriptor,
    resources,
    RdError,
};

use crate::config::RdSettings;
use crate::dispatcher::Dispatcher;
use crate::token::TokenManager;

/// Async client for the RD Station Marketing API.
///
/// Safe to share across tasks: wrap it in an [`Arc`] and call it from
/// anywhere. Token refreshes are serialized internally.
///
/// # Example
///
/// ```no_run
/// use rdstation_client::{Credentials, RdStationClient};
///
/// #[tokio::main]
/// async fn main() -> Result<(), rdstation_client::RdError> {
///     let credentials = Credentials::new("client-id", "client-secret", "auth-code");
///     let client = RdStationClient::new(credentials)?;
///
///     let account = client.account_info().await?;
///     println!("account: {}", account["name"]);
///     Ok(())
/// }
/// ```
#[derive(Debug)]
pub struct RdStationClient {
    dispatcher: Dispatcher,
    tokens: Arc<TokenManager>,
}

impl RdStationClient {
    /// Create a client with the default settings.
    pub fn new(credentials: Credentials) -> Result<Self, RdError> {
        Self::with_settings(credentials, RdSettings::default())
    }

    /// Create a client with explicit settings.
    pub fn with_settings(credentials: Credentials, settings: RdSettings) -> Result<Self, RdError> {
        settings.validate()?;

        let http = reqwest::Client::builder()
            .timeout(settings.request_timeout())
            .user_agent(settings.user_agent.as_str())
            .build()
            .map_err(|e| RdError::Config {
                message: format!("failed to build HTTP client: {e}"),
            })?;

        let tokens = Arc::new(TokenManager::new(
            credentials,
            settings.clone(),
            http.clone(),
        ));
        let dispatcher = Dispatcher::new(settings, http, Arc::clone(&tokens));

        Ok(Self { dispatcher, tokens })
    }

    /// Execute an arbitrary resource descriptor.
    ///
    /// The typed helpers below all route through here; this is also the
    /// integration point for endpoints the SDK does not wrap yet.
    pub async fn execute(&self, descriptor: &ResourceDescriptor) -> Result<Value, RdError> {
        self.dispatcher.execute(descriptor).await
    }

    /// Get a valid bearer token, exchanging or refreshing as needed.
    pub async fn ensure_valid_token(&self) -> Result<rdstation_core::Secret, RdError> {
        self.tokens.ensure_valid_token().await
    }

    /// Snapshot of the current token state.
    pub async fn token_state(&self) -> TokenState {
        self.tokens.token_state().await
    }

    /// Revoke the current grant (best effort) and clear local state.
    pub async fn revoke_access(&self) {
        self.tokens.revoke().await;
    }

    // marketing

    /// Account name and details of the current account.
    pub async fn account_info(&self) -> Result<Value, RdError> {
        self.execute(&resources::marketing::account_info()).await
    }

    /// Tracking code loader script reference.
    pub async fn tracking_code(&self) -> Result<Value, RdError> {
        self.execute(&resources::marketing::tracking_code()).await
    }

    // contacts

    /// Contact data by UUID.
    pub async fn contact_by_uuid(&self, uuid: &str) -> Result<Value, RdError> {
        self.execute(&resources::contacts::by_uuid(uuid)).await
    }

    /// Contact data by e-mail.
    pub async fn contact_by_email(&self, email: &str) -> Result<Value, RdError> {
        self.execute(&resources::contacts::by_email(email)).await
    }

    /// Update a contact's properties by UUID.
    pub async fn update_contact(&self, uuid: &str, body: Value) -> Result<Value, RdError> {
        self.execute(&resources::contacts::update_by_uuid(uuid, body))
            .await
    }

    /// Upsert a contact by identifier field (`email` or `uuid`) and value.
    pub async fn upsert_contact(
        &self,
        identifier: &str,
        value: &str,
        body: Value,
    ) -> Result<Value, RdError> {
        self.execute(&resources::contacts::upsert(identifier, value, body))
            .await
    }

    // funnels

    /// A contact's funnel status by contact UUID.
    pub async fn contact_funnel_by_uuid(
        &self,
        uuid: &str,
        funnel_name: &str,
    ) -> Result<Value, RdError> {
        self.execute(&resources::funnels::by_uuid(uuid, funnel_name))
            .await
    }

    /// A contact's funnel status by contact e-mail.
    pub async fn contact_funnel_by_email(
        &self,
        email: &str,
        funnel_name: &str,
    ) -> Result<Value, RdError> {
        self.execute(&resources::funnels::by_email(email, funnel_name))
            .await
    }

    /// Update a contact's funnel status.
    pub async fn update_contact_funnel(
        &self,
        identifier: &str,
        value: &str,
        funnel_name: &str,
        body: Value,
    ) -> Result<Value, RdError> {
        self.execute(&resources::funnels::update(identifier, value, funnel_name, body))
            .await
    }

    // fields

    /// List the fields of the current account.
    pub async fn list_fields(&self) -> Result<Value, RdError> {
        self.execute(&resources::fields::list()).await
    }

    /// Create a custom field.
    pub async fn create_field(&self, body: Value) -> Result<Value, RdError> {
        self.execute(&resources::fields::create(body)).await
    }

    /// Update a field by UUID.
    pub async fn update_field(&self, uuid: &str, body: Value) -> Result<Value, RdError> {
        self.execute(&resources::fields::update(uuid, body)).await
    }

    /// Delete a field by UUID.
    pub async fn delete_field(&self, uuid: &str) -> Result<Value, RdError> {
        self.execute(&resources::fields::delete(uuid)).await
    }

    // webhooks

    /// List webhook subscriptions.
    pub async fn list_webhooks(&self) -> Result<Value, RdError> {
        self.execute(&resources::webhooks::list()).await
    }

    /// Create a webhook subscription.
    pub async fn create_webhook(&self, body: Value) -> Result<Value, RdError> {
        self.execute(&resources::webhooks::create(body)).await
    }

    /// Update a webhook subscription by UUID.
    pub async fn update_webhook(&self, uuid: &str, body: Value) -> Result<Value, RdError> {
        self.execute(&resources::webhooks::update(uuid, body)).await
    }

    /// Delete a webhook subscription by UUID.
    pub async fn delete_webhook(&self, uuid: &str) -> Result<Value, RdError> {
        self.execute(&resources::webhooks::delete(uuid)).await
    }

    // events

    /// Record a single marketing event.
    pub async fn send_event(&self, event: &Event) -> Result<Value, RdError> {
        let descriptor = resources::events::create(event)?;
        self.execute(&descriptor).await
    }

    /// Record a batch of marketing events in one call.
    pub async fn send_event_batch(&self, events: &[Event]) -> Result<Value, RdError> {
        let descriptor = resources::events::create_batch(events)?;
        self.execute(&descriptor).await
    }
}
