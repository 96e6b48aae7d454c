//! Typed payloads for the events endpoint.
//!
//! RD Station Marketing records an event whenever a conversion or a
//! funnel transition happens. Each event is a plain record: an
//! `event_type`, the fixed `CDP` family, and a type-specific payload.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Discriminator sent as `event_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventType {
    #[serde(rename = "CONVERSION")]
    Conversion,
    #[serde(rename = "OPPORTUNITY")]
    Opportunity,
    #[serde(rename = "SALE")]
    Sale,
    #[serde(rename = "OPPORTUNITY_LOST")]
    OpportunityLost,
    #[serde(rename = "ORDER_PLACED")]
    OrderPlaced,
    #[serde(rename = "ORDER_PLACED_ITEM")]
    OrderPlacedItem,
    #[serde(rename = "CART_ABANDONED")]
    CartAbandoned,
}

/// Event family; the marketing events API only accepts `CDP`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventFamily {
    #[serde(rename = "CDP")]
    Cdp,
}

/// Legal basis attached to a contact, per LGPD.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LegalBasis {
    pub category: String,
    #[serde(rename = "type")]
    pub basis_type: String,
    pub status: String,
}

impl LegalBasis {
    pub fn new(
        category: impl Into<String>,
        basis_type: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            category: category.into(),
            basis_type: basis_type.into(),
            status: status.into(),
        }
    }
}

/// Payload for a `CONVERSION` event.
///
/// `conversion_identifier` names the conversion; everything else is
/// optional contact data. Custom fields (`cf_*`) are flattened into the
/// payload object.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConversionPayload {
    pub conversion_identifier: String,
    pub email: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub personal_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile_phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_medium: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traffic_campaign: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_for_mailing: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legal_bases: Vec<LegalBasis>,

    /// Custom `cf_*` fields, flattened into the payload.
    #[serde(flatten)]
    pub custom_fields: Map<String, Value>,
}

impl ConversionPayload {
    pub fn new(conversion_identifier: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            conversion_identifier: conversion_identifier.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    pub fn with_legal_basis(mut self, basis: LegalBasis) -> Self {
        self.legal_bases.push(basis);
        self
    }

    /// Attach a custom field. The identifier must carry the `cf_` prefix.
    pub fn with_custom_field(mut self, identifier: impl Into<String>, value: Value) -> Self {
        self.custom_fields.insert(identifier.into(), value);
        self
    }
}

/// Payload for an `OPPORTUNITY` event: marks a contact as an
/// opportunity in a funnel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityPayload {
    pub funnel_name: String,
    pub email: String,
}

/// Payload for a `SALE` event: marks an opportunity as won.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalePayload {
    pub funnel_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

/// Payload for an `OPPORTUNITY_LOST` event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OpportunityLostPayload {
    pub funnel_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Payload for an `ORDER_PLACED` e-commerce event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPlacedPayload {
    pub email: String,
    pub cf_order_id: String,
    pub cf_order_total_items: i64,
    pub cf_order_status: String,
    pub cf_order_payment_method: String,
    pub cf_order_payment_amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legal_bases: Vec<LegalBasis>,
}

impl OrderPlacedPayload {
    pub fn new(email: impl Into<String>, cf_order_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            cf_order_id: cf_order_id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_legal_basis(mut self, basis: LegalBasis) -> Self {
        self.legal_bases.push(basis);
        self
    }
}

/// Payload for an `ORDER_PLACED_ITEM` event: one line item of an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrderPlacedItemPayload {
    pub email: String,
    pub cf_order_id: String,
    pub cf_order_product_id: String,
    pub cf_order_product_sku: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legal_bases: Vec<LegalBasis>,
}

impl OrderPlacedItemPayload {
    pub fn new(email: impl Into<String>, cf_order_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            cf_order_id: cf_order_id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_legal_basis(mut self, basis: LegalBasis) -> Self {
        self.legal_bases.push(basis);
        self
    }
}

/// Payload for a `CART_ABANDONED` e-commerce event.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CartAbandonedPayload {
    pub email: String,
    pub cf_cart_id: String,
    pub cf_cart_total_items: i64,
    pub cf_cart_status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub legal_bases: Vec<LegalBasis>,
}

impl CartAbandonedPayload {
    pub fn new(email: impl Into<String>, cf_cart_id: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            cf_cart_id: cf_cart_id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_legal_basis(mut self, basis: LegalBasis) -> Self {
        self.legal_bases.push(basis);
        self
    }
}

/// Payload variants, serialized untagged inside the event envelope.
///
/// Serialize-only: several variants are structurally overlapping (an
/// `OPPORTUNITY_LOST` payload without a `reason` is indistinguishable
/// from an `OPPORTUNITY` one), so decoding must key off `event_type`
/// rather than payload shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum EventPayload {
    Conversion(ConversionPayload),
    Opportunity(OpportunityPayload),
    Sale(SalePayload),
    OpportunityLost(OpportunityLostPayload),
    OrderPlaced(OrderPlacedPayload),
    OrderPlacedItem(OrderPlacedItemPayload),
    CartAbandoned(CartAbandonedPayload),
}

/// A complete event envelope ready for `platform/events`.
#[derive(Debug, Clone, Serialize)]
pub struct Event {
    pub event_type: EventType,
    pub event_family: EventFamily,
    pub payload: EventPayload,
}

impl Event {
    /// Create a `CONVERSION` event.
    pub fn conversion(payload: ConversionPayload) -> Self {
        Self {
            event_type: EventType::Conversion,
            event_family: EventFamily::Cdp,
            payload: EventPayload::Conversion(payload),
        }
    }

    /// Create an `OPPORTUNITY` event.
    pub fn opportunity(funnel_name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            event_type: EventType::Opportunity,
            event_family: EventFamily::Cdp,
            payload: EventPayload::Opportunity(OpportunityPayload {
                funnel_name: funnel_name.into(),
                email: email.into(),
            }),
        }
    }

    /// Create a `SALE` event (opportunity won).
    pub fn sale(
        funnel_name: impl Into<String>,
        email: impl Into<String>,
        value: Option<f64>,
    ) -> Self {
        Self {
            event_type: EventType::Sale,
            event_family: EventFamily::Cdp,
            payload: EventPayload::Sale(SalePayload {
                funnel_name: funnel_name.into(),
                email: email.into(),
                value,
            }),
        }
    }

    /// Create an `OPPORTUNITY_LOST` event.
    pub fn opportunity_lost(
        funnel_name: impl Into<String>,
        email: impl Into<String>,
        reason: Option<String>,
    ) -> Self {
        Self {
            event_type: EventType::OpportunityLost,
            event_family: EventFamily::Cdp,
            payload: EventPayload::OpportunityLost(OpportunityLostPayload {
                funnel_name: funnel_name.into(),
                email: email.into(),
                reason,
            }),
        }
    }

    /// Create an `ORDER_PLACED` event.
    pub fn order_placed(payload: OrderPlacedPayload) -> Self {
        Self {
            event_type: EventType::OrderPlaced,
            event_family: EventFamily::Cdp,
            payload: EventPayload::OrderPlaced(payload),
        }
    }

    /// Create an `ORDER_PLACED_ITEM` event.
    pub fn order_placed_item(payload: OrderPlacedItemPayload) -> Self {
        Self {
            event_type: EventType::OrderPlacedItem,
            event_family: EventFamily::Cdp,
            payload: EventPayload::OrderPlacedItem(payload),
        }
    }

    /// Create a `CART_ABANDONED` event.
    pub fn cart_abandoned(payload: CartAbandonedPayload) -> Self {
        Self {
            event_type: EventType::CartAbandoned,
            event_family: EventFamily::Cdp,
            payload: EventPayload::CartAbandoned(payload),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_conversion_event_serialization() {
        let event = Event::conversion(
            ConversionPayload::new("newsletter-signup", "contact@example.com")
                .with_name("RD Station Developer")
                .with_tags(vec!["mql".to_string()])
                .with_custom_field("cf_language", json!("pt-BR")),
        );

        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "CONVERSION");
        assert_eq!(value["event_family"], "CDP");
        assert_eq!(value["payload"]["conversion_identifier"], "newsletter-signup");
        assert_eq!(value["payload"]["cf_language"], "pt-BR");
        assert_eq!(value["payload"]["tags"][0], "mql");
        // Unset optionals are omitted entirely.
        assert!(value["payload"].get("job_title").is_none());
    }

    #[test]
    fn test_sale_event_serialization() {
        let event = Event::sale("default", "contact@example.com", Some(1250.0));
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "SALE");
        assert_eq!(value["payload"]["funnel_name"], "default");
        assert_eq!(value["payload"]["value"], 1250.0);
    }

    #[test]
    fn test_opportunity_lost_without_reason() {
        let event = Event::opportunity_lost("default", "contact@example.com", None);
        let value = serde_json::to_value(&event).unwrap();
        assert_eq!(value["event_type"], "OPPORTUNITY_LOST");
        assert!(value["payload"].get("reason").is_none());
        // Shape matches OPPORTUNITY exactly; only the discriminator differs.
        let opportunity = serde_json::to_value(Event::opportunity("default", "contact@example.com")).unwrap();
        assert_eq!(value["payload"], opportunity["payload"]);
    }

    #[test]
    fn test_order_placed_event_serialization() {
        let payload = OrderPlacedPayload {
            cf_order_total_items: 3,
            cf_order_status: "paid".to_string(),
            cf_order_payment_method: "credit_card".to_string(),
            cf_order_payment_amount: 149.90,
            ..OrderPlacedPayload::new("buyer@example.com", "order-42")
        };
        let value = serde_json::to_value(Event::order_placed(payload)).unwrap();
        assert_eq!(value["event_type"], "ORDER_PLACED");
        assert_eq!(value["event_family"], "CDP");
        assert_eq!(value["payload"]["cf_order_id"], "order-42");
        assert_eq!(value["payload"]["cf_order_total_items"], 3);
        assert_eq!(value["payload"]["cf_order_payment_amount"], 149.90);
        assert!(value["payload"].get("name").is_none());
    }

    #[test]
    fn test_order_placed_item_event_serialization() {
        let payload = OrderPlacedItemPayload {
            cf_order_product_id: "prod-7".to_string(),
            cf_order_product_sku: "SKU-7".to_string(),
            ..OrderPlacedItemPayload::new("buyer@example.com", "order-42")
        };
        let value = serde_json::to_value(Event::order_placed_item(payload)).unwrap();
        assert_eq!(value["event_type"], "ORDER_PLACED_ITEM");
        assert_eq!(value["payload"]["cf_order_id"], "order-42");
        assert_eq!(value["payload"]["cf_order_product_sku"], "SKU-7");
    }

    #[test]
    fn test_cart_abandoned_event_serialization() {
        let payload = CartAbandonedPayload {
            cf_cart_total_items: 2,
            cf_cart_status: "open".to_string(),
            ..CartAbandonedPayload::new("buyer@example.com", "cart-9")
        }
        .with_name("Buyer")
        .with_legal_basis(LegalBasis::new("communications", "consent", "granted"));
        let value = serde_json::to_value(Event::cart_abandoned(payload)).unwrap();
        assert_eq!(value["event_type"], "CART_ABANDONED");
        assert_eq!(value["payload"]["cf_cart_id"], "cart-9");
        assert_eq!(value["payload"]["cf_cart_total_items"], 2);
        assert_eq!(value["payload"]["name"], "Buyer");
        assert_eq!(value["payload"]["legal_bases"][0]["type"], "consent");
    }
}
