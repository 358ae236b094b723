//! Order payloads.
//!
//! An [`OrderRequest`] is write-only: it is built from the cart at submission time,
//! posted once, and never kept. The backend answers with an [`OrderReceipt`].
use crate::model::{ItemId, OrderId, RestaurantId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One cart line frozen into the order payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderLine {
    pub item_id: ItemId,
    pub name: String,
    pub qty: u32,
    pub price: f64,
}

/// Body of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub restaurant_id: RestaurantId,
    pub items: Vec<OrderLine>,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub total: f64,
    pub customer_name: String,
    pub address: String,
}

/// Response of `POST /api/orders`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderReceipt {
    pub order_id: OrderId,
}

/// An order request together with the key the server uses to deduplicate retries.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderSubmission {
    pub idempotency_key: Uuid,
    pub request: OrderRequest,
}

/// Placeholder customer details sent with every order.
///
/// The storefront has no sign-in flow, so these come from configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerDetails {
    pub name: String,
    pub address: String,
}

impl Default for CustomerDetails {
    fn default() -> Self {
        Self {
            name: "Guest".to_string(),
            address: "Demo Address".to_string(),
        }
    }
}
