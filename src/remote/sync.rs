//! Fire-and-forget cart mirroring to a remote endpoint.
//!
//! The local store is the source of truth; the mirror is session telemetry.
//! The cart actor spawns each push and drops the result, so a network
//! failure or a non-2xx response never reaches the user. No retry, no
//! backoff.

use async_trait::async_trait;
use serde::Serialize;

use crate::model::{Cart, ExtraTopping, MeatTopping, OrderType};
use crate::remote::RemoteError;

/// One cart line on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SyncItem {
    pub item_id: u32,
    pub quantity: u32,
    pub meat_topping: Option<MeatTopping>,
    pub extra_toppings: Vec<ExtraTopping>,
}

/// POST body: `{ items: [...], orderType }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSyncPayload {
    pub items: Vec<SyncItem>,
    pub order_type: OrderType,
}

impl CartSyncPayload {
    pub fn of(cart: &Cart) -> Self {
        Self {
            items: cart
                .items
                .iter()
                .map(|line| SyncItem {
                    item_id: line.item_id,
                    quantity: line.quantity,
                    meat_topping: line.meat_topping,
                    extra_toppings: line.extra_toppings.iter().copied().collect(),
                })
                .collect(),
            order_type: cart.order_type,
        }
    }
}

/// Destination for cart snapshots. Object-safe so the cart context can hold
/// an `Arc<dyn CartMirror>`; tests substitute a recording implementation.
#[async_trait]
pub trait CartMirror: Send + Sync {
    async fn push(&self, payload: CartSyncPayload) -> Result<(), RemoteError>;
}

/// The real mirror: POSTs JSON to a fixed endpoint. Any 2xx is success; the
/// response body is not inspected.
pub struct HttpMirror {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpMirror {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl CartMirror for HttpMirror {
    async fn push(&self, payload: CartSyncPayload) -> Result<(), RemoteError> {
        let response = self.http.post(&self.endpoint).json(&payload).send().await?;
        if !response.status().is_success() {
            return Err(RemoteError::Status(response.status()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;

    #[test]
    fn payload_wire_shape_is_camel_case() {
        let mut cart = Cart::new("cart_1");
        cart.add_item(&MenuItem::new(3, "Fried Rice", 300));
        cart.toggle_extra_topping(0, "eggs");
        cart.set_order_type("delivery");

        let json = serde_json::to_value(CartSyncPayload::of(&cart)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "items": [{
                    "itemId": 3,
                    "quantity": 1,
                    "meatTopping": "chicken",
                    "extraToppings": ["eggs"],
                }],
                "orderType": "delivery",
            })
        );
    }

    #[test]
    fn empty_cart_still_serializes() {
        let cart = Cart::new("cart_1");
        let json = serde_json::to_value(CartSyncPayload::of(&cart)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "items": [], "orderType": "dine_in" })
        );
    }
}
