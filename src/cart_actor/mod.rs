//! Cart-specific resource logic: the cart store and its fee/topping rules.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use entity::CartContext;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::CartClient;
use crate::framework::ResourceActor;
use crate::model::Cart;

/// Creates a new Cart actor and its client.
pub fn new() -> (ResourceActor<Cart>, CartClient) {
    let cart_id_counter = Arc::new(AtomicU64::new(1));
    let next_cart_id = move || {
        let id = cart_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("cart_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_cart_id);
    let client = CartClient::new(generic_client);

    (actor, client)
}
