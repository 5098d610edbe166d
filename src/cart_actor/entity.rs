//! [`ActorEntity`] implementation for [`Cart`]: wires the plain state
//! mutations to persistence and the remote mirror.
//!
//! Every mutating action saves the whole record afterwards. A save failure
//! is logged and swallowed; the in-memory cart stays authoritative for the
//! session. The mirror push on order-type changes is spawned and never
//! awaited, so a dead endpoint cannot stall the actor loop.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, warn};

use super::actions::{CartAction, CartActionResult};
use crate::framework::ActorEntity;
use crate::model::{Cart, CartCreate};
use crate::pricing::CartSummary;
use crate::remote::{CartMirror, CartSyncPayload};
use crate::storage::CartBackend;

/// Runtime dependencies injected into the cart actor.
pub struct CartContext {
    pub backend: Arc<dyn CartBackend>,
    pub mirror: Option<Arc<dyn CartMirror>>,
}

#[async_trait]
impl ActorEntity for Cart {
    type Id = String;
    type CreateParams = CartCreate;
    type UpdateParams = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = CartContext;

    fn from_create_params(id: String, _params: CartCreate) -> Result<Self, String> {
        Ok(Cart::new(id))
    }

    /// Rehydrate from the backend. A missing or malformed record just means
    /// the cart starts empty; a backend failure is not fatal either.
    async fn on_create(&mut self, ctx: &CartContext) -> Result<(), String> {
        match ctx.backend.load(&self.id) {
            Ok(Some(record)) => {
                self.restore(record);
                debug!(cart_id = %self.id, lines = self.items.len(), "Cart rehydrated");
            }
            Ok(None) => {}
            Err(e) => {
                warn!(cart_id = %self.id, error = %e, "Cart load failed, starting empty");
            }
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &CartContext) -> Result<(), String> {
        // all cart mutations are actions
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        ctx: &CartContext,
    ) -> Result<CartActionResult, String> {
        let result = match action {
            CartAction::AddItem(item) => {
                self.add_item(&item);
                persist(self, ctx);
                CartActionResult::AddItem(CartSummary::of(self))
            }
            CartAction::AdjustQuantity { index, delta } => {
                self.adjust_quantity(index, delta);
                persist(self, ctx);
                CartActionResult::AdjustQuantity(CartSummary::of(self))
            }
            CartAction::SetMeatTopping { index, topping } => {
                self.set_meat_topping(index, &topping);
                persist(self, ctx);
                CartActionResult::SetMeatTopping(CartSummary::of(self))
            }
            CartAction::ToggleExtraTopping { index, topping } => {
                self.toggle_extra_topping(index, &topping);
                persist(self, ctx);
                CartActionResult::ToggleExtraTopping(CartSummary::of(self))
            }
            CartAction::SetOrderType(raw) => {
                let changed = self.set_order_type(&raw);
                persist(self, ctx);
                if changed {
                    mirror(self, ctx);
                }
                CartActionResult::SetOrderType(CartSummary::of(self))
            }
            CartAction::Totals => CartActionResult::Totals(CartSummary::of(self)),
        };
        Ok(result)
    }
}

/// Write-through after a mutation; failure leaves the session in-memory only.
fn persist(cart: &Cart, ctx: &CartContext) {
    if let Err(e) = ctx.backend.save(&cart.id, &cart.record()) {
        warn!(cart_id = %cart.id, error = %e, "Cart save failed, keeping in-memory state");
    }
}

/// Fire-and-forget snapshot push; the result is logged and dropped.
fn mirror(cart: &Cart, ctx: &CartContext) {
    let Some(mirror) = ctx.mirror.clone() else {
        return;
    };
    let payload = CartSyncPayload::of(cart);
    let cart_id = cart.id.clone();
    tokio::spawn(async move {
        if let Err(e) = mirror.push(payload).await {
            debug!(cart_id = %cart_id, error = %e, "Cart mirror push failed");
        }
    });
}
