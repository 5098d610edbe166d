use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::cart_actor::{CartAction, CartError};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Cart, CartCreate, MenuItem};
use crate::pricing::CartSummary;

/// Client for interacting with the Cart actor.
///
/// Every mutation answers with the recomputed [`CartSummary`], so the UI can
/// redraw its totals from the response alone.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }

    /// Open a cart. Prior state for the assigned id is rehydrated from the
    /// persistence backend.
    #[instrument(skip(self))]
    pub async fn create_cart(&self) -> Result<String, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate)
            .await
            .map_err(Self::map_error)
    }

    #[instrument(skip(self, item), fields(item = %item.name))]
    pub async fn add_item(&self, cart_id: String, item: MenuItem) -> Result<CartSummary, CartError> {
        self.action(cart_id, CartAction::AddItem(item)).await
    }

    #[instrument(skip(self))]
    pub async fn adjust_quantity(
        &self,
        cart_id: String,
        index: usize,
        delta: i64,
    ) -> Result<CartSummary, CartError> {
        self.action(cart_id, CartAction::AdjustQuantity { index, delta })
            .await
    }

    #[instrument(skip(self))]
    pub async fn set_meat_topping(
        &self,
        cart_id: String,
        index: usize,
        topping: impl Into<String> + std::fmt::Debug,
    ) -> Result<CartSummary, CartError> {
        self.action(
            cart_id,
            CartAction::SetMeatTopping { index, topping: topping.into() },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn toggle_extra_topping(
        &self,
        cart_id: String,
        index: usize,
        topping: impl Into<String> + std::fmt::Debug,
    ) -> Result<CartSummary, CartError> {
        self.action(
            cart_id,
            CartAction::ToggleExtraTopping { index, topping: topping.into() },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn set_order_type(
        &self,
        cart_id: String,
        order_type: impl Into<String> + std::fmt::Debug,
    ) -> Result<CartSummary, CartError> {
        self.action(cart_id, CartAction::SetOrderType(order_type.into()))
            .await
    }

    /// Read-only recompute of the totals.
    #[instrument(skip(self))]
    pub async fn totals(&self, cart_id: String) -> Result<CartSummary, CartError> {
        self.action(cart_id, CartAction::Totals).await
    }

    async fn action(&self, cart_id: String, action: CartAction) -> Result<CartSummary, CartError> {
        debug!(?action, "Sending request");
        self.inner
            .perform_action(cart_id, action)
            .await
            .map(|result| result.into_summary())
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> CartError {
        match e {
            FrameworkError::NotFound(id) => CartError::NotFound(id),
            other => CartError::ActorCommunicationError(other.to_string()),
        }
    }
}
