use std::sync::Arc;

use tracing::{error, info};

use crate::cart_actor::CartContext;
use crate::clients::{CartClient, ReviewClient};
use crate::remote::CartMirror;
use crate::storage::{CartBackend, MemoryBackend};

/// The runtime orchestrator for the storefront actor system.
///
/// `CartSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Injecting the storage backend and the optional
///   server mirror into the cart actor's context
///
/// # Architecture
///
/// The system consists of two actors:
/// - **Cart Actor**: Manages carts (items, toppings, order type, totals),
///   persisting every mutation through the injected [`CartBackend`]
/// - **Review Actor**: Manages customer reviews and their helpful counters
///
/// # Example
///
/// ```ignore
/// let system = CartSystem::in_memory();
///
/// let cart_id = system.cart_client.create_cart().await?;
/// let summary = system.cart_client.add_item(&cart_id, fried_rice).await?;
///
/// system.shutdown().await?;
/// ```
pub struct CartSystem {
    /// Client for interacting with the Cart actor
    pub cart_client: CartClient,

    /// Client for interacting with the Review actor
    pub review_client: ReviewClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CartSystem {
    /// Creates and initializes a new `CartSystem` with all actors running.
    ///
    /// The cart actor runs with the given storage backend; carts rehydrate
    /// from it on creation and write back after every mutation. When a
    /// `mirror` is supplied, checkout-bound carts are additionally pushed to
    /// it on a best-effort basis.
    pub fn new(backend: Arc<dyn CartBackend>, mirror: Option<Arc<dyn CartMirror>>) -> Self {
        let (cart_actor, cart_client) = crate::cart_actor::new();
        let (review_actor, review_client) = crate::review_actor::new();

        let cart_handle = tokio::spawn(cart_actor.run(CartContext { backend, mirror }));

        // Reviews have no dependencies (Context = ())
        let review_handle = tokio::spawn(review_actor.run(()));

        Self {
            cart_client,
            review_client,
            handles: vec![cart_handle, review_handle],
        }
    }

    /// Convenience constructor backed by a fresh in-process store, with no
    /// server mirror. Suitable for tests and local development.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryBackend::new()), None)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Dropping the clients closes their channels; each actor detects the
    /// closed channel and exits its event loop. Returns an error if any
    /// actor task panicked.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down cart system...");

        drop(self.cart_client);
        drop(self.review_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("Cart system shutdown complete.");
        Ok(())
    }
}

impl Default for CartSystem {
    fn default() -> Self {
        Self::in_memory()
    }
}
