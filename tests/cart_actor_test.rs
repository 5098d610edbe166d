use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;

use tableside::cart_actor::{CartActionResult, CartContext};
use tableside::clients::CartClient;
use tableside::framework::mock::MockClient;
use tableside::model::{Cart, CartRecord, MenuItem, OrderType};
use tableside::pricing::CartSummary;
use tableside::remote::{CartMirror, CartSyncPayload, RemoteError};
use tableside::storage::{CartBackend, MemoryBackend, StorageError};

/// Test double for the server mirror: records every pushed payload.
#[derive(Default)]
struct RecordingMirror {
    pushes: Mutex<Vec<CartSyncPayload>>,
}

#[async_trait]
impl CartMirror for RecordingMirror {
    async fn push(&self, payload: CartSyncPayload) -> Result<(), RemoteError> {
        self.pushes.lock().unwrap().push(payload);
        Ok(())
    }
}

/// A backend where every operation fails, to prove storage trouble never
/// reaches the customer.
struct FailingBackend;

impl CartBackend for FailingBackend {
    fn load(&self, _id: &str) -> Result<Option<CartRecord>, StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk on fire")))
    }

    fn save(&self, _id: &str, _record: &CartRecord) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::other("disk on fire")))
    }
}

/// Mirror pushes are spawned fire-and-forget; give them a beat to land.
async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}

/// Integration test: real Cart actor with a recording mirror.
/// The mirror must fire exactly when the order type actually changes, and
/// the payload must reflect the cart at that moment.
#[tokio::test]
async fn test_mirror_fires_only_on_order_type_change() {
    let mirror = Arc::new(RecordingMirror::default());

    let (cart_actor, cart_client) = tableside::cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(CartContext {
        backend: Arc::new(MemoryBackend::new()),
        mirror: Some(mirror.clone()),
    }));

    let cart_id = cart_client.create_cart().await.unwrap();

    // Item mutations never push
    cart_client
        .add_item(cart_id.clone(), MenuItem::new(1, "Fried Rice", 300))
        .await
        .unwrap();
    cart_client
        .toggle_extra_topping(cart_id.clone(), 0, "eggs")
        .await
        .unwrap();
    settle().await;
    assert!(mirror.pushes.lock().unwrap().is_empty());

    // A recognized order type pushes the current snapshot
    cart_client
        .set_order_type(cart_id.clone(), "delivery")
        .await
        .unwrap();
    settle().await;
    {
        let pushes = mirror.pushes.lock().unwrap();
        assert_eq!(pushes.len(), 1);
        assert_eq!(pushes[0].order_type, OrderType::Delivery);
        assert_eq!(pushes[0].items.len(), 1);
        assert_eq!(pushes[0].items[0].item_id, 1);
        assert_eq!(pushes[0].items[0].quantity, 1);
    }

    // An unrecognized order type is a no-op and must not push
    cart_client
        .set_order_type(cart_id.clone(), "carrier_pigeon")
        .await
        .unwrap();
    settle().await;
    assert_eq!(mirror.pushes.lock().unwrap().len(), 1);

    drop(cart_client);
    actor_handle.await.unwrap();
}

/// Integration test: real Cart actor over a backend that always fails.
/// Every action still succeeds and pricing stays exact; the in-memory cart
/// is authoritative for the session.
#[tokio::test]
async fn test_storage_failures_never_reach_the_customer() {
    let (cart_actor, cart_client) = tableside::cart_actor::new();
    let actor_handle = tokio::spawn(cart_actor.run(CartContext {
        backend: Arc::new(FailingBackend),
        mirror: None,
    }));

    let cart_id = cart_client.create_cart().await.expect("create must succeed");

    cart_client
        .add_item(cart_id.clone(), MenuItem::new(1, "Fried Rice", 300))
        .await
        .expect("add must succeed");
    cart_client
        .toggle_extra_topping(cart_id.clone(), 0, "eggs")
        .await
        .expect("toggle must succeed");
    cart_client
        .adjust_quantity(cart_id.clone(), 0, 1)
        .await
        .expect("adjust must succeed");

    let summary = cart_client
        .set_order_type(cart_id.clone(), "delivery")
        .await
        .expect("order type must succeed");
    assert_eq!(summary.total, 750);

    drop(cart_client);
    actor_handle.await.unwrap();
}

/// Client test with no actor at all: a scripted mock stands in for the cart
/// actor so only the client's request/response mapping is under test.
#[tokio::test]
async fn test_cart_client_with_mocked_actor() {
    let mut mock = MockClient::<Cart>::new();

    let summary = CartSummary {
        items_count: 2,
        subtotal: 650,
        delivery_fee: 100,
        total: 750,
    };
    mock.expect_create().return_ok("cart_1".to_string());
    mock.expect_action()
        .return_ok(CartActionResult::AddItem(summary));

    let client = CartClient::new(mock.client());

    let cart_id = client.create_cart().await.unwrap();
    assert_eq!(cart_id, "cart_1");

    let returned = client
        .add_item(cart_id, MenuItem::new(1, "Fried Rice", 300))
        .await
        .unwrap();
    assert_eq!(returned, summary);

    mock.verify();
}
