use std::sync::Arc;

use tableside::clients::actor_client::ActorClient;
use tableside::lifecycle::CartSystem;
use tableside::model::{MeatTopping, MenuItem, OrderType, Recommend, ReviewCreate};
use tableside::review_actor::ReviewError;
use tableside::storage::MemoryBackend;

fn fried_rice() -> MenuItem {
    MenuItem::new(1, "Fried Rice", 300)
}

/// Full end-to-end test with all real actors and an in-memory backend.
/// This walks the canonical checkout scenario through the whole system.
#[tokio::test]
async fn test_full_cart_system_integration() {
    let system = CartSystem::in_memory();

    // Open a cart
    let cart_id = system
        .cart_client
        .create_cart()
        .await
        .expect("Failed to create cart");

    // Add Fried Rice (300); customizable dishes default to free chicken
    let summary = system
        .cart_client
        .add_item(cart_id.clone(), fried_rice())
        .await
        .expect("Failed to add item");
    assert_eq!(summary.items_count, 1);
    assert_eq!(summary.subtotal, 300);
    assert_eq!(summary.total, 300);

    // Toggle eggs (25) onto the line
    let summary = system
        .cart_client
        .toggle_extra_topping(cart_id.clone(), 0, "eggs")
        .await
        .expect("Failed to toggle extra");
    assert_eq!(summary.subtotal, 325);

    // Bump to quantity 2 and switch to delivery (fee 100)
    system
        .cart_client
        .adjust_quantity(cart_id.clone(), 0, 1)
        .await
        .expect("Failed to adjust quantity");
    let summary = system
        .cart_client
        .set_order_type(cart_id.clone(), "delivery")
        .await
        .expect("Failed to set order type");
    assert_eq!(summary.items_count, 2);
    assert_eq!(summary.subtotal, 650);
    assert_eq!(summary.delivery_fee, 100);
    assert_eq!(summary.total, 750);

    // An unknown order type is a no-op; the fee stays
    let summary = system
        .cart_client
        .set_order_type(cart_id.clone(), "teleport")
        .await
        .expect("Failed to send order type");
    assert_eq!(summary.delivery_fee, 100);
    assert_eq!(summary.total, 750);

    // The cart itself is retrievable through the generic interface
    let cart = system
        .cart_client
        .get(cart_id.clone())
        .await
        .expect("Failed to get cart")
        .expect("Cart not found");
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
    assert_eq!(cart.items[0].meat_topping, Some(MeatTopping::Chicken));
    assert_eq!(cart.order_type, OrderType::Delivery);

    // Actions against a missing cart surface as NotFound
    let missing = system.cart_client.totals("cart_404".to_string()).await;
    assert!(missing.is_err(), "Expected NotFound for unknown cart");

    // Graceful shutdown
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Repeated adds of the same configuration merge into one line; a different
/// configuration opens a second line.
#[tokio::test]
async fn test_merge_on_add() {
    let system = CartSystem::in_memory();
    let cart_id = system.cart_client.create_cart().await.unwrap();

    system
        .cart_client
        .add_item(cart_id.clone(), fried_rice())
        .await
        .unwrap();
    let summary = system
        .cart_client
        .add_item(cart_id.clone(), fried_rice())
        .await
        .unwrap();
    assert_eq!(summary.items_count, 2);

    let cart = system.cart_client.get(cart_id.clone()).await.unwrap().unwrap();
    assert_eq!(cart.items.len(), 1, "Identical adds should merge");
    assert_eq!(cart.items[0].quantity, 2);

    // Change the first line's meat; a plain add no longer matches it
    system
        .cart_client
        .set_meat_topping(cart_id.clone(), 0, "beef")
        .await
        .unwrap();
    system
        .cart_client
        .add_item(cart_id.clone(), fried_rice())
        .await
        .unwrap();

    let cart = system.cart_client.get(cart_id.clone()).await.unwrap().unwrap();
    assert_eq!(cart.items.len(), 2, "Different toppings are distinct lines");

    system.shutdown().await.unwrap();
}

/// A cart persisted by one system run is rehydrated by the next run that
/// shares the same backend, the way a returning browser session gets its
/// cart back.
#[tokio::test]
async fn test_cart_rehydrates_across_restarts() {
    let backend = Arc::new(MemoryBackend::new());

    // First session: build up a cart, then shut everything down
    let system = CartSystem::new(backend.clone(), None);
    let cart_id = system.cart_client.create_cart().await.unwrap();
    system
        .cart_client
        .add_item(cart_id.clone(), fried_rice())
        .await
        .unwrap();
    system
        .cart_client
        .toggle_extra_topping(cart_id.clone(), 0, "cheese")
        .await
        .unwrap();
    system
        .cart_client
        .set_order_type(cart_id.clone(), "delivery")
        .await
        .unwrap();
    let before = system.cart_client.totals(cart_id.clone()).await.unwrap();
    system.shutdown().await.unwrap();

    // Second session over the same backend: id generation restarts at 1,
    // so the same cart id comes back and rehydrates from storage
    let system = CartSystem::new(backend, None);
    let revived_id = system.cart_client.create_cart().await.unwrap();
    assert_eq!(revived_id, cart_id);

    let after = system.cart_client.totals(revived_id.clone()).await.unwrap();
    assert_eq!(after, before, "Totals must survive a restart");

    let cart = system.cart_client.get(revived_id).await.unwrap().unwrap();
    assert_eq!(cart.order_type, OrderType::Delivery);
    system.shutdown().await.unwrap();
}

/// Concurrent adds against one cart serialize through the actor.
#[tokio::test]
async fn test_concurrent_adds() {
    let system = CartSystem::in_memory();
    let cart_id = system.cart_client.create_cart().await.unwrap();

    let mut handles = vec![];
    for _ in 0..10 {
        let cart_client = system.cart_client.clone();
        let id = cart_id.clone();
        handles.push(tokio::spawn(async move {
            cart_client.add_item(id, MenuItem::new(1, "Fried Rice", 300)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("add_item failed");
    }

    let summary = system.cart_client.totals(cart_id.clone()).await.unwrap();
    assert_eq!(summary.items_count, 10);
    assert_eq!(summary.subtotal, 3000);

    let cart = system.cart_client.get(cart_id).await.unwrap().unwrap();
    assert_eq!(cart.items.len(), 1, "Identical concurrent adds merge");

    system.shutdown().await.unwrap();
}

/// Reviews: creation validates the rating, and helpful votes accumulate.
#[tokio::test]
async fn test_review_lifecycle() {
    let system = CartSystem::in_memory();

    let review = ReviewCreate {
        user_name: "Priya".into(),
        review_title: "Best ramen in town".into(),
        review_text: "The shrimp ramen is worth the trip alone.".into(),
        rating: 5,
        dishes_ordered: "Shrimp Ramen, Iced Tea".into(),
        date_of_visit: "2026-08-20".into(),
        would_recommend: Recommend::Yes,
    };
    let review_id = system
        .review_client
        .create_review(review.clone())
        .await
        .expect("Failed to create review");

    assert_eq!(system.review_client.mark_helpful(review_id.clone()).await.unwrap(), 1);
    assert_eq!(system.review_client.mark_helpful(review_id.clone()).await.unwrap(), 2);

    let stored = system
        .review_client
        .get(review_id)
        .await
        .unwrap()
        .expect("Review not found");
    assert_eq!(stored.helpful, 2);
    assert_eq!(stored.rating.stars(), 5);

    // An out-of-range rating is rejected at creation
    let mut bad = review;
    bad.rating = 6;
    let err = system.review_client.create_review(bad).await.unwrap_err();
    assert!(matches!(err, ReviewError::ValidationError(_)));

    system.shutdown().await.unwrap();
}
