//! # Tableside
//!
//! > **The storefront state engine for a small restaurant.**
//!
//! This crate implements the customer-facing ordering logic of a restaurant as
//! an actor system built on Tokio. Carts, topping customization, pricing, and
//! reviews live inside isolated actors; the rest of the application talks to
//! them through typed clients.
//!
//! ## Core Concepts
//!
//! ### Carts as Actors
//! Every cart mutation (add an item, pick a meat, toggle an extra, switch the
//! order type) flows through a single [`ResourceActor`](framework::ResourceActor)
//! task, so cart state never needs a lock. The actor persists after each
//! mutation through an injected [`CartBackend`](storage::CartBackend) and
//! rehydrates from it when a cart is created, which is how a returning
//! customer gets their cart back.
//!
//! ### Best-Effort Persistence
//! The in-memory cart is authoritative. A failing backend or server mirror is
//! logged and swallowed; the customer keeps shopping and pricing stays exact.
//!
//! ### Deterministic Pricing
//! [`pricing`] is a pure module: unit price = base + meat + extras, totals add
//! the order-type fee (delivery carries a flat surcharge). All money is whole
//! rupees, so totals compare exactly.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! The generic `ResourceActor<T>` message loop shared by every actor, plus a
//! [`MockClient`](framework::mock::MockClient) for testing callers without
//! running real actors.
//!
//! ### 2. The Domain ([`model`], [`catalog`](model::catalog), [`pricing`])
//! Menu items, line items, toppings, order types, reviews, and the pure
//! pricing rules over them.
//!
//! ### 3. The Actors ([`cart_actor`], [`review_actor`])
//! Concrete [`ActorEntity`](framework::ActorEntity) implementations. The cart
//! actor's context carries the storage backend and an optional server mirror;
//! the review actor is self-contained.
//!
//! ### 4. The Edges ([`storage`], [`remote`], [`reservations`])
//! Pluggable persistence (JSON files or in-process memory), the HTTP sync and
//! table-availability clients, and the reservation slot rules.
//!
//! ### 5. The Interface ([`clients`], [`lifecycle`])
//! Typed clients over the raw message passing, and the
//! [`CartSystem`](lifecycle::CartSystem) orchestrator that starts, wires, and
//! shuts down the actors.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tableside::lifecycle::CartSystem;
//! use tableside::model::MenuItem;
//!
//! let system = CartSystem::in_memory();
//! let cart_id = system.cart_client.create_cart().await?;
//! let summary = system
//!     .cart_client
//!     .add_item(cart_id.clone(), MenuItem::new(1, "Fried Rice", 300))
//!     .await?;
//! system.shutdown().await?;
//! ```
//!
//! ```bash
//! # Run the tests with logs
//! RUST_LOG=info cargo test
//! ```

pub mod cart_actor;
pub mod clients;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod pricing;
pub mod remote;
pub mod reservations;
pub mod review_actor;
pub mod storage;
