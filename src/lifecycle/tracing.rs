//! Observability setup.
//!
//! One call to [`setup_tracing`] installs structured logging for the whole
//! system. Verbosity is driven by `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=info cargo test            # lifecycle events only
//! RUST_LOG=debug cargo test           # full action payloads at entry points
//! RUST_LOG=tableside::cart_actor=debug cargo test
//! ```
//!
//! The actors log with an `entity_type` field instead of module paths
//! (`with_target(false)`), so a cart save failure reads as
//! `WARN Cart save failed, keeping in-memory state cart_id="cart_1"` rather
//! than a crate-path prefix. Client methods are `#[instrument]`ed, which
//! shows the request flow as inline span chains in the compact format.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // entity_type fields carry the context instead
        .compact()
        .init();
}
