//! System startup, shutdown, and observability wiring.

pub mod cart_system;
pub mod tracing;

pub use cart_system::*;
pub use tracing::*;
