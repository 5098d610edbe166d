//! Generic actor framework: the [`ActorEntity`] contract, the
//! [`ResourceActor`] message loop, and the [`ResourceClient`] handle.
//!
//! See [`mock`] for testing clients without spawning real actors.

pub mod core;
pub mod mock;

pub use core::*;
