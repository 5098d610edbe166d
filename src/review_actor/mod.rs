//! Review-specific resource logic, including the helpful-vote action.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::clients::ReviewClient;
use crate::framework::ResourceActor;
use crate::model::Review;

/// Creates a new Review actor and its client.
pub fn new() -> (ResourceActor<Review>, ReviewClient) {
    let review_id_counter = Arc::new(AtomicU64::new(1));
    let next_review_id = move || {
        let id = review_id_counter.fetch_add(1, Ordering::SeqCst);
        format!("review_{}", id)
    };

    let (actor, generic_client) = ResourceActor::new(32, next_review_id);
    let client = ReviewClient::new(generic_client);

    (actor, client)
}
