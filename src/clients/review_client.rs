use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{Review, ReviewCreate};
use crate::review_actor::{ReviewAction, ReviewActionResult, ReviewError};

/// Client for interacting with the Review actor.
#[derive(Clone)]
pub struct ReviewClient {
    inner: ResourceClient<Review>,
}

impl ReviewClient {
    pub fn new(inner: ResourceClient<Review>) -> Self {
        Self { inner }
    }

    /// Submit a review. Rating validation happens in the entity; a rejected
    /// rating comes back as [`ReviewError::ValidationError`].
    #[instrument(skip(self, review), fields(user = %review.user_name))]
    pub async fn create_review(&self, review: ReviewCreate) -> Result<String, ReviewError> {
        debug!("Sending request");
        self.inner.create(review).await.map_err(|e| match e {
            FrameworkError::Custom(msg) => ReviewError::ValidationError(msg),
            other => Self::map_error(other),
        })
    }

    /// Register a helpful vote; returns the new count.
    #[instrument(skip(self))]
    pub async fn mark_helpful(&self, review_id: String) -> Result<u32, ReviewError> {
        debug!("Sending request");
        let result = self
            .inner
            .perform_action(review_id, ReviewAction::MarkHelpful)
            .await
            .map_err(Self::map_error)?;
        let ReviewActionResult::MarkHelpful(count) = result;
        Ok(count)
    }
}

#[async_trait]
impl ActorClient<Review> for ReviewClient {
    type Error = ReviewError;

    fn inner(&self) -> &ResourceClient<Review> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> ReviewError {
        match e {
            FrameworkError::NotFound(id) => ReviewError::NotFound(id),
            other => ReviewError::ActorCommunicationError(other.to_string()),
        }
    }
}
