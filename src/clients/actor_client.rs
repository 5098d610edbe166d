use async_trait::async_trait;

use crate::framework::{ActorEntity, FrameworkError, ResourceClient};

/// Shared surface for resource-specific clients.
///
/// Gives every typed client `get` and `delete` for free; implementors only
/// supply the inner generic client and the error mapping.
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic client.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors into the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Delete an entity by id.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        self.inner().delete(id).await.map_err(Self::map_error)
    }
}
