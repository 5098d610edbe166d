//! Generic building blocks for the actor layer.
//!
//! Every stateful resource in tableside (carts, reviews) is an [`ActorEntity`]
//! managed by a [`ResourceActor`]. The actor owns its entities outright and
//! processes one request at a time, so entity code never needs a lock. Callers
//! talk to it through a cloneable [`ResourceClient`].
//!
//! Dependencies an entity needs at runtime (the persistence backend, the
//! remote mirror) are not baked in at construction. They arrive as the
//! `Context` argument of [`ResourceActor::run`] and are handed to every hook,
//! which keeps wiring out of the entity types themselves.

use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

/// Contract a resource type implements to be managed by a [`ResourceActor`].
///
/// The associated types tie each operation to its payload at compile time: a
/// cart actor can only ever receive cart payloads. `Context` carries the
/// injected runtime dependencies; use `()` when the entity has none.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Unique identifier for this entity.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Payload required to create a new instance.
    type CreateParams: Send + Sync + Debug;

    /// Payload for updating an existing instance.
    type UpdateParams: Send + Sync + Debug;

    /// Resource-specific operations beyond plain CRUD.
    type Action: Send + Sync + Debug;

    /// Result type returned by [`ActorEntity::handle_action`].
    type ActionResult: Send + Sync + Debug;

    /// Runtime dependencies injected into every hook.
    type Context: Send + Sync;

    /// Build the entity from its assigned id and creation payload.
    /// Runs synchronously, before [`ActorEntity::on_create`].
    fn from_create_params(id: Self::Id, params: Self::CreateParams) -> Result<Self, String>;

    /// Called right after creation; the place for rehydration or validation
    /// that needs the context. Default: nothing.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Apply an update payload.
    async fn on_update(
        &mut self,
        update: Self::UpdateParams,
        ctx: &Self::Context,
    ) -> Result<(), String>;

    /// Called just before the entity is removed. Default: nothing.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), String> {
        Ok(())
    }

    /// Handle a resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, String>;
}

/// Errors originating in the actor plumbing itself.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error("Custom error: {0}")]
    Custom(String),
}

/// One-shot response channel handed to the actor with each request.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Messages a [`ResourceActor`] understands: the CRUD lifecycle plus a
/// free-form `Action` escape hatch for domain operations.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::CreateParams,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Update {
        id: T::Id,
        update: T::UpdateParams,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<T::ActionResult>,
    },
}

/// The server half: owns the entity store and the receiving end of the
/// channel. Requests are handled strictly in arrival order.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: ActorEntity> ResourceActor<T> {
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        (actor, ResourceClient::new(sender))
    }

    /// Run the event loop until every client has been dropped.
    ///
    /// `context` is the late-bound dependency bundle; it is passed by
    /// reference into each entity hook.
    pub async fn run(mut self, context: T::Context) {
        // "Cart", not "tableside::model::cart::Cart"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    let result = self.handle_create(entity_type, params, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::Update { id, update, respond_to } => {
                    let result = self.handle_update(entity_type, id, update, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Delete { id, respond_to } => {
                    let result = self.handle_delete(entity_type, id, &context).await;
                    let _ = respond_to.send(result);
                }
                ResourceRequest::Action { id, action, respond_to } => {
                    let result = self.handle_action(entity_type, id, action, &context).await;
                    let _ = respond_to.send(result);
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }

    async fn handle_create(
        &mut self,
        entity_type: &str,
        params: T::CreateParams,
        context: &T::Context,
    ) -> Result<T::Id, FrameworkError> {
        debug!(entity_type, ?params, "Create");
        let id = (self.next_id_fn)();
        let mut item =
            T::from_create_params(id.clone(), params).map_err(FrameworkError::Custom)?;
        if let Err(e) = item.on_create(context).await {
            warn!(entity_type, error = %e, "on_create failed");
            return Err(FrameworkError::Custom(e));
        }
        self.store.insert(id.clone(), item);
        info!(entity_type, %id, size = self.store.len(), "Created");
        Ok(id)
    }

    async fn handle_update(
        &mut self,
        entity_type: &str,
        id: T::Id,
        update: T::UpdateParams,
        context: &T::Context,
    ) -> Result<T, FrameworkError> {
        debug!(entity_type, %id, ?update, "Update");
        let item = match self.store.get_mut(&id) {
            Some(item) => item,
            None => {
                warn!(entity_type, %id, "Not found");
                return Err(FrameworkError::NotFound(id.to_string()));
            }
        };
        if let Err(e) = item.on_update(update, context).await {
            warn!(entity_type, %id, error = %e, "Update failed");
            return Err(FrameworkError::Custom(e));
        }
        info!(entity_type, %id, "Updated");
        Ok(item.clone())
    }

    async fn handle_delete(
        &mut self,
        entity_type: &str,
        id: T::Id,
        context: &T::Context,
    ) -> Result<(), FrameworkError> {
        debug!(entity_type, %id, "Delete");
        let item = match self.store.get(&id) {
            Some(item) => item,
            None => {
                warn!(entity_type, %id, "Not found");
                return Err(FrameworkError::NotFound(id.to_string()));
            }
        };
        if let Err(e) = item.on_delete(context).await {
            warn!(entity_type, %id, error = %e, "on_delete failed");
            return Err(FrameworkError::Custom(e));
        }
        self.store.remove(&id);
        info!(entity_type, %id, size = self.store.len(), "Deleted");
        Ok(())
    }

    async fn handle_action(
        &mut self,
        entity_type: &str,
        id: T::Id,
        action: T::Action,
        context: &T::Context,
    ) -> Result<T::ActionResult, FrameworkError> {
        debug!(entity_type, %id, ?action, "Action");
        let item = match self.store.get_mut(&id) {
            Some(item) => item,
            None => {
                warn!(entity_type, %id, "Not found");
                return Err(FrameworkError::NotFound(id.to_string()));
            }
        };
        let result = item
            .handle_action(action, context)
            .await
            .map_err(FrameworkError::Custom);
        match &result {
            Ok(_) => info!(entity_type, %id, "Action ok"),
            Err(e) => warn!(entity_type, %id, error = %e, "Action failed"),
        }
        result
    }
}

/// A type-safe, cloneable handle to a [`ResourceActor`].
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> ResourceRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn create(&self, params: T::CreateParams) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Create { params, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Get { id, respond_to })
            .await
    }

    pub async fn update(&self, id: T::Id, update: T::UpdateParams) -> Result<T, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Update { id, update, respond_to })
            .await
    }

    pub async fn delete(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| ResourceRequest::Delete { id, respond_to })
            .await
    }

    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<T::ActionResult, FrameworkError> {
        self.request(|respond_to| ResourceRequest::Action { id, action, respond_to })
            .await
    }
}
