//! # Generic Client
//!
//! The sending half of a [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use tokio::sync::{broadcast, mpsc, oneshot};

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Cloning is cheap: it holds a request sender and a handle to the actor's update
/// channel. The actor shuts down once every clone has been dropped.
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
    updates: broadcast::Sender<T>,
}

// Manual impl: deriving would require `T: Clone` bounds on the channel types only.
impl<T: ActorEntity> Clone for ResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            updates: self.updates.clone(),
        }
    }
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>, updates: broadcast::Sender<T>) -> Self {
        Self { sender, updates }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn list(&self) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::List { respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Runs an action on one entity and returns its updated state with the action result.
    pub async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<(T, T::ActionResult), FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Action {
                id,
                action,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Runs an action on every entity and returns the updated collection.
    pub async fn perform_action_all(&self, action: T::Action) -> Result<Vec<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::ActionAll { action, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    /// Subscribes to entity updates published after every mutation that changed an entity.
    ///
    /// Only updates sent after this call are received.
    pub fn subscribe(&self) -> broadcast::Receiver<T> {
        self.updates.subscribe()
    }

    /// A handle that can read from the actor without keeping it alive.
    pub fn downgrade(&self) -> WeakResourceClient<T> {
        WeakResourceClient {
            sender: self.sender.downgrade(),
        }
    }
}

/// Read-only handle that does not count towards the actor's lifetime.
///
/// Requests fail with [`FrameworkError::ActorClosed`] once every [`ResourceClient`] is gone.
pub struct WeakResourceClient<T: ActorEntity> {
    sender: mpsc::WeakSender<ResourceRequest<T>>,
}

impl<T: ActorEntity> Clone for WeakResourceClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: ActorEntity> WeakResourceClient<T> {
    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let sender = self.sender.upgrade().ok_or(FrameworkError::ActorClosed)?;
        let (respond_to, response) = oneshot::channel();
        sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        drop(sender);
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}
