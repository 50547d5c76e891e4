//! # Generic Actor Server
//!
//! `ResourceActor` owns the store for one entity type and processes requests
//! sequentially, so the store needs no locking.

use super::client::ResourceClient;
use super::entity::ActorEntity;
use super::error::FrameworkError;
use super::message::ResourceRequest;
use std::collections::HashMap;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, info, warn};

/// The generic actor that manages a collection of entities.
///
/// **Concurrency Model**:
/// Each actor runs in its own Tokio task and handles one message at a time. Every writer
/// goes through the channel, which serializes mutations without a `Mutex`.
///
/// # Usage Pattern
///
/// 1.  **Create**: `ResourceActor::new()` returns the actor (server) and its client.
/// 2.  **Wire**: pass dependencies into `actor.run(context)`.
/// 3.  **Run**: spawn the run loop in a background task.
///
/// # Implementation Details
///
/// * Entities live in a `HashMap`; `order` remembers creation order so that `List` and
///   `ActionAll` are deterministic.
/// * Ids come from a `u32` counter starting at 1.
/// * After each successful `Action` and for every entity changed by `ActionAll`, the
///   updated entity is published on a broadcast channel. An action that leaves the entity
///   as it was publishes nothing. Publishing with no subscribers is not an error.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    updates: broadcast::Sender<T>,
    store: HashMap<T::Id, T>,
    order: Vec<T::Id>,
    next_id: u32,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// * `buffer_size` - capacity of the request channel; callers wait when it is full.
    /// * `event_capacity` - capacity of the update broadcast; slow subscribers lag past it.
    pub fn new(buffer_size: usize, event_capacity: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let (updates, _) = broadcast::channel(event_capacity.max(1));
        let actor = Self {
            receiver,
            updates: updates.clone(),
            store: HashMap::new(),
            order: Vec::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender, updates);
        (actor, client)
    }

    fn publish(&self, item: &T) {
        // Err only means nobody is subscribed right now.
        let _ = self.updates.send(item.clone());
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// `context` is passed to every entity hook.
    pub async fn run(mut self, context: T::Context) {
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.next_id += 1;
                            self.store.insert(id.clone(), item);
                            self.order.push(id.clone());
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
                ResourceRequest::List { respond_to } => {
                    let items: Vec<T> = self
                        .order
                        .iter()
                        .filter_map(|id| self.store.get(id).cloned())
                        .collect();
                    debug!(entity_type, size = items.len(), "List");
                    let _ = respond_to.send(Ok(items));
                }
                ResourceRequest::Action {
                    id,
                    action,
                    respond_to,
                } => {
                    debug!(entity_type, %id, ?action, "Action");
                    let Some(item) = self.store.get_mut(&id) else {
                        warn!(entity_type, %id, "Not found");
                        let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        continue;
                    };
                    let before = item.clone();
                    match item.handle_action(action, &context).await {
                        Ok(result) => {
                            let changed = *item != before;
                            info!(entity_type, %id, changed, "Action ok");
                            let snapshot = item.clone();
                            if changed {
                                self.publish(&snapshot);
                            }
                            let _ = respond_to.send(Ok((snapshot, result)));
                        }
                        Err(e) => {
                            warn!(entity_type, %id, error = %e, "Action failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::ActionAll { action, respond_to } => {
                    debug!(entity_type, ?action, size = self.store.len(), "ActionAll");
                    let mut updated = Vec::with_capacity(self.order.len());
                    let mut failed = 0usize;
                    for id in &self.order {
                        let Some(item) = self.store.get_mut(id) else {
                            continue;
                        };
                        let before = item.clone();
                        match item.handle_action(action.clone(), &context).await {
                            Ok(_) => {
                                let snapshot = item.clone();
                                if snapshot != before {
                                    let _ = self.updates.send(snapshot.clone());
                                }
                                updated.push(snapshot);
                            }
                            Err(e) => {
                                failed += 1;
                                warn!(entity_type, %id, error = %e, "Action failed");
                                updated.push(item.clone());
                            }
                        }
                    }
                    info!(entity_type, size = updated.len(), failed, "ActionAll done");
                    let _ = respond_to.send(Ok(updated));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}
