//! # ActorEntity Trait
//!
//! The contract a resource must satisfy to be owned by a [`ResourceActor`](super::ResourceActor).
//! It names the associated types for ids, creation payloads, actions, context and errors,
//! and provides the lifecycle hooks the actor calls (`on_create`, `handle_action`).
//!
//! Entities never see the channel plumbing. They only mutate themselves inside a hook;
//! the actor decides when to store, reply and publish.

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `#[async_trait]` so they may await other clients. The `Context` type is
/// injected into every hook by `run()`, which lets dependencies be wired after the actor
/// was constructed.
#[async_trait]
/// `PartialEq` lets the actor skip publishing updates for actions that changed nothing.
pub trait ActorEntity: Clone + PartialEq + Send + Sync + 'static {
    /// Unique identifier. Built from the actor's `u32` sequence on create.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u32>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// Resource-specific operations (e.g. `SetItemStatus`).
    ///
    /// `Clone` because `ActionAll` applies the same action to every entity.
    type Action: Clone + Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// Dependencies injected into the actor. Use `()` if none are needed.
    type Context: Send + Sync;

    /// The per-actor error type.
    ///
    /// One enum covers every action of the actor, so clients match on a single type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the entity from the assigned id and the payload.
    /// Called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after construction, before the entity is stored.
    /// A failure here means the entity is never stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Handle a resource-specific action.
    ///
    /// Implementations must leave `self` untouched when they return an error, since the
    /// actor keeps the entity in its store either way.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
