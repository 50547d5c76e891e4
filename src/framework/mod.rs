//! Generic actor plumbing for single-owner resource stores.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns a store of entities
//! - [`ResourceClient`] - Cloneable handle for sending requests and subscribing to updates
//! - [`WeakResourceClient`] - Read handle that does not keep the actor running
//! - [`FrameworkError`] - Errors raised by the plumbing itself
//!
//! # Testing
//!
//! See [`mock`] for utilities to test clients without spawning full actors.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::ResourceActor;
pub use client::{ResourceClient, WeakResourceClient};
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
