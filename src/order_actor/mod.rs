//! # Order Actor
//!
//! The single owner of every order in a session.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for
//!   [`Order`](crate::model::Order)
//! - [`error`] - [`OrderError`]
//! - [`actions`] - [`OrderAction`] and [`OrderActionResult`]
//! - [`new()`] - factory for the actor and its client
//!
//! Kitchen display, staff order list and customer tracking all talk to this one actor
//! through cloned [`OrderClient`](crate::clients::OrderClient)s, so they always agree.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::framework::{ResourceActor, ResourceClient};
use crate::model::Order;

/// Creates a new Order actor and its client.
pub fn new(buffer_size: usize, event_capacity: usize) -> (ResourceActor<Order>, ResourceClient<Order>) {
    ResourceActor::new(buffer_size, event_capacity)
}
