//! Session lifecycle: starting, running and stopping the order store.
//!
//! - [`KitchenSystem`] owns the order actor, seeds it and hands out the shared client
//! - [`Countdown`] is the periodic task that counts estimated times down
//! - [`setup_tracing`] initializes logging

pub mod countdown;
pub mod kitchen_system;
pub mod tracing;

pub use countdown::Countdown;
pub use kitchen_system::{KitchenSystem, SystemError};
pub use tracing::setup_tracing;
