//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod order_client;
pub mod order_watch;

pub use actor_client::ActorClient;
pub use order_client::*;
pub use order_watch::*;
