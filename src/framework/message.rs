//! # Generic Messages
//!
//! Request types carried from [`ResourceClient`](super::ResourceClient) to
//! [`ResourceActor`](super::ResourceActor).

use super::entity::ActorEntity;
use super::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor.
///
/// Resources are created once and then only mutated through actions; nothing is
/// deleted while the actor runs, so there is no `Delete` variant.
///
/// - **Create**: builds a resource from [`ActorEntity::Create`].
/// - **Get**: current state of one resource.
/// - **List**: snapshot of every resource, in creation order.
/// - **Action**: a custom [`ActorEntity::Action`] on one resource.
/// - **ActionAll**: the same action applied to every resource, in creation order.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    List {
        respond_to: Response<Vec<T>>,
    },
    Action {
        id: T::Id,
        action: T::Action,
        respond_to: Response<(T, T::ActionResult)>,
    },
    ActionAll {
        action: T::Action,
        respond_to: Response<Vec<T>>,
    },
}
