//! Error types for status transitions.

use crate::model::{ItemId, ItemStatus, OrderId};
use thiserror::Error;

/// Why a tracker operation was refused. The collection is unchanged in every case.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TrackerError {
    #[error("Order not found: {0}")]
    OrderNotFound(OrderId),

    #[error("Item {item} not found in order {order}")]
    ItemNotFound { order: OrderId, item: ItemId },

    #[error("Item {item} cannot move from {from} to {to}")]
    InvalidTransition {
        item: ItemId,
        from: ItemStatus,
        to: ItemStatus,
    },

    #[error("Order {0} is not ready to serve")]
    NotReady(OrderId),
}
