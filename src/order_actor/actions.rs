//! Custom actions for the Order actor.
//!
//! These are the only ways an order changes after creation. They are handled by
//! [`ActorEntity::handle_action`](crate::framework::ActorEntity::handle_action) in
//! [`entity`](super::entity).

use crate::model::{ItemId, ItemStatus};

/// Custom actions for Order entities.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Moves one item along the transition table.
    ///
    /// # Errors
    /// Fails if the item is unknown or the transition is not allowed.
    SetItemStatus { item_id: ItemId, status: ItemStatus },
    /// Moves every item to `Ready`.
    MarkComplete,
    /// Records that staff served a complete order.
    MarkServed,
    /// Decrements the estimated time, clamped at zero.
    Tick { minutes: u32 },
}

/// Results from OrderActions - variants match 1:1 with OrderAction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderActionResult {
    /// The item's status before the change.
    SetItemStatus { previous: ItemStatus },
    /// Whether any item actually changed.
    MarkComplete { changed: bool },
    MarkServed,
    /// Minutes remaining after the tick.
    Tick { estimated_time: u32 },
}
