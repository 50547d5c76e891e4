//! # Order Status Tracker
//!
//! Pure queries and transitions over an order collection. No I/O and no timers: the
//! order actor calls into [`Order`]'s methods for single-order actions, and these
//! functions cover the collection-level view used by the kitchen display, the staff
//! order list and tests.
//!
//! Every mutating function either applies its change fully or returns a
//! [`TrackerError`] with the collection untouched.

mod error;
pub mod filter;
pub mod floor;
pub mod stats;
pub mod tracking;

pub use error::*;
pub use filter::OrderFilter;
pub use floor::{FloorStats, TableFilter};
pub use stats::{KitchenStats, StaffStats};
pub use tracking::TrackingSnapshot;

use crate::model::{ItemId, ItemStatus, Order, OrderId};
use tracing::debug;

fn find_mut<'a>(orders: &'a mut [Order], order_id: OrderId) -> Result<&'a mut Order, TrackerError> {
    orders
        .iter_mut()
        .find(|order| order.id == order_id)
        .ok_or(TrackerError::OrderNotFound(order_id))
}

/// Moves one item to `status` if the transition table allows it.
pub fn set_item_status<'a>(
    orders: &'a mut [Order],
    order_id: OrderId,
    item_id: &ItemId,
    status: ItemStatus,
) -> Result<&'a Order, TrackerError> {
    let order = find_mut(orders, order_id)?;
    let previous = order.set_item_status(item_id, status)?;
    debug!(%order_id, %item_id, %previous, %status, "Item status set");
    Ok(order)
}

/// Sets every item of the order to `Ready`. Idempotent.
pub fn mark_order_complete(orders: &mut [Order], order_id: OrderId) -> Result<&Order, TrackerError> {
    let order = find_mut(orders, order_id)?;
    let changed = order.mark_complete();
    debug!(%order_id, changed, "Order marked complete");
    Ok(order)
}

pub fn is_order_complete(order: &Order) -> bool {
    order.is_complete()
}

/// Splits into `(active, completed)`, preserving the input order within each side.
pub fn partition_active_completed(
    orders: impl IntoIterator<Item = Order>,
) -> (Vec<Order>, Vec<Order>) {
    let (completed, active) = orders.into_iter().partition(Order::is_complete);
    (active, completed)
}

/// Decrements every order's estimated time by `delta_minutes`, clamped at zero.
pub fn tick_estimated_time(orders: &mut [Order], delta_minutes: u32) {
    for order in orders.iter_mut() {
        order.tick(delta_minutes);
    }
}
