//! What the customer sees on the order tracking view.

use crate::model::{Order, OrderId, OrderNumber, TrackingStage};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingSnapshot {
    pub order_id: OrderId,
    pub order_number: OrderNumber,
    pub table_number: u32,
    pub stage: TrackingStage,
    pub minutes_remaining: u32,
    pub items_ready: usize,
    pub items_total: usize,
}

impl TrackingSnapshot {
    /// `"12 min remaining"` while waiting, `"Ready!"` once the order is complete or the
    /// countdown has run out.
    pub fn headline(&self) -> String {
        if self.stage == TrackingStage::ReadyForPickup || self.minutes_remaining == 0 {
            "Ready!".to_string()
        } else {
            format!("{} min remaining", self.minutes_remaining)
        }
    }
}

impl From<&Order> for TrackingSnapshot {
    fn from(order: &Order) -> Self {
        Self {
            order_id: order.id,
            order_number: order.order_number.clone(),
            table_number: order.table_number,
            stage: order.tracking_stage(),
            minutes_remaining: order.estimated_time,
            items_ready: order.ready_items(),
            items_total: order.items.len(),
        }
    }
}
