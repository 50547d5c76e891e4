//! Headline numbers for the kitchen display and the staff order list.

use crate::model::{Order, OrderStatus, Priority};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct KitchenStats {
    pub active: usize,
    pub completed: usize,
    /// Active orders with `Urgent` priority.
    pub urgent: usize,
    /// Mean `estimated_time` over active orders, rounded half-up. Zero with no active orders.
    pub average_minutes_left: u32,
}

impl KitchenStats {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        let mut stats = KitchenStats::default();
        let mut minutes_left: u64 = 0;

        for order in orders {
            if order.is_complete() {
                stats.completed += 1;
                continue;
            }
            stats.active += 1;
            minutes_left += u64::from(order.estimated_time);
            if order.priority == Priority::Urgent {
                stats.urgent += 1;
            }
        }

        let divisor = stats.active.max(1) as u64;
        let rounded = (minutes_left * 2 + divisor) / (divisor * 2);
        stats.average_minutes_left = u32::try_from(rounded).unwrap_or(u32::MAX);
        stats
    }
}

/// Order counts per derived [`OrderStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StaffStats {
    pub pending: usize,
    pub preparing: usize,
    pub ready: usize,
    pub served: usize,
}

impl StaffStats {
    pub fn from_orders<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Self {
        orders.into_iter().fold(StaffStats::default(), |mut stats, order| {
            match order.status() {
                OrderStatus::Pending => stats.pending += 1,
                OrderStatus::Preparing => stats.preparing += 1,
                OrderStatus::Ready => stats.ready += 1,
                OrderStatus::Served => stats.served += 1,
            }
            stats
        })
    }

    pub fn count(&self, status: OrderStatus) -> usize {
        match status {
            OrderStatus::Pending => self.pending,
            OrderStatus::Preparing => self.preparing,
            OrderStatus::Ready => self.ready,
            OrderStatus::Served => self.served,
        }
    }
}
