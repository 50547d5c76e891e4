//! Search and status filter for the staff order list.

use crate::model::{Order, OrderStatus};

/// Matches orders by free-text term and derived status.
///
/// The term matches, case-insensitively, a substring of the order number or the
/// customer name, or a substring of the table number. An empty term matches everything.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    term: String,
    status: Option<OrderStatus>,
}

impl OrderFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into().trim().to_lowercase();
        self
    }

    pub fn status(mut self, status: OrderStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, order: &Order) -> bool {
        self.matches_term(order) && self.status.map_or(true, |status| order.status() == status)
    }

    fn matches_term(&self, order: &Order) -> bool {
        if self.term.is_empty() {
            return true;
        }
        order.order_number.as_str().to_lowercase().contains(&self.term)
            || order.customer_name.to_lowercase().contains(&self.term)
            || order.table_number.to_string().contains(&self.term)
    }

    pub fn apply(&self, orders: impl IntoIterator<Item = Order>) -> Vec<Order> {
        orders.into_iter().filter(|order| self.matches(order)).collect()
    }
}
