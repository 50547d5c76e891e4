//! ActorEntity trait implementation for the Order domain type.
//!
//! Creation validates the payload; every action delegates to the [`Order`] method of the
//! same name, which leaves the order untouched on failure.

use super::actions::{OrderAction, OrderActionResult};
use super::error::OrderError;
use crate::framework::ActorEntity;
use crate::model::{Order, OrderCreate, OrderId};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = ();
    type Error = OrderError;

    /// Validates the payload and builds the order.
    ///
    /// # Rules
    /// - at least one item
    /// - every quantity positive
    /// - table number positive
    /// - customer name not blank
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.items.is_empty() {
            return Err(OrderError::ValidationError("order has no items".into()));
        }
        if let Some(item) = params.items.iter().find(|item| item.quantity == 0) {
            return Err(OrderError::ValidationError(format!(
                "item {:?} has zero quantity",
                item.name
            )));
        }
        if params.table_number == 0 {
            return Err(OrderError::ValidationError("table number must be positive".into()));
        }
        if params.customer_name.trim().is_empty() {
            return Err(OrderError::ValidationError("customer name is required".into()));
        }
        Ok(Order::new(id, params))
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &Self::Context,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::SetItemStatus { item_id, status } => {
                let previous = self.set_item_status(&item_id, status)?;
                Ok(OrderActionResult::SetItemStatus { previous })
            }
            OrderAction::MarkComplete => Ok(OrderActionResult::MarkComplete {
                changed: self.mark_complete(),
            }),
            OrderAction::MarkServed => {
                self.mark_served()?;
                Ok(OrderActionResult::MarkServed)
            }
            OrderAction::Tick { minutes } => {
                self.tick(minutes);
                Ok(OrderActionResult::Tick {
                    estimated_time: self.estimated_time,
                })
            }
        }
    }
}
