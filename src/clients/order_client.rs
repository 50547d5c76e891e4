//! # Order Client
//!
//! The contract every view uses to reach the shared order store: initial load
//! (`fetch_orders`), pushed updates (`subscribe`, `watch`) and status submission
//! (`submit_item_status`), plus the kitchen and staff queries built on top of them.

use super::actor_client::ActorClient;
use super::order_watch::OrderWatch;
use crate::framework::{FrameworkError, ResourceClient};
use crate::model::{ItemId, ItemStatus, Order, OrderCreate, OrderId};
use crate::order_actor::{OrderAction, OrderError};
use crate::tracker::{self, KitchenStats, OrderFilter, StaffStats, TrackingSnapshot};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, info, instrument};

/// Client for interacting with the Order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, params), fields(order_number = %params.order_number))]
    pub async fn create_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!(?params, "create_order called");
        info!("Sending create_order to actor");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Every order in the store, in creation order.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, OrderError> {
        self.list().await
    }

    /// Moves one item along `pending -> preparing -> ready` and returns the updated order.
    #[instrument(skip(self))]
    pub async fn submit_item_status(
        &self,
        order_id: OrderId,
        item_id: ItemId,
        status: ItemStatus,
    ) -> Result<Order, OrderError> {
        let action = OrderAction::SetItemStatus { item_id, status };
        let (order, _) = self
            .inner
            .perform_action(order_id, action)
            .await
            .map_err(Self::map_error)?;
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn mark_order_complete(&self, order_id: OrderId) -> Result<Order, OrderError> {
        let (order, _) = self
            .inner
            .perform_action(order_id, OrderAction::MarkComplete)
            .await
            .map_err(Self::map_error)?;
        Ok(order)
    }

    #[instrument(skip(self))]
    pub async fn mark_served(&self, order_id: OrderId) -> Result<Order, OrderError> {
        let (order, _) = self
            .inner
            .perform_action(order_id, OrderAction::MarkServed)
            .await
            .map_err(Self::map_error)?;
        Ok(order)
    }

    /// Counts every order down by `minutes` and returns the updated collection.
    #[instrument(skip(self))]
    pub async fn tick_estimated_time(&self, minutes: u32) -> Result<Vec<Order>, OrderError> {
        self.inner
            .perform_action_all(OrderAction::Tick { minutes })
            .await
            .map_err(Self::map_error)
    }

    /// `(active, completed)` split of the current orders.
    pub async fn active_and_completed(&self) -> Result<(Vec<Order>, Vec<Order>), OrderError> {
        Ok(tracker::partition_active_completed(self.fetch_orders().await?))
    }

    pub async fn kitchen_stats(&self) -> Result<KitchenStats, OrderError> {
        Ok(KitchenStats::from_orders(&self.fetch_orders().await?))
    }

    /// Per-status counts for the staff order list.
    pub async fn staff_stats(&self) -> Result<StaffStats, OrderError> {
        Ok(StaffStats::from_orders(&self.fetch_orders().await?))
    }

    pub async fn search(&self, filter: &OrderFilter) -> Result<Vec<Order>, OrderError> {
        Ok(filter.apply(self.fetch_orders().await?))
    }

    /// Current tracking view of one order.
    pub async fn track(&self, order_id: OrderId) -> Result<TrackingSnapshot, OrderError> {
        self.get(order_id)
            .await?
            .map(|order| TrackingSnapshot::from(&order))
            .ok_or_else(|| OrderError::NotFound(order_id.to_string()))
    }

    /// Every order update published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<Order> {
        self.inner.subscribe()
    }

    /// Updates for a single order. Dropping the watch ends the subscription.
    pub fn watch(&self, order_id: OrderId) -> OrderWatch {
        OrderWatch::new(order_id, self.inner.subscribe(), self.inner.downgrade())
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    /// Keeps not-found and the actor's own errors distinguishable for callers.
    fn map_error(e: FrameworkError) -> Self::Error {
        if let Some(order_error) = e.downcast_entity::<OrderError>() {
            return order_error.clone();
        }
        match e {
            FrameworkError::NotFound(id) => OrderError::NotFound(id),
            other => OrderError::ActorCommunicationError(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{self, MockClient};
    use crate::model::order::tests::order_with;
    use crate::order_actor::OrderActionResult;
    use crate::tracker::TrackerError;

    #[tokio::test]
    async fn test_partition_uses_fetched_orders() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(vec![
            order_with(1, &[ItemStatus::Pending]),
            order_with(2, &[ItemStatus::Ready]),
        ]);

        let client = OrderClient::new(mock.client());
        let (active, completed) = client.active_and_completed().await.unwrap();
        assert_eq!(active[0].id, OrderId(1));
        assert_eq!(completed[0].id, OrderId(2));
        mock.verify();
    }

    #[tokio::test]
    async fn test_entity_error_is_recovered() {
        let mut mock = MockClient::<Order>::new();
        let rejected = OrderError::Tracker(TrackerError::NotReady(OrderId(1)));
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(rejected.clone())));

        let client = OrderClient::new(mock.client());
        let result = client.mark_served(OrderId(1)).await;
        assert_eq!(result, Err(rejected));
        mock.verify();
    }

    #[tokio::test]
    async fn test_not_found_maps_to_order_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(9))
            .return_err(FrameworkError::NotFound("9".into()));

        let client = OrderClient::new(mock.client());
        let result = client.mark_order_complete(OrderId(9)).await;
        assert_eq!(result, Err(OrderError::NotFound("9".into())));
    }

    #[tokio::test]
    async fn test_submit_returns_updated_order() {
        let mut mock = MockClient::<Order>::new();
        let updated = order_with(1, &[ItemStatus::Preparing]);
        mock.expect_action(OrderId(1)).return_ok((
            updated.clone(),
            OrderActionResult::SetItemStatus {
                previous: ItemStatus::Pending,
            },
        ));

        let client = OrderClient::new(mock.client());
        let order = client
            .submit_item_status(OrderId(1), ItemId::from("1a"), ItemStatus::Preparing)
            .await
            .unwrap();
        assert_eq!(order, updated);
        mock.verify();
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_get(OrderId(1)).return_err(FrameworkError::ActorClosed);

        let client = OrderClient::new(mock.client());
        let result = client.track(OrderId(1)).await;
        assert!(matches!(result, Err(OrderError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_create_and_tick_through_mock() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_create().return_ok(OrderId(5));
        let mut ticked = order_with(5, &[ItemStatus::Pending]);
        ticked.estimated_time = 11;
        mock.expect_action_all().return_ok(vec![ticked.clone()]);

        let client = OrderClient::new(mock.client());
        let params = OrderCreate {
            order_number: ticked.order_number.clone(),
            table_number: 2,
            customer_name: "John Doe".into(),
            items: Vec::new(),
            order_time: "2:30 PM".into(),
            estimated_time: 12,
            priority: Default::default(),
        };
        assert_eq!(client.create_order(params).await.unwrap(), OrderId(5));
        assert_eq!(client.tick_estimated_time(1).await.unwrap(), vec![ticked]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_submit_sends_set_item_status_action() {
        let (generic, mut requests) = mock::create_mock_client::<Order>(4);
        let client = OrderClient::new(generic);

        let pending = tokio::spawn(async move {
            client
                .submit_item_status(OrderId(1), ItemId::from("1a"), ItemStatus::Preparing)
                .await
        });

        let (id, action, respond_to) = mock::expect_action(&mut requests)
            .await
            .expect("expected an action request");
        assert_eq!(id, OrderId(1));
        assert!(matches!(
            action,
            OrderAction::SetItemStatus { ref item_id, status: ItemStatus::Preparing }
                if item_id.0 == "1a"
        ));

        let updated = order_with(1, &[ItemStatus::Preparing]);
        let _ = respond_to.send(Ok((
            updated.clone(),
            OrderActionResult::SetItemStatus {
                previous: ItemStatus::Pending,
            },
        )));
        assert_eq!(pending.await.unwrap().unwrap(), updated);
    }
}
