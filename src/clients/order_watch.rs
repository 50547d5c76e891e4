use crate::framework::WeakResourceClient;
use crate::model::{Order, OrderId};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, warn};

/// A subscription to the updates of one order, e.g. for the customer tracking view.
///
/// The subscription lives exactly as long as the watch: drop it when the view goes away.
/// A watch does not keep the order store running.
pub struct OrderWatch {
    order_id: OrderId,
    receiver: broadcast::Receiver<Order>,
    store: WeakResourceClient<Order>,
}

impl OrderWatch {
    pub(crate) fn new(
        order_id: OrderId,
        receiver: broadcast::Receiver<Order>,
        store: WeakResourceClient<Order>,
    ) -> Self {
        Self {
            order_id,
            receiver,
            store,
        }
    }

    pub fn order_id(&self) -> OrderId {
        self.order_id
    }

    /// Waits for the next update of the watched order.
    ///
    /// If the watch fell behind and updates were dropped, the current state is fetched from
    /// the store and returned instead, since a dropped update may have been the last one for
    /// this order. Returns `None` once the actor and every client of it are gone.
    pub async fn next(&mut self) -> Option<Order> {
        loop {
            match self.receiver.recv().await {
                Ok(order) if order.id == self.order_id => return Some(order),
                Ok(_) => continue,
                Err(RecvError::Lagged(skipped)) => {
                    warn!(order_id = %self.order_id, skipped, "Order watch lagged, resyncing");
                    match self.store.get(self.order_id).await {
                        Ok(Some(order)) => return Some(order),
                        Ok(None) => continue,
                        Err(e) => debug!(order_id = %self.order_id, error = %e, "Resync failed"),
                    }
                }
                Err(RecvError::Closed) => return None,
            }
        }
    }
}
