//! Runs one short restaurant session against the seeded order store.
//!
//! 1. Starts the [`KitchenSystem`] from the environment config.
//! 2. Moves a kitchen order to ready and prints the staff view.
//! 3. Builds a cart from the menu, places it as a new order and tracks it.

use restaurant_orders::clients::actor_client::ActorClient;
use restaurant_orders::config::TrackerConfig;
use restaurant_orders::lifecycle::{setup_tracing, KitchenSystem};
use restaurant_orders::model::{CheckoutDetails, ItemId, ItemStatus, OrderId};
use restaurant_orders::tracker::TrackingSnapshot;
use tracing::{error, info, Instrument};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = TrackerConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting restaurant session");

    let mut system = KitchenSystem::start(config)
        .await
        .map_err(|e| e.to_string())?;

    // Kitchen: finish the first seeded order.
    let span = tracing::info_span!("kitchen");
    async {
        let order_id = OrderId(1);
        let client = &system.order_client;
        client
            .submit_item_status(order_id, ItemId::for_position(order_id, 0), ItemStatus::Ready)
            .await
            .map_err(|e| e.to_string())?;
        let order = client
            .mark_order_complete(order_id)
            .await
            .map_err(|e| e.to_string())?;
        info!(order_number = %order.order_number, complete = order.is_complete(), "Order finished");

        let stats = client.kitchen_stats().await.map_err(|e| e.to_string())?;
        info!(
            active = stats.active,
            completed = stats.completed,
            urgent = stats.urgent,
            average_minutes_left = stats.average_minutes_left,
            "Kitchen stats"
        );
        Ok::<_, String>(())
    }
    .instrument(span)
    .await?;

    // Customer: order from the menu and track it.
    let span = tracing::info_span!("customer");
    let placed = async {
        let mut cart = system.new_cart();
        for (menu_item_id, quantity) in [("1", 2), ("2", 1)] {
            let item = system
                .menu
                .get(menu_item_id)
                .ok_or_else(|| format!("Menu item {menu_item_id} missing"))?;
            cart.add(item, quantity).map_err(|e| e.to_string())?;
        }
        let totals = cart.totals();
        info!(subtotal = %totals.subtotal, tax = %totals.tax, total = %totals.total, "Cart totals");

        let details = CheckoutDetails {
            customer_name: "Ada Obi".to_string(),
            table_number: 4,
            order_time: "3:05 PM".to_string(),
        };
        system.place_order(&cart, details).await.map_err(|e| e.to_string())
    }
    .instrument(span)
    .await;

    match placed {
        Ok(order_id) => {
            // The tracking view follows the order until the store shuts down.
            let mut watch = system.order_client.watch(order_id);
            system.spawn(
                async move {
                    while let Some(order) = watch.next().await {
                        let snapshot = TrackingSnapshot::from(&order);
                        info!(%order_id, headline = %snapshot.headline(), "Tracking update");
                    }
                }
                .instrument(tracing::info_span!("tracking")),
            );

            match system.order_client.mark_order_complete(order_id).await {
                Ok(order) => info!(%order_id, status = ?order.status(), "Order ready"),
                Err(e) => error!(error = %e, "Kitchen update failed"),
            }
        }
        Err(e) => error!(error = %e, "Checkout failed"),
    }

    let orders = system.order_client.list().await.map_err(|e| e.to_string())?;
    info!(size = orders.len(), "Session orders");

    system.shutdown().await.map_err(|e| e.to_string())?;

    info!("Session completed successfully");
    Ok(())
}
