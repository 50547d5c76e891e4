use super::countdown::Countdown;
use crate::clients::OrderClient;
use crate::config::TrackerConfig;
use crate::model::{Cart, CartError, CheckoutDetails, Floor, Menu, OrderId};
use crate::order_actor::OrderError;
use crate::seed::{self, SeedError};
use crate::tracker::FloorStats;
use std::future::Future;
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Seed(#[from] SeedError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error("Task failed: {0}")]
    TaskFailed(String),
}

/// Runtime orchestrator for one restaurant session.
///
/// `KitchenSystem` is responsible for:
/// - **Lifecycle Management**: starting the order actor and the countdown, and stopping both
/// - **Seeding**: creating the opening orders before any view sees the store
/// - **Dependency Wiring**: handing out one shared [`OrderClient`] to every view
/// - **Floor**: keeping each occupied table's bill in step with the orders placed there
///
/// # Example
///
/// ```ignore
/// let system = KitchenSystem::start(TrackerConfig::from_env()?).await?;
///
/// let (active, completed) = system.order_client.active_and_completed().await?;
///
/// system.shutdown().await?;
/// ```
pub struct KitchenSystem {
    /// Shared client for the order store; clone it into each view.
    pub order_client: OrderClient,

    pub menu: Menu,

    pub floor: Floor,

    config: TrackerConfig,
    countdown: Option<Countdown>,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl KitchenSystem {
    /// Starts the order actor, seeds it, and starts the countdown.
    pub async fn start(config: TrackerConfig) -> Result<Self, SystemError> {
        let orders = seed::kitchen_orders()?;
        let menu = seed::menu()?;
        let mut system = Self::empty(config, menu);
        system.floor = seed::floor()?;

        let seeded = orders.len();
        for params in orders {
            system.order_client.create_order(params).await?;
        }
        info!(seeded, "Order store seeded");

        system.start_countdown();
        Ok(system)
    }

    /// Starts an order actor with no orders, no tables and no countdown.
    pub fn empty(config: TrackerConfig, menu: Menu) -> Self {
        let (order_actor, generic_client) =
            crate::order_actor::new(config.actor_buffer, config.event_capacity);
        let order_handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client: OrderClient::new(generic_client),
            menu,
            floor: Floor::default(),
            config,
            countdown: None,
            handles: vec![order_handle],
        }
    }

    /// Starts the countdown if it is not already running.
    pub fn start_countdown(&mut self) {
        if self.countdown.is_none() {
            self.countdown = Some(Countdown::spawn(
                self.order_client.clone(),
                self.config.tick_interval,
                self.config.tick_delta_minutes,
            ));
        }
    }

    /// Runs a session task, e.g. a view following an [`OrderWatch`](crate::clients::OrderWatch).
    ///
    /// `shutdown` waits for it after the store has stopped, so the task should end when its
    /// watch returns `None`. A panic in the task is reported by `shutdown`.
    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.push(tokio::spawn(task));
    }

    /// A new empty cart priced with the configured tax rate.
    pub fn new_cart(&self) -> Cart {
        Cart::new(self.config.tax_rate)
    }

    /// Checks the cart out and places the order in the shared store.
    ///
    /// The total is added to the table's bill when the table is occupied.
    pub async fn place_order(
        &mut self,
        cart: &Cart,
        details: CheckoutDetails,
    ) -> Result<OrderId, SystemError> {
        let params = cart.checkout(details)?;
        let totals = cart.totals();
        info!(order_number = %params.order_number, total = %totals.total, "Placing order");
        let table_number = params.table_number;
        let order_id = self.order_client.create_order(params).await?;

        if let Err(e) = self.floor.record_order(table_number, totals.total) {
            debug!(table_number, error = %e, "Order not added to a table bill");
        }
        Ok(order_id)
    }

    pub fn floor_stats(&self) -> FloorStats {
        FloorStats::from_tables(self.floor.tables())
    }

    /// Gracefully shuts down the system.
    ///
    /// Stops the countdown first, since it holds a client clone, then drops the client so
    /// the actor's channel closes, then waits for the actor task and every task started with
    /// [`spawn`](Self::spawn). Any `OrderClient` clone handed out earlier must be dropped
    /// before calling this, or the actor keeps running.
    pub async fn shutdown(mut self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        if let Some(countdown) = self.countdown.take() {
            countdown
                .stop()
                .await
                .map_err(|e| SystemError::TaskFailed(e.to_string()))?;
        }

        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Session task failed: {:?}", e);
                return Err(SystemError::TaskFailed(e.to_string()));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
