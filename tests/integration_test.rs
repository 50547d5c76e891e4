use restaurant_orders::clients::actor_client::ActorClient;
use restaurant_orders::config::TrackerConfig;
use restaurant_orders::lifecycle::{KitchenSystem, SystemError};
use restaurant_orders::model::{
    CartError, CheckoutDetails, ItemId, ItemStatus, Money, OrderId, OrderStatus, TableStatus,
    TrackingStage,
};
use restaurant_orders::order_actor::OrderError;
use restaurant_orders::tracker::{OrderFilter, TableFilter, TrackerError};

fn item(order: u32, index: usize) -> (OrderId, ItemId) {
    let order_id = OrderId(order);
    (order_id, ItemId::for_position(order_id, index))
}

/// Full end-to-end test: seeded store, kitchen updates and the staff view.
#[tokio::test]
async fn test_kitchen_session_end_to_end() {
    let system = KitchenSystem::start(TrackerConfig::default())
        .await
        .expect("Failed to start system");
    let client = system.order_client.clone();

    // Seed: four orders, only the second one is already complete
    let orders = client.fetch_orders().await.expect("Failed to fetch orders");
    assert_eq!(orders.len(), 4);
    let ids: Vec<u32> = orders.iter().map(|o| o.id.0).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
    assert_eq!(orders[0].items[0].id, ItemId("1a".to_string()));

    let stats = client.kitchen_stats().await.unwrap();
    assert_eq!(stats.active, 3);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.urgent, 1);
    assert_eq!(stats.average_minutes_left, 15);

    // Kitchen advances the first order one item at a time
    let (order_id, first) = item(1, 0);
    let (_, second) = item(1, 1);
    let order = client
        .submit_item_status(order_id, first, ItemStatus::Ready)
        .await
        .expect("preparing -> ready should be allowed");
    assert!(!order.is_complete());

    let order = client
        .submit_item_status(order_id, second.clone(), ItemStatus::Preparing)
        .await
        .unwrap();
    assert_eq!(order.item(&second).unwrap().status, ItemStatus::Preparing);

    let order = client
        .submit_item_status(order_id, second, ItemStatus::Ready)
        .await
        .unwrap();
    assert!(order.is_complete());
    assert_eq!(order.status(), OrderStatus::Ready);

    let (active, completed) = client.active_and_completed().await.unwrap();
    assert_eq!(active.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(completed.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![1, 2]);

    // Staff search by customer and by derived status
    let found = client.search(&OrderFilter::new().term("jane")).await.unwrap();
    assert_eq!(found.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![2]);

    let found = client
        .search(&OrderFilter::new().status(OrderStatus::Preparing))
        .await
        .unwrap();
    assert_eq!(found.iter().map(|o| o.id.0).collect::<Vec<_>>(), vec![4]);

    drop(client);
    system.shutdown().await.expect("Failed to shutdown system");
}

/// Backward moves and unknown ids are rejected and leave the store unchanged.
#[tokio::test]
async fn test_rejected_updates_leave_store_unchanged() {
    let system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();
    let client = system.order_client.clone();
    let before = client.fetch_orders().await.unwrap();

    let (order_id, ready_item) = item(2, 0);
    let err = client
        .submit_item_status(order_id, ready_item, ItemStatus::Pending)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::Tracker(TrackerError::InvalidTransition { .. })
    ));

    let err = client
        .submit_item_status(OrderId(99), ItemId("99a".to_string()), ItemStatus::Ready)
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::NotFound(_)));

    let (order_id, _) = item(3, 0);
    let err = client
        .submit_item_status(order_id, ItemId("3z".to_string()), ItemStatus::Ready)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        OrderError::Tracker(TrackerError::ItemNotFound { .. })
    ));

    assert_eq!(client.fetch_orders().await.unwrap(), before);

    drop(client);
    system.shutdown().await.unwrap();
}

/// The customer watch sees kitchen updates for its order only.
#[tokio::test]
async fn test_customer_watch_follows_kitchen() {
    let system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();
    let kitchen = system.order_client.clone();
    let mut watch = system.order_client.watch(OrderId(3));

    // An update to another order is not delivered to this watch
    kitchen.mark_order_complete(OrderId(4)).await.unwrap();
    let order = kitchen.mark_order_complete(OrderId(3)).await.unwrap();
    assert!(order.is_complete());

    let seen = watch.next().await.expect("watch closed early");
    assert_eq!(seen.id, OrderId(3));
    assert!(seen.is_complete());

    let snapshot = kitchen.track(OrderId(3)).await.unwrap();
    assert_eq!(snapshot.stage, TrackingStage::ReadyForPickup);
    assert_eq!(snapshot.headline(), "Ready!");

    let served = kitchen.mark_served(OrderId(3)).await.unwrap();
    assert_eq!(served.status(), OrderStatus::Served);

    drop(kitchen);
    system.shutdown().await.unwrap();
}

/// A cart checked out through the system becomes a new pending order.
#[tokio::test]
async fn test_checkout_places_order() {
    let mut system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();

    let mut cart = system.new_cart();
    cart.add(system.menu.get("1").unwrap(), 2).unwrap();
    cart.add(system.menu.get("2").unwrap(), 1).unwrap();
    let totals = cart.totals();
    assert_eq!(totals.subtotal, Money::from_naira(6800));
    assert_eq!(totals.tax, Money::from_naira(510));
    assert_eq!(totals.total, Money::from_naira(7310));

    let unavailable = cart.add(system.menu.get("4").unwrap(), 1);
    assert!(matches!(unavailable, Err(CartError::Unavailable(_))));

    let details = CheckoutDetails {
        customer_name: "Ada Obi".to_string(),
        table_number: 4,
        order_time: "3:05 PM".to_string(),
    };
    let order_id = system.place_order(&cart, details).await.unwrap();
    assert_eq!(order_id, OrderId(5));
    assert_eq!(
        system.floor.get(4).unwrap().order_value,
        Money::from_naira(7187 + 7310)
    );

    let order = system
        .order_client
        .get(order_id)
        .await
        .unwrap()
        .expect("placed order missing");
    assert_eq!(order.customer_name, "Ada Obi");
    assert_eq!(order.items.len(), 2);
    assert!(order.items.iter().all(|i| i.status == ItemStatus::Pending));
    assert!(order.order_number.as_str().starts_with("AMP-"));
    assert_eq!(order.tracking_stage(), TrackingStage::Received);

    let empty = system.new_cart();
    let details = CheckoutDetails {
        customer_name: "Ada Obi".to_string(),
        table_number: 3,
        order_time: "3:10 PM".to_string(),
    };
    let err = system.place_order(&empty, details).await.unwrap_err();
    assert!(matches!(err, SystemError::Cart(CartError::Empty)));

    system.shutdown().await.unwrap();
}

/// Concurrent kitchen stations on the same store never lose an update.
#[tokio::test]
async fn test_concurrent_item_updates() {
    let system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();

    let mut handles = vec![];
    for (order, index) in [(3, 0), (3, 1), (4, 0), (4, 1)] {
        let client = system.order_client.clone();
        handles.push(tokio::spawn(async move {
            let (order_id, item_id) = item(order, index);
            client
                .submit_item_status(order_id, item_id.clone(), ItemStatus::Preparing)
                .await?;
            client
                .submit_item_status(order_id, item_id, ItemStatus::Ready)
                .await
        }));
    }
    for handle in handles {
        handle.await.unwrap().expect("update failed");
    }

    let stats = system.order_client.kitchen_stats().await.unwrap();
    assert_eq!(stats.active, 1);
    assert_eq!(stats.completed, 3);

    system.shutdown().await.unwrap();
}

/// Session tasks are awaited on shutdown, and a panicking one is reported.
#[tokio::test]
async fn test_shutdown_reports_failed_session_task() {
    let mut system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();

    let mut watch = system.order_client.watch(OrderId(1));
    system.spawn(async move { while watch.next().await.is_some() {} });
    system.spawn(async { panic!("tracking view crashed") });

    let err = system.shutdown().await.unwrap_err();
    assert!(matches!(err, SystemError::TaskFailed(_)));
}

/// A session task following a watch ends when the store stops.
#[tokio::test]
async fn test_shutdown_waits_for_watch_task() {
    let mut system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();

    let (seen_tx, seen_rx) = tokio::sync::oneshot::channel();
    let mut watch = system.order_client.watch(OrderId(3));
    system.spawn(async move {
        let mut seen = Vec::new();
        while let Some(order) = watch.next().await {
            seen.push(order.status());
        }
        let _ = seen_tx.send(seen);
    });

    system.order_client.mark_order_complete(OrderId(3)).await.unwrap();
    system.shutdown().await.unwrap();

    assert_eq!(seen_rx.await.unwrap(), vec![OrderStatus::Ready]);
}

/// Staff view: per-status order counts and the seeded dining floor.
#[tokio::test]
async fn test_staff_floor_and_status_counts() {
    let mut system = KitchenSystem::start(TrackerConfig::default()).await.unwrap();

    let staff = system.order_client.staff_stats().await.unwrap();
    assert_eq!(staff.count(OrderStatus::Pending), 1);
    assert_eq!(staff.count(OrderStatus::Preparing), 2);
    assert_eq!(staff.count(OrderStatus::Ready), 1);
    assert_eq!(staff.count(OrderStatus::Served), 0);

    system.order_client.mark_served(OrderId(2)).await.unwrap();
    let staff = system.order_client.staff_stats().await.unwrap();
    assert_eq!(staff.ready, 0);
    assert_eq!(staff.served, 1);

    let floor = system.floor_stats();
    assert_eq!(floor.occupied, 3);
    assert_eq!(floor.total, 8);
    assert_eq!(floor.revenue, Money::from_naira(28_587));

    let occupied: Vec<u32> = TableFilter::new()
        .status(TableStatus::Occupied)
        .apply(system.floor.tables())
        .iter()
        .map(|table| table.number)
        .collect();
    assert_eq!(occupied, vec![2, 4, 6]);

    // A needs-cleaning table takes no bill until it is cleaned and reseated
    let mut cart = system.new_cart();
    cart.add(system.menu.get("2").unwrap(), 1).unwrap();
    let details = CheckoutDetails {
        customer_name: "Bola".to_string(),
        table_number: 3,
        order_time: "6:40 PM".to_string(),
    };
    system.place_order(&cart, details).await.unwrap();
    assert_eq!(system.floor.get(3).unwrap().order_value, Money::ZERO);

    system.floor.clean(3).unwrap();
    system.floor.seat(3, 2).unwrap();
    assert_eq!(system.floor_stats().occupied, 4);

    system.shutdown().await.unwrap();
}
