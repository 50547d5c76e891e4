//! Orders, line items and their status model.
//!
//! [`Order`] implements [`ActorEntity`](crate::framework::ActorEntity) in
//! [`order_actor::entity`](crate::order_actor::entity), so one
//! [`ResourceActor`](crate::framework::ResourceActor) owns every order of a session.
//!
//! Completion is never stored: [`Order::is_complete`] is recomputed from the items on
//! every call.

use crate::tracker::TrackerError;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for Orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a line item, unique within the whole store (`"1a"`, `"1b"`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    /// Derives the id of the item at `index` within order `order`.
    ///
    /// The first 26 items get a letter suffix; later ones fall back to `-<n>`.
    pub fn for_position(order: OrderId, index: usize) -> Self {
        match u8::try_from(index).ok().filter(|i| *i < 26) {
            Some(i) => Self(format!("{}{}", order.0, (b'a' + i) as char)),
            None => Self(format!("{}-{}", order.0, index + 1)),
        }
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Display number of an order: `AMP-` followed by six uppercase alphanumerics.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OrderNumber(String);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid order number: {0:?}")]
pub struct InvalidOrderNumber(pub String);

impl OrderNumber {
    pub const PREFIX: &'static str = "AMP-";
    const SUFFIX_LEN: usize = 6;
    const ALPHABET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    pub fn parse(value: &str) -> Result<Self, InvalidOrderNumber> {
        let valid = value
            .strip_prefix(Self::PREFIX)
            .map(|suffix| {
                suffix.len() == Self::SUFFIX_LEN
                    && suffix
                        .bytes()
                        .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
            })
            .unwrap_or(false);
        if valid {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidOrderNumber(value.to_string()))
        }
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let suffix: String = (0..Self::SUFFIX_LEN)
            .map(|_| Self::ALPHABET[rng.gen_range(0..Self::ALPHABET.len())] as char)
            .collect();
        Self(format!("{}{}", Self::PREFIX, suffix))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for OrderNumber {
    type Error = InvalidOrderNumber;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<OrderNumber> for String {
    fn from(number: OrderNumber) -> Self {
        number.0
    }
}

impl Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Preparation status of a single line item.
///
/// The only transitions are `Pending -> Preparing` and `Preparing -> Ready`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    #[default]
    Pending,
    Preparing,
    Ready,
}

impl ItemStatus {
    /// The single status this one may advance to, if any.
    pub fn next(self) -> Option<ItemStatus> {
        match self {
            ItemStatus::Pending => Some(ItemStatus::Preparing),
            ItemStatus::Preparing => Some(ItemStatus::Ready),
            ItemStatus::Ready => None,
        }
    }

    /// Checks `self -> to` against the transition table.
    ///
    /// Re-asserting the current status is allowed and changes nothing.
    pub fn can_transition_to(self, to: ItemStatus) -> bool {
        self == to || self.next() == Some(to)
    }
}

impl Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ItemStatus::Pending => "pending",
            ItemStatus::Preparing => "preparing",
            ItemStatus::Ready => "ready",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    #[default]
    Normal,
    High,
    Urgent,
}

/// Order-level status shown on the staff order list. Derived, see [`Order::status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Served,
}

/// Progress step shown to the customer on the tracking view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum TrackingStage {
    Received,
    Preparing,
    ReadyForPickup,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: u32,
    pub status: ItemStatus,
    pub special_instructions: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub order_number: OrderNumber,
    pub table_number: u32,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    /// Display time the order was taken, e.g. `"2:30 PM"`.
    pub order_time: String,
    /// Minutes remaining; never below zero.
    pub estimated_time: u32,
    pub priority: Priority,
    pub served: bool,
}

/// Payload for creating a new order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCreate {
    pub order_number: OrderNumber,
    pub table_number: u32,
    pub customer_name: String,
    pub items: Vec<OrderItemCreate>,
    pub order_time: String,
    pub estimated_time: u32,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItemCreate {
    pub name: String,
    pub quantity: u32,
    #[serde(default)]
    pub status: ItemStatus,
    #[serde(default)]
    pub special_instructions: Option<String>,
}

impl Order {
    /// Builds an order from its payload, deriving item ids from `id`.
    ///
    /// Performs no validation; see `ActorEntity::from_create_params` for that.
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let items = params
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| OrderItem {
                id: ItemId::for_position(id, index),
                name: item.name,
                quantity: item.quantity,
                status: item.status,
                special_instructions: item.special_instructions,
            })
            .collect();

        Self {
            id,
            order_number: params.order_number,
            table_number: params.table_number,
            customer_name: params.customer_name,
            items,
            order_time: params.order_time,
            estimated_time: params.estimated_time,
            priority: params.priority,
            served: false,
        }
    }

    /// True iff every item is `Ready`.
    pub fn is_complete(&self) -> bool {
        self.items.iter().all(|item| item.status == ItemStatus::Ready)
    }

    pub fn item(&self, item_id: &ItemId) -> Option<&OrderItem> {
        self.items.iter().find(|item| &item.id == item_id)
    }

    pub fn ready_items(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.status == ItemStatus::Ready)
            .count()
    }

    /// Moves one item to `status`, returning its previous status.
    ///
    /// The order is left untouched on error.
    pub fn set_item_status(
        &mut self,
        item_id: &ItemId,
        status: ItemStatus,
    ) -> Result<ItemStatus, TrackerError> {
        let order_id = self.id;
        let item = self
            .items
            .iter_mut()
            .find(|item| &item.id == item_id)
            .ok_or_else(|| TrackerError::ItemNotFound {
                order: order_id,
                item: item_id.clone(),
            })?;

        let previous = item.status;
        if !previous.can_transition_to(status) {
            return Err(TrackerError::InvalidTransition {
                item: item_id.clone(),
                from: previous,
                to: status,
            });
        }
        item.status = status;
        Ok(previous)
    }

    /// Walks every item forward to `Ready`. Returns whether anything changed.
    pub fn mark_complete(&mut self) -> bool {
        let mut changed = false;
        for item in &mut self.items {
            while let Some(next) = item.status.next() {
                item.status = next;
                changed = true;
            }
        }
        changed
    }

    /// Marks a complete order as served. Serving twice is a no-op.
    pub fn mark_served(&mut self) -> Result<(), TrackerError> {
        if !self.is_complete() {
            return Err(TrackerError::NotReady(self.id));
        }
        self.served = true;
        Ok(())
    }

    /// Decrements `estimated_time`, saturating at zero.
    pub fn tick(&mut self, delta_minutes: u32) {
        self.estimated_time = self.estimated_time.saturating_sub(delta_minutes);
    }

    pub fn status(&self) -> OrderStatus {
        if self.served {
            OrderStatus::Served
        } else if self.is_complete() {
            OrderStatus::Ready
        } else if self
            .items
            .iter()
            .all(|item| item.status == ItemStatus::Pending)
        {
            OrderStatus::Pending
        } else {
            OrderStatus::Preparing
        }
    }

    pub fn tracking_stage(&self) -> TrackingStage {
        match self.status() {
            OrderStatus::Pending => TrackingStage::Received,
            OrderStatus::Preparing => TrackingStage::Preparing,
            OrderStatus::Ready | OrderStatus::Served => TrackingStage::ReadyForPickup,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    pub(crate) fn order_with(id: u32, statuses: &[ItemStatus]) -> Order {
        let params = OrderCreate {
            order_number: OrderNumber::parse("AMP-ABC123").unwrap(),
            table_number: 2,
            customer_name: "John Doe".to_string(),
            items: statuses
                .iter()
                .map(|status| OrderItemCreate {
                    name: "Jollof Rice".to_string(),
                    quantity: 1,
                    status: *status,
                    special_instructions: None,
                })
                .collect(),
            order_time: "2:30 PM".to_string(),
            estimated_time: 12,
            priority: Priority::Normal,
        };
        Order::new(OrderId(id), params)
    }

    #[test]
    fn test_item_ids_follow_position() {
        let order = order_with(3, &[ItemStatus::Pending, ItemStatus::Pending]);
        let ids: Vec<&str> = order.items.iter().map(|i| i.id.0.as_str()).collect();
        assert_eq!(ids, vec!["3a", "3b"]);
        assert_eq!(ItemId::for_position(OrderId(1), 26).0, "1-27");
    }

    #[test]
    fn test_transition_table() {
        use ItemStatus::*;
        assert!(Pending.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Ready.can_transition_to(Pending));
        assert!(!Preparing.can_transition_to(Pending));
    }

    #[test]
    fn test_invalid_transition_leaves_order_unchanged() {
        let mut order = order_with(1, &[ItemStatus::Ready, ItemStatus::Pending]);
        let before = order.clone();

        let err = order
            .set_item_status(&ItemId::from("1a"), ItemStatus::Preparing)
            .unwrap_err();
        assert!(matches!(err, TrackerError::InvalidTransition { from: ItemStatus::Ready, .. }));
        assert_eq!(order, before);
    }

    #[test]
    fn test_is_complete_tracks_items() {
        let mut order = order_with(1, &[ItemStatus::Preparing, ItemStatus::Ready]);
        assert!(!order.is_complete());
        order
            .set_item_status(&ItemId::from("1a"), ItemStatus::Ready)
            .unwrap();
        assert!(order.is_complete());
    }

    #[test]
    fn test_derived_status() {
        assert_eq!(
            order_with(1, &[ItemStatus::Pending, ItemStatus::Pending]).status(),
            OrderStatus::Pending
        );
        assert_eq!(
            order_with(1, &[ItemStatus::Pending, ItemStatus::Ready]).status(),
            OrderStatus::Preparing
        );

        let mut order = order_with(1, &[ItemStatus::Ready]);
        assert_eq!(order.status(), OrderStatus::Ready);
        assert_eq!(order.tracking_stage(), TrackingStage::ReadyForPickup);
        order.mark_served().unwrap();
        assert_eq!(order.status(), OrderStatus::Served);
    }

    #[test]
    fn test_serving_requires_completion() {
        let mut order = order_with(7, &[ItemStatus::Preparing]);
        assert_eq!(order.mark_served(), Err(TrackerError::NotReady(OrderId(7))));
        assert!(!order.served);
    }

    #[test]
    fn test_tick_saturates() {
        let mut order = order_with(1, &[ItemStatus::Pending]);
        order.tick(5);
        assert_eq!(order.estimated_time, 7);
        order.tick(30);
        assert_eq!(order.estimated_time, 0);
    }

    #[test]
    fn test_order_number_format() {
        assert!(OrderNumber::parse("AMP-DEF456").is_ok());
        assert!(OrderNumber::parse("AMP-def456").is_err());
        assert!(OrderNumber::parse("AMP-DEF45").is_err());
        assert!(OrderNumber::parse("XYZ-DEF456").is_err());

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..20 {
            let generated = OrderNumber::generate(&mut rng);
            assert_eq!(OrderNumber::parse(generated.as_str()), Ok(generated));
        }
    }

    #[test]
    fn test_order_number_rejected_on_deserialize() {
        let result: Result<OrderNumber, _> = serde_json::from_str("\"AMP-12\"");
        assert!(result.is_err());
    }
}
