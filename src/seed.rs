//! Session seed data: the kitchen's opening orders, the menu and the dining floor.
//!
//! Both documents are embedded at compile time from `data/`, so a session always starts
//! from the same state. Menu prices and table bills are in kobo.

use crate::model::{Floor, Menu, OrderCreate};
use thiserror::Error;

const KITCHEN_ORDERS: &str = include_str!("../data/kitchen_orders.json");
const MENU: &str = include_str!("../data/menu.json");
const TABLES: &str = include_str!("../data/tables.json");

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("Malformed {document} seed: {source}")]
    Malformed {
        document: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Opening orders, in the order they should be created.
pub fn kitchen_orders() -> Result<Vec<OrderCreate>, SeedError> {
    serde_json::from_str(KITCHEN_ORDERS).map_err(|source| SeedError::Malformed {
        document: "kitchen orders",
        source,
    })
}

pub fn menu() -> Result<Menu, SeedError> {
    serde_json::from_str(MENU).map_err(|source| SeedError::Malformed {
        document: "menu",
        source,
    })
}

pub fn floor() -> Result<Floor, SeedError> {
    serde_json::from_str(TABLES)
        .map(Floor::new)
        .map_err(|source| SeedError::Malformed {
            document: "tables",
            source,
        })
}
