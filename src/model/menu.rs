//! Menu catalog the cart is filled from.

use super::Money;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Starters,
    Mains,
    Drinks,
    Desserts,
}

/// A dish as listed on the menu. `price` is in kobo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Money,
    pub category: Category,
    pub available: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Menu {
    items: Vec<MenuItem>,
}

impl Menu {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    pub fn get(&self, id: &str) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &MenuItem> {
        self.items
            .iter()
            .filter(move |item| item.category == category)
    }

    pub fn available(&self) -> impl Iterator<Item = &MenuItem> {
        self.items.iter().filter(|item| item.available)
    }
}
