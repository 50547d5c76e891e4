//! Customer cart and checkout.
//!
//! A [`Cart`] is local to one customer session. Checking out turns it into an
//! [`OrderCreate`] for the shared order store; the cart itself never touches the store.

use super::{MenuItem, Money, OrderCreate, OrderItemCreate, OrderNumber, Priority, TaxRate, Totals};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Minutes quoted for a freshly placed order.
pub const DEFAULT_PREP_MINUTES: u32 = 15;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("Menu item is not available: {0}")]
    Unavailable(String),

    #[error("Item is not in the cart: {0}")]
    NotInCart(String),

    #[error("Quantity must be positive")]
    ZeroQuantity,

    #[error("Quantity too large for {0}")]
    QuantityOverflow(String),

    #[error("Cart is empty")]
    Empty,

    #[error("Customer name is required")]
    MissingCustomer,

    #[error("Table number must be positive")]
    InvalidTable,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub menu_item_id: String,
    pub name: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub special_instructions: Option<String>,
}

/// Who is ordering and where, collected on the checkout form.
#[derive(Debug, Clone)]
pub struct CheckoutDetails {
    pub customer_name: String,
    pub table_number: u32,
    /// Display time, e.g. `"2:30 PM"`.
    pub order_time: String,
}

#[derive(Debug, Clone)]
pub struct Cart {
    lines: Vec<CartLine>,
    tax_rate: TaxRate,
}

impl Cart {
    pub fn new(tax_rate: TaxRate) -> Self {
        Self {
            lines: Vec::new(),
            tax_rate,
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of dishes, counting quantities.
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |count, line| count.saturating_add(line.quantity))
    }

    /// Adds `quantity` of a menu item, merging with an existing line for the same item.
    pub fn add(&mut self, item: &MenuItem, quantity: u32) -> Result<(), CartError> {
        if !item.available {
            return Err(CartError::Unavailable(item.name.clone()));
        }
        if quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }

        match self.line_mut(&item.id) {
            Some(line) => {
                line.quantity = line
                    .quantity
                    .checked_add(quantity)
                    .ok_or_else(|| CartError::QuantityOverflow(item.name.clone()))?;
            }
            None => self.lines.push(CartLine {
                menu_item_id: item.id.clone(),
                name: item.name.clone(),
                unit_price: item.price,
                quantity,
                special_instructions: None,
            }),
        }
        Ok(())
    }

    /// Sets a line's quantity; zero removes the line.
    pub fn set_quantity(&mut self, menu_item_id: &str, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return if self.remove(menu_item_id) {
                Ok(())
            } else {
                Err(CartError::NotInCart(menu_item_id.to_string()))
            };
        }
        let line = self
            .line_mut(menu_item_id)
            .ok_or_else(|| CartError::NotInCart(menu_item_id.to_string()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Removes a line. Returns whether it was present.
    pub fn remove(&mut self, menu_item_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|line| line.menu_item_id != menu_item_id);
        self.lines.len() != before
    }

    pub fn set_instructions(
        &mut self,
        menu_item_id: &str,
        instructions: impl Into<String>,
    ) -> Result<(), CartError> {
        let line = self
            .line_mut(menu_item_id)
            .ok_or_else(|| CartError::NotInCart(menu_item_id.to_string()))?;
        let instructions = instructions.into();
        line.special_instructions = if instructions.trim().is_empty() {
            None
        } else {
            Some(instructions)
        };
        Ok(())
    }

    pub fn totals(&self) -> Totals {
        Totals::compute(
            self.lines.iter().map(|line| (line.unit_price, line.quantity)),
            self.tax_rate,
        )
    }

    /// Builds the kitchen order for this cart with a fresh order number.
    pub fn checkout(&self, details: CheckoutDetails) -> Result<OrderCreate, CartError> {
        self.checkout_with(details, &mut rand::thread_rng())
    }

    pub fn checkout_with<R: Rng + ?Sized>(
        &self,
        details: CheckoutDetails,
        rng: &mut R,
    ) -> Result<OrderCreate, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::Empty);
        }
        let customer_name = details.customer_name.trim();
        if customer_name.is_empty() {
            return Err(CartError::MissingCustomer);
        }
        if details.table_number == 0 {
            return Err(CartError::InvalidTable);
        }

        let items = self
            .lines
            .iter()
            .map(|line| OrderItemCreate {
                name: line.name.clone(),
                quantity: line.quantity,
                status: Default::default(),
                special_instructions: line.special_instructions.clone(),
            })
            .collect();

        Ok(OrderCreate {
            order_number: OrderNumber::generate(rng),
            table_number: details.table_number,
            customer_name: customer_name.to_string(),
            items,
            order_time: details.order_time,
            estimated_time: DEFAULT_PREP_MINUTES,
            priority: Priority::Normal,
        })
    }

    fn line_mut(&mut self, menu_item_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.menu_item_id == menu_item_id)
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new(TaxRate::default())
    }
}
