//! Dining tables for the staff floor view.
//!
//! A table cycles `Available -> Occupied -> NeedsCleaning -> Available`. `order_value` is
//! the running bill of the party currently seated and is cleared when the table is
//! cleaned.

use super::Money;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TableStatus {
    #[default]
    Available,
    Occupied,
    NeedsCleaning,
}

impl Display for TableStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            TableStatus::Available => "available",
            TableStatus::Occupied => "occupied",
            TableStatus::NeedsCleaning => "needs-cleaning",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    #[error("Table {0} does not exist")]
    NotFound(u32),

    #[error("Table {number} is {status}")]
    WrongStatus { number: u32, status: TableStatus },

    #[error("A party needs at least one guest")]
    EmptyParty,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub number: u32,
    #[serde(default)]
    pub status: TableStatus,
    #[serde(default)]
    pub customers: u32,
    #[serde(default)]
    pub order_value: Money,
    /// Minutes the current party has been seated.
    #[serde(default)]
    pub minutes_occupied: u32,
}

impl Table {
    pub fn new(number: u32) -> Self {
        Self {
            number,
            status: TableStatus::Available,
            customers: 0,
            order_value: Money::ZERO,
            minutes_occupied: 0,
        }
    }

    fn expect_status(&self, status: TableStatus) -> Result<(), TableError> {
        if self.status == status {
            Ok(())
        } else {
            Err(TableError::WrongStatus {
                number: self.number,
                status: self.status,
            })
        }
    }
}

/// Every table in the restaurant, ordered by number.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Floor {
    tables: Vec<Table>,
}

impl Floor {
    pub fn new(mut tables: Vec<Table>) -> Self {
        tables.sort_by_key(|table| table.number);
        Self { tables }
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn get(&self, number: u32) -> Option<&Table> {
        self.tables.iter().find(|table| table.number == number)
    }

    fn get_mut(&mut self, number: u32) -> Result<&mut Table, TableError> {
        self.tables
            .iter_mut()
            .find(|table| table.number == number)
            .ok_or(TableError::NotFound(number))
    }

    /// Seats a party at an available table.
    pub fn seat(&mut self, number: u32, customers: u32) -> Result<&Table, TableError> {
        if customers == 0 {
            return Err(TableError::EmptyParty);
        }
        let table = self.get_mut(number)?;
        table.expect_status(TableStatus::Available)?;
        table.status = TableStatus::Occupied;
        table.customers = customers;
        table.order_value = Money::ZERO;
        table.minutes_occupied = 0;
        Ok(&*table)
    }

    /// Adds a placed order's total to the bill of an occupied table.
    pub fn record_order(&mut self, number: u32, total: Money) -> Result<&Table, TableError> {
        let table = self.get_mut(number)?;
        table.expect_status(TableStatus::Occupied)?;
        table.order_value = table.order_value + total;
        Ok(&*table)
    }

    /// The party has left; the table waits for cleaning. The bill stays for the floor total.
    pub fn vacate(&mut self, number: u32) -> Result<&Table, TableError> {
        let table = self.get_mut(number)?;
        table.expect_status(TableStatus::Occupied)?;
        table.status = TableStatus::NeedsCleaning;
        table.customers = 0;
        table.minutes_occupied = 0;
        Ok(&*table)
    }

    pub fn clean(&mut self, number: u32) -> Result<&Table, TableError> {
        let table = self.get_mut(number)?;
        table.expect_status(TableStatus::NeedsCleaning)?;
        table.status = TableStatus::Available;
        table.order_value = Money::ZERO;
        Ok(&*table)
    }

    /// Advances the seated time of every occupied table.
    pub fn tick(&mut self, minutes: u32) {
        for table in &mut self.tables {
            if table.status == TableStatus::Occupied {
                table.minutes_occupied = table.minutes_occupied.saturating_add(minutes);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn floor() -> Floor {
        Floor::new(vec![Table::new(2), Table::new(1)])
    }

    #[test]
    fn test_tables_sorted_by_number() {
        let numbers: Vec<u32> = floor().tables().iter().map(|t| t.number).collect();
        assert_eq!(numbers, vec![1, 2]);
    }

    #[test]
    fn test_table_cycle() {
        let mut floor = floor();
        floor.seat(1, 4).unwrap();
        floor.record_order(1, Money::from_naira(7310)).unwrap();
        floor.tick(45);
        assert_eq!(floor.get(1).unwrap().minutes_occupied, 45);
        assert_eq!(floor.get(2).unwrap().minutes_occupied, 0);

        let table = floor.vacate(1).unwrap();
        assert_eq!(table.status, TableStatus::NeedsCleaning);
        assert_eq!(table.order_value, Money::from_naira(7310));

        let table = floor.clean(1).unwrap();
        assert_eq!(table.status, TableStatus::Available);
        assert_eq!(table.order_value, Money::ZERO);
    }

    #[test]
    fn test_out_of_order_moves_rejected() {
        let mut floor = floor();
        assert_eq!(
            floor.clean(1).unwrap_err(),
            TableError::WrongStatus {
                number: 1,
                status: TableStatus::Available
            }
        );
        assert_eq!(floor.seat(1, 0).unwrap_err(), TableError::EmptyParty);
        assert_eq!(floor.seat(9, 2).unwrap_err(), TableError::NotFound(9));
        assert!(floor.record_order(2, Money::from_naira(100)).is_err());

        floor.seat(2, 2).unwrap();
        assert!(floor.seat(2, 3).is_err());
        assert_eq!(floor.get(2).unwrap().customers, 2);
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let json = serde_json::to_string(&TableStatus::NeedsCleaning).unwrap();
        assert_eq!(json, "\"needs-cleaning\"");
    }
}
