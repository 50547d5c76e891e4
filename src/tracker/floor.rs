//! Staff floor view: table search and the occupancy header.

use crate::model::{Money, Table, TableStatus};
use serde::Serialize;

/// Matches tables by number substring and status. An empty term matches everything.
#[derive(Debug, Clone, Default)]
pub struct TableFilter {
    term: String,
    status: Option<TableStatus>,
}

impl TableFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = term.into().trim().to_string();
        self
    }

    pub fn status(mut self, status: TableStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, table: &Table) -> bool {
        table.number.to_string().contains(&self.term)
            && self.status.map_or(true, |status| table.status == status)
    }

    pub fn apply<'a>(&self, tables: impl IntoIterator<Item = &'a Table>) -> Vec<&'a Table> {
        tables.into_iter().filter(|table| self.matches(table)).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct FloorStats {
    pub occupied: usize,
    pub total: usize,
    /// Sum of every table's current bill.
    pub revenue: Money,
}

impl FloorStats {
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Self {
        tables.into_iter().fold(FloorStats::default(), |mut stats, table| {
            stats.total += 1;
            if table.status == TableStatus::Occupied {
                stats.occupied += 1;
            }
            stats.revenue = stats.revenue + table.order_value;
            stats
        })
    }
}
