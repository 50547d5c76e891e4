//! Pure data structures: orders, money, menu, cart and tables.

pub mod cart;
pub mod menu;
pub mod money;
pub mod order;
pub mod table;

pub use cart::*;
pub use menu::*;
pub use money::*;
pub use order::*;
pub use table::*;
