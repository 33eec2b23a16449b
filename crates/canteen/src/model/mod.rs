//! Pure domain types: menu items, carts, orders, accounts.
//!
//! Everything in here is synchronous, single-owner state; the actors in the
//! sibling modules wrap these types with message-passing concurrency.

pub mod account;
pub mod cart;
pub mod menu;
pub mod order;

pub use account::{Account, AccountCreate, AccountId, AccountUpdate, Role};
pub use cart::{Cart, CartCreate, CartId, CartLine, LineId};
pub use menu::{MenuItem, MenuItemCreate, MenuItemId, MenuItemUpdate};
pub use order::{Order, OrderCreate, OrderId, OrderStatus, PaymentMethod, PaymentStatus};
