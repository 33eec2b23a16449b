//! Custom actions for the cart actor.

use crate::model::{LineId, MenuItem};

/// Cart mutations and reads beyond plain CRUD.
///
/// All mutating variants follow the cart's no-op rules: zero quantities and
/// unknown line ids never error, they simply leave the cart unchanged.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a quantity of a dish, merging on (item id, notes). The item is a
    /// value snapshot taken at add time.
    AddItem {
        item: MenuItem,
        quantity: u32,
        notes: Option<String>,
    },
    /// Replace a line's quantity in place; 0 removes the line.
    UpdateQuantity { line: LineId, quantity: u32 },
    /// Remove a line.
    RemoveItem { line: LineId },
    /// Empty the cart, e.g. after checkout.
    Clear,
    /// Read the derived totals without mutating anything.
    Totals,
}

/// Results from CartActions - variants match 1:1 with CartAction.
#[derive(Debug, Clone)]
pub enum CartActionResult {
    AddItem(()),
    UpdateQuantity(()),
    RemoveItem(()),
    Clear(()),
    Totals { amount: u64, items: u32 },
}
