//! The cart: pending, uncommitted selections for one account.
//!
//! Lines merge on (menu item id, notes): re-adding the same dish with the
//! same notes bumps the quantity, different notes start a distinct line.
//! Each line stores a full value copy of the menu item, so a later price
//! edit in the catalog never retroactively changes a cart that already
//! holds the dish. Totals are derived on every call, never cached.

use crate::model::account::AccountId;
use crate::model::menu::MenuItem;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// Identifier for a line within a cart, minted from the cart's own counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineId(pub u32);

impl Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "line_{}", self.0)
    }
}

/// One distinct (dish, notes) entry in a cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: LineId,
    /// Value snapshot of the dish at add time, not a live catalog link.
    pub item: MenuItem,
    /// Always >= 1; a line whose quantity would drop to 0 is removed.
    pub quantity: u32,
    pub notes: Option<String>,
}

impl CartLine {
    /// Line subtotal in minor currency units.
    pub fn subtotal(&self) -> u64 {
        self.item.price * u64::from(self.quantity)
    }
}

/// The pending selection owned by exactly one account.
///
/// Cleared, not destroyed, when its contents are submitted as an order, so
/// the same cart is reused for the account's next visit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Cart {
    pub id: CartId,
    pub account_id: AccountId,
    pub lines: Vec<CartLine>,
    next_line_id: u32,
}

/// Payload for creating an empty cart for an account.
#[derive(Debug, Clone)]
pub struct CartCreate {
    pub account_id: AccountId,
}

impl Cart {
    pub fn new(id: CartId, account_id: AccountId) -> Self {
        Self {
            id,
            account_id,
            lines: Vec::new(),
            next_line_id: 1,
        }
    }

    /// Adds `quantity` of `item` with the given notes.
    ///
    /// A quantity of 0 is a silent no-op; removal goes through
    /// [`Cart::update_quantity`] or [`Cart::remove_item`] instead. If a line
    /// with the same (item id, notes) pair exists its quantity grows,
    /// otherwise a new line is appended with a fresh id.
    pub fn add_item(&mut self, item: MenuItem, quantity: u32, notes: Option<String>) {
        if quantity == 0 {
            return;
        }
        if let Some(line) = self
            .lines
            .iter_mut()
            .find(|line| line.item.id == item.id && line.notes == notes)
        {
            line.quantity += quantity;
            return;
        }
        let id = LineId(self.next_line_id);
        self.next_line_id += 1;
        self.lines.push(CartLine {
            id,
            item,
            quantity,
            notes,
        });
    }

    /// Replaces a line's quantity in place, preserving its position.
    /// A quantity of 0 removes the line. Unknown ids are ignored.
    pub fn update_quantity(&mut self, line: LineId, quantity: u32) {
        if quantity == 0 {
            self.remove_item(line);
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.id == line) {
            line.quantity = quantity;
        }
    }

    /// Removes the line with the given id. Unknown ids are ignored.
    pub fn remove_item(&mut self, line: LineId) {
        self.lines.retain(|l| l.id != line);
    }

    /// Empties the cart. The cart itself survives for reuse.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of line subtotals, recomputed from the current lines.
    pub fn total_amount(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal).sum()
    }

    /// Sum of line quantities, recomputed from the current lines.
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::menu::MenuItemId;

    fn item(id: u32, price: u64) -> MenuItem {
        MenuItem {
            id: MenuItemId(id),
            name: format!("Dish {id}"),
            description: String::new(),
            price,
            category: "rice".to_string(),
            available: true,
            preparation_minutes: 10,
        }
    }

    fn cart() -> Cart {
        Cart::new(CartId(1), AccountId(1))
    }

    #[test]
    fn same_item_same_notes_merges_into_one_line() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 1, Some("no onion".into()));
        cart.add_item(item(1, 45_000), 1, Some("no onion".into()));

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 2);
    }

    #[test]
    fn same_item_different_notes_gets_a_distinct_line() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 1, Some("no onion".into()));
        cart.add_item(item(1, 45_000), 1, Some("extra spicy".into()));

        assert_eq!(cart.lines.len(), 2);
        assert_ne!(cart.lines[0].id, cart.lines[1].id);
    }

    #[test]
    fn repeated_adds_sum_quantities() {
        let mut cart = cart();
        for _ in 0..5 {
            cart.add_item(item(3, 10_000), 2, None);
        }
        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 10);
    }

    #[test]
    fn zero_quantity_add_is_a_no_op() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 0, None);
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn totals_match_the_menu_scenario() {
        // Item A 45000 x1, item B 25000 x2.
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 1, None);
        cart.add_item(item(2, 25_000), 2, None);

        assert_eq!(cart.total_amount(), 95_000);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn totals_track_every_mutation() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 1, None);
        assert_eq!(cart.total_amount(), 45_000);

        cart.add_item(item(2, 25_000), 2, None);
        assert_eq!(cart.total_amount(), 95_000);

        let line = cart.lines[1].id;
        cart.update_quantity(line, 1);
        assert_eq!(cart.total_amount(), 70_000);
        assert_eq!(cart.total_items(), 2);

        cart.remove_item(cart.lines[0].id);
        assert_eq!(cart.total_amount(), 25_000);
    }

    #[test]
    fn update_to_zero_equals_remove() {
        let mut a = cart();
        a.add_item(item(1, 45_000), 2, None);
        let line_a = a.lines[0].id;
        a.update_quantity(line_a, 0);

        let mut b = cart();
        b.add_item(item(1, 45_000), 2, None);
        let line_b = b.lines[0].id;
        b.remove_item(line_b);

        assert!(a.is_empty());
        assert!(b.is_empty());
    }

    #[test]
    fn update_preserves_line_position() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 1, None);
        cart.add_item(item(2, 25_000), 1, None);
        cart.add_item(item(3, 15_000), 1, None);

        let middle = cart.lines[1].id;
        cart.update_quantity(middle, 4);

        assert_eq!(cart.lines[1].id, middle);
        assert_eq!(cart.lines[1].quantity, 4);
        assert_eq!(cart.lines.len(), 3);
    }

    #[test]
    fn removing_an_unknown_line_is_a_no_op() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 1, None);
        cart.remove_item(LineId(99));
        cart.update_quantity(LineId(99), 5);

        assert_eq!(cart.lines.len(), 1);
        assert_eq!(cart.lines[0].quantity, 1);
    }

    #[test]
    fn clear_empties_but_keeps_the_cart_usable() {
        let mut cart = cart();
        cart.add_item(item(1, 45_000), 3, None);
        cart.clear();

        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.total_amount(), 0);

        cart.add_item(item(2, 25_000), 1, None);
        assert_eq!(cart.total_items(), 1);
    }

    #[test]
    fn snapshot_shields_cart_from_later_price_edits() {
        let mut cart = cart();
        let mut dish = item(1, 45_000);
        cart.add_item(dish.clone(), 1, None);

        // Catalog-side edit after the dish entered the cart.
        dish.price = 99_000;

        assert_eq!(cart.total_amount(), 45_000);
    }
}
