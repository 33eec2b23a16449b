//! Orders: immutable snapshots of a cart, tracked through a status
//! lifecycle.
//!
//! The status machine is `Pending -> Preparing -> Ready -> Completed`, with
//! `Cancelled` reachable from any non-terminal state. `Completed` and
//! `Cancelled` are terminal. Transitions are validated; the line snapshot
//! and total are frozen at submission and never recomputed.

use crate::model::account::AccountId;
use crate::model::cart::CartLine;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "order_{}", self.0)
    }
}

/// Fulfillment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderStatus {
    Pending,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// True while the order is still in the kitchen's hands.
    pub fn is_active(self) -> bool {
        matches!(self, Self::Pending | Self::Preparing | Self::Ready)
    }

    /// True once no further transition is permitted.
    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether moving from `self` to `next` is a legal step of the machine.
    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        use OrderStatus::*;
        matches!(
            (self, next),
            (Pending, Preparing)
                | (Preparing, Ready)
                | (Ready, Completed)
                | (Pending, Cancelled)
                | (Preparing, Cancelled)
                | (Ready, Cancelled)
        )
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pending => "pending",
            Self::Preparing => "preparing",
            Self::Ready => "ready",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        };
        write!(f, "{s}")
    }
}

/// How the order is paid for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    Qr,
    EWallet,
    Card,
    Cash,
}

/// Whether payment has been captured yet. New orders start `Unpaid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentStatus {
    Paid,
    Unpaid,
}

/// A submitted order.
///
/// Only `status` and `payment_status` change after creation; the lines and
/// the total are a frozen copy of the cart at submission time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub account_id: AccountId,
    pub lines: Vec<CartLine>,
    /// Frozen at submission; never recomputed from `lines` afterwards.
    pub total: u64,
    pub status: OrderStatus,
    pub payment_method: PaymentMethod,
    pub payment_status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Payload for submitting an order. No status field: the order actor forces
/// every new order to `Pending` regardless of what the caller intended.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub account_id: AccountId,
    pub lines: Vec<CartLine>,
    pub payment_method: PaymentMethod,
}

impl Order {
    pub fn new(id: OrderId, params: OrderCreate) -> Self {
        let total = params.lines.iter().map(CartLine::subtotal).sum();
        Self {
            id,
            account_id: params.account_id,
            lines: params.lines,
            total,
            status: OrderStatus::Pending,
            payment_method: params.payment_method,
            payment_status: PaymentStatus::Unpaid,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::cart::LineId;
    use crate::model::menu::{MenuItem, MenuItemId};

    fn line(price: u64, quantity: u32) -> CartLine {
        CartLine {
            id: LineId(1),
            item: MenuItem {
                id: MenuItemId(1),
                name: "Com tam".to_string(),
                description: String::new(),
                price,
                category: "rice".to_string(),
                available: true,
                preparation_minutes: 10,
            },
            quantity,
            notes: None,
        }
    }

    #[test]
    fn new_orders_are_pending_and_unpaid_with_frozen_total() {
        let order = Order::new(
            OrderId(1),
            OrderCreate {
                account_id: AccountId(1),
                lines: vec![line(45_000, 1), line(25_000, 2)],
                payment_method: PaymentMethod::Cash,
            },
        );

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.payment_status, PaymentStatus::Unpaid);
        assert_eq!(order.total, 95_000);
    }

    #[test]
    fn happy_path_transitions_are_legal() {
        use OrderStatus::*;
        assert!(Pending.can_transition_to(Preparing));
        assert!(Preparing.can_transition_to(Ready));
        assert!(Ready.can_transition_to(Completed));
    }

    #[test]
    fn every_active_state_can_cancel() {
        use OrderStatus::*;
        for state in [Pending, Preparing, Ready] {
            assert!(state.can_transition_to(Cancelled), "{state} should cancel");
        }
    }

    #[test]
    fn no_skipping_and_no_leaving_terminal_states() {
        use OrderStatus::*;
        assert!(!Pending.can_transition_to(Ready));
        assert!(!Pending.can_transition_to(Completed));
        assert!(!Preparing.can_transition_to(Completed));
        for state in [Completed, Cancelled] {
            for next in [Pending, Preparing, Ready, Completed, Cancelled] {
                assert!(!state.can_transition_to(next), "{state} -> {next}");
            }
        }
    }

    #[test]
    fn active_and_terminal_partition_the_statuses() {
        use OrderStatus::*;
        for state in [Pending, Preparing, Ready, Completed, Cancelled] {
            assert_ne!(state.is_active(), state.is_terminal());
        }
    }
}
