//! Custom actions for the order actor.
//!
//! Status changes are named operations instead of a raw status setter, so
//! `Completed` can only be reached through `Complete` and the transition
//! rules have a single enforcement point in the entity.

use crate::model::OrderStatus;

/// Post-creation operations on an order.
#[derive(Debug, Clone)]
pub enum OrderAction {
    /// Kitchen picked the order up: `Pending -> Preparing`.
    StartPreparing,
    /// Kitchen finished: `Preparing -> Ready`.
    MarkReady,
    /// Abort from any active state.
    Cancel,
    /// Hand-over: `Ready -> Completed`. Idempotent on already-completed
    /// orders.
    Complete,
    /// Record captured payment.
    MarkPaid,
}

/// Results from OrderActions - variants match 1:1 with OrderAction.
#[derive(Debug, Clone)]
pub enum OrderActionResult {
    StartPreparing(OrderStatus),
    MarkReady(OrderStatus),
    Cancel(OrderStatus),
    Complete(OrderStatus),
    MarkPaid(()),
}
