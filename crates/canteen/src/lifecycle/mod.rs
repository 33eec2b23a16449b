//! # System Lifecycle & Orchestration
//!
//! [`CanteenSystem`] is the conductor: it creates every actor, wires the
//! order actor's account-directory dependency via context injection, and
//! owns the cross-actor flows that no single actor can decide alone —
//! checkout, payment capture, and parental monitoring.
//!
//! Shutdown follows the channel-closure pattern: dropping all clients closes
//! the senders, each actor's `recv()` returns `None`, and the run loops
//! drain and exit. The dependency graph is acyclic (orders depend on
//! accounts only), so no explicit shutdown message is needed.

use crate::account_actor::AccountError;
use crate::cart_actor::CartError;
use crate::clients::{AccountClient, CartClient, MenuClient, OrderClient};
use crate::model::{AccountId, CartId, Order, OrderCreate, OrderId, PaymentMethod, PaymentStatus, Role};
use crate::order_actor::OrderError;
use crate::{account_actor, cart_actor, menu_actor, order_actor};
use actor_framework::ActorClient;
use std::time::Duration;
use thiserror::Error;
use tracing::{error, info, instrument};

/// Failures of the cross-actor flows.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CanteenError {
    /// Checkout with nothing in the cart: no order is created and the cart
    /// is left untouched.
    #[error("Cart is empty")]
    EmptyCart,

    /// The cart id is not in the store.
    #[error("Cart not found: {0}")]
    CartNotFound(String),

    /// Monitoring was requested for an account without the parent role.
    #[error("Not a parent account: {0}")]
    NotAParent(String),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Cart(#[from] CartError),

    #[error(transparent)]
    Account(#[from] AccountError),
}

/// The running system: one actor per resource type plus their clients.
pub struct CanteenSystem {
    pub menu_client: MenuClient,
    pub cart_client: CartClient,
    pub order_client: OrderClient,
    pub account_client: AccountClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl CanteenSystem {
    /// Stand-in latency for the simulated payment gateway.
    const GATEWAY_LATENCY: Duration = Duration::from_millis(250);

    /// Creates and starts all actors.
    ///
    /// Menu, cart, and account actors are self-contained; the order actor
    /// receives an [`AccountClient`] as context so `on_create` can reject
    /// orders for unknown accounts.
    pub fn new() -> Self {
        let (menu_actor, menu_generic) = menu_actor::new();
        let (cart_actor, cart_generic) = cart_actor::new();
        let (account_actor, account_generic) = account_actor::new();
        let (order_actor, order_generic) = order_actor::new();

        let menu_client = MenuClient::new(menu_generic);
        let cart_client = CartClient::new(cart_generic);
        let account_client = AccountClient::new(account_generic);
        let order_client = OrderClient::new(order_generic);

        let handles = vec![
            tokio::spawn(menu_actor.run(())),
            tokio::spawn(cart_actor.run(())),
            tokio::spawn(account_actor.run(())),
            tokio::spawn(order_actor.run(account_client.clone())),
        ];

        Self {
            menu_client,
            cart_client,
            order_client,
            account_client,
            handles,
        }
    }

    /// Submits the cart's contents as an order and clears the cart.
    ///
    /// The order is built from a value snapshot of the lines, so the
    /// subsequent clear (or any later cart activity) cannot touch it. An
    /// empty cart is rejected before anything else happens.
    #[instrument(skip(self))]
    pub async fn checkout(
        &self,
        cart_id: CartId,
        method: PaymentMethod,
    ) -> Result<OrderId, CanteenError> {
        let cart = self
            .cart_client
            .get(cart_id)
            .await?
            .ok_or_else(|| CanteenError::CartNotFound(cart_id.to_string()))?;
        if cart.is_empty() {
            return Err(CanteenError::EmptyCart);
        }

        let order_id = self
            .order_client
            .place_order(OrderCreate {
                account_id: cart.account_id,
                lines: cart.lines,
                payment_method: method,
            })
            .await?;
        self.cart_client.clear(cart_id).await?;

        info!(order = %order_id, cart = %cart_id, "Checkout complete");
        Ok(order_id)
    }

    /// Captures payment for an order through the simulated gateway.
    ///
    /// E-wallet orders debit the student balance first; a failed debit
    /// leaves the order unpaid. Unknown and already-paid orders are silent
    /// no-ops.
    #[instrument(skip(self))]
    pub async fn pay(&self, order_id: OrderId) -> Result<(), CanteenError> {
        let Some(order) = self.order_client.get(order_id).await? else {
            return Ok(());
        };
        if order.payment_status == PaymentStatus::Paid {
            return Ok(());
        }

        tokio::time::sleep(Self::GATEWAY_LATENCY).await;

        if order.payment_method == PaymentMethod::EWallet {
            self.account_client.debit(order.account_id, order.total).await?;
        }
        self.order_client.mark_paid(order_id).await?;

        info!(order = %order_id, "Payment captured");
        Ok(())
    }

    /// Every order placed by the parent's children, for the monitoring
    /// dashboard.
    #[instrument(skip(self))]
    pub async fn child_orders(&self, parent: AccountId) -> Result<Vec<Order>, CanteenError> {
        let account = self
            .account_client
            .get(parent)
            .await?
            .ok_or_else(|| AccountError::NotFound(parent.to_string()))?;
        let Role::Parent { children } = account.role else {
            return Err(CanteenError::NotAParent(parent.to_string()));
        };

        let mut orders = Vec::new();
        for child in children {
            orders.extend(self.order_client.orders_for_account(child).await?);
        }
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }

    /// Gracefully shuts the system down: drop every client, then await the
    /// actor tasks.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");

        drop(self.menu_client);
        drop(self.cart_client);
        drop(self.order_client);
        drop(self.account_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}

impl Default for CanteenSystem {
    fn default() -> Self {
        Self::new()
    }
}
