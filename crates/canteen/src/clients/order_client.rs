//! # Order Client
//!
//! High-level API for the order actor: submission, status transitions, and
//! the collection queries behind the kitchen, student, parent, and manager
//! views.
//!
//! Status mutations on an order id that is no longer in the store are
//! silent no-ops rather than errors; callers observe "nothing happened" and
//! re-render from the collection state. Illegal transitions on a live order
//! do surface as [`OrderError::InvalidTransition`].

use crate::model::{AccountId, Order, OrderCreate, OrderId, OrderStatus};
use crate::order_actor::{OrderAction, OrderError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tracing::{debug, instrument};

/// Client for interacting with the order actor.
#[derive(Clone)]
pub struct OrderClient {
    inner: ResourceClient<Order>,
}

impl OrderClient {
    pub fn new(inner: ResourceClient<Order>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &ResourceClient<Order> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        order_error(e)
    }
}

/// Recovers the typed entity error where possible; everything else becomes
/// a communication error.
fn order_error(e: FrameworkError) -> OrderError {
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<OrderError>() {
            Ok(err) => *err,
            Err(inner) => OrderError::ActorCommunicationError(inner.to_string()),
        },
        FrameworkError::NotFound(id) => OrderError::NotFound(id),
        other => OrderError::ActorCommunicationError(other.to_string()),
    }
}

impl OrderClient {
    /// Submits an order. Validation (non-empty lines, known account) happens
    /// in the order actor's creation hooks.
    #[instrument(skip(self, params))]
    pub async fn place_order(&self, params: OrderCreate) -> Result<OrderId, OrderError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(order_error)
    }

    /// Kitchen started on the order.
    #[instrument(skip(self))]
    pub async fn start_preparing(&self, id: OrderId) -> Result<(), OrderError> {
        self.transition(id, OrderAction::StartPreparing).await
    }

    /// Order is ready for pickup.
    #[instrument(skip(self))]
    pub async fn mark_ready(&self, id: OrderId) -> Result<(), OrderError> {
        self.transition(id, OrderAction::MarkReady).await
    }

    /// Aborts an active order.
    #[instrument(skip(self))]
    pub async fn cancel(&self, id: OrderId) -> Result<(), OrderError> {
        self.transition(id, OrderAction::Cancel).await
    }

    /// Hands the order over. Safe to call twice; the second call changes
    /// nothing.
    #[instrument(skip(self))]
    pub async fn complete(&self, id: OrderId) -> Result<(), OrderError> {
        self.transition(id, OrderAction::Complete).await
    }

    /// Records captured payment.
    #[instrument(skip(self))]
    pub async fn mark_paid(&self, id: OrderId) -> Result<(), OrderError> {
        self.transition(id, OrderAction::MarkPaid).await
    }

    async fn transition(&self, id: OrderId, action: OrderAction) -> Result<(), OrderError> {
        debug!("Sending request");
        match self.inner.perform_action(id, action).await {
            Ok(_) => Ok(()),
            // The order may already have left the store; "nothing happened"
            // is the contract for unknown ids.
            Err(FrameworkError::NotFound(_)) => Ok(()),
            Err(e) => Err(order_error(e)),
        }
    }

    /// Orders still in the kitchen's hands (pending, preparing, or ready).
    #[instrument(skip(self))]
    pub async fn active_orders(&self) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|o| o.status.is_active())
            .collect())
    }

    /// One status bucket of the kitchen board.
    #[instrument(skip(self))]
    pub async fn active_by_status(&self, status: OrderStatus) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|o| o.status == status && o.status.is_active())
            .collect())
    }

    /// Every order belonging to one account, any status.
    #[instrument(skip(self))]
    pub async fn orders_for_account(&self, account: AccountId) -> Result<Vec<Order>, OrderError> {
        Ok(self
            .all()
            .await?
            .into_iter()
            .filter(|o| o.account_id == account)
            .collect())
    }

    /// Completed orders, oldest first.
    #[instrument(skip(self))]
    pub async fn completed_orders(&self) -> Result<Vec<Order>, OrderError> {
        let mut orders: Vec<Order> = self
            .all()
            .await?
            .into_iter()
            .filter(|o| o.status == OrderStatus::Completed)
            .collect();
        orders.sort_by_key(|o| o.created_at);
        Ok(orders)
    }

    /// Completed orders created within `[from, to)`, for manager reporting.
    #[instrument(skip(self))]
    pub async fn completed_between(
        &self,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Order>, OrderError> {
        let mut orders = self.completed_orders().await?;
        orders.retain(|o| o.created_at >= from && o.created_at < to);
        Ok(orders)
    }

    async fn all(&self) -> Result<Vec<Order>, OrderError> {
        self.inner.list().await.map_err(order_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CartLine, LineId, MenuItem, MenuItemId, PaymentMethod};
    use actor_framework::mock::{create_mock_client, expect_action, MockClient};

    fn line() -> CartLine {
        CartLine {
            id: LineId(1),
            item: MenuItem {
                id: MenuItemId(1),
                name: "Banh mi".to_string(),
                description: String::new(),
                price: 25_000,
                category: "bread".to_string(),
                available: true,
                preparation_minutes: 5,
            },
            quantity: 2,
            notes: None,
        }
    }

    fn order(id: u32, account: u32, status: OrderStatus) -> Order {
        let mut order = Order::new(
            OrderId(id),
            OrderCreate {
                account_id: AccountId(account),
                lines: vec![line()],
                payment_method: PaymentMethod::Cash,
            },
        );
        order.status = status;
        order
    }

    #[tokio::test]
    async fn status_mutation_on_missing_order_is_a_silent_no_op() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(9))
            .return_err(FrameworkError::NotFound("order_9".into()));

        let client = OrderClient::new(mock.client());
        assert!(client.mark_ready(OrderId(9)).await.is_ok());
        mock.verify();
    }

    #[tokio::test]
    async fn illegal_transition_surfaces_the_typed_error() {
        let mut mock = MockClient::<Order>::new();
        mock.expect_action(OrderId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                OrderError::InvalidTransition {
                    from: OrderStatus::Pending,
                    to: OrderStatus::Ready,
                },
            )));

        let client = OrderClient::new(mock.client());
        let result = client.mark_ready(OrderId(1)).await;

        assert_eq!(
            result,
            Err(OrderError::InvalidTransition {
                from: OrderStatus::Pending,
                to: OrderStatus::Ready,
            })
        );
        mock.verify();
    }

    #[tokio::test]
    async fn queries_filter_the_store_snapshot() {
        let snapshot = vec![
            order(1, 1, OrderStatus::Pending),
            order(2, 1, OrderStatus::Completed),
            order(3, 2, OrderStatus::Ready),
            order(4, 2, OrderStatus::Cancelled),
        ];

        let mut mock = MockClient::<Order>::new();
        mock.expect_list().return_ok(snapshot.clone());
        mock.expect_list().return_ok(snapshot.clone());
        mock.expect_list().return_ok(snapshot);

        let client = OrderClient::new(mock.client());

        let active = client.active_orders().await.unwrap();
        assert_eq!(active.len(), 2);

        let ready = client.active_by_status(OrderStatus::Ready).await.unwrap();
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].id, OrderId(3));

        let mine = client.orders_for_account(AccountId(1)).await.unwrap();
        assert_eq!(mine.len(), 2);

        mock.verify();
    }

    #[tokio::test]
    async fn complete_sends_the_complete_action() {
        let (client, mut receiver) = create_mock_client::<Order>(10);
        let order_client = OrderClient::new(client);

        let task = tokio::spawn(async move { order_client.complete(OrderId(5)).await });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, OrderId(5));
        assert!(matches!(action, OrderAction::Complete));
        responder
            .send(Ok(crate::order_actor::OrderActionResult::Complete(
                OrderStatus::Completed,
            )))
            .unwrap();

        task.await.unwrap().unwrap();
    }
}
