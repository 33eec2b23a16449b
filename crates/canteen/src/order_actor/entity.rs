//! Entity trait implementation for [`Order`].

use crate::clients::AccountClient;
use crate::model::{Order, OrderCreate, OrderId, OrderStatus, PaymentStatus};
use crate::order_actor::actions::{OrderAction, OrderActionResult};
use crate::order_actor::error::OrderError;
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = ();
    type Action = OrderAction;
    type ActionResult = OrderActionResult;
    type Context = AccountClient;
    type Error = OrderError;

    /// Builds the order snapshot. Status is forced to `Pending` and the
    /// total is computed from the lines; callers get no say in either.
    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, Self::Error> {
        if params.lines.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        Ok(Order::new(id, params))
    }

    /// Rejects orders whose owning account is not in the directory.
    async fn on_create(&mut self, accounts: &AccountClient) -> Result<(), Self::Error> {
        let account = accounts
            .get(self.account_id)
            .await
            .map_err(|e| OrderError::ActorCommunicationError(e.to_string()))?;
        if account.is_none() {
            return Err(OrderError::UnknownAccount(self.account_id.to_string()));
        }
        Ok(())
    }

    async fn on_update(&mut self, _update: (), _ctx: &AccountClient) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: OrderAction,
        _ctx: &AccountClient,
    ) -> Result<OrderActionResult, Self::Error> {
        match action {
            OrderAction::StartPreparing => {
                self.transition_to(OrderStatus::Preparing)?;
                Ok(OrderActionResult::StartPreparing(self.status))
            }
            OrderAction::MarkReady => {
                self.transition_to(OrderStatus::Ready)?;
                Ok(OrderActionResult::MarkReady(self.status))
            }
            OrderAction::Cancel => {
                self.transition_to(OrderStatus::Cancelled)?;
                Ok(OrderActionResult::Cancel(self.status))
            }
            OrderAction::Complete => {
                // Completing twice must be an observable no-op.
                if self.status != OrderStatus::Completed {
                    self.transition_to(OrderStatus::Completed)?;
                }
                Ok(OrderActionResult::Complete(self.status))
            }
            OrderAction::MarkPaid => {
                self.payment_status = PaymentStatus::Paid;
                Ok(OrderActionResult::MarkPaid(()))
            }
        }
    }
}

impl Order {
    fn transition_to(&mut self, next: OrderStatus) -> Result<(), OrderError> {
        if !self.status.can_transition_to(next) {
            return Err(OrderError::InvalidTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        Ok(())
    }
}
