//! # Cart Client
//!
//! High-level API for the cart actor. All mutation methods delegate to
//! [`CartAction`]s; derived totals come back through the read-only `Totals`
//! action.

use crate::cart_actor::{CartAction, CartActionResult, CartError};
use crate::model::{AccountId, Cart, CartCreate, CartId, LineId, MenuItem};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the cart actor.
#[derive(Clone)]
pub struct CartClient {
    inner: ResourceClient<Cart>,
}

impl CartClient {
    pub fn new(inner: ResourceClient<Cart>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Cart> for CartClient {
    type Error = CartError;

    fn inner(&self) -> &ResourceClient<Cart> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CartError::ActorCommunicationError(e.to_string())
    }
}

impl CartClient {
    /// Creates an empty cart for an account.
    #[instrument(skip(self))]
    pub async fn create_cart(&self, account_id: AccountId) -> Result<CartId, CartError> {
        debug!("Sending request");
        self.inner
            .create(CartCreate { account_id })
            .await
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }

    /// Adds a quantity of a dish; the item is snapshotted by value.
    #[instrument(skip(self, item))]
    pub async fn add_item(
        &self,
        cart: CartId,
        item: MenuItem,
        quantity: u32,
        notes: Option<String>,
    ) -> Result<(), CartError> {
        self.mutate(
            cart,
            CartAction::AddItem {
                item,
                quantity,
                notes,
            },
        )
        .await
    }

    #[instrument(skip(self))]
    pub async fn update_quantity(
        &self,
        cart: CartId,
        line: LineId,
        quantity: u32,
    ) -> Result<(), CartError> {
        self.mutate(cart, CartAction::UpdateQuantity { line, quantity })
            .await
    }

    #[instrument(skip(self))]
    pub async fn remove_item(&self, cart: CartId, line: LineId) -> Result<(), CartError> {
        self.mutate(cart, CartAction::RemoveItem { line }).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self, cart: CartId) -> Result<(), CartError> {
        self.mutate(cart, CartAction::Clear).await
    }

    /// Derived (total amount, total item count), recomputed by the actor
    /// from the current lines.
    #[instrument(skip(self))]
    pub async fn totals(&self, cart: CartId) -> Result<(u64, u32), CartError> {
        debug!("Sending request");
        match self.inner.perform_action(cart, CartAction::Totals).await {
            Ok(CartActionResult::Totals { amount, items }) => Ok((amount, items)),
            Ok(_) => unreachable!("Totals action must return Totals result"),
            Err(e) => Err(CartError::ActorCommunicationError(e.to_string())),
        }
    }

    async fn mutate(&self, cart: CartId, action: CartAction) -> Result<(), CartError> {
        debug!("Sending request");
        self.inner
            .perform_action(cart, action)
            .await
            .map(|_| ())
            .map_err(|e| CartError::ActorCommunicationError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItemId;
    use actor_framework::mock::{create_mock_client, expect_action};

    fn dish() -> MenuItem {
        MenuItem {
            id: MenuItemId(1),
            name: "Pho bo".to_string(),
            description: String::new(),
            price: 45_000,
            category: "noodles".to_string(),
            available: true,
            preparation_minutes: 12,
        }
    }

    #[tokio::test]
    async fn add_item_sends_the_snapshot_and_quantity() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let add_task = tokio::spawn(async move {
            cart_client
                .add_item(CartId(1), dish(), 2, Some("no onion".into()))
                .await
        });

        let (id, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert_eq!(id, CartId(1));
        match action {
            CartAction::AddItem {
                item,
                quantity,
                notes,
            } => {
                assert_eq!(item.id, MenuItemId(1));
                assert_eq!(quantity, 2);
                assert_eq!(notes.as_deref(), Some("no onion"));
            }
            other => panic!("Expected AddItem, got {other:?}"),
        }
        responder.send(Ok(CartActionResult::AddItem(()))).unwrap();

        add_task.await.unwrap().unwrap();
    }

    #[tokio::test]
    async fn totals_unpacks_the_result_pair() {
        let (client, mut receiver) = create_mock_client::<Cart>(10);
        let cart_client = CartClient::new(client);

        let totals_task = tokio::spawn(async move { cart_client.totals(CartId(1)).await });

        let (_, action, responder) = expect_action(&mut receiver)
            .await
            .expect("Expected Action request");
        assert!(matches!(action, CartAction::Totals));
        responder
            .send(Ok(CartActionResult::Totals {
                amount: 95_000,
                items: 3,
            }))
            .unwrap();

        let (amount, items) = totals_task.await.unwrap().unwrap();
        assert_eq!(amount, 95_000);
        assert_eq!(items, 3);
    }
}
