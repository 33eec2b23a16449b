//! Entity trait implementation for [`Cart`].

use crate::cart_actor::actions::{CartAction, CartActionResult};
use crate::cart_actor::error::CartError;
use crate::model::{Cart, CartCreate, CartId};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Cart {
    type Id = CartId;
    type Create = CartCreate;
    type Update = ();
    type Action = CartAction;
    type ActionResult = CartActionResult;
    type Context = ();
    type Error = CartError;

    /// Carts start empty, bound to their owning account.
    fn from_create_params(id: CartId, params: CartCreate) -> Result<Self, Self::Error> {
        Ok(Cart::new(id, params.account_id))
    }

    async fn on_update(&mut self, _update: (), _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: CartAction,
        _ctx: &Self::Context,
    ) -> Result<CartActionResult, Self::Error> {
        match action {
            CartAction::AddItem {
                item,
                quantity,
                notes,
            } => {
                self.add_item(item, quantity, notes);
                Ok(CartActionResult::AddItem(()))
            }
            CartAction::UpdateQuantity { line, quantity } => {
                self.update_quantity(line, quantity);
                Ok(CartActionResult::UpdateQuantity(()))
            }
            CartAction::RemoveItem { line } => {
                self.remove_item(line);
                Ok(CartActionResult::RemoveItem(()))
            }
            CartAction::Clear => {
                self.clear();
                Ok(CartActionResult::Clear(()))
            }
            CartAction::Totals => Ok(CartActionResult::Totals {
                amount: self.total_amount(),
                items: self.total_items(),
            }),
        }
    }
}
