//! Entity trait implementation for [`Account`].

use crate::account_actor::actions::{AccountAction, AccountActionResult};
use crate::account_actor::error::AccountError;
use crate::model::{Account, AccountCreate, AccountId, AccountUpdate, Role};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Account {
    type Id = AccountId;
    type Create = AccountCreate;
    type Update = AccountUpdate;
    type Action = AccountAction;
    type ActionResult = AccountActionResult;
    type Context = ();
    type Error = AccountError;

    fn from_create_params(id: AccountId, params: AccountCreate) -> Result<Self, Self::Error> {
        if params.name.trim().is_empty() {
            return Err(AccountError::MissingField("name"));
        }
        if params.email.trim().is_empty() {
            return Err(AccountError::MissingField("email"));
        }
        Ok(Self {
            id,
            name: params.name,
            email: params.email,
            phone: params.phone,
            role: params.role,
        })
    }

    /// Profile merge. The update payload has no id or role field, so both
    /// are preserved by construction.
    async fn on_update(
        &mut self,
        update: AccountUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(email) = update.email {
            self.email = email;
        }
        if let Some(phone) = update.phone {
            self.phone = Some(phone);
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: AccountAction,
        _ctx: &Self::Context,
    ) -> Result<AccountActionResult, Self::Error> {
        let Role::Student { balance, .. } = &mut self.role else {
            return Err(AccountError::NotAStudent(self.id.to_string()));
        };
        match action {
            AccountAction::Debit(amount) => {
                if *balance < amount {
                    return Err(AccountError::InsufficientBalance {
                        requested: amount,
                        available: *balance,
                    });
                }
                *balance -= amount;
                Ok(AccountActionResult::Debit(*balance))
            }
            AccountAction::Credit(amount) => {
                *balance += amount;
                Ok(AccountActionResult::Credit(*balance))
            }
        }
    }
}
