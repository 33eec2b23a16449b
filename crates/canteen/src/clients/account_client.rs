//! # Account Client
//!
//! High-level API for the account actor: directory management, email
//! lookup for the login path, and the student balance operations.

use crate::account_actor::{AccountAction, AccountActionResult, AccountError};
use crate::model::{Account, AccountCreate, AccountId, AccountUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the account actor.
#[derive(Clone)]
pub struct AccountClient {
    inner: ResourceClient<Account>,
}

impl AccountClient {
    pub fn new(inner: ResourceClient<Account>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Account> for AccountClient {
    type Error = AccountError;

    fn inner(&self) -> &ResourceClient<Account> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        account_error(e)
    }
}

fn account_error(e: FrameworkError) -> AccountError {
    match e {
        FrameworkError::EntityError(inner) => match inner.downcast::<AccountError>() {
            Ok(err) => *err,
            Err(inner) => AccountError::ActorCommunicationError(inner.to_string()),
        },
        FrameworkError::NotFound(id) => AccountError::NotFound(id),
        other => AccountError::ActorCommunicationError(other.to_string()),
    }
}

impl AccountClient {
    #[instrument(skip(self, params))]
    pub async fn create_account(&self, params: AccountCreate) -> Result<AccountId, AccountError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(account_error)
    }

    #[instrument(skip(self))]
    pub async fn update_account(
        &self,
        id: AccountId,
        update: AccountUpdate,
    ) -> Result<Account, AccountError> {
        debug!("Sending request");
        self.inner.update(id, update).await.map_err(account_error)
    }

    /// Exact-match email lookup over the directory.
    #[instrument(skip(self))]
    pub async fn find_by_email(&self, email: &str) -> Result<Option<Account>, AccountError> {
        debug!("Sending request");
        let accounts = self.inner.list().await.map_err(account_error)?;
        Ok(accounts.into_iter().find(|a| a.email == email))
    }

    /// Withdraws from a student's e-wallet. Returns the balance afterwards.
    #[instrument(skip(self))]
    pub async fn debit(&self, id: AccountId, amount: u64) -> Result<u64, AccountError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, AccountAction::Debit(amount))
            .await
        {
            Ok(AccountActionResult::Debit(balance)) => Ok(balance),
            Ok(_) => unreachable!("Debit action must return Debit result"),
            Err(e) => Err(account_error(e)),
        }
    }

    /// Tops up a student's e-wallet. Returns the balance afterwards.
    #[instrument(skip(self))]
    pub async fn credit(&self, id: AccountId, amount: u64) -> Result<u64, AccountError> {
        debug!("Sending request");
        match self
            .inner
            .perform_action(id, AccountAction::Credit(amount))
            .await
        {
            Ok(AccountActionResult::Credit(balance)) => Ok(balance),
            Ok(_) => unreachable!("Credit action must return Credit result"),
            Err(e) => Err(account_error(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Role;
    use actor_framework::mock::MockClient;

    fn student(id: u32, email: &str, balance: u64) -> Account {
        Account {
            id: AccountId(id),
            name: "An Nguyen".to_string(),
            email: email.to_string(),
            phone: None,
            role: Role::Student {
                balance,
                monthly_limit: None,
                parent: None,
            },
        }
    }

    #[tokio::test]
    async fn find_by_email_needs_an_exact_match() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_list().return_ok(vec![
            student(1, "an@school.edu", 50_000),
            student(2, "binh@school.edu", 10_000),
        ]);
        mock.expect_list()
            .return_ok(vec![student(1, "an@school.edu", 50_000)]);

        let client = AccountClient::new(mock.client());

        let found = client.find_by_email("binh@school.edu").await.unwrap();
        assert_eq!(found.unwrap().id, AccountId(2));

        let missing = client.find_by_email("AN@school.edu").await.unwrap();
        assert!(missing.is_none());

        mock.verify();
    }

    #[tokio::test]
    async fn insufficient_balance_comes_back_typed() {
        let mut mock = MockClient::<Account>::new();
        mock.expect_action(AccountId(1))
            .return_err(FrameworkError::EntityError(Box::new(
                AccountError::InsufficientBalance {
                    requested: 95_000,
                    available: 50_000,
                },
            )));

        let client = AccountClient::new(mock.client());
        let result = client.debit(AccountId(1), 95_000).await;

        assert_eq!(
            result,
            Err(AccountError::InsufficientBalance {
                requested: 95_000,
                available: 50_000,
            })
        );
        mock.verify();
    }
}
