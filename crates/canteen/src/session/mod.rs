//! # Account/Session Gate
//!
//! Holds the single authenticated identity for the process and gates the
//! role-specific surfaces on it. One session, no expiry, no multi-device
//! coordination: the current account is overwritten wholesale on every
//! mutation.
//!
//! The credential check is a development stand-in: any directory account
//! authenticates with the shared [`Session::DEV_PASSWORD`]. A real
//! deployment needs a real verification story (hashing, rate limiting)
//! before this path can be trusted.

use crate::account_actor::AccountError;
use crate::clients::{AccountClient, CartClient};
use crate::model::{Account, AccountCreate, AccountId, AccountUpdate, CartId, Role};
use std::collections::HashMap;
use std::time::Duration;
use thiserror::Error;
use tracing::{info, instrument, warn};

/// Errors surfaced by the session gate.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    /// Email/password pair did not match the directory.
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Operation requires an authenticated account.
    #[error("No account is logged in")]
    NoActiveSession,

    /// Registration with an email the directory already holds.
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// A required registration field was empty.
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Password and confirmation did not match.
    #[error("Password confirmation does not match")]
    PasswordMismatch,

    /// Any other failure talking to the directory.
    #[error("Registration failed: {0}")]
    Directory(#[from] AccountError),

    /// Cart creation or restoration failed during login.
    #[error("Cart unavailable: {0}")]
    Cart(#[from] crate::cart_actor::CartError),
}

/// The authenticated session: current account plus its restored cart.
///
/// Carts are created lazily on first login and reused on every later login
/// by the same account, so a cart abandoned at logout is still there next
/// time.
pub struct Session {
    accounts: AccountClient,
    carts: CartClient,
    current: Option<Account>,
    cart_ids: HashMap<AccountId, CartId>,
}

impl Session {
    /// Shared development password accepted for every directory account.
    pub const DEV_PASSWORD: &'static str = "123456";

    /// Stand-in for network latency on auth calls.
    const SIMULATED_LATENCY: Duration = Duration::from_millis(150);

    pub fn new(accounts: AccountClient, carts: CartClient) -> Self {
        Self {
            accounts,
            carts,
            current: None,
            cart_ids: HashMap::new(),
        }
    }

    /// The authenticated account, if any.
    pub fn current(&self) -> Option<&Account> {
        self.current.as_ref()
    }

    /// The current account's cart id. Present whenever a login succeeded.
    pub fn current_cart(&self) -> Option<CartId> {
        let account = self.current.as_ref()?;
        self.cart_ids.get(&account.id).copied()
    }

    /// Authenticates against the directory.
    ///
    /// Succeeds only on an exact email match combined with the shared
    /// development password; the error does not reveal which half failed.
    /// On success the account becomes current and its cart is created or
    /// restored.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> Result<Account, SessionError> {
        tokio::time::sleep(Self::SIMULATED_LATENCY).await;

        let account = self.accounts.find_by_email(email).await?;
        let Some(account) = account.filter(|_| password == Self::DEV_PASSWORD) else {
            warn!(email, "Login rejected");
            return Err(SessionError::InvalidCredentials);
        };

        if !self.cart_ids.contains_key(&account.id) {
            let cart_id = self.carts.create_cart(account.id).await?;
            self.cart_ids.insert(account.id, cart_id);
        }

        info!(account = %account.id, "Login ok");
        self.current = Some(account.clone());
        Ok(account)
    }

    /// Clears the current account. The account's cart stays around for the
    /// next login.
    pub fn logout(&mut self) {
        if let Some(account) = self.current.take() {
            info!(account = %account.id, "Logged out");
        }
    }

    /// Merges profile fields into the current account. Id and role are
    /// preserved by construction: the update payload has no such fields.
    #[instrument(skip(self, update))]
    pub async fn update_profile(&mut self, update: AccountUpdate) -> Result<Account, SessionError> {
        let current = self.current.as_ref().ok_or(SessionError::NoActiveSession)?;
        tokio::time::sleep(Self::SIMULATED_LATENCY).await;

        let updated = self.accounts.update_account(current.id, update).await?;
        self.current = Some(updated.clone());
        Ok(updated)
    }

    /// Registers a new student account.
    ///
    /// Mirrors the registration endpoint contract: missing fields and a
    /// mismatched confirmation fail synchronously, a duplicate email is its
    /// own error (the HTTP 409 case), and anything else from the directory
    /// surfaces as a generic registration failure. No retry.
    #[instrument(skip(self, password, confirm))]
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        confirm: &str,
    ) -> Result<AccountId, SessionError> {
        if name.trim().is_empty() {
            return Err(SessionError::MissingField("name"));
        }
        if email.trim().is_empty() {
            return Err(SessionError::MissingField("email"));
        }
        if password.is_empty() {
            return Err(SessionError::MissingField("password"));
        }
        if password != confirm {
            return Err(SessionError::PasswordMismatch);
        }

        tokio::time::sleep(Self::SIMULATED_LATENCY).await;

        if self.accounts.find_by_email(email).await?.is_some() {
            return Err(SessionError::DuplicateEmail(email.to_string()));
        }

        let id = self
            .accounts
            .create_account(AccountCreate {
                name: name.to_string(),
                email: email.to_string(),
                phone: None,
                role: Role::Student {
                    balance: 0,
                    monthly_limit: None,
                    parent: None,
                },
            })
            .await?;
        info!(account = %id, "Registered");
        Ok(id)
    }
}
