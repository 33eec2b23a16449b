//! Accounts and roles.
//!
//! The role is a closed enum carrying its role-specific payload, so
//! role-gated code has to match exhaustively and adding a role is a
//! compile-time-checked change. Roles are fixed at creation; profile updates
//! cannot touch them.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub u32);

impl From<u32> for AccountId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account_{}", self.0)
    }
}

/// Capability class of an account, with its role-specific attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Role {
    Student {
        /// E-wallet balance in minor currency units.
        balance: u64,
        /// Optional spending cap per calendar month, set by a parent.
        monthly_limit: Option<u64>,
        parent: Option<AccountId>,
    },
    Parent {
        children: Vec<AccountId>,
    },
    Staff,
    Manager,
    Admin,
}

/// A registered account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: AccountId,
    pub name: String,
    /// Unique within the directory.
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// Payload for creating an account. The role is set here, once.
#[derive(Debug, Clone)]
pub struct AccountCreate {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub role: Role,
}

/// Profile fields an account holder may change. Deliberately omits id and
/// role.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Account {
    /// Current e-wallet balance, if this account is a student.
    pub fn balance(&self) -> Option<u64> {
        match &self.role {
            Role::Student { balance, .. } => Some(*balance),
            _ => None,
        }
    }
}
