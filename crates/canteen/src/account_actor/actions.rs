//! Custom actions for the account actor.

/// Balance operations on a student account.
#[derive(Debug, Clone)]
pub enum AccountAction {
    /// Withdraw from the e-wallet balance.
    ///
    /// # Errors
    /// Fails if the account is not a student or the balance is too low.
    Debit(u64),
    /// Top up the e-wallet balance.
    Credit(u64),
}

/// Results from AccountActions - variants match 1:1 with AccountAction.
/// Each carries the balance after the operation.
#[derive(Debug, Clone)]
pub enum AccountActionResult {
    Debit(u64),
    Credit(u64),
}
