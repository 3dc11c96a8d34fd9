use thiserror::Error;

use crate::domain::{AccountKey, Cents, format_cents};

#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Invalid description: {0}")]
    InvalidDescription(String),

    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountKey),

    #[error("Account not found: {0}")]
    AccountNotFound(AccountKey),

    #[error(
        "Insufficient funds in account {account}: balance ${}, required ${}",
        dollars(.balance),
        dollars(.required)
    )]
    InsufficientFunds {
        account: AccountKey,
        balance: Cents,
        required: Cents,
    },

    #[error("Failed to write ledger: {0}")]
    Io(#[from] std::io::Error),
}

impl LedgerError {
    /// True when the caller passed malformed input, as opposed to breaking a business rule
    /// such as overdrawing an account.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LedgerError::InvalidAmount(_) | LedgerError::InvalidDescription(_)
        )
    }
}

fn dollars(cents: &Cents) -> String {
    format_cents(*cents)
}
