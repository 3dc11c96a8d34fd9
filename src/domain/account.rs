use serde::{Deserialize, Serialize};

use super::Cents;

/// Card number and PIN pair identifying a single account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AccountKey {
    pub card_number: u64,
    pub pin: u32,
}

impl AccountKey {
    pub fn new(card_number: u64, pin: u32) -> Self {
        Self { card_number, pin }
    }
}

impl From<(u64, u32)> for AccountKey {
    fn from((card_number, pin): (u64, u32)) -> Self {
        Self::new(card_number, pin)
    }
}

/// Only the card number is shown; the PIN stays out of messages and logs.
impl std::fmt::Display for AccountKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "card {}", self.card_number)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub owner_name: String,
    /// Current balance in cents
    pub balance: Cents,
}

impl Account {
    pub fn new(owner_name: impl Into<String>, balance: Cents) -> Self {
        Self {
            owner_name: owner_name.into(),
            balance,
        }
    }

    pub fn can_withdraw(&self, amount: Cents) -> bool {
        amount <= self.balance
    }
}
