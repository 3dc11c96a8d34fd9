use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::domain::{Account, AccountKey, Cents, TransactionEntry, TransactionKind, TransactionLog};
use crate::io::LedgerPrinter;

use super::LedgerError;

/// The ATM-facing ledger. Owns every account and its transaction history.
///
/// `accounts` and `transactions` always share the same key set: both entries are
/// created together at registration and nothing removes them.
#[derive(Debug, Default)]
pub struct Atm {
    accounts: HashMap<AccountKey, Account>,
    transactions: HashMap<AccountKey, TransactionLog>,
}

impl Atm {
    pub fn new() -> Self {
        Self::default()
    }

    // ========================
    // Account operations
    // ========================

    /// Register a new account with an empty transaction log.
    ///
    /// The opening balance is not validated; a negative value is accepted and logged.
    pub fn register_account(
        &mut self,
        card_number: u64,
        pin: u32,
        owner_name: impl Into<String>,
        initial_balance: Cents,
    ) -> Result<(), LedgerError> {
        let key = AccountKey::new(card_number, pin);
        if self.accounts.contains_key(&key) {
            return Err(LedgerError::DuplicateAccount(key));
        }

        if initial_balance < 0 {
            warn!(account = %key, initial_balance, "registering account with negative balance");
        }

        self.accounts
            .insert(key, Account::new(owner_name, initial_balance));
        self.transactions.insert(key, TransactionLog::new());
        info!(account = %key, "account registered");
        Ok(())
    }

    /// Look up an account by card number and PIN.
    pub fn account(&self, card_number: u64, pin: u32) -> Result<&Account, LedgerError> {
        let key = AccountKey::new(card_number, pin);
        self.accounts
            .get(&key)
            .ok_or(LedgerError::AccountNotFound(key))
    }

    /// Current balance of an account.
    pub fn balance(&self, card_number: u64, pin: u32) -> Result<Cents, LedgerError> {
        Ok(self.account(card_number, pin)?.balance)
    }

    /// Read-only view of every registered account.
    pub fn accounts(&self) -> &HashMap<AccountKey, Account> {
        &self.accounts
    }

    // ========================
    // Cash operations
    // ========================

    /// Withdraw cash, returning the updated balance.
    pub fn withdraw_cash(
        &mut self,
        card_number: u64,
        pin: u32,
        amount: Cents,
    ) -> Result<Cents, LedgerError> {
        validate_amount(amount)?;
        let key = AccountKey::new(card_number, pin);
        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        if !account.can_withdraw(amount) {
            return Err(LedgerError::InsufficientFunds {
                account: key,
                balance: account.balance,
                required: amount,
            });
        }

        account.balance -= amount;
        let balance = account.balance;
        self.record(key, TransactionKind::Withdrawal, amount, balance);
        Ok(balance)
    }

    /// Deposit cash, returning the updated balance.
    pub fn deposit_cash(
        &mut self,
        card_number: u64,
        pin: u32,
        amount: Cents,
    ) -> Result<Cents, LedgerError> {
        validate_amount(amount)?;
        let key = AccountKey::new(card_number, pin);
        let account = self
            .accounts
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;

        account.balance = account.balance.checked_add(amount).ok_or_else(|| {
            LedgerError::InvalidAmount("Deposit would overflow the account balance".to_string())
        })?;
        let balance = account.balance;
        self.record(key, TransactionKind::Deposit, amount, balance);
        Ok(balance)
    }

    // ========================
    // Transaction log
    // ========================

    /// Read-only view of every account's transaction log.
    pub fn transactions(&self) -> &HashMap<AccountKey, TransactionLog> {
        &self.transactions
    }

    /// Transaction log for a single account.
    pub fn transaction_log(
        &self,
        card_number: u64,
        pin: u32,
    ) -> Result<&TransactionLog, LedgerError> {
        let key = AccountKey::new(card_number, pin);
        self.transactions
            .get(&key)
            .ok_or(LedgerError::AccountNotFound(key))
    }

    /// Append a free-form entry to an account's log without touching its balance.
    /// Intended for setting up fixtures and replaying history.
    ///
    /// Each entry prints as exactly one ledger line, so descriptions containing
    /// line breaks are rejected.
    pub fn seed_transaction(
        &mut self,
        card_number: u64,
        pin: u32,
        description: impl Into<String>,
    ) -> Result<(), LedgerError> {
        let description = description.into();
        if description.contains(['\n', '\r']) {
            return Err(LedgerError::InvalidDescription(
                "Description must fit on a single line".to_string(),
            ));
        }

        let key = AccountKey::new(card_number, pin);
        let log = self
            .transactions
            .get_mut(&key)
            .ok_or(LedgerError::AccountNotFound(key))?;
        let entry = TransactionEntry::from_description(description);
        debug!(account = %key, recorded_at = %entry.recorded_at, "transaction seeded");
        log.append(entry);
        Ok(())
    }

    /// Write an account's transaction log to `path`, one entry per line.
    /// Any existing file at `path` is overwritten.
    pub fn print_ledger(
        &self,
        path: impl AsRef<Path>,
        card_number: u64,
        pin: u32,
    ) -> Result<(), LedgerError> {
        let log = self.transaction_log(card_number, pin)?;
        let written = LedgerPrinter::new(log).print_to_file(path.as_ref())?;
        info!(
            account = %AccountKey::new(card_number, pin),
            lines = written,
            path = %path.as_ref().display(),
            "ledger printed"
        );
        Ok(())
    }

    fn record(&mut self, key: AccountKey, kind: TransactionKind, amount: Cents, balance: Cents) {
        let entry = TransactionEntry::new(kind, amount, balance);
        debug!(
            account = %key,
            %kind,
            amount,
            balance,
            recorded_at = %entry.recorded_at,
            "transaction recorded"
        );
        // Registration always creates the log alongside the account
        self.transactions.entry(key).or_default().append(entry);
    }
}

fn validate_amount(amount: Cents) -> Result<(), LedgerError> {
    if amount <= 0 {
        return Err(LedgerError::InvalidAmount(
            "Amount must be positive".to_string(),
        ));
    }
    Ok(())
}
