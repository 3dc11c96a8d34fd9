mod common;

use anyhow::Result;
use atm_ledger::{Account, AccountKey, Atm, LedgerError};
use common::{SAM_CARD, SAM_PIN, atm_with_sam, dollars};

#[test]
fn test_create_new_account() -> Result<()> {
    let atm = atm_with_sam()?;
    let key = AccountKey::new(SAM_CARD, SAM_PIN);

    let accounts = atm.accounts();
    assert!(accounts.contains_key(&key));
    assert_eq!(accounts.len(), 1);

    let sam = &accounts[&key];
    assert_eq!(sam.owner_name, "Sam Sepiol");
    assert_eq!(sam.balance, dollars("300.30"));

    let transactions = atm.transactions();
    assert_eq!(transactions.len(), 1);
    assert!(transactions[&key].is_empty());

    Ok(())
}

#[test]
fn test_simple_withdraw() -> Result<()> {
    let mut atm = atm_with_sam()?;
    atm.withdraw_cash(SAM_CARD, SAM_PIN, dollars("20"))?;

    assert_eq!(atm.balance(SAM_CARD, SAM_PIN)?, dollars("280.30"));
    Ok(())
}

#[test]
fn test_simple_deposit() -> Result<()> {
    let mut atm = atm_with_sam()?;
    atm.deposit_cash(SAM_CARD, SAM_PIN, dollars("20.01"))?;

    assert_eq!(atm.balance(SAM_CARD, SAM_PIN)?, dollars("320.31"));
    Ok(())
}

#[test]
fn test_duplicate_account_rejected() -> Result<()> {
    let mut atm = Atm::new();
    atm.register_account(SAM_CARD, 12345, "Sam Sepiol", dollars("300.30"))?;

    let result = atm.register_account(SAM_CARD, 12345, "Sam Sepiol", dollars("609.21"));
    assert!(matches!(result, Err(LedgerError::DuplicateAccount(_))));

    assert_eq!(
        atm.account(SAM_CARD, 12345)?,
        &Account::new("Sam Sepiol", dollars("300.30"))
    );
    assert_eq!(atm.accounts().len(), 1);
    Ok(())
}

#[test]
fn test_overdraw_rejected() -> Result<()> {
    let mut atm = atm_with_sam()?;

    let err = atm
        .withdraw_cash(SAM_CARD, SAM_PIN, dollars("300.31"))
        .unwrap_err();
    assert!(matches!(err, LedgerError::InsufficientFunds { .. }));
    assert!(!err.is_invalid_argument());

    assert_eq!(atm.balance(SAM_CARD, SAM_PIN)?, dollars("300.30"));
    assert!(atm.transaction_log(SAM_CARD, SAM_PIN)?.is_empty());
    Ok(())
}

#[test]
fn test_mixed_operations_are_logged_in_order() -> Result<()> {
    let mut atm = atm_with_sam()?;

    atm.withdraw_cash(SAM_CARD, SAM_PIN, dollars("20"))?;
    atm.deposit_cash(SAM_CARD, SAM_PIN, dollars("20.01"))?;
    // Rejected operations leave no trace
    assert!(atm.withdraw_cash(SAM_CARD, SAM_PIN, dollars("1000")).is_err());
    assert!(atm.deposit_cash(SAM_CARD, SAM_PIN, 0).is_err());
    atm.withdraw_cash(SAM_CARD, SAM_PIN, dollars("300.31"))?;

    let lines: Vec<&str> = atm.transaction_log(SAM_CARD, SAM_PIN)?.descriptions().collect();
    assert_eq!(
        lines,
        vec![
            "Withdrawal - Amount: $20.00, Updated Balance: $280.30",
            "Deposit - Amount: $20.01, Updated Balance: $300.31",
            "Withdrawal - Amount: $300.31, Updated Balance: $0.00",
        ]
    );
    assert_eq!(atm.balance(SAM_CARD, SAM_PIN)?, 0);
    Ok(())
}

#[test]
fn test_operations_isolated_per_account() -> Result<()> {
    let mut atm = atm_with_sam()?;
    atm.register_account(87654321, 4321, "Elliot Alderson", dollars("50"))?;

    atm.deposit_cash(87654321, 4321, dollars("10"))?;

    assert_eq!(atm.balance(SAM_CARD, SAM_PIN)?, dollars("300.30"));
    assert_eq!(atm.balance(87654321, 4321)?, dollars("60"));
    assert!(atm.transaction_log(SAM_CARD, SAM_PIN)?.is_empty());
    assert_eq!(atm.transaction_log(87654321, 4321)?.len(), 1);
    Ok(())
}

#[test]
fn test_wrong_pin_is_unknown_account() -> Result<()> {
    let mut atm = atm_with_sam()?;

    let err = atm.deposit_cash(SAM_CARD, 1111, dollars("5")).unwrap_err();
    assert!(matches!(err, LedgerError::AccountNotFound(_)));
    assert!(!err.is_invalid_argument());
    Ok(())
}

#[test]
fn test_accounts_serialize_for_inspection() -> Result<()> {
    let atm = atm_with_sam()?;
    let sam = atm.account(SAM_CARD, SAM_PIN)?;

    let json = serde_json::to_value(sam)?;
    assert_eq!(json["owner_name"], "Sam Sepiol");
    assert_eq!(json["balance"], 30030);
    Ok(())
}
