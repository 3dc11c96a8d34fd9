// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use anyhow::Result;
use atm_ledger::{Atm, parse_cents};
use tempfile::TempDir;

pub const SAM_CARD: u64 = 12345678;
pub const SAM_PIN: u32 = 1234;

/// Helper to convert a decimal literal into cents
pub fn dollars(amount: &str) -> i64 {
    parse_cents(amount).unwrap()
}

/// Test fixture: an ATM holding Sam Sepiol's account with $300.30
pub fn atm_with_sam() -> Result<Atm> {
    let mut atm = Atm::new();
    atm.register_account(SAM_CARD, SAM_PIN, "Sam Sepiol", dollars("300.30"))?;
    Ok(atm)
}

/// Helper to create a scratch directory for ledger output
pub fn output_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}
