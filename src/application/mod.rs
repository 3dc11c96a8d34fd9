// Application layer - the ATM-facing ledger operations

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
