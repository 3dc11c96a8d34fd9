pub mod application;
pub mod domain;
pub mod io;

pub use application::{Atm, LedgerError};
pub use domain::*;
