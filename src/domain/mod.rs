//! Domain module
//!
//! Core domain types for the simulated provider.

pub mod account;
pub mod records;

pub use account::{Account, AccountNumber, AccountSubtype, AccountType, Balances, Item};
pub use records::{Statement, Transaction};
