//! Generated records
//!
//! Transactions and statements are synthesized fresh on every query and
//! never persisted, so repeated queries for the same token yield different
//! record sets.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A synthetic transaction.
///
/// `amount` is signed: negative values are debits. `category` is a
/// two-entry primary/detailed pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub transaction_id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub date: NaiveDate,
    pub datetime: DateTime<Utc>,
    pub name: String,
    pub merchant_name: String,
    pub pending: bool,
    pub category: [String; 2],
}

/// A synthetic monthly statement.
///
/// `starting_balance` and `ending_balance` are independent draws and need
/// not reconcile with `total_deposits`/`total_withdrawals`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statement {
    pub statement_id: String,
    pub account_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub starting_balance: Decimal,
    pub ending_balance: Decimal,
    pub total_deposits: Decimal,
    pub total_withdrawals: Decimal,
    pub pdf_url: String,
}
