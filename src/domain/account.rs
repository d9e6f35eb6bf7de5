//! Account types
//!
//! Reference data describing simulated bank accounts, their banking
//! numbers, and the items (bank connections) that group them.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Top-level account classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Depository,
    Credit,
}

/// Account subclassification within a type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountSubtype {
    Checking,
    Savings,
    #[serde(rename = "credit card")]
    CreditCard,
}

/// Balance snapshot carried by every account.
///
/// `limit` is only present for credit accounts. Currency codes follow the
/// aggregator convention: `iso_currency_code` for ISO 4217 currencies,
/// `unofficial_currency_code` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balances {
    pub available: Decimal,
    pub current: Decimal,
    pub limit: Option<Decimal>,
    pub iso_currency_code: String,
    pub unofficial_currency_code: Option<String>,
}

/// A simulated bank account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub account_id: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub subtype: AccountSubtype,
    pub name: String,
    pub official_name: String,
    pub mask: String,
    pub balances: Balances,
}

/// Banking numbers for an account.
///
/// One-to-one with [`Account`] where present; accounts without transfer
/// rails (e.g. credit cards) have no entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountNumber {
    pub account_id: String,
    pub account: String,
    pub routing: String,
    pub wire_routing: String,
}

/// A simulated bank connection grouping one or more accounts.
///
/// Each access token is bound to exactly one item at issuance.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub item_id: String,
    pub account_ids: Vec<String>,
}
