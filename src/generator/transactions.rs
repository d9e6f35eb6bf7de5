//! Transaction generator

use chrono::{Duration, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::Transaction;

/// Transactions generated per account per query.
pub const DEFAULT_TRANSACTION_COUNT: usize = 20;

/// Probability that a generated transaction is income (a credit).
const INCOME_PROBABILITY: f64 = 0.2;

/// Amount magnitude bounds, in cents.
const MIN_AMOUNT_CENTS: i64 = 5;
const MAX_AMOUNT_CENTS: i64 = 500;

/// Transactions fall within this many days before today.
const MAX_DAYS_AGO: i64 = 30;

/// Primary/detailed category pairs.
const CATEGORIES: &[[&str; 2]] = &[
    ["Food and Drink", "Restaurants"],
    ["Food and Drink", "Coffee Shops"],
    ["Shops", "Supermarkets"],
    ["Shops", "Clothing"],
    ["Transfer", "Deposit"],
    ["Transfer", "Withdrawal"],
    ["Service", "Subscription"],
    ["Travel", "Airlines"],
    ["Travel", "Lodging"],
    ["Payment", "Credit Card"],
    ["Recreation", "Entertainment"],
];

/// Merchant vocabulary.
const MERCHANTS: &[&str] = &[
    "Corner Market",
    "Riverside Grocers",
    "The Daily Grind",
    "Lakeside Bistro",
    "Atlas Pharmacy",
    "Northwind Airlines",
    "Harbor View Hotel",
    "City Utilities",
    "Velocity Gym",
    "Streamline Media",
    "Oak Street Books",
    "Metro Hardware",
    "Cloud Storage Co",
    "Transit Authority",
    "Payroll Deposit",
    "Fresh Fields Deli",
];

/// Generate `count` synthetic transactions for an account.
///
/// Dates land 0 to 29 days before today. Amounts are uniform in
/// [0.05, 5.00] at two decimals, negated unless the record is income
/// (drawn independently of category, so sign and category need not
/// agree). The result is stably sorted by calendar date descending.
pub fn transactions<R: Rng + ?Sized>(
    rng: &mut R,
    account_id: &str,
    count: usize,
) -> Vec<Transaction> {
    let now = Utc::now();
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let days_ago = rng.gen_range(0..MAX_DAYS_AGO);
        let moment = now - Duration::days(days_ago);

        let is_income = rng.gen_bool(INCOME_PROBABILITY);
        let cents = rng.gen_range(MIN_AMOUNT_CENTS..=MAX_AMOUNT_CENTS);
        let magnitude = Decimal::new(cents, 2);
        let amount = if is_income { magnitude } else { -magnitude };

        let category = &CATEGORIES[rng.gen_range(0..CATEGORIES.len())];
        let merchant = MERCHANTS[rng.gen_range(0..MERCHANTS.len())];

        records.push(Transaction {
            transaction_id: format!("tx_{}_{}", account_id, i),
            account_id: account_id.to_string(),
            amount,
            date: moment.date_naive(),
            datetime: moment,
            name: merchant.to_string(),
            merchant_name: merchant.to_string(),
            pending: false,
            category: [category[0].to_string(), category[1].to_string()],
        });
    }

    records.sort_by(|a, b| b.date.cmp(&a.date));

    records
}
