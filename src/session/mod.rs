//! Session operations
//!
//! Business queries behind the provider endpoints: each resolves an access
//! token through the catalog, invokes the generators as needed, and applies
//! filtering and ordering. Unknown tokens yield empty views, never errors.

use chrono::NaiveDate;
use rand::Rng;
use serde::Serialize;

use crate::catalog::Catalog;
use crate::domain::{Account, AccountNumber, Statement, Transaction};
use crate::generator;

/// Result of a transactions query.
#[derive(Debug, Clone, Serialize)]
pub struct TransactionsView {
    pub accounts: Vec<Account>,
    pub transactions: Vec<Transaction>,
    pub total_transactions: usize,
}

/// Result of a statements query.
#[derive(Debug, Clone, Serialize)]
pub struct StatementsView {
    pub accounts: Vec<Account>,
    pub statements: Vec<Statement>,
    pub total_statements: usize,
}

/// Result of an auth query.
#[derive(Debug, Clone, Serialize)]
pub struct AuthView {
    pub accounts: Vec<Account>,
    pub numbers: AccountNumbers,
}

/// Banking numbers grouped by transfer rail.
#[derive(Debug, Clone, Serialize)]
pub struct AccountNumbers {
    pub ach: Vec<AccountNumber>,
}

/// Generate transactions for every account the token resolves to.
///
/// The inclusive `[start_date, end_date]` filter applies only when both
/// bounds are present. The merged result is sorted by date descending.
pub fn transactions<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
    access_token: &str,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> TransactionsView {
    let accounts = catalog.accounts_for_token(access_token);

    let mut transactions = Vec::new();
    for account in &accounts {
        let mut generated = generator::transactions(
            rng,
            &account.account_id,
            generator::DEFAULT_TRANSACTION_COUNT,
        );

        if let (Some(start), Some(end)) = (start_date, end_date) {
            generated.retain(|t| start <= t.date && t.date <= end);
        }

        transactions.extend(generated);
    }

    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    let total_transactions = transactions.len();
    TransactionsView {
        accounts,
        transactions,
        total_transactions,
    }
}

/// Generate statements for every account the token resolves to, merged and
/// sorted by end date descending.
pub fn statements<R: Rng + ?Sized>(
    catalog: &Catalog,
    rng: &mut R,
    access_token: &str,
) -> StatementsView {
    let accounts = catalog.accounts_for_token(access_token);

    let mut statements = Vec::new();
    for account in &accounts {
        statements.extend(generator::statements(
            rng,
            &account.account_id,
            generator::DEFAULT_STATEMENT_COUNT,
        ));
    }

    statements.sort_by(|a, b| b.end_date.cmp(&a.end_date));

    let total_statements = statements.len();
    StatementsView {
        accounts,
        statements,
        total_statements,
    }
}

/// Accounts and banking numbers for a token. Pure catalog delegation.
pub fn auth(catalog: &Catalog, access_token: &str) -> AuthView {
    AuthView {
        accounts: catalog.accounts_for_token(access_token),
        numbers: AccountNumbers {
            ach: catalog.numbers_for_token(access_token),
        },
    }
}
