//! Statement generator

use chrono::{Datelike, Months, NaiveDate, Utc};
use rand::Rng;
use rust_decimal::Decimal;

use crate::domain::Statement;

/// Statements generated per account per query.
pub const DEFAULT_STATEMENT_COUNT: usize = 6;

/// Ending balance bounds, in cents.
const MIN_ENDING_CENTS: i64 = 1_000;
const MAX_ENDING_CENTS: i64 = 10_000;

/// Starting balance offset from the ending balance, in cents.
const MAX_DELTA_CENTS: i64 = 1_000;

/// Deposit/withdrawal total bounds, in cents.
const MIN_TOTAL_CENTS: i64 = 500;
const MAX_TOTAL_CENTS: i64 = 3_000;

/// Host serving the simulated statement PDFs.
const STATEMENT_URL_BASE: &str = "https://api.sandbank.test/statements";

/// Generate `count` monthly statements for an account, most recent first.
///
/// The walk anchors at day 1 of the current month; each iteration closes
/// the window at `anchor - 1 day`, moves the anchor back one month, and
/// opens the window at the new anchor. Windows are therefore contiguous
/// non-overlapping calendar months.
///
/// Balances are independent draws: `starting_balance` may exceed or fall
/// below `ending_balance`, and the deposit/withdrawal totals are unrelated
/// to either.
pub fn statements<R: Rng + ?Sized>(rng: &mut R, account_id: &str, count: usize) -> Vec<Statement> {
    let today = Utc::now().date_naive();
    let mut anchor = first_of_month(today);
    let mut records = Vec::with_capacity(count);

    for i in 0..count {
        let end_date = anchor.pred_opt().expect("day before a month start");
        anchor = anchor
            .checked_sub_months(Months::new(1))
            .expect("month before a month start");
        let start_date = anchor;

        let ending_cents = rng.gen_range(MIN_ENDING_CENTS..=MAX_ENDING_CENTS);
        let delta_cents = rng.gen_range(-MAX_DELTA_CENTS..=MAX_DELTA_CENTS);

        records.push(Statement {
            statement_id: format!("stmt_{}_{}", account_id, i),
            account_id: account_id.to_string(),
            start_date,
            end_date,
            starting_balance: Decimal::new(ending_cents - delta_cents, 2),
            ending_balance: Decimal::new(ending_cents, 2),
            total_deposits: Decimal::new(rng.gen_range(MIN_TOTAL_CENTS..=MAX_TOTAL_CENTS), 2),
            total_withdrawals: Decimal::new(rng.gen_range(MIN_TOTAL_CENTS..=MAX_TOTAL_CENTS), 2),
            pdf_url: pdf_url(account_id, end_date),
        });
    }

    records
}

/// Statement PDF location, a pure function of account ID and end month.
pub fn pdf_url(account_id: &str, end_date: NaiveDate) -> String {
    format!(
        "{}/{}/{}.pdf",
        STATEMENT_URL_BASE,
        account_id,
        end_date.format("%Y-%m")
    )
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).expect("day 1 exists in every month")
}
