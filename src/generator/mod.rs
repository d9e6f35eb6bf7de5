//! Data generators
//!
//! Pure functions producing synthetic transaction and statement records.
//! Each call is independent and draws from the supplied random source, so
//! production callers pass `rand::thread_rng()` while tests pass a seeded
//! generator and assert on shape and invariants rather than exact values.

pub mod statements;
pub mod transactions;

pub use statements::{statements, DEFAULT_STATEMENT_COUNT};
pub use transactions::{transactions, DEFAULT_TRANSACTION_COUNT};
