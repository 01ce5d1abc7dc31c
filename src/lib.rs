//! Core engine of a shopkeeper credit ledger ("khaata"): customers,
//! credit lines (loans), repayments, derived balances/statuses, and a
//! placeholder session layer. The presentation layer drives this crate
//! through [`worker::processor::Processor`] and reads derived state back
//! from the [`domain::book::Book`].

pub mod common;
pub mod domain;
pub mod io;
pub mod session;
pub mod worker;

pub use common::error::LedgerError;
