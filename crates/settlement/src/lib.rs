//! Debt simplification.
//!
//! Reduces a balance map to a short list of "who pays whom" transactions that
//! settles every member. Pure domain logic only.

pub mod config;
pub mod simplifier;


pub use config::SimplifierConfig;
pub use simplifier::{Transaction, simplify_debts, simplify_debts_with};
