//! Balance aggregation.
//!
//! Folds a group's expenses and settlements into one signed net balance per
//! member. A pure reducer: no membership checks, no IO.

pub mod aggregator;
pub mod balance_map;
pub mod records;

pub use aggregator::aggregate_balances;
pub use balance_map::BalanceMap;
pub use records::{Expense, Settlement};
