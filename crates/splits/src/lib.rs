//! Split calculator.
//!
//! Turns an expense total, an ordered participant list and a split policy into
//! per-member shares. Pure domain logic only: no IO, no persistence concerns.

pub mod calculator;
pub mod plan;
pub mod policy;

pub use calculator::{CustomSplit, calculate_splits};
pub use plan::SplitPlan;
pub use policy::SplitPolicy;
