//! `splitledger-core` — shared building blocks of the ledger engine.
//!
//! Pure value types only (no I/O): money in integer cents, member identifiers,
//! splits, and the error taxonomy every engine crate returns.

pub mod error;
pub mod id;
pub mod money;
pub mod split;
pub mod value_object;

pub use error::{LedgerError, LedgerResult};
pub use id::MemberId;
pub use money::Money;
pub use split::Split;
pub use value_object::ValueObject;
