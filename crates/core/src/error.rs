//! Ledger error model.

use thiserror::Error;

/// Result type used across the ledger engine.
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Ledger-level error.
///
/// Every variant is a local, synchronous validation failure. Arithmetic results
/// (negative or inconsistent balances) are never errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LedgerError {
    /// Input to a split calculation was rejected.
    ///
    /// The message is meant to be shown verbatim to the end user.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A monetary value could not be parsed or represented.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// A member identifier was invalid (e.g. empty).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl LedgerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn invalid_amount(msg: impl Into<String>) -> Self {
        Self::InvalidAmount(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }
}
