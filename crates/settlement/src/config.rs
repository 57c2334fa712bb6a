//! Simplifier configuration.

use serde::{Deserialize, Serialize};

use splitledger_core::Money;

/// Debt simplifier configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimplifierConfig {
    /// Balances and remainders within this distance of zero count as settled;
    /// payments no larger than it are not suggested.
    pub tolerance: Money,
}

impl Default for SimplifierConfig {
    fn default() -> Self {
        Self {
            tolerance: Money::CENT,
        }
    }
}

impl SimplifierConfig {
    /// Negative tolerances are clamped to zero.
    pub fn with_tolerance(mut self, tolerance: Money) -> Self {
        self.tolerance = if tolerance.is_negative() {
            Money::ZERO
        } else {
            tolerance
        };
        self
    }
}
