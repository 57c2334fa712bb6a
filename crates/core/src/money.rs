//! Monetary amounts in integer minor units.

use core::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Signed money amount represented as **integer cents**.
///
/// Every amount the engine touches (split shares, balances, settlements,
/// suggested transactions) is a `Money`, so repeated additions never drift.
/// Floating point only shows up at the edges: percentage inputs and JSON
/// numbers, both converted to cents straight away.
///
/// The sign depends on context. For balances, positive means the member is owed
/// money and negative means the member owes money.
///
/// ```rust
/// use splitledger_core::Money;
///
/// let amount: Money = "12,5".parse().unwrap();
/// assert_eq!(amount.cents(), 1250);
/// assert_eq!(amount.to_string(), "12.50");
/// assert!("12.345".parse::<Money>().is_err());
/// ```
///
/// Serialised as a decimal string (`"12.50"`); deserialised from either a
/// string or a JSON number.
///
/// Parsed and summed amounts stay within `±`[`Money::MAX`]; anything larger is
/// rejected with [`LedgerError::InvalidAmount`] instead of overflowing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyRepr", into = "String")]
#[repr(transparent)]
pub struct Money(i64);

impl Money {
    pub const ZERO: Money = Money(0);

    /// One minor unit (0.01).
    pub const CENT: Money = Money(1);

    /// Largest magnitude accepted from input or produced by checked arithmetic
    /// (10 trillion major units).
    pub const MAX: Money = Money(1_000_000_000_000_000);

    /// Creates an amount from integer cents. Not range checked.
    #[must_use]
    pub const fn from_cents(cents: i64) -> Self {
        Self(cents)
    }

    /// Creates an amount from whole major units (e.g. `from_major(100)` is 100.00).
    #[must_use]
    pub const fn from_major(units: i64) -> Self {
        Self(units * 100)
    }

    /// Converts a floating point major-unit value, rounding to the nearest cent.
    ///
    /// Halves round away from zero.
    pub fn from_major_f64(value: f64) -> Result<Self, LedgerError> {
        if !value.is_finite() {
            return Err(LedgerError::invalid_amount("amount must be a finite number"));
        }
        let cents = (value * 100.0).round();
        if cents.abs() > Self::MAX.0 as f64 {
            return Err(LedgerError::invalid_amount("amount too large"));
        }
        Ok(Self(cents as i64))
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// Returns the value in major units as a float (display and percentage math only).
    #[must_use]
    pub fn to_major_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[must_use]
    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `true` when `|self| <= tolerance`.
    #[must_use]
    pub const fn is_within(self, tolerance: Money) -> bool {
        self.0.abs() <= tolerance.0
    }

    /// Addition that returns `None` once the result leaves `±MAX`.
    #[must_use]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money).filter(Money::in_range)
    }

    /// Subtraction that returns `None` once the result leaves `±MAX`.
    #[must_use]
    pub fn checked_sub(self, rhs: Money) -> Option<Money> {
        self.0.checked_sub(rhs.0).map(Money).filter(Money::in_range)
    }

    fn in_range(&self) -> bool {
        self.0.unsigned_abs() <= Self::MAX.0.unsigned_abs()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        let units = abs / 100;
        let cents = abs % 100;
        write!(f, "{sign}{units}.{cents:02}")
    }
}

impl From<Money> for String {
    fn from(value: Money) -> Self {
        value.to_string()
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Self::Output {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Self::Output {
        Money(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Money;

    fn neg(self) -> Self::Output {
        Money(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl FromStr for Money {
    type Err = LedgerError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    /// At most 2 fractional digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || LedgerError::invalid_amount("empty amount");
        let invalid = || LedgerError::invalid_amount(format!("invalid amount: {s:?}"));
        let overflow = || LedgerError::invalid_amount("amount too large");

        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(empty());
        }

        let (negative, rest) = if let Some(stripped) = trimmed.strip_prefix('-') {
            (true, stripped)
        } else if let Some(stripped) = trimmed.strip_prefix('+') {
            (false, stripped)
        } else {
            (false, trimmed)
        };

        let rest = rest.trim().replace(',', ".");
        if rest.is_empty() {
            return Err(empty());
        }

        let mut parts = rest.split('.');
        let units_str = parts.next().ok_or_else(invalid)?;
        let frac_str = parts.next();
        if parts.next().is_some() {
            return Err(invalid());
        }

        if units_str.is_empty() || !units_str.chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let units: i64 = units_str.parse().map_err(|_| overflow())?;

        let cents: i64 = match frac_str {
            None | Some("") => 0,
            Some(frac) if !frac.chars().all(|c| c.is_ascii_digit()) => return Err(invalid()),
            Some(frac) if frac.len() == 1 => frac.parse::<i64>().map_err(|_| invalid())? * 10,
            Some(frac) if frac.len() == 2 => frac.parse::<i64>().map_err(|_| invalid())?,
            Some(_) => return Err(LedgerError::invalid_amount("too many decimals")),
        };

        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .map(Money)
            .filter(Money::in_range)
            .ok_or_else(overflow)?;

        Ok(if negative { -total } else { total })
    }
}

/// Wire forms accepted for a [`Money`] value.
#[derive(Deserialize)]
#[serde(untagged)]
enum MoneyRepr {
    Text(String),
    Number(f64),
}

impl TryFrom<MoneyRepr> for Money {
    type Error = LedgerError;

    fn try_from(value: MoneyRepr) -> Result<Self, Self::Error> {
        match value {
            MoneyRepr::Text(s) => s.parse(),
            MoneyRepr::Number(n) => Money::from_major_f64(n),
        }
    }
}
