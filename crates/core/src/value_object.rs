//! Value object trait: equality by value, not identity.
//!
//! Everything the ledger engine consumes or produces is a value object: it is
//! passed in by the caller, compared by its fields, and never mutated in place.

/// Marker trait for value objects.
///
/// Two splits for the same member with the same amount are the same split;
/// two balance maps with the same entries are the same balances. None of the
/// engine's types carry an identity of their own.
///
/// The trait requires:
/// - **Clone**: values are handed back to the caller by value
/// - **PartialEq**: values are compared by their attributes
/// - **Debug**: values show up in test failures and `tracing` fields
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

impl ValueObject for crate::Money {}

impl ValueObject for crate::MemberId {}
