//! Member identifiers.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// Identifier of a group member.
///
/// Opaque to the engine: whatever token the collaborator uses (a user id, an
/// email, a uuid string). Compared, ordered and hashed by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct MemberId(String);

impl MemberId {
    /// Create an identifier, rejecting empty or whitespace-only tokens.
    pub fn new(id: impl Into<String>) -> Result<Self, LedgerError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LedgerError::invalid_id("MemberId: empty"));
        }
        Ok(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for MemberId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for MemberId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for MemberId {
    type Error = LedgerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MemberId> for String {
    fn from(value: MemberId) -> Self {
        value.0
    }
}

/// Infallible conversion for literals in tests and fixtures.
///
/// Does not validate; prefer [`MemberId::new`] or `parse` for untrusted input.
impl From<&str> for MemberId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl FromStr for MemberId {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rejects_blank_tokens() {
        assert!("".parse::<MemberId>().is_err());
        assert!("   ".parse::<MemberId>().is_err());
        assert_eq!("u1".parse::<MemberId>().unwrap().as_str(), "u1");
    }

    #[test]
    fn serializes_as_plain_string() {
        let id = MemberId::from("alice");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"alice\"");
        let back: MemberId = serde_json::from_str("\"alice\"").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<MemberId>("\"\"").is_err());
    }
}
