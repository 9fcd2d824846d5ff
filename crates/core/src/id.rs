//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Identifier of a product in the catalog.
///
/// Always positive and assigned by the catalog store, never supplied by a form.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct ProductId(u64);

impl ProductId {
    /// The identifier handed out to the first product of an empty catalog.
    pub const FIRST: ProductId = ProductId(1);

    /// Wrap a raw identifier, rejecting zero.
    pub fn new(raw: u64) -> Result<Self, DomainError> {
        if raw == 0 {
            return Err(DomainError::invalid_id("ProductId: must be positive"));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u64 {
        self.0
    }

    /// Identifier following this one.
    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<ProductId> for u64 {
    fn from(value: ProductId) -> Self {
        value.0
    }
}

impl TryFrom<u64> for ProductId {
    type Error = DomainError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s
            .trim()
            .parse::<u64>()
            .map_err(|e| DomainError::invalid_id(format!("ProductId: {e}")))?;
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(ProductId::new(0), Err(DomainError::InvalidId(_))));
        assert!(matches!("0".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn parses_and_displays() {
        let id: ProductId = " 42 ".parse().unwrap();
        assert_eq!(id.get(), 42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.next().get(), 43);
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!("abc".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
        assert!(matches!("-3".parse::<ProductId>(), Err(DomainError::InvalidId(_))));
    }

    #[test]
    fn serializes_as_plain_number() {
        let id = ProductId::new(7).unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "7");
        let back: ProductId = serde_json::from_str("7").unwrap();
        assert_eq!(back, id);
        assert!(serde_json::from_str::<ProductId>("0").is_err());
    }
}
