//! Strongly-typed product identifier.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Stock Keeping Unit: the unique identity of an inventory item.
///
/// A `Sku` is fixed at creation — editing an item never changes it. Parsing
/// trims surrounding whitespace and rejects empty input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sku(String);

impl Sku {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Sku {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("SKU cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_trims_whitespace() {
        let sku: Sku = "  PAN-450 ".parse().unwrap();
        assert_eq!(sku.as_str(), "PAN-450");
    }

    #[test]
    fn parse_rejects_empty_input() {
        let err = "   ".parse::<Sku>().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn equality_is_by_value() {
        let a: Sku = "BAT-100".parse().unwrap();
        let b: Sku = "BAT-100".parse().unwrap();
        assert_eq!(a, b);
    }
}
