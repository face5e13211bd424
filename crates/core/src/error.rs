//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is local and recoverable: a failed operation leaves the
/// collection it targeted unchanged, and the message is meant to be shown
/// inline next to the offending control.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A required field was missing or malformed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// An item with this SKU already exists in the collection.
    #[error("duplicate SKU: {0}")]
    DuplicateSku(String),

    /// No item with this SKU exists in the collection.
    #[error("not found: {0}")]
    NotFound(String),

    /// A stock movement was requested with a non-positive or non-numeric amount.
    #[error("invalid quantity: {0}")]
    InvalidQuantity(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn duplicate_sku(sku: impl Into<String>) -> Self {
        Self::DuplicateSku(sku.into())
    }

    pub fn not_found(sku: impl Into<String>) -> Self {
        Self::NotFound(sku.into())
    }

    pub fn invalid_quantity(msg: impl Into<String>) -> Self {
        Self::InvalidQuantity(msg.into())
    }
}
