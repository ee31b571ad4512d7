//! Domain error model.

use thiserror::Error;

use crate::id::ProductId;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is a caller contract violation (an invalid argument). Errors
/// are returned at the offending call and never retried internally; a failed
/// operation leaves the warehouse untouched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A value failed validation (empty name, missing category, ...).
    #[error("validation failed: {0}")]
    Validation(String),

    /// The operation would break uniqueness (e.g. a duplicate product id).
    #[error("conflict: {0}")]
    Conflict(String),

    /// An update targeted a product that does not exist.
    #[error("product not found: {0}")]
    ProductNotFound(ProductId),

    /// An identifier was invalid (e.g. parse failure).
    #[error("invalid identifier: {0}")]
    InvalidId(String),
}

impl DomainError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn product_not_found(id: ProductId) -> Self {
        Self::ProductNotFound(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_context() {
        assert_eq!(
            DomainError::validation("name cannot be empty").to_string(),
            "validation failed: name cannot be empty"
        );
        assert_eq!(
            DomainError::conflict("duplicate").to_string(),
            "conflict: duplicate"
        );

        let id = ProductId::new();
        assert_eq!(
            DomainError::product_not_found(id).to_string(),
            format!("product not found: {id}")
        );
    }
}
