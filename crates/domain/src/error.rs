//! Unified error types for the domain layer
//!
//! Not-found lookups are ordinary `Option`s; `DomainError` is reserved for
//! records that cannot be built and catalogs that cannot be assembled.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty name, no diagram elements)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Entity not found
    #[error("Entity not found: {entity_type} with id {id}")]
    NotFound {
        entity_type: &'static str,
        id: String,
    },

    /// Two catalog records share an identifier
    #[error("Duplicate part id: {0}")]
    DuplicateId(String),

    /// A catalog must hold at least one part
    #[error("Catalog is empty")]
    EmptyCatalog,

    /// Parse error (for vocabulary types)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for invariant violations.
    ///
    /// # Example
    /// ```ignore
    /// if name.is_empty() {
    ///     return Err(DomainError::validation("Part name cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type,
            id: id.into(),
        }
    }

    /// Create a duplicate id error
    pub fn duplicate_id(id: impl Into<String>) -> Self {
        Self::DuplicateId(id.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error() {
        let err = DomainError::validation("name cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
        assert_eq!(err.to_string(), "Validation failed: name cannot be empty");
    }

    #[test]
    fn test_not_found_error() {
        let err = DomainError::not_found("AnatomicalPart", "femur");
        assert!(matches!(err, DomainError::NotFound { .. }));
        assert_eq!(
            err.to_string(),
            "Entity not found: AnatomicalPart with id femur"
        );
    }

    #[test]
    fn test_duplicate_id_error() {
        let err = DomainError::duplicate_id("skull");
        assert_eq!(err.to_string(), "Duplicate part id: skull");
    }

    #[test]
    fn test_empty_catalog_error() {
        assert_eq!(DomainError::EmptyCatalog.to_string(), "Catalog is empty");
    }
}
