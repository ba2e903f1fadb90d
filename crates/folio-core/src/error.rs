//! # Error Types
//!
//! Domain-specific error types for folio-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  folio-core errors (this file)                                          │
//! │  ├── CoreError        - Rejected mutations and domain failures          │
//! │  └── ValidationError  - Input validation failures                       │
//! │                                                                         │
//! │  folio-storage errors (separate crate)                                  │
//! │  └── StorageError     - Snapshot read/write failures                    │
//! │                                                                         │
//! │  Storefront errors (in app)                                             │
//! │  └── ApiError         - What the frontend sees (serialized)             │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Frontend notice         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (title, id, counts)
//! 3. Errors are enum variants, never String
//! 4. A rejected mutation leaves the store state untouched

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Business logic errors.
///
/// These represent rejected mutations. The command layer translates them
/// into user-facing notices; none of them is fatal.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Requested quantity exceeds the book's stock.
    ///
    /// ## When This Occurs
    /// - Cart add with `quantity > book.stock`
    ///
    /// Checked per call against the snapshot's stock, not against stock
    /// minus what the cart already holds. Repeated adds can therefore
    /// exceed stock in aggregate; inherited behavior, kept as-is.
    #[error("Not enough stock for \"{title}\": available {available}, requested {requested}")]
    InsufficientStock {
        title: String,
        available: i64,
        requested: i64,
    },

    /// The book is already on the wishlist.
    ///
    /// Wishlist entries are unique by book id; a second add is rejected
    /// rather than producing a duplicate entry.
    #[error("\"{title}\" is already in the wishlist")]
    AlreadyInWishlist { title: String },

    /// Book cannot be found in the catalog.
    #[error("Book not found: {0}")]
    BookNotFound(String),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These occur when caller input does not meet requirements, before any
/// business logic runs.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too short.
    #[error("{field} must be at least {min} characters")]
    TooShort { field: String, min: usize },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. malformed email).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            title: "Dune".to_string(),
            available: 3,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for \"Dune\": available 3, requested 5"
        );

        let err = CoreError::AlreadyInWishlist {
            title: "Dune".to_string(),
        };
        assert_eq!(err.to_string(), "\"Dune\" is already in the wishlist");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "email".to_string(),
        };
        assert_eq!(err.to_string(), "email is required");

        let err = ValidationError::TooShort {
            field: "password".to_string(),
            min: 8,
        };
        assert_eq!(err.to_string(), "password must be at least 8 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "email".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
