//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Folio                                  │
//! │                                                                         │
//! │  Frontend                    Rust Backend                               │
//! │  ────────                    ────────────                               │
//! │                                                                         │
//! │  invoke add_to_cart(...)                                                │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ├── Unknown id? ───── ApiError { code: NOT_FOUND } ────► │  │
//! │  │         │                                                        │  │
//! │  │         ├── Bad input? ────── ApiError { code: VALIDATION } ───► │  │
//! │  │         │                                                        │  │
//! │  │         ├── Rejected add? ─── NOT an error: the command pushes   │  │
//! │  │         │                     a notice and returns the unchanged │  │
//! │  │         │                     state                              │  │
//! │  │         │                                                        │  │
//! │  │         └── Success ──────────────────────────────────────────►  │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected mutations (insufficient stock, duplicate wishlist entry) are
//! part of normal flow and never become `ApiError`; the conversions below
//! exist for the paths where they would indicate a command-layer bug.

use serde::Serialize;

use folio_core::{CoreError, ValidationError};
use folio_storage::StorageError;

/// API error returned from storefront commands.
///
/// ## Serialization
/// What the frontend receives when a command fails:
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Book not found: bk-042"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Requested quantity exceeds stock
    InsufficientStock,

    /// Entry already present
    DuplicateEntry,

    /// Snapshot persistence failed
    StorageError,

    /// Anything else
    Internal,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookNotFound(id) => ApiError::not_found("Book", &id),
            CoreError::InsufficientStock {
                title,
                available,
                requested,
            } => ApiError::new(
                ErrorCode::InsufficientStock,
                format!(
                    "Not enough stock for \"{}\": {} available, {} requested",
                    title, available, requested
                ),
            ),
            CoreError::AlreadyInWishlist { title } => ApiError::new(
                ErrorCode::DuplicateEntry,
                format!("\"{}\" is already in the wishlist", title),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts validation errors directly (command-layer input checks).
impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::validation(err.to_string())
    }
}

/// Converts storage errors to API errors.
impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::Corrupted { .. } => {
                // Corruption is normally absorbed during hydration; reaching
                // here means a snapshot died mid-session.
                tracing::error!("snapshot corrupted: {}", err);
                ApiError::new(ErrorCode::StorageError, "Stored data is corrupted")
            }
            StorageError::Io { .. } => {
                tracing::error!("storage I/O failed: {}", err);
                ApiError::new(ErrorCode::StorageError, "Device storage is unavailable")
            }
            StorageError::InvalidKey(key) => {
                ApiError::internal(format!("invalid storage key: {}", key))
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

// =============================================================================
// Unit Tests
// =============================================================================
