//! # Storage Error Types
//!
//! Error types for snapshot persistence.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / serde_json::Error                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StorageError (this module) ← Adds the key and a category               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Store hydration ← Corrupted is logged and treated as empty state       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in app) ← Only for failures the UI must hear about           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Snapshot persistence errors.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A persisted snapshot exists but no longer parses.
    ///
    /// ## When This Occurs
    /// - The file was truncated by a crash mid-write
    /// - A schema change made an old snapshot unreadable
    /// - The file was edited by hand
    ///
    /// Hydration treats this as "no prior state".
    #[error("Stored snapshot for \"{key}\" is corrupted: {reason}")]
    Corrupted { key: String, reason: String },

    /// The filesystem refused a read or write.
    ///
    /// ## When This Occurs
    /// - Data directory permissions changed
    /// - Disk full
    #[error("Storage I/O failed for \"{key}\": {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },

    /// A key that would escape the data directory or collide with path
    /// syntax was rejected before touching the filesystem.
    #[error("Invalid storage key: \"{0}\"")]
    InvalidKey(String),
}

impl StorageError {
    /// Creates a Corrupted error for a key.
    pub fn corrupted(key: impl Into<String>, reason: impl Into<String>) -> Self {
        StorageError::Corrupted {
            key: key.into(),
            reason: reason.into(),
        }
    }
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = StorageError::corrupted("cart", "expected value at line 1");
        assert_eq!(
            err.to_string(),
            "Stored snapshot for \"cart\" is corrupted: expected value at line 1"
        );

        let err = StorageError::InvalidKey("../escape".to_string());
        assert_eq!(err.to_string(), "Invalid storage key: \"../escape\"");
    }
}
