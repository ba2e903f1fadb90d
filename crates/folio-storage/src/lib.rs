//! # folio-storage: Device-Local Persistence for Folio
//!
//! Persisted storefront state lives in a small directory of JSON documents,
//! one per well-known key. This is the Rust rendition of the key-value
//! device storage the stores were designed against: a full snapshot is
//! written on every mutation and read back once at startup.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Persistence                                │
//! │                                                                         │
//! │  Store mutation (add_to_cart, ...)                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                 folio-storage (THIS CRATE)                      │    │
//! │  │                                                                 │    │
//! │  │   LocalStore::write("cart", &lines)   ──►  <data dir>/cart.json │    │
//! │  │   LocalStore::read("wishlist")        ◄──  wishlist.json        │    │
//! │  │   LocalStore::remove("token")         ──►  token.json deleted   │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ~/.local/share/folio-storefront/  (platform data dir)                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Corruption Policy
//! A snapshot that no longer parses is reported as [`StorageError::Corrupted`].
//! Callers hydrate that as "no prior state": log it, start empty, never
//! crash. Losing a cart snapshot must not lose the session.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StorageError, StorageResult};
pub use store::LocalStore;

// =============================================================================
// Well-Known Keys
// =============================================================================

/// The keys the storefront persists under.
pub mod keys {
    /// Cart snapshot: array of `{ item, quantity, addedAt }`.
    pub const CART: &str = "cart";

    /// Wishlist snapshot: array of book records.
    pub const WISHLIST: &str = "wishlist";

    /// Opaque session token string.
    pub const TOKEN: &str = "token";
}
