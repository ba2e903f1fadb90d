//! # folio-core: Pure Business Logic for the Folio Storefront
//!
//! This crate is the **heart** of Folio. It holds the three state containers
//! that make up the storefront's business logic, plus the pure catalog
//! transform, as plain data types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Folio Architecture                               │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (TypeScript)                       │   │
//! │  │    Browse UI ──► Detail UI ──► Cart Sidebar ──► Wishlist UI     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command invocation                     │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  Storefront Commands (apps/storefront)          │   │
//! │  │    browse_catalog, add_to_cart, add_to_wishlist, login, ...     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ folio-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐   │   │
//! │  │   │   cart    │  │ wishlist  │  │  catalog  │  │   auth    │   │   │
//! │  │   │  reducer  │  │  reducer  │  │ filter +  │  │  session  │   │   │
//! │  │   │           │  │           │  │   sort    │  │  reducer  │   │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • SYNCHRONOUS                │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                folio-storage (Persistence Layer)                │   │
//! │  │        JSON snapshots under "cart" / "wishlist" / "token"       │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Book, User, formats, statuses)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state and its action reducer
//! - [`wishlist`] - Wishlist state and its action reducer
//! - [`catalog`] - Pure catalog filter/sort transform and selectors
//! - [`auth`] - Session state and its action reducer
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation rules
//!
//! ## Design Principles
//!
//! 1. **Single entry point per store**: every mutation goes through `apply`
//!    with a tagged action, never through ad-hoc field writes
//! 2. **Derived aggregates**: cart totals are recomputed after every applied
//!    action and are never independently settable
//! 3. **Integer money**: all monetary values are cents (i64)
//! 4. **Explicit errors**: rejections are typed enum variants, never strings
//!    or panics

// =============================================================================
// Module Declarations
// =============================================================================

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use folio_core::Money` instead of
// `use folio_core::money::Money`

pub use auth::{AuthAction, AuthState};
pub use cart::{Cart, CartAction, CartLine};
pub use catalog::{Availability, CatalogFilter, SortDirection, SortKey};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::{Wishlist, WishlistAction};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of related titles shown on a book's detail page.
///
/// The detail page lists books that share a genre with the one on display,
/// capped so the section stays a single row.
pub const RELATED_BOOKS_LIMIT: usize = 4;

/// Stock threshold below which the UI switches to a "only N left" hint.
pub const LOW_STOCK_THRESHOLD: i64 = 10;
