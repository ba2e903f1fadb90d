//! # State Module
//!
//! The store objects of the storefront.
//!
//! ## Why Multiple Store Types?
//! Instead of one `AppState` struct containing everything, each concern gets
//! its own store object. This approach:
//!
//! 1. **Better Separation of Concerns**: each store owns one slice of state
//! 2. **Easier Testing**: stores can be constructed against a temp directory
//! 3. **Clearer Command Signatures**: commands declare exactly which stores
//!    they need
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Architecture                                   │
//! │                                                                         │
//! │  Storefront::open(storage)  constructs, in order:                       │
//! │                                                                         │
//! │  ┌──────────────┐ ┌───────────┐ ┌───────────────┐ ┌────────────┐        │
//! │  │ CatalogState │ │ CartStore │ │ WishlistStore │ │ AuthStore  │        │
//! │  │              │ │           │ │               │ │            │        │
//! │  │ read-only    │ │ hydrates  │ │ hydrates      │ │ restores   │        │
//! │  │ book list    │ │ "cart"    │ │ "wishlist"    │ │ "token"    │        │
//! │  └──────────────┘ └───────────┘ └───────────────┘ └────────────┘        │
//! │                                                                         │
//! │  LIFECYCLE (each persisted store):                                      │
//! │    create → hydrate once → dispatch* → serialize after each change      │
//! │                                                                         │
//! │  Single-threaded by design: every dispatch runs to completion before    │
//! │  the next UI event is processed. No locks, no interleaving.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod auth;
mod cart;
mod catalog;
mod wishlist;

pub use auth::AuthStore;
pub use cart::CartStore;
pub use catalog::CatalogState;
pub use wishlist::WishlistStore;
