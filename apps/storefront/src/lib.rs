//! # Folio Storefront Library
//!
//! Core library for the Folio storefront shell: store construction,
//! hydration, and the command surface a UI binds to.
//!
//! ## Module Organization
//! ```text
//! folio_storefront/
//! ├── lib.rs            ◄─── You are here (wiring & startup)
//! ├── state/
//! │   ├── mod.rs        ◄─── Store type exports
//! │   ├── catalog.rs    ◄─── In-memory catalog (read-only)
//! │   ├── cart.rs       ◄─── Cart store (hydrate + persist)
//! │   ├── wishlist.rs   ◄─── Wishlist store (hydrate + persist)
//! │   └── auth.rs       ◄─── Session store (token persistence)
//! ├── commands/
//! │   ├── mod.rs        ◄─── Command exports
//! │   ├── catalog.rs    ◄─── Browse/search/detail commands
//! │   ├── cart.rs       ◄─── Cart manipulation commands
//! │   ├── wishlist.rs   ◄─── Wishlist commands (incl. move-to-cart)
//! │   └── auth.rs       ◄─── Login/register/logout commands
//! ├── catalog_data.rs   ◄─── Seed book list
//! ├── notice.rs         ◄─── Toast-style user notices
//! └── error.rs          ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Application Startup                               │
//! │                                                                         │
//! │  1. Initialize Logging ───────────────────────────────────────────────► │
//! │     • tracing-subscriber with env filter                                │
//! │     • Default: info, overridable with RUST_LOG                          │
//! │                                                                         │
//! │  2. Determine Data Directory ─────────────────────────────────────────► │
//! │     • FOLIO_DATA_DIR override, else the platform app-data dir           │
//! │                                                                         │
//! │  3. Open the Local Store ─────────────────────────────────────────────► │
//! │     • Creates the snapshot directory on first run                       │
//! │                                                                         │
//! │  4. Construct Store Objects ──────────────────────────────────────────► │
//! │     • CatalogState: seeded book list                                    │
//! │     • CartStore / WishlistStore: hydrate from "cart" / "wishlist"       │
//! │     • AuthStore: restore "token" (does not authenticate by itself)      │
//! │     • NoticeQueue: empty                                                │
//! │                                                                         │
//! │  5. Hand the Storefront to the UI shell ──────────────────────────────► │
//! │     • Commands borrow exactly the stores they need                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod catalog_data;
pub mod commands;
pub mod error;
pub mod notice;
pub mod state;

use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::EnvFilter;

use folio_storage::LocalStore;

pub use error::{ApiError, ErrorCode};
pub use notice::{Notice, NoticeLevel, NoticeQueue};
use state::{AuthStore, CartStore, CatalogState, WishlistStore};

/// The assembled storefront: every store object, constructed once at startup
/// and passed by handle to whatever needs it.
///
/// There is deliberately no global; a UI shell owns one `Storefront` and
/// threads `&`/`&mut` borrows of its fields into commands.
#[derive(Debug)]
pub struct Storefront {
    pub catalog: CatalogState,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
    pub auth: AuthStore,
    pub notices: NoticeQueue,
}

impl Storefront {
    /// Builds the storefront over an explicit local store.
    ///
    /// Hydration happens here, once: corrupted snapshots are logged inside
    /// the individual stores and hydrate as empty state.
    pub fn open(storage: LocalStore) -> Self {
        let catalog = CatalogState::seeded();
        let cart = CartStore::hydrate(storage.clone());
        let wishlist = WishlistStore::hydrate(storage.clone());
        let auth = AuthStore::hydrate(storage);

        info!(books = catalog.len(), "storefront ready");

        Storefront {
            catalog,
            cart,
            wishlist,
            auth,
            notices: NoticeQueue::new(),
        }
    }

    /// Builds the storefront against the platform data directory.
    pub fn open_default() -> Result<Self, ApiError> {
        let dir = data_dir()?;
        info!(dir = %dir.display(), "data directory determined");
        let storage = LocalStore::open(dir)?;
        Ok(Storefront::open(storage))
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - show debug messages
/// - `RUST_LOG=folio=trace` - trace for folio crates only
/// - Default: INFO level, folio crates at DEBUG
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,folio=debug"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Determines the snapshot directory based on the platform.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.folio.storefront/`
/// - **Windows**: `%APPDATA%\folio\storefront\data`
/// - **Linux**: `~/.local/share/folio-storefront/`
///
/// ## Development Override
/// Set `FOLIO_DATA_DIR` to use a custom path.
fn data_dir() -> Result<PathBuf, ApiError> {
    if let Ok(path) = std::env::var("FOLIO_DATA_DIR") {
        return Ok(PathBuf::from(path));
    }

    let proj_dirs = directories::ProjectDirs::from("com", "folio", "storefront")
        .ok_or_else(|| ApiError::internal("Could not determine app data directory"))?;

    Ok(proj_dirs.data_dir().to_path_buf())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::cart::CartAction;

    #[test]
    fn test_open_assembles_all_stores() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");

        let front = Storefront::open(storage);
        assert!(!front.catalog.is_empty());
        assert!(front.cart.cart().is_empty());
        assert!(front.wishlist.wishlist().is_empty());
        assert!(!front.auth.state().is_authenticated());
        assert!(front.notices.is_empty());
    }

    #[test]
    fn test_session_state_survives_reopen() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");

        {
            let mut front = Storefront::open(storage.clone());
            let book = front.catalog.all()[0].clone();
            front
                .cart
                .dispatch(CartAction::Add { book, quantity: 1 })
                .unwrap();
        }

        let front = Storefront::open(storage);
        assert_eq!(front.cart.cart().line_count(), 1);
    }
}
