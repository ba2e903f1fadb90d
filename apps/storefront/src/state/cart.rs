//! # Cart Store
//!
//! Owns the core [`Cart`] and its persistence.
//!
//! ## Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  hydrate(storage)                                                       │
//! │       │  read "cart" once                                               │
//! │       │    ├── Ok(Some(lines)) → Load into the cart                     │
//! │       │    ├── Ok(None)        → start empty                            │
//! │       │    └── Err(Corrupted)  → warn! and start empty (never crash)    │
//! │       ▼                                                                 │
//! │  dispatch(action)*                                                      │
//! │       │  apply to the core cart, then re-serialize the line list        │
//! │       │  under "cart" (full overwrite)                                  │
//! │       │                                                                 │
//! │       └── ToggleOpen is the one transient action: the sidebar flag      │
//! │           is display state and is not persisted                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::warn;

use folio_core::cart::{Cart, CartAction, CartLine};
use folio_core::error::CoreResult;
use folio_storage::{keys, LocalStore};

/// The cart plus its snapshot persistence.
#[derive(Debug)]
pub struct CartStore {
    cart: Cart,
    storage: LocalStore,
}

impl CartStore {
    /// Creates the store and hydrates it from the persisted snapshot.
    ///
    /// A corrupted snapshot is logged and treated as no prior state; no
    /// error reaches the caller.
    pub fn hydrate(storage: LocalStore) -> Self {
        let mut cart = Cart::new();

        match storage.read::<Vec<CartLine>>(keys::CART) {
            Ok(Some(lines)) => {
                let count = lines.len();
                if cart.apply(CartAction::Load { lines }).is_ok() {
                    tracing::debug!(lines = count, "cart hydrated");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to load cart snapshot, starting empty");
            }
        }

        CartStore { cart, storage }
    }

    /// Applies an action and persists the resulting line list.
    ///
    /// A rejected action (insufficient stock, bad quantity) propagates the
    /// error and writes nothing; the snapshot still matches the state.
    /// Persistence failures are logged, not surfaced: losing the snapshot
    /// must not lose the in-memory session.
    pub fn dispatch(&mut self, action: CartAction) -> CoreResult<()> {
        let transient = matches!(action, CartAction::ToggleOpen);
        self.cart.apply(action)?;

        if !transient {
            self.persist();
        }
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.storage.write(keys::CART, &self.cart.lines()) {
            warn!(error = %e, "failed to persist cart snapshot");
        }
    }

    /// Read access to the underlying cart.
    pub fn cart(&self) -> &Cart {
        &self.cart
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_data::seed_catalog;
    use folio_core::types::Book;

    fn any_book() -> Book {
        seed_catalog()
            .into_iter()
            .find(|b| b.stock >= 3)
            .expect("seed catalog has stocked books")
    }

    #[test]
    fn test_dispatch_persists_and_rehydrates() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");
        let book = any_book();

        {
            let mut store = CartStore::hydrate(storage.clone());
            store
                .dispatch(CartAction::Add {
                    book: book.clone(),
                    quantity: 2,
                })
                .unwrap();
        }

        // a fresh store sees the persisted lines
        let store = CartStore::hydrate(storage);
        assert_eq!(store.cart().line_count(), 1);
        assert_eq!(store.cart().lines()[0].item.id, book.id);
        assert_eq!(store.cart().item_count(), 2);
    }

    /// Restart with a corrupted stored cart string: cart initializes to an
    /// empty list, no error propagates.
    #[test]
    fn test_corrupted_snapshot_hydrates_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("cart.json"), "{{{ definitely not json").unwrap();
        let storage = LocalStore::open(dir.path()).expect("open");

        let store = CartStore::hydrate(storage);
        assert!(store.cart().is_empty());
        assert_eq!(store.cart().total().cents(), 0);
    }

    #[test]
    fn test_rejected_dispatch_writes_nothing() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");
        let mut book = any_book();
        book.stock = 1;

        let mut store = CartStore::hydrate(storage.clone());
        assert!(store
            .dispatch(CartAction::Add {
                book,
                quantity: 5,
            })
            .is_err());

        assert!(store.cart().is_empty());
        let snapshot: Option<Vec<CartLine>> = storage.read(keys::CART).unwrap();
        assert!(snapshot.is_none());
    }

    #[test]
    fn test_toggle_open_is_not_persisted() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");

        let mut store = CartStore::hydrate(storage.clone());
        store.dispatch(CartAction::ToggleOpen).unwrap();
        assert!(store.cart().is_open());

        // nothing written, and the flag resets on rehydrate
        let snapshot: Option<Vec<CartLine>> = storage.read(keys::CART).unwrap();
        assert!(snapshot.is_none());
        let fresh = CartStore::hydrate(storage);
        assert!(!fresh.cart().is_open());
    }
}
