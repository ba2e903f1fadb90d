//! # Wishlist Store
//!
//! Owns the core [`Wishlist`] and its persistence, with the same
//! hydrate-once / persist-on-change discipline as the cart store.

use tracing::warn;

use folio_core::error::CoreResult;
use folio_core::types::Book;
use folio_core::wishlist::{Wishlist, WishlistAction};
use folio_storage::{keys, LocalStore};

/// The wishlist plus its snapshot persistence.
#[derive(Debug)]
pub struct WishlistStore {
    wishlist: Wishlist,
    storage: LocalStore,
}

impl WishlistStore {
    /// Creates the store and hydrates it from the persisted snapshot.
    ///
    /// A corrupted snapshot is logged and treated as no prior state.
    pub fn hydrate(storage: LocalStore) -> Self {
        let mut wishlist = Wishlist::new();

        match storage.read::<Vec<Book>>(keys::WISHLIST) {
            Ok(Some(entries)) => {
                let count = entries.len();
                if wishlist.apply(WishlistAction::Load { entries }).is_ok() {
                    tracing::debug!(entries = count, "wishlist hydrated");
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(error = %e, "failed to load wishlist snapshot, starting empty");
            }
        }

        WishlistStore { wishlist, storage }
    }

    /// Applies an action and persists the resulting entry list.
    ///
    /// A rejected action (duplicate add) propagates the error and writes
    /// nothing. Persistence failures are logged, not surfaced.
    pub fn dispatch(&mut self, action: WishlistAction) -> CoreResult<()> {
        self.wishlist.apply(action)?;
        self.persist();
        Ok(())
    }

    fn persist(&self) {
        if let Err(e) = self.storage.write(keys::WISHLIST, &self.wishlist.entries()) {
            warn!(error = %e, "failed to persist wishlist snapshot");
        }
    }

    /// Read access to the underlying wishlist.
    pub fn wishlist(&self) -> &Wishlist {
        &self.wishlist
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog_data::seed_catalog;

    #[test]
    fn test_dispatch_persists_and_rehydrates() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");
        let book = seed_catalog().remove(0);

        {
            let mut store = WishlistStore::hydrate(storage.clone());
            store
                .dispatch(WishlistAction::Add { book: book.clone() })
                .unwrap();
        }

        let store = WishlistStore::hydrate(storage);
        assert!(store.wishlist().contains(&book.id));
        assert_eq!(store.wishlist().len(), 1);
    }

    #[test]
    fn test_corrupted_snapshot_hydrates_empty() {
        let dir = tempfile::tempdir().expect("temp dir");
        std::fs::write(dir.path().join("wishlist.json"), "\"truncated").unwrap();
        let storage = LocalStore::open(dir.path()).expect("open");

        let store = WishlistStore::hydrate(storage);
        assert!(store.wishlist().is_empty());
    }

    #[test]
    fn test_rejected_duplicate_leaves_snapshot_intact() {
        let dir = tempfile::tempdir().expect("temp dir");
        let storage = LocalStore::open(dir.path()).expect("open");
        let book = seed_catalog().remove(0);

        let mut store = WishlistStore::hydrate(storage.clone());
        store
            .dispatch(WishlistAction::Add { book: book.clone() })
            .unwrap();
        assert!(store.dispatch(WishlistAction::Add { book }).is_err());

        let snapshot: Vec<Book> = storage.read(keys::WISHLIST).unwrap().unwrap();
        assert_eq!(snapshot.len(), 1);
    }
}
