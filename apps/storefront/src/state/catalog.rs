//! # Catalog State
//!
//! The in-memory book catalog.
//!
//! Read-only collaborator: in a real deployment this list would come from a
//! remote catalog/inventory service, consumed here purely as a data source.
//! The stores only ever take snapshots out of it.

use folio_core::catalog;
use folio_core::types::Book;

use crate::catalog_data;

/// The catalog: every listed book, in shelf order.
#[derive(Debug, Clone)]
pub struct CatalogState {
    books: Vec<Book>,
}

impl CatalogState {
    /// Catalog over an explicit book list (tests, future remote source).
    pub fn with_books(books: Vec<Book>) -> Self {
        CatalogState { books }
    }

    /// Catalog seeded with the built-in book list.
    pub fn seeded() -> Self {
        CatalogState::with_books(catalog_data::seed_catalog())
    }

    /// All books.
    pub fn all(&self) -> &[Book] {
        &self.books
    }

    /// Looks up a book by id.
    pub fn get(&self, book_id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == book_id)
    }

    /// Sorted, deduplicated genre list for the filter sidebar.
    pub fn genres(&self) -> Vec<String> {
        catalog::genre_options(&self.books)
    }

    /// Sorted, deduplicated author list for the filter sidebar.
    pub fn authors(&self) -> Vec<String> {
        catalog::author_options(&self.books)
    }

    /// Number of listed books.
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        CatalogState::seeded()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_catalog_is_nonempty_and_lookup_works() {
        let catalog = CatalogState::seeded();
        assert!(!catalog.is_empty());

        let first = &catalog.all()[0];
        let found = catalog.get(&first.id).expect("seeded book is findable");
        assert_eq!(found.title, first.title);
        assert!(catalog.get("no-such-id").is_none());
    }

    #[test]
    fn test_option_lists_are_sorted_unique() {
        let catalog = CatalogState::seeded();
        let genres = catalog.genres();
        let mut sorted = genres.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(genres, sorted);
        assert!(!genres.is_empty());
    }
}
