//! # Wishlist State
//!
//! Saved-for-later books and their action reducer.
//!
//! Follows the same single-entry-point discipline as the cart, with a
//! simpler state: an ordered list of book snapshots, unique by id, with no
//! derived aggregates.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::types::Book;

// =============================================================================
// Wishlist Action
// =============================================================================

/// A wishlist mutation request.
#[derive(Debug, Clone)]
pub enum WishlistAction {
    /// Save a book. Rejected when the id is already present.
    Add { book: Book },

    /// Drop the entry for a book id. No-op when absent.
    Remove { book_id: String },

    /// Empty the wishlist.
    Clear,

    /// Replace all entries (startup hydration from a persisted snapshot).
    Load { entries: Vec<Book> },
}

// =============================================================================
// Wishlist
// =============================================================================

/// The wishlist: book snapshots in the order they were saved.
///
/// ## Invariant
/// No two entries share a book id. `Add` enforces it by rejecting
/// duplicates; `Load` enforces it by keeping the first occurrence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Wishlist {
    entries: Vec<Book>,
}

impl Wishlist {
    /// Creates a new empty wishlist.
    pub fn new() -> Self {
        Wishlist::default()
    }

    /// Applies one action to the wishlist.
    ///
    /// A rejected action ([`CoreError::AlreadyInWishlist`]) leaves the
    /// state exactly as it was.
    pub fn apply(&mut self, action: WishlistAction) -> CoreResult<()> {
        match action {
            WishlistAction::Add { book } => {
                if self.contains(&book.id) {
                    return Err(CoreError::AlreadyInWishlist {
                        title: book.title.clone(),
                    });
                }
                self.entries.push(book);
            }

            WishlistAction::Remove { book_id } => {
                self.entries.retain(|b| b.id != book_id);
            }

            WishlistAction::Clear => {
                self.entries.clear();
            }

            WishlistAction::Load { entries } => {
                // Keep the first occurrence per id; a hand-edited snapshot
                // must not smuggle duplicates past the Add check.
                self.entries.clear();
                for book in entries {
                    if !self.contains(&book.id) {
                        self.entries.push(book);
                    }
                }
            }
        }

        Ok(())
    }

    /// Pure membership test by book id.
    pub fn contains(&self, book_id: &str) -> bool {
        self.entries.iter().any(|b| b.id == book_id)
    }

    /// The entries, in the order they were saved.
    pub fn entries(&self) -> &[Book] {
        &self.entries
    }

    /// Number of saved books.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the wishlist is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
