//! # Wishlist Commands
//!
//! Commands for saving books for later and moving them into the cart.

use serde::Serialize;
use tracing::debug;

use folio_core::cart::CartAction;
use folio_core::error::CoreError;
use folio_core::types::Book;
use folio_core::wishlist::WishlistAction;

use crate::commands::cart::{get_cart, CartResponse};
use crate::error::ApiError;
use crate::notice::NoticeQueue;
use crate::state::{CartStore, CatalogState, WishlistStore};

// =============================================================================
// DTOs
// =============================================================================

/// Wishlist response: saved books in save order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistResponse {
    pub entries: Vec<Book>,
    pub count: usize,
}

impl WishlistResponse {
    fn from_store(store: &WishlistStore) -> Self {
        WishlistResponse {
            entries: store.wishlist().entries().to_vec(),
            count: store.wishlist().len(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current wishlist contents.
pub fn get_wishlist(wishlist: &WishlistStore) -> WishlistResponse {
    debug!("get_wishlist command");
    WishlistResponse::from_store(wishlist)
}

/// Whether a book is on the wishlist (drives the heart icon state).
pub fn is_in_wishlist(wishlist: &WishlistStore, book_id: &str) -> bool {
    wishlist.wishlist().contains(book_id)
}

/// Saves a book to the wishlist.
///
/// ## Behavior
/// - Already saved: error notice, wishlist unchanged, still `Ok`
/// - Otherwise appended, with a success notice
pub fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &mut WishlistStore,
    notices: &mut NoticeQueue,
    book_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(book_id, "add_to_wishlist command");

    let book = catalog
        .get(book_id)
        .ok_or_else(|| ApiError::not_found("Book", book_id))?;

    match wishlist.dispatch(WishlistAction::Add { book: book.clone() }) {
        Ok(()) => notices.success(format!("{} added to wishlist", book.title)),
        Err(CoreError::AlreadyInWishlist { .. }) => {
            notices.error("Book is already in wishlist");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(get_wishlist(wishlist))
}

/// Drops a book from the wishlist.
pub fn remove_from_wishlist(
    wishlist: &mut WishlistStore,
    notices: &mut NoticeQueue,
    book_id: &str,
) -> Result<WishlistResponse, ApiError> {
    debug!(book_id, "remove_from_wishlist command");

    wishlist.dispatch(WishlistAction::Remove {
        book_id: book_id.to_string(),
    })?;
    notices.success("Book removed from wishlist");

    Ok(get_wishlist(wishlist))
}

/// Empties the wishlist.
pub fn clear_wishlist(
    wishlist: &mut WishlistStore,
    notices: &mut NoticeQueue,
) -> Result<WishlistResponse, ApiError> {
    debug!("clear_wishlist command");

    wishlist.dispatch(WishlistAction::Clear)?;
    notices.success("Wishlist cleared");

    Ok(get_wishlist(wishlist))
}

/// Moves a saved book into the cart.
///
/// ## Sequencing
/// Two independent dispatches, not a transaction: the cart add runs first,
/// and the wishlist removal runs afterwards whether or not the add was
/// rejected. An out-of-stock book therefore leaves the wishlist even though
/// it never reached the cart; accepted inconsistency, inherited from the
/// page this mirrors.
///
/// The cart add prices the wishlist snapshot, not a fresh catalog read,
/// so the saved price is what the customer saw when saving.
pub fn move_to_cart(
    cart: &mut CartStore,
    wishlist: &mut WishlistStore,
    notices: &mut NoticeQueue,
    book_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(book_id, "move_to_cart command");

    let book = wishlist
        .wishlist()
        .entries()
        .iter()
        .find(|b| b.id == book_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Book", book_id))?;

    match cart.dispatch(CartAction::Add {
        book: book.clone(),
        quantity: 1,
    }) {
        Ok(()) => notices.success(format!("{} added to cart", book.title)),
        Err(CoreError::InsufficientStock { .. }) => {
            notices.error("Not enough stock available");
        }
        Err(e) => return Err(e.into()),
    }

    wishlist.dispatch(WishlistAction::Remove {
        book_id: book_id.to_string(),
    })?;
    notices.success("Book removed from wishlist");

    Ok(get_cart(cart))
}

// =============================================================================
// Unit Tests
// =============================================================================
