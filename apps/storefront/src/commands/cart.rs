//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Empty   │────►│  Lines   │────►│  (checkout   │                     │
//! │  │  Cart    │     │ in cart  │     │  lives in a  │                     │
//! │  └──────────┘     └──────────┘     │  future      │                     │
//! │        ▲               │           │  backend)    │                     │
//! │        │          add_to_cart      └──────────────┘                     │
//! │        │          update_cart_item                                      │
//! │        │          remove_from_cart                                      │
//! │        │               │                                                │
//! │        └─── clear_cart ┘                                                │
//! │                                                                         │
//! │  toggle_cart only flips the sidebar; it never touches lines.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;

use folio_core::cart::{Cart, CartAction, CartLine};
use folio_core::error::CoreError;
use folio_core::types::BookStatus;

use crate::error::ApiError;
use crate::notice::NoticeQueue;
use crate::state::{CartStore, CatalogState};

// =============================================================================
// DTOs
// =============================================================================

/// Derived cart aggregates, recomputed by the core on every mutation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Distinct lines in the cart.
    pub line_count: usize,
    /// Sum of quantities across all lines.
    pub item_count: i64,
    /// Σ effective price × quantity, in cents.
    pub total_cents: i64,
}

impl From<&Cart> for CartTotals {
    fn from(cart: &Cart) -> Self {
        CartTotals {
            line_count: cart.line_count(),
            item_count: cart.item_count(),
            total_cents: cart.total().cents(),
        }
    }
}

/// Cart response including lines, totals, and the sidebar flag.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    pub is_open: bool,
}

impl From<&Cart> for CartResponse {
    fn from(cart: &Cart) -> Self {
        CartResponse {
            lines: cart.lines().to_vec(),
            totals: CartTotals::from(cart),
            is_open: cart.is_open(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Gets the current cart contents.
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    CartResponse::from(cart.cart())
}

/// Adds a book to the cart.
///
/// ## Behavior
/// - Book already in cart: quantity increases
/// - Book not in cart: appended as a new line with the price frozen now
/// - Quantity beyond stock: error notice, cart unchanged, still `Ok`
///
/// ## Arguments
/// * `book_id` - Catalog id to add
/// * `quantity` - Copies to add (default: 1)
///
/// ## Errors
/// `NotFound` for an unknown id; `ValidationError` for an inactive listing
/// or a non-positive quantity.
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &mut CartStore,
    notices: &mut NoticeQueue,
    book_id: &str,
    quantity: Option<i64>,
) -> Result<CartResponse, ApiError> {
    let quantity = quantity.unwrap_or(1);
    debug!(book_id, quantity, "add_to_cart command");

    let book = catalog
        .get(book_id)
        .ok_or_else(|| ApiError::not_found("Book", book_id))?;

    if book.status == BookStatus::Inactive {
        return Err(ApiError::validation("Book is not available for sale"));
    }

    match cart.dispatch(CartAction::Add {
        book: book.clone(),
        quantity,
    }) {
        Ok(()) => notices.success(format!("{} added to cart", book.title)),
        Err(CoreError::InsufficientStock { .. }) => {
            // Rejection is normal flow: notice shown, state untouched.
            notices.error("Not enough stock available");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(get_cart(cart))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 or below: removes the line
/// - Unknown id: no-op (the line may have been removed by another event)
pub fn update_cart_item(
    cart: &mut CartStore,
    book_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(book_id, quantity, "update_cart_item command");

    cart.dispatch(CartAction::SetQuantity {
        book_id: book_id.to_string(),
        quantity,
    })?;

    Ok(get_cart(cart))
}

/// Removes a line from the cart.
pub fn remove_from_cart(
    cart: &mut CartStore,
    notices: &mut NoticeQueue,
    book_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(book_id, "remove_from_cart command");

    cart.dispatch(CartAction::Remove {
        book_id: book_id.to_string(),
    })?;
    notices.success("Item removed from cart");

    Ok(get_cart(cart))
}

/// Clears all lines from the cart.
pub fn clear_cart(
    cart: &mut CartStore,
    notices: &mut NoticeQueue,
) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");

    cart.dispatch(CartAction::Clear)?;
    notices.success("Cart cleared");

    Ok(get_cart(cart))
}

/// Opens or closes the cart sidebar. Lines and totals untouched.
pub fn toggle_cart(cart: &mut CartStore) -> Result<CartResponse, ApiError> {
    debug!("toggle_cart command");

    cart.dispatch(CartAction::ToggleOpen)?;
    Ok(get_cart(cart))
}

// =============================================================================
// Unit Tests
// =============================================================================
