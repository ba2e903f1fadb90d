//! # Cart State
//!
//! The shopping cart and its action reducer.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Operations                                │
//! │                                                                         │
//! │  Frontend Action          Action Variant          Cart State Change     │
//! │  ───────────────          ──────────────          ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ────► Add ─────────────────► merge or append line  │
//! │                                                                         │
//! │  Change Quantity ────────► SetQuantity ─────────► line.quantity = n     │
//! │                                                   (n <= 0 removes)      │
//! │                                                                         │
//! │  Click Remove ───────────► Remove ──────────────► line dropped          │
//! │                                                                         │
//! │  Click Clear ────────────► Clear ───────────────► lines emptied         │
//! │                                                                         │
//! │  Open/close sidebar ─────► ToggleOpen ──────────► display flag only     │
//! │                                                                         │
//! │  Startup hydration ──────► Load ────────────────► lines replaced        │
//! │                                                                         │
//! │  After EVERY applied action the derived total and item count are        │
//! │  recomputed from the lines. They are never written directly.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - At most one line per book id (adding the same book merges quantities)
//! - Line quantity is always >= 1 (zero or below removes the line)
//! - `total()` equals the sum of effective price × quantity over all lines
//! - `item_count()` equals the sum of quantities over all lines

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::Book;
use crate::validation::validate_quantity;

// =============================================================================
// Cart Line
// =============================================================================

/// One cart entry: a distinct book and how many copies of it.
///
/// ## Snapshot Pricing
/// `item` is a frozen copy of the catalog record at the moment it was added.
/// The cart keeps displaying and pricing that snapshot even if the catalog
/// record changes afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLine {
    /// Book snapshot, frozen at add time.
    pub item: Book,

    /// Copies in the cart. Always >= 1.
    pub quantity: i64,

    /// When this line was first added.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CartLine {
    /// Creates a new line for a book, stamped now.
    pub fn new(item: Book, quantity: i64) -> Self {
        CartLine {
            item,
            quantity,
            added_at: Utc::now(),
        }
    }

    /// Line total: effective unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.effective_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// A cart mutation request.
///
/// The tagged action is the only way to change a cart: callers build a
/// variant and hand it to [`Cart::apply`], which keeps every mutation
/// auditable through one entry point.
#[derive(Debug, Clone)]
pub enum CartAction {
    /// Add a book. Merges into an existing line for the same id, otherwise
    /// appends a new line stamped now.
    Add { book: Book, quantity: i64 },

    /// Remove the line for a book id. No-op when absent.
    Remove { book_id: String },

    /// Set a line's quantity. Zero or below removes the line entirely.
    /// No-op when the id is not in the cart.
    SetQuantity { book_id: String, quantity: i64 },

    /// Empty the cart.
    Clear,

    /// Flip the sidebar visibility flag. Lines and totals untouched.
    ToggleOpen,

    /// Replace all lines (startup hydration from a persisted snapshot).
    Load { lines: Vec<CartLine> },
}

// =============================================================================
// Cart
// =============================================================================

/// The shopping cart.
///
/// Lines keep insertion order. `total` and `item_count` are derived fields,
/// recomputed after every applied action; there is deliberately no way to
/// set them from outside, so they cannot drift from the lines.
#[derive(Debug, Clone, Default)]
pub struct Cart {
    lines: Vec<CartLine>,
    total: Money,
    item_count: i64,
    is_open: bool,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Applies one action to the cart.
    ///
    /// ## Rejections
    /// - `Add` with a non-positive quantity: validation error
    /// - `Add` with `quantity > book.stock`: [`CoreError::InsufficientStock`]
    ///
    /// A rejected action leaves the cart exactly as it was.
    ///
    /// ## Stock Check
    /// The check is per call, against the snapshot's stock alone. Adding
    /// 3 and then 4 copies of a book with stock 5 passes both times; the
    /// second call is not checked against stock minus the cart's holdings.
    /// Inherited behavior, kept deliberately.
    pub fn apply(&mut self, action: CartAction) -> CoreResult<()> {
        match action {
            CartAction::Add { book, quantity } => {
                validate_quantity(quantity)?;
                if quantity > book.stock {
                    return Err(CoreError::InsufficientStock {
                        title: book.title.clone(),
                        available: book.stock,
                        requested: quantity,
                    });
                }

                if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == book.id) {
                    line.quantity += quantity;
                } else {
                    self.lines.push(CartLine::new(book, quantity));
                }
            }

            CartAction::Remove { book_id } => {
                self.lines.retain(|l| l.item.id != book_id);
            }

            CartAction::SetQuantity { book_id, quantity } => {
                if quantity <= 0 {
                    // Driving a line to zero removes it; lines are never
                    // retained at zero or negative quantity.
                    self.lines.retain(|l| l.item.id != book_id);
                } else if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == book_id) {
                    line.quantity = quantity;
                }
            }

            CartAction::Clear => {
                self.lines.clear();
            }

            CartAction::ToggleOpen => {
                self.is_open = !self.is_open;
            }

            CartAction::Load { lines } => {
                // A persisted snapshot is untrusted: drop non-positive
                // quantities and keep the first line per id so the cart
                // invariants hold from the moment of hydration.
                self.lines.clear();
                for line in lines {
                    if line.quantity <= 0 {
                        continue;
                    }
                    if self.lines.iter().any(|l| l.item.id == line.item.id) {
                        continue;
                    }
                    self.lines.push(line);
                }
            }
        }

        self.recompute();
        Ok(())
    }

    /// Re-derives `total` and `item_count` from the lines.
    fn recompute(&mut self) {
        self.total = self.lines.iter().map(CartLine::line_total).sum();
        self.item_count = self.lines.iter().map(|l| l.quantity).sum();
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// The lines, in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Derived grand total: Σ effective price × quantity.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Derived item count: Σ quantities (not the number of distinct lines).
    #[inline]
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart sidebar is currently open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Whether a book id has a line in the cart.
    pub fn contains(&self, book_id: &str) -> bool {
        self.lines.iter().any(|l| l.item.id == book_id)
    }

    /// Checks if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
