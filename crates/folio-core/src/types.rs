//! # Domain Types
//!
//! Core domain types used throughout the Folio storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │     Book        │   │      User       │   │   BookFormat    │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id             │   │  id             │   │  Hardcover      │        │
//! │  │  title/authors  │   │  email          │   │  Paperback      │        │
//! │  │  price_cents    │   │  role           │   │  Ebook          │        │
//! │  │  stock/ratings  │   │  is_premium     │   └─────────────────┘        │
//! │  └─────────────────┘   └─────────────────┘                              │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │   BookStatus    │   │   StockLevel    │                              │
//! │  │  ─────────────  │   │  ─────────────  │                              │
//! │  │  Active         │   │  InStock        │                              │
//! │  │  Inactive       │   │  LowStock       │                              │
//! │  │  OutOfStock     │   │  OutOfStock     │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! Cart lines and wishlist entries carry full `Book` snapshots frozen at the
//! moment they were added. A later catalog price change never reprices a
//! line already in the cart.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::LOW_STOCK_THRESHOLD;

// =============================================================================
// Book
// =============================================================================

/// A book available in the catalog.
///
/// Immutable from the storefront's perspective: the catalog is a read-only
/// collaborator, and the stores only ever hold snapshots of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Book {
    /// Unique identifier.
    pub id: String,

    /// Display title.
    pub title: String,

    /// Authors, in cover order. Always at least one.
    pub authors: Vec<String>,

    /// Publisher imprint.
    pub publisher: String,

    /// ISBN-13, formatted with hyphens.
    pub isbn: String,

    /// Genre tags. A book may carry several ("Fiction", "Classics", ...).
    pub genres: Vec<String>,

    /// Publication language.
    pub language: String,

    /// Back-cover description.
    pub description: String,

    /// List price in cents.
    pub price_cents: i64,

    /// Promotional price in cents, when the book is on sale.
    /// When present it is below `price_cents`.
    pub discount_price_cents: Option<i64>,

    /// Units on hand. Never negative.
    pub stock: i64,

    /// Cover image URL.
    pub cover_image: String,

    /// Page count.
    pub pages: u32,

    /// Original publication date.
    #[ts(as = "String")]
    pub published_date: NaiveDate,

    /// Physical or digital format.
    pub format: BookFormat,

    /// Average review rating, 0.0 to 5.0.
    pub average_rating: f64,

    /// Number of ratings behind `average_rating`.
    pub total_ratings: u32,

    /// Number of written reviews.
    pub total_reviews: u32,

    /// Shown in the home page's featured shelf.
    pub featured: bool,

    /// Shown in the home page's best-seller shelf.
    pub best_seller: bool,

    /// Shown in the home page's new-arrivals shelf.
    pub new_arrival: bool,

    /// Listing status (soft delete via `Inactive`).
    pub status: BookStatus,

    /// When the record was created.
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    /// When the record was last updated.
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Book {
    /// Returns the list price as Money.
    #[inline]
    pub fn list_price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }

    /// Returns the price the customer actually pays: the discount price when
    /// one is set, otherwise the list price.
    ///
    /// Every total in the cart and every price filter in the catalog goes
    /// through this method.
    #[inline]
    pub fn effective_price(&self) -> Money {
        Money::from_cents(self.discount_price_cents.unwrap_or(self.price_cents))
    }

    /// Whether a promotional price is set.
    #[inline]
    pub fn is_discounted(&self) -> bool {
        self.discount_price_cents.is_some()
    }

    /// Percentage off list price, rounded to the nearest whole percent.
    /// `None` when the book is not on sale.
    ///
    /// Drives the "-25%" badge on book cards.
    pub fn discount_percent(&self) -> Option<u32> {
        let discount = self.discount_price_cents?;
        if self.price_cents <= 0 {
            return None;
        }
        let off = self.price_cents - discount;
        // Integer rounding: (off / price) * 100 with +half for round-to-nearest
        let pct = (off * 100 * 2 + self.price_cents) / (self.price_cents * 2);
        Some(pct as u32)
    }

    /// Whether at least one unit is on hand.
    #[inline]
    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    /// Coarse stock bucket for display ("In Stock" / "Only N left" /
    /// "Out of Stock").
    pub fn stock_level(&self) -> StockLevel {
        if self.stock == 0 {
            StockLevel::OutOfStock
        } else if self.stock <= LOW_STOCK_THRESHOLD {
            StockLevel::LowStock
        } else {
            StockLevel::InStock
        }
    }
}

// =============================================================================
// Book Format
// =============================================================================

/// Physical or digital format of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum BookFormat {
    Hardcover,
    Paperback,
    Ebook,
}

// =============================================================================
// Book Status
// =============================================================================

/// Listing status of a catalog record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum BookStatus {
    /// Normal, purchasable listing.
    Active,
    /// Soft-deleted: kept for old cart snapshots, not sold.
    Inactive,
    /// Listed but currently unavailable.
    OutOfStock,
}

impl Default for BookStatus {
    fn default() -> Self {
        BookStatus::Active
    }
}

// =============================================================================
// Stock Level
// =============================================================================

/// Display bucket derived from `Book::stock`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum StockLevel {
    /// Comfortably available.
    InStock,
    /// Ten or fewer units left.
    LowStock,
    /// Nothing on hand.
    OutOfStock,
}

// =============================================================================
// User
// =============================================================================

/// A customer account.
///
/// Authentication itself is an external concern; this type is what the
/// session holds once a login has succeeded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct User {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub role: UserRole,
    pub is_premium: bool,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name, "First Last".
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Account role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        UserRole::User
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn book(price_cents: i64, discount: Option<i64>, stock: i64) -> Book {
        Book {
            id: "b1".to_string(),
            title: "The Test Book".to_string(),
            authors: vec!["A. Author".to_string()],
            publisher: "Test House".to_string(),
            isbn: "978-0-00-000000-1".to_string(),
            genres: vec!["Fiction".to_string()],
            language: "English".to_string(),
            description: String::new(),
            price_cents,
            discount_price_cents: discount,
            stock,
            cover_image: String::new(),
            pages: 300,
            published_date: NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date"),
            format: BookFormat::Paperback,
            average_rating: 4.0,
            total_ratings: 10,
            total_reviews: 3,
            featured: false,
            best_seller: false,
            new_arrival: false,
            status: BookStatus::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_effective_price_prefers_discount() {
        let b = book(2000, Some(1500), 5);
        assert_eq!(b.effective_price().cents(), 1500);
        assert_eq!(b.list_price().cents(), 2000);
    }

    #[test]
    fn test_effective_price_without_discount() {
        let b = book(2000, None, 5);
        assert_eq!(b.effective_price().cents(), 2000);
        assert!(!b.is_discounted());
    }

    #[test]
    fn test_discount_percent() {
        // $20.00 list, $15.00 sale: 25% off
        assert_eq!(book(2000, Some(1500), 5).discount_percent(), Some(25));
        // $29.99 list, $19.99 sale: 33.3% rounds to 33
        assert_eq!(book(2999, Some(1999), 5).discount_percent(), Some(33));
        assert_eq!(book(2000, None, 5).discount_percent(), None);
    }

    #[test]
    fn test_stock_level_buckets() {
        assert_eq!(book(1000, None, 50).stock_level(), StockLevel::InStock);
        assert_eq!(book(1000, None, 10).stock_level(), StockLevel::LowStock);
        assert_eq!(book(1000, None, 1).stock_level(), StockLevel::LowStock);
        assert_eq!(book(1000, None, 0).stock_level(), StockLevel::OutOfStock);
        assert!(!book(1000, None, 0).is_in_stock());
    }

    #[test]
    fn test_book_serde_camel_case() {
        let b = book(2000, Some(1500), 5);
        let json = serde_json::to_string(&b).expect("serializes");
        assert!(json.contains("\"discountPriceCents\":1500"));
        assert!(json.contains("\"averageRating\""));
        let back: Book = serde_json::from_str(&json).expect("round-trips");
        assert_eq!(back, b);
    }

    #[test]
    fn test_user_display_name() {
        let u = User {
            id: "u1".to_string(),
            first_name: "Alex".to_string(),
            last_name: "Reader".to_string(),
            email: "alex@example.com".to_string(),
            role: UserRole::User,
            is_premium: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert_eq!(u.display_name(), "Alex Reader");
    }
}
