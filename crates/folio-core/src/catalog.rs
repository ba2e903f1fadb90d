//! # Catalog Filter and Sort
//!
//! The pure transform behind the browse page: `(books, filters, sort key,
//! direction) -> ordered books`.
//!
//! ## Properties
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  • Stateless: no store, nothing persisted                               │
//! │  • Side-effect free: input slice is never mutated                       │
//! │  • Idempotent: f(f(x)) == f(x) for the same parameters                  │
//! │  • Predicates AND-combine: a book must pass every active filter         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Tie Ordering
//! Equal sort keys keep their input order ascending and appear reversed
//! descending. The transform stable-sorts ascending and reverses the whole
//! list for descending, which reproduces that asymmetry deterministically.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Book;
use crate::RELATED_BOOKS_LIMIT;

// =============================================================================
// Filter
// =============================================================================

/// Browse-page filter set. Every predicate is optional; inactive predicates
/// match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct CatalogFilter {
    /// Keep books whose genre tags contain this genre.
    pub genre: Option<String>,

    /// Keep books whose author list contains this author.
    pub author: Option<String>,

    /// Keep books whose effective price is at least this much.
    pub min_price: Option<Money>,

    /// Keep books whose effective price is at most this much.
    pub max_price: Option<Money>,

    /// Keep books rated at least this highly.
    pub min_rating: Option<f64>,

    /// Keep books matching this stock bucket.
    pub availability: Availability,

    /// Free-text search over title, authors, and genres,
    /// case-insensitive substring match.
    pub query: Option<String>,
}

impl CatalogFilter {
    /// A filter that matches every book.
    pub fn none() -> Self {
        CatalogFilter::default()
    }

    /// Whether a book passes every active predicate.
    pub fn matches(&self, book: &Book) -> bool {
        if let Some(genre) = &self.genre {
            if !book.genres.iter().any(|g| g == genre) {
                return false;
            }
        }

        if let Some(author) = &self.author {
            if !book.authors.iter().any(|a| a == author) {
                return false;
            }
        }

        let price = book.effective_price();
        if let Some(min) = self.min_price {
            if price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if price > max {
                return false;
            }
        }

        if let Some(min_rating) = self.min_rating {
            if book.average_rating < min_rating {
                return false;
            }
        }

        match self.availability {
            Availability::All => {}
            Availability::InStock => {
                if book.stock == 0 {
                    return false;
                }
            }
            Availability::OutOfStock => {
                if book.stock != 0 {
                    return false;
                }
            }
        }

        if let Some(query) = &self.query {
            let query = query.trim().to_lowercase();
            if !query.is_empty() && !matches_query(book, &query) {
                return false;
            }
        }

        true
    }
}

/// Case-insensitive substring match over the searchable fields.
fn matches_query(book: &Book, query: &str) -> bool {
    book.title.to_lowercase().contains(query)
        || book.authors.iter().any(|a| a.to_lowercase().contains(query))
        || book.genres.iter().any(|g| g.to_lowercase().contains(query))
}

/// Stock bucket filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "kebab-case")]
#[ts(export)]
pub enum Availability {
    /// No stock filtering.
    #[default]
    All,
    /// Only books with `stock > 0`.
    InStock,
    /// Only books with `stock == 0`.
    OutOfStock,
}

// =============================================================================
// Sort
// =============================================================================

/// Sortable catalog dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortKey {
    /// Case-insensitive lexical title order.
    Title,
    /// Effective price (discount price when present).
    Price,
    /// Average review rating.
    Rating,
    /// Original publication date.
    PublishedDate,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Compares two books on a sort key, ascending.
fn compare(a: &Book, b: &Book, key: SortKey) -> Ordering {
    match key {
        SortKey::Title => a.title.to_lowercase().cmp(&b.title.to_lowercase()),
        SortKey::Price => a.effective_price().cmp(&b.effective_price()),
        SortKey::Rating => a.average_rating.total_cmp(&b.average_rating),
        SortKey::PublishedDate => a.published_date.cmp(&b.published_date),
    }
}

// =============================================================================
// Transform
// =============================================================================

/// Produces the filtered, ordered view of a catalog slice.
///
/// The input is untouched; the result owns clones of the matching books in
/// display order.
pub fn filter_and_sort(
    books: &[Book],
    filter: &CatalogFilter,
    key: SortKey,
    direction: SortDirection,
) -> Vec<Book> {
    let mut result: Vec<Book> = books.iter().filter(|b| filter.matches(b)).cloned().collect();

    // Stable ascending sort; descending reverses the whole list so ties
    // come out in reverse input order (see module docs).
    result.sort_by(|a, b| compare(a, b, key));
    if direction == SortDirection::Descending {
        result.reverse();
    }

    result
}

// =============================================================================
// Selectors
// =============================================================================

/// Books flagged for the featured shelf.
pub fn featured(books: &[Book]) -> Vec<Book> {
    books.iter().filter(|b| b.featured).cloned().collect()
}

/// Books flagged as best sellers.
pub fn best_sellers(books: &[Book]) -> Vec<Book> {
    books.iter().filter(|b| b.best_seller).cloned().collect()
}

/// Books flagged as new arrivals.
pub fn new_arrivals(books: &[Book]) -> Vec<Book> {
    books.iter().filter(|b| b.new_arrival).cloned().collect()
}

/// Books sharing at least one genre with the given book, excluding the book
/// itself, capped at [`RELATED_BOOKS_LIMIT`].
pub fn related_books(books: &[Book], book: &Book) -> Vec<Book> {
    books
        .iter()
        .filter(|b| b.id != book.id && b.genres.iter().any(|g| book.genres.contains(g)))
        .take(RELATED_BOOKS_LIMIT)
        .cloned()
        .collect()
}

/// Sorted, deduplicated genre options for the filter sidebar.
pub fn genre_options(books: &[Book]) -> Vec<String> {
    let mut genres: Vec<String> = books.iter().flat_map(|b| b.genres.clone()).collect();
    genres.sort();
    genres.dedup();
    genres
}

/// Sorted, deduplicated author options for the filter sidebar.
pub fn author_options(books: &[Book]) -> Vec<String> {
    let mut authors: Vec<String> = books.iter().flat_map(|b| b.authors.clone()).collect();
    authors.sort();
    authors.dedup();
    authors
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BookFormat, BookStatus};
    use chrono::{NaiveDate, Utc};

    struct Fixture<'a> {
        id: &'a str,
        title: &'a str,
        author: &'a str,
        genre: &'a str,
        price_cents: i64,
        discount: Option<i64>,
        stock: i64,
        rating: f64,
        published: (i32, u32, u32),
    }

    fn book(s: Fixture<'_>) -> Book {
        let (y, m, d) = s.published;
        Book {
            id: s.id.to_string(),
            title: s.title.to_string(),
            authors: vec![s.author.to_string()],
            publisher: "Test House".to_string(),
            isbn: "978-0-00-000000-1".to_string(),
            genres: vec![s.genre.to_string()],
            language: "English".to_string(),
            description: String::new(),
            price_cents: s.price_cents,
            discount_price_cents: s.discount,
            stock: s.stock,
            cover_image: String::new(),
            pages: 300,
            published_date: NaiveDate::from_ymd_opt(y, m, d).expect("valid date"),
            format: BookFormat::Paperback,
            average_rating: s.rating,
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

    fn shelf() -> Vec<Book> {
        vec![
            book(Fixture {
                id: "b1",
                title: "zebra crossing",
                author: "Ann North",
                genre: "Mystery",
                price_cents: 1500,
                discount: None,
                stock: 5,
                rating: 4.5,
                published: (2019, 6, 1),
            }),
            book(Fixture {
                id: "b2",
                title: "Apple Orchard",
                author: "Ben South",
                genre: "Fiction",
                price_cents: 2400,
                discount: Some(999),
                stock: 0,
                rating: 3.2,
                published: (2021, 2, 14),
            }),
            book(Fixture {
                id: "b3",
                title: "Middle March",
                author: "Ann North",
                genre: "Fiction",
                price_cents: 1999,
                discount: None,
                stock: 12,
                rating: 4.9,
                published: (2015, 11, 30),
            }),
        ]
    }

    #[test]
    fn test_no_filters_matches_everything() {
        let books = shelf();
        let out = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::Title,
            SortDirection::Ascending,
        );
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn test_in_stock_filter() {
        let books = shelf();
        let filter = CatalogFilter {
            availability: Availability::InStock,
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        assert!(out.iter().all(|b| b.stock > 0));
        assert_eq!(out.len(), 2);
    }

    #[test]
    fn test_out_of_stock_filter() {
        let books = shelf();
        let filter = CatalogFilter {
            availability: Availability::OutOfStock,
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b2");
    }

    /// Predicates combine by conjunction, not union.
    #[test]
    fn test_price_range_and_availability_conjunction() {
        let books = shelf();
        let filter = CatalogFilter {
            availability: Availability::InStock,
            min_price: Some(Money::from_cents(1000)),
            max_price: Some(Money::from_cents(1600)),
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        // b2 is in the price range via its discount price but out of stock
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b1");
    }

    #[test]
    fn test_price_filter_uses_effective_price() {
        let books = shelf();
        let filter = CatalogFilter {
            max_price: Some(Money::from_cents(1000)),
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        // b2 lists at $24.00 but sells at $9.99
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b2");
    }

    #[test]
    fn test_genre_and_author_membership() {
        let books = shelf();
        let filter = CatalogFilter {
            genre: Some("Fiction".to_string()),
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        assert_eq!(out.len(), 2);

        let filter = CatalogFilter {
            author: Some("Ann North".to_string()),
            genre: Some("Fiction".to_string()),
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "b3");
    }

    #[test]
    fn test_min_rating_filter() {
        let books = shelf();
        let filter = CatalogFilter {
            min_rating: Some(4.0),
            ..CatalogFilter::none()
        };
        let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|b| b.average_rating >= 4.0));
    }

    #[test]
    fn test_query_matches_title_author_genre() {
        let books = shelf();
        for (query, expected) in [("zebra", "b1"), ("ben", "b2"), ("mystery", "b1")] {
            let filter = CatalogFilter {
                query: Some(query.to_string()),
                ..CatalogFilter::none()
            };
            let out = filter_and_sort(&books, &filter, SortKey::Title, SortDirection::Ascending);
            assert_eq!(out.len(), 1, "query {:?}", query);
            assert_eq!(out[0].id, expected);
        }
    }

    #[test]
    fn test_title_sort_is_case_insensitive() {
        let books = shelf();
        let out = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::Title,
            SortDirection::Ascending,
        );
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        // "Apple Orchard" < "Middle March" < "zebra crossing" ignoring case
        assert_eq!(ids, ["b2", "b3", "b1"]);

        let out = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::Title,
            SortDirection::Descending,
        );
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b1", "b3", "b2"]);
    }

    #[test]
    fn test_price_sort_uses_effective_price() {
        let books = shelf();
        let out = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::Price,
            SortDirection::Ascending,
        );
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        // $9.99 (discounted) < $15.00 < $19.99
        assert_eq!(ids, ["b2", "b1", "b3"]);
    }

    #[test]
    fn test_published_date_sort() {
        let books = shelf();
        let out = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::PublishedDate,
            SortDirection::Descending,
        );
        let ids: Vec<&str> = out.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b2", "b1", "b3"]);
    }

    /// Equal keys keep input order ascending and come out reversed
    /// descending.
    #[test]
    fn test_tie_order_asymmetry() {
        let a = book(Fixture {
            id: "first",
            title: "Same Title",
            author: "X",
            genre: "Fiction",
            price_cents: 1000,
            discount: None,
            stock: 1,
            rating: 4.0,
            published: (2020, 1, 1),
        });
        let mut b = a.clone();
        b.id = "second".to_string();
        let books = vec![a, b];

        let asc = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::Price,
            SortDirection::Ascending,
        );
        let ids: Vec<&str> = asc.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, ["first", "second"]);

        let desc = filter_and_sort(
            &books,
            &CatalogFilter::none(),
            SortKey::Price,
            SortDirection::Descending,
        );
        let ids: Vec<&str> = desc.iter().map(|x| x.id.as_str()).collect();
        assert_eq!(ids, ["second", "first"]);
    }

    /// Reapplying the transform to its own output is a no-op.
    #[test]
    fn test_idempotent_on_own_output() {
        let books = shelf();
        let filter = CatalogFilter {
            availability: Availability::InStock,
            ..CatalogFilter::none()
        };
        let once = filter_and_sort(&books, &filter, SortKey::Price, SortDirection::Descending);
        let twice = filter_and_sort(&once, &filter, SortKey::Price, SortDirection::Descending);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_related_books_share_a_genre_and_exclude_self() {
        let books = shelf();
        let related = related_books(&books, &books[1]); // b2, Fiction
        let ids: Vec<&str> = related.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, ["b3"]);
    }

    #[test]
    fn test_option_lists_are_sorted_and_unique() {
        let books = shelf();
        assert_eq!(genre_options(&books), ["Fiction", "Mystery"]);
        assert_eq!(author_options(&books), ["Ann North", "Ben South"]);
    }
}
