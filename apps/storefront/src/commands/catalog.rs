//! # Catalog Commands
//!
//! Read-only commands over the in-memory catalog: browsing with filters and
//! sorting, book detail with related titles, free-text search, and the
//! home-page shelves.

use serde::Serialize;
use tracing::debug;

use folio_core::catalog::{self, CatalogFilter, SortDirection, SortKey};
use folio_core::types::Book;
use folio_core::validation::{validate_price_cents, validate_rating, validate_search_query};

use crate::error::ApiError;
use crate::state::CatalogState;

// =============================================================================
// DTOs
// =============================================================================

/// Book detail response: the book plus its related-titles shelf.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookDetailResponse {
    pub book: Book,
    pub related: Vec<Book>,
}

/// Home page shelves.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeResponse {
    pub featured: Vec<Book>,
    pub best_sellers: Vec<Book>,
    pub new_arrivals: Vec<Book>,
}

/// Browse response: the ordered view plus the unfiltered count for the
/// "Showing X of Y books" header.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrowseResponse {
    pub books: Vec<Book>,
    pub total_listed: usize,
}

// =============================================================================
// Commands
// =============================================================================

/// Produces the filtered, ordered browse view.
///
/// ## Errors
/// `ValidationError` when a filter value is out of range (negative price,
/// rating outside 0-5, oversized query).
pub fn browse_catalog(
    catalog: &CatalogState,
    filter: &CatalogFilter,
    key: SortKey,
    direction: SortDirection,
) -> Result<BrowseResponse, ApiError> {
    debug!(?key, ?direction, "browse_catalog command");

    if let Some(min) = filter.min_price {
        validate_price_cents(min.cents())?;
    }
    if let Some(max) = filter.max_price {
        validate_price_cents(max.cents())?;
    }
    if let Some(rating) = filter.min_rating {
        validate_rating(rating)?;
    }
    if let Some(query) = &filter.query {
        validate_search_query(query)?;
    }

    let books = catalog::filter_and_sort(catalog.all(), filter, key, direction);
    Ok(BrowseResponse {
        books,
        total_listed: catalog.len(),
    })
}

/// Gets one book and its related titles.
pub fn get_book(catalog: &CatalogState, book_id: &str) -> Result<BookDetailResponse, ApiError> {
    debug!(book_id, "get_book command");

    let book = catalog
        .get(book_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Book", book_id))?;
    let related = catalog::related_books(catalog.all(), &book);

    Ok(BookDetailResponse { book, related })
}

/// Free-text search over title, authors, and genres, title-ordered.
pub fn search_books(catalog: &CatalogState, query: &str) -> Result<Vec<Book>, ApiError> {
    debug!(query, "search_books command");

    let query = validate_search_query(query)?;
    let filter = CatalogFilter {
        query: Some(query),
        ..CatalogFilter::none()
    };

    Ok(catalog::filter_and_sort(
        catalog.all(),
        &filter,
        SortKey::Title,
        SortDirection::Ascending,
    ))
}

/// The home page shelves: featured, best sellers, new arrivals.
pub fn home_sections(catalog: &CatalogState) -> HomeResponse {
    debug!("home_sections command");

    HomeResponse {
        featured: catalog::featured(catalog.all()),
        best_sellers: catalog::best_sellers(catalog.all()),
        new_arrivals: catalog::new_arrivals(catalog.all()),
    }
}

/// Genre options for the filter sidebar.
pub fn genre_options(catalog: &CatalogState) -> Vec<String> {
    catalog.genres()
}

/// Author options for the filter sidebar.
pub fn author_options(catalog: &CatalogState) -> Vec<String> {
    catalog.authors()
}

// =============================================================================
// Unit Tests
// =============================================================================
