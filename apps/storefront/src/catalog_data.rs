//! # Seed Catalog
//!
//! The built-in book list backing the in-memory catalog.
//!
//! Stands in for the remote catalog service a production deployment would
//! query. Stock, discounts, and shelf flags are varied on purpose so every
//! browse filter and stock bucket has data to hit.

use chrono::{NaiveDate, Utc};

use folio_core::types::{Book, BookFormat, BookStatus};

/// Compact description of one seeded book; expanded by [`build`].
struct Seed {
    id: &'static str,
    title: &'static str,
    authors: &'static [&'static str],
    publisher: &'static str,
    isbn: &'static str,
    genres: &'static [&'static str],
    description: &'static str,
    price_cents: i64,
    discount_price_cents: Option<i64>,
    stock: i64,
    pages: u32,
    published: (i32, u32, u32),
    format: BookFormat,
    average_rating: f64,
    total_ratings: u32,
    total_reviews: u32,
    featured: bool,
    best_seller: bool,
    new_arrival: bool,
}

fn build(seed: &Seed) -> Book {
    let (y, m, d) = seed.published;
    let now = Utc::now();

    Book {
        id: seed.id.to_string(),
        title: seed.title.to_string(),
        authors: seed.authors.iter().map(|a| a.to_string()).collect(),
        publisher: seed.publisher.to_string(),
        isbn: seed.isbn.to_string(),
        genres: seed.genres.iter().map(|g| g.to_string()).collect(),
        language: "English".to_string(),
        description: seed.description.to_string(),
        price_cents: seed.price_cents,
        discount_price_cents: seed.discount_price_cents,
        stock: seed.stock,
        cover_image: format!("https://covers.folio.example/{}.jpg", seed.id),
        pages: seed.pages,
        published_date: NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default(),
        format: seed.format,
        average_rating: seed.average_rating,
        total_ratings: seed.total_ratings,
        total_reviews: seed.total_reviews,
        featured: seed.featured,
        best_seller: seed.best_seller,
        new_arrival: seed.new_arrival,
        status: if seed.stock == 0 {
            BookStatus::OutOfStock
        } else {
            BookStatus::Active
        },
        created_at: now,
        updated_at: now,
    }
}

/// Builds the seed catalog.
pub fn seed_catalog() -> Vec<Book> {
    SEEDS.iter().map(build).collect()
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "bk-001",
        title: "The Midnight Library",
        authors: &["Matt Haig"],
        publisher: "Canongate",
        isbn: "978-1-78689-273-7",
        genres: &["Fiction", "Fantasy"],
        description: "Between life and death there is a library, and within \
                      that library the shelves go on forever.",
        price_cents: 1699,
        discount_price_cents: Some(1299),
        stock: 24,
        pages: 304,
        published: (2020, 8, 13),
        format: BookFormat::Hardcover,
        average_rating: 4.2,
        total_ratings: 1843,
        total_reviews: 412,
        featured: true,
        best_seller: true,
        new_arrival: false,
    },
    Seed {
        id: "bk-002",
        title: "Project Hail Mary",
        authors: &["Andy Weir"],
        publisher: "Ballantine",
        isbn: "978-0-593-13520-4",
        genres: &["Science Fiction", "Thriller"],
        description: "A lone astronaut must save the earth from disaster, \
                      armed with nothing but duct tape and desperation.",
        price_cents: 2199,
        discount_price_cents: None,
        stock: 18,
        pages: 496,
        published: (2021, 5, 4),
        format: BookFormat::Hardcover,
        average_rating: 4.8,
        total_ratings: 2976,
        total_reviews: 887,
        featured: true,
        best_seller: true,
        new_arrival: false,
    },
    Seed {
        id: "bk-003",
        title: "Pride and Prejudice",
        authors: &["Jane Austen"],
        publisher: "Penguin Classics",
        isbn: "978-0-14-143951-8",
        genres: &["Classics", "Romance"],
        description: "The turbulent relationship between Elizabeth Bennet \
                      and Fitzwilliam Darcy.",
        price_cents: 999,
        discount_price_cents: Some(749),
        stock: 42,
        pages: 432,
        published: (1813, 1, 28),
        format: BookFormat::Paperback,
        average_rating: 4.6,
        total_ratings: 5214,
        total_reviews: 1203,
        featured: false,
        best_seller: true,
        new_arrival: false,
    },
    Seed {
        id: "bk-004",
        title: "Dune",
        authors: &["Frank Herbert"],
        publisher: "Ace",
        isbn: "978-0-441-17271-9",
        genres: &["Science Fiction", "Classics"],
        description: "Set on the desert planet Arrakis, the story of the boy \
                      Paul Atreides and a world beyond imagining.",
        price_cents: 1899,
        discount_price_cents: Some(1499),
        stock: 7,
        pages: 688,
        published: (1965, 8, 1),
        format: BookFormat::Paperback,
        average_rating: 4.5,
        total_ratings: 4388,
        total_reviews: 956,
        featured: true,
        best_seller: false,
        new_arrival: false,
    },
    Seed {
        id: "bk-005",
        title: "The Thursday Murder Club",
        authors: &["Richard Osman"],
        publisher: "Viking",
        isbn: "978-0-241-42525-6",
        genres: &["Mystery", "Fiction"],
        description: "Four unlikely friends meet weekly to investigate \
                      unsolved killings. Then a murder happens next door.",
        price_cents: 1499,
        discount_price_cents: None,
        stock: 31,
        pages: 382,
        published: (2020, 9, 3),
        format: BookFormat::Paperback,
        average_rating: 4.1,
        total_ratings: 1567,
        total_reviews: 344,
        featured: false,
        best_seller: false,
        new_arrival: false,
    },
    Seed {
        id: "bk-006",
        title: "Tomorrow, and Tomorrow, and Tomorrow",
        authors: &["Gabrielle Zevin"],
        publisher: "Knopf",
        isbn: "978-0-593-32120-1",
        genres: &["Fiction", "Contemporary"],
        description: "Two friends, often in love but never lovers, build \
                      video game worlds together across thirty years.",
        price_cents: 1999,
        discount_price_cents: None,
        stock: 15,
        pages: 416,
        published: (2022, 7, 5),
        format: BookFormat::Hardcover,
        average_rating: 4.3,
        total_ratings: 2109,
        total_reviews: 578,
        featured: false,
        best_seller: false,
        new_arrival: true,
    },
    Seed {
        id: "bk-007",
        title: "A Brief History of Time",
        authors: &["Stephen Hawking"],
        publisher: "Bantam",
        isbn: "978-0-553-38016-3",
        genres: &["Science", "Non-fiction"],
        description: "From the Big Bang to black holes, the landmark account \
                      of how the universe works.",
        price_cents: 1599,
        discount_price_cents: None,
        stock: 0,
        pages: 256,
        published: (1988, 4, 1),
        format: BookFormat::Paperback,
        average_rating: 4.4,
        total_ratings: 3011,
        total_reviews: 690,
        featured: false,
        best_seller: false,
        new_arrival: false,
    },
    Seed {
        id: "bk-008",
        title: "Educated",
        authors: &["Tara Westover"],
        publisher: "Random House",
        isbn: "978-0-399-59050-4",
        genres: &["Memoir", "Non-fiction"],
        description: "A memoir of a childhood in the Idaho mountains and the \
                      fierce struggle for an education.",
        price_cents: 1799,
        discount_price_cents: Some(1199),
        stock: 9,
        pages: 352,
        published: (2018, 2, 20),
        format: BookFormat::Paperback,
        average_rating: 4.7,
        total_ratings: 3877,
        total_reviews: 1045,
        featured: false,
        best_seller: true,
        new_arrival: false,
    },
    Seed {
        id: "bk-009",
        title: "The Name of the Wind",
        authors: &["Patrick Rothfuss"],
        publisher: "DAW",
        isbn: "978-0-7564-0474-1",
        genres: &["Fantasy", "Fiction"],
        description: "The tale of Kvothe, told in his own voice: magic, \
                      music, and the price of a name.",
        price_cents: 1299,
        discount_price_cents: None,
        stock: 22,
        pages: 662,
        published: (2007, 3, 27),
        format: BookFormat::Paperback,
        average_rating: 4.5,
        total_ratings: 2845,
        total_reviews: 733,
        featured: false,
        best_seller: false,
        new_arrival: false,
    },
    Seed {
        id: "bk-010",
        title: "Demon Copperhead",
        authors: &["Barbara Kingsolver"],
        publisher: "Harper",
        isbn: "978-0-06-325-1922",
        genres: &["Fiction", "Contemporary"],
        description: "A boy born to a teenage single mother in southern \
                      Appalachia retells an old story in a new voice.",
        price_cents: 2299,
        discount_price_cents: Some(1899),
        stock: 12,
        pages: 560,
        published: (2022, 10, 18),
        format: BookFormat::Hardcover,
        average_rating: 4.6,
        total_ratings: 1322,
        total_reviews: 401,
        featured: false,
        best_seller: false,
        new_arrival: true,
    },
    Seed {
        id: "bk-011",
        title: "Thinking, Fast and Slow",
        authors: &["Daniel Kahneman"],
        publisher: "Farrar, Straus and Giroux",
        isbn: "978-0-374-53355-7",
        genres: &["Science", "Non-fiction", "Psychology"],
        description: "The two systems that drive the way we think, and how \
                      to recognize when to trust each of them.",
        price_cents: 1899,
        discount_price_cents: None,
        stock: 3,
        pages: 499,
        published: (2011, 10, 25),
        format: BookFormat::Paperback,
        average_rating: 4.0,
        total_ratings: 2564,
        total_reviews: 512,
        featured: false,
        best_seller: false,
        new_arrival: false,
    },
    Seed {
        id: "bk-012",
        title: "Murder on the Orient Express",
        authors: &["Agatha Christie"],
        publisher: "HarperCollins",
        isbn: "978-0-00-711931-8",
        genres: &["Mystery", "Classics"],
        description: "Just after midnight the Orient Express is stopped by a \
                      snowdrift, and by morning a passenger lies dead.",
        price_cents: 1099,
        discount_price_cents: None,
        stock: 0,
        pages: 274,
        published: (1934, 1, 1),
        format: BookFormat::Ebook,
        average_rating: 4.3,
        total_ratings: 3198,
        total_reviews: 644,
        featured: false,
        best_seller: false,
        new_arrival: false,
    },
];

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique() {
        let books = seed_catalog();
        let mut ids: Vec<&str> = books.iter().map(|b| b.id.as_str()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), books.len());
    }

    #[test]
    fn test_seed_discounts_are_below_list_price() {
        for book in seed_catalog() {
            if let Some(discount) = book.discount_price_cents {
                assert!(
                    discount < book.price_cents,
                    "{} discount {} >= price {}",
                    book.id,
                    discount,
                    book.price_cents
                );
            }
        }
    }

    #[test]
    fn test_seed_covers_every_stock_bucket_and_shelf() {
        let books = seed_catalog();
        assert!(books.iter().any(|b| b.stock == 0));
        assert!(books.iter().any(|b| b.stock > 0 && b.stock <= 10));
        assert!(books.iter().any(|b| b.stock > 10));
        assert!(books.iter().any(|b| b.featured));
        assert!(books.iter().any(|b| b.best_seller));
        assert!(books.iter().any(|b| b.new_arrival));
    }

    #[test]
    fn test_seed_fields_are_sane() {
        for book in seed_catalog() {
            assert!(book.price_cents > 0, "{}", book.id);
            assert!(book.stock >= 0, "{}", book.id);
            assert!(
                (0.0..=5.0).contains(&book.average_rating),
                "{}",
                book.id
            );
            assert!(!book.authors.is_empty(), "{}", book.id);
            assert!(!book.genres.is_empty(), "{}", book.id);
            assert_eq!(
                book.status == BookStatus::OutOfStock,
                book.stock == 0,
                "{}",
                book.id
            );
        }
    }
}
