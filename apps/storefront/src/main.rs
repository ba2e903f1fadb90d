//! # Storefront Demo Session
//!
//! Walks a scripted shopping session against the real stores: browse the
//! catalog, add to the cart, save to the wishlist, move a saved book into
//! the cart, and show what the next launch would hydrate.
//!
//! ## Usage
//! ```bash
//! cargo run -p folio-storefront
//!
//! # With a throwaway data directory
//! FOLIO_DATA_DIR=/tmp/folio-demo cargo run -p folio-storefront
//! ```

use folio_core::catalog::{Availability, CatalogFilter, SortDirection, SortKey};
use folio_core::money::Money;

use folio_storefront::commands::{auth, cart, catalog, wishlist};
use folio_storefront::{init_tracing, Storefront};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let mut front = Storefront::open_default()?;

    println!("Folio Storefront Demo");
    println!("=====================");
    println!();

    // Home page shelves
    let home = catalog::home_sections(&front.catalog);
    println!(
        "Shelves: {} featured, {} best sellers, {} new arrivals",
        home.featured.len(),
        home.best_sellers.len(),
        home.new_arrivals.len()
    );

    // Browse: in-stock fiction under $20, cheapest first
    let filter = CatalogFilter {
        genre: Some("Fiction".to_string()),
        availability: Availability::InStock,
        max_price: Some(Money::from_cents(2000)),
        ..CatalogFilter::none()
    };
    let browse =
        catalog::browse_catalog(&front.catalog, &filter, SortKey::Price, SortDirection::Ascending)?;
    println!();
    println!(
        "In-stock fiction under $20.00 ({} of {} books):",
        browse.books.len(),
        browse.total_listed
    );
    for book in &browse.books {
        println!(
            "  {:<40} {:>8}  ({} in stock)",
            book.title,
            book.effective_price().to_string(),
            book.stock
        );
    }

    let picked = browse
        .books
        .first()
        .cloned()
        .ok_or("browse returned no books")?;

    // Sign in, fill the cart
    auth::login(&mut front.auth, "alex@example.com", "correct-horse")?;
    cart::add_to_cart(
        &front.catalog,
        &mut front.cart,
        &mut front.notices,
        &picked.id,
        Some(2),
    )?;

    // Save a best seller for later, then move it into the cart
    if let Some(saved) = home.best_sellers.first() {
        wishlist::add_to_wishlist(
            &front.catalog,
            &mut front.wishlist,
            &mut front.notices,
            &saved.id,
        )?;
        wishlist::move_to_cart(
            &mut front.cart,
            &mut front.wishlist,
            &mut front.notices,
            &saved.id,
        )?;
    }

    // Final cart
    let response = cart::get_cart(&front.cart);
    println!();
    println!("Cart:");
    for line in &response.lines {
        println!(
            "  {} x{:<2} {:>8}",
            line.item.title,
            line.quantity,
            line.line_total().to_string()
        );
    }
    println!(
        "  {} items, total {}",
        response.totals.item_count,
        Money::from_cents(response.totals.total_cents)
    );

    // What the UI would toast
    println!();
    println!("Notices:");
    for notice in front.notices.drain() {
        println!("  [{:?}] {}", notice.level, notice.message);
    }

    let session = auth::session(&front.auth);
    if let Some(user) = session.user {
        println!();
        println!("Signed in as {}", user.display_name());
    }

    println!();
    println!("Snapshots persisted; the next launch hydrates this cart.");

    Ok(())
}
