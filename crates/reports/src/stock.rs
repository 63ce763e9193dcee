//! Stock-aware listings.

use serde::Serialize;

use bookstack_inventory::Book;

/// Title and price of a single book.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitlePrice {
    pub title: String,
    #[serde(serialize_with = "bookstack_inventory::price::serialize")]
    pub price: f64,
}

/// Shelf availability as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Availability {
    #[serde(rename = "Disponible")]
    Available,
    #[serde(rename = "Agotado")]
    SoldOut,
}

impl Availability {
    pub fn of(book: &Book) -> Self {
        if book.is_in_stock() {
            Availability::Available
        } else {
            Availability::SoldOut
        }
    }
}

/// One line of the availability summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BookSummary {
    pub title: String,
    pub availability: Availability,
    /// Price rounded to the nearest whole unit.
    pub rounded_price: u64,
}

/// Titles of in-stock books, cheapest first.
///
/// Books with equal prices keep their inventory order.
pub fn in_stock_titles_by_price(books: &[Book]) -> Vec<String> {
    let mut in_stock: Vec<&Book> = books.iter().filter(|b| b.is_in_stock()).collect();
    in_stock.sort_by(|a, b| a.price.total_cmp(&b.price));
    in_stock.into_iter().map(|b| b.title.clone()).collect()
}

/// In-stock books whose author is exactly `author`.
pub fn in_stock_by_author(books: &[Book], author: &str) -> Vec<TitlePrice> {
    books
        .iter()
        .filter(|b| b.author == author && b.is_in_stock())
        .map(|b| TitlePrice {
            title: b.title.clone(),
            price: b.price,
        })
        .collect()
}

/// Every book with its availability and rounded price, cheapest first.
pub fn availability_summary(books: &[Book]) -> Vec<BookSummary> {
    let mut summary: Vec<BookSummary> = books
        .iter()
        .map(|b| BookSummary {
            title: b.title.clone(),
            availability: Availability::of(b),
            rounded_price: b.price.max(0.0).round() as u64,
        })
        .collect();
    summary.sort_by_key(|s| s.rounded_price);
    summary
}
