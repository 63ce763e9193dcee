//! Aggregate statistics.

use serde::Serialize;

use bookstack_core::mean;
use bookstack_inventory::Book;

use crate::grouping::{GenreCounts, genre_counts};

/// Page count above which a book counts as long.
pub const LONG_BOOK_PAGES: u32 = 400;

/// Whole-inventory figures.
///
/// Averages are `None` for an empty inventory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_count: usize,
    pub in_stock_count: usize,
    pub average_price: Option<f64>,
    pub average_page_count: Option<f64>,
}

/// Collection overview: totals plus the genre distribution.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CollectionStats {
    pub total: usize,
    #[serde(serialize_with = "bookstack_inventory::price::serialize")]
    pub total_price: f64,
    /// 0 for an empty inventory.
    pub average_price: f64,
    pub genres: GenreCounts,
}

/// Mean price of books with more than `min_pages` pages, `None` when there
/// are none.
pub fn average_price_of_long_books(books: &[Book], min_pages: u32) -> Option<f64> {
    mean(
        books
            .iter()
            .filter(|b| b.page_count > min_pages)
            .map(|b| b.price),
    )
}

pub fn aggregate_stats(books: &[Book]) -> AggregateStats {
    AggregateStats {
        total_count: books.len(),
        in_stock_count: books.iter().filter(|b| b.is_in_stock()).count(),
        average_price: mean(books.iter().map(|b| b.price)),
        average_page_count: mean(books.iter().map(|b| f64::from(b.page_count))),
    }
}

pub fn collection_stats(books: &[Book]) -> CollectionStats {
    let total_price: f64 = books.iter().map(|b| b.price).sum();
    CollectionStats {
        total: books.len(),
        total_price,
        average_price: mean(books.iter().map(|b| b.price)).unwrap_or(0.0),
        genres: genre_counts(books),
    }
}
