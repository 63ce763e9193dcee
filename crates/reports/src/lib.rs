//! Reporting queries over the book inventory.
//!
//! Every report is a pure function of a `&[Book]` snapshot: it never mutates
//! the inventory, and sorting happens on derived copies. "Nothing matched" is
//! an empty collection or `None`, never an error.

pub mod grouping;
pub mod ordering;
pub mod report;
pub mod search;
pub mod stats;
pub mod stock;

#[cfg(test)]
mod test_support;

pub use grouping::{DecadeTotals, GenreCounts, genre_counts, group_by_decade};
pub use ordering::sort_by_genre_then_price;
pub use report::ReportKind;
pub use search::{SearchCriteria, TitleMatch, advanced_search, search_titles};
pub use stats::{
    AggregateStats, CollectionStats, LONG_BOOK_PAGES, aggregate_stats,
    average_price_of_long_books, collection_stats,
};
pub use stock::{
    Availability, BookSummary, TitlePrice, availability_summary, in_stock_by_author,
    in_stock_titles_by_price,
};
