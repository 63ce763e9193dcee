//! Searches over the inventory.

use serde::Serialize;

use bookstack_inventory::Book;

/// Thresholds for [`advanced_search`]. All bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchCriteria {
    /// Published strictly after this year.
    pub published_after: i64,
    /// Priced strictly below this.
    pub max_price: f64,
    /// Strictly fewer pages than this.
    pub max_pages: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            published_after: 1950,
            max_price: 25000.0,
            max_pages: 500,
        }
    }
}

impl SearchCriteria {
    pub fn matches(&self, book: &Book) -> bool {
        book.year() > self.published_after
            && book.price < self.max_price
            && book.page_count < self.max_pages
    }
}

/// A title-search hit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TitleMatch {
    pub title: String,
    pub author: String,
    #[serde(serialize_with = "bookstack_inventory::price::serialize")]
    pub price: f64,
}

/// Titles of books meeting every bound in `criteria`.
pub fn advanced_search(books: &[Book], criteria: &SearchCriteria) -> Vec<String> {
    books
        .iter()
        .filter(|b| criteria.matches(b))
        .map(|b| b.title.clone())
        .collect()
}

/// Books whose title contains `keyword`, ignoring case.
///
/// An empty keyword matches every book.
pub fn search_titles(books: &[Book], keyword: &str) -> Vec<TitleMatch> {
    let needle = keyword.to_lowercase();
    books
        .iter()
        .filter(|b| b.title.to_lowercase().contains(&needle))
        .map(|b| TitleMatch {
            title: b.title.clone(),
            author: b.author.clone(),
            price: b.price,
        })
        .collect()
}
