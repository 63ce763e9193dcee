use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use bookstack_core::parse_year_or_zero;

/// Physical (or digital) format of a book.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BookFormat {
    #[serde(rename = "tapa dura")]
    Hardcover,
    #[serde(rename = "tapa blanda")]
    Paperback,
    #[serde(rename = "ebook")]
    Ebook,
}

impl BookFormat {
    pub fn label(self) -> &'static str {
        match self {
            BookFormat::Hardcover => "tapa dura",
            BookFormat::Paperback => "tapa blanda",
            BookFormat::Ebook => "ebook",
        }
    }
}

impl core::fmt::Display for BookFormat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Caller-supplied attributes of a book about to enter the inventory.
///
/// Everything except the time it was added; that is stamped by [`Book::new`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub language: String,
    /// Price in whole currency units. Expected to be non-negative.
    #[serde(serialize_with = "crate::price::serialize")]
    pub price: f64,
    pub format: BookFormat,
    pub isbn: String,
    pub description: String,
    pub condition: String,
    /// Shelf code (e.g. `"B3"`).
    pub location: String,
    /// Free-text year; see [`Book::year`].
    pub publication_year: String,
    pub publisher: String,
    pub page_count: u32,
    pub dimensions: String,
    pub weight: String,
    /// `None` means "not tracked", which counts as in stock.
    pub in_stock: Option<bool>,
}

impl NewBook {
    /// Book entered by hand from the shell: only title and author are asked
    /// for, every other attribute takes a fixed default.
    pub fn manual(title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            genre: "ficción".to_string(),
            language: "español".to_string(),
            price: 50000.0,
            format: BookFormat::Paperback,
            isbn: "1234567890".to_string(),
            description: "Descripción genérica".to_string(),
            condition: "nuevo".to_string(),
            location: "A1".to_string(),
            publication_year: "2025".to_string(),
            publisher: "Editorial X".to_string(),
            page_count: 300,
            dimensions: "20x13cm".to_string(),
            weight: "0.5kg".to_string(),
            in_stock: None,
        }
    }
}

/// A single inventory record.
///
/// Descriptive and commercial attributes are plain public fields. The time the
/// book was added is fixed at construction and only readable afterwards, so a
/// `Book` serializes but never deserializes; build one from a [`NewBook`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub genre: String,
    pub language: String,
    #[serde(serialize_with = "crate::price::serialize")]
    pub price: f64,
    pub format: BookFormat,
    pub isbn: String,
    pub description: String,
    pub condition: String,
    pub location: String,
    pub publication_year: String,
    pub publisher: String,
    pub page_count: u32,
    pub dimensions: String,
    pub weight: String,
    pub in_stock: Option<bool>,
    date_added: DateTime<Utc>,
}

impl Book {
    /// Create a book stamped with the current time.
    pub fn new(draft: NewBook) -> Self {
        Self::added_at(draft, Utc::now())
    }

    /// Create a book with an explicit `date_added`.
    ///
    /// Prefer this in tests for determinism.
    pub fn added_at(draft: NewBook, date_added: DateTime<Utc>) -> Self {
        let NewBook {
            title,
            author,
            genre,
            language,
            price,
            format,
            isbn,
            description,
            condition,
            location,
            publication_year,
            publisher,
            page_count,
            dimensions,
            weight,
            in_stock,
        } = draft;

        Self {
            title,
            author,
            genre,
            language,
            price,
            format,
            isbn,
            description,
            condition,
            location,
            publication_year,
            publisher,
            page_count,
            dimensions,
            weight,
            in_stock,
            date_added,
        }
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    /// Stock status with the "untracked means available" default applied.
    ///
    /// Every report filters through this; only an explicit `Some(false)`
    /// takes a book out of stock.
    pub fn is_in_stock(&self) -> bool {
        self.in_stock.unwrap_or(true)
    }

    /// Publication year as a number, 0 when the text has no leading integer.
    pub fn year(&self) -> i64 {
        parse_year_or_zero(&self.publication_year)
    }
}
