//! Group-and-count reports.

use std::collections::BTreeMap;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use bookstack_core::decade_of;
use bookstack_inventory::Book;

/// Number of books per genre, in the order each genre was first seen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenreCounts {
    entries: Vec<(String, usize)>,
}

impl GenreCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more book of `genre`.
    pub fn record(&mut self, genre: &str) {
        match self.entries.iter_mut().find(|(g, _)| g == genre) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((genre.to_string(), 1)),
        }
    }

    pub fn get(&self, genre: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(g, _)| g == genre)
            .map(|(_, count)| *count)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(g, c)| (g.as_str(), *c))
    }

    /// Number of distinct genres.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Serialized as a JSON object whose keys keep first-seen order.
impl Serialize for GenreCounts {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (genre, count) in &self.entries {
            map.serialize_entry(genre, count)?;
        }
        map.end()
    }
}

/// Per-decade book count and summed price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct DecadeTotals {
    pub count: usize,
    #[serde(serialize_with = "bookstack_inventory::price::serialize")]
    pub total_price: f64,
}

pub fn genre_counts(books: &[Book]) -> GenreCounts {
    books.iter().fold(GenreCounts::new(), |mut acc, book| {
        acc.record(&book.genre);
        acc
    })
}

/// Bucket books by publication decade, ascending.
///
/// Years that do not parse land in decade 0.
pub fn group_by_decade(books: &[Book]) -> BTreeMap<i64, DecadeTotals> {
    let mut decades: BTreeMap<i64, DecadeTotals> = BTreeMap::new();
    for book in books {
        let totals = decades.entry(decade_of(book.year())).or_default();
        totals.count += 1;
        totals.total_price += book.price;
    }
    decades
}
