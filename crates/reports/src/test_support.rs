use bookstack_inventory::{Book, NewBook};
use chrono::{TimeZone, Utc};

/// Book with the attributes reports care about; the rest are manual-entry
/// defaults.
pub fn book(title: &str, genre: &str, price: f64, pages: u32, year: &str) -> Book {
    let mut draft = NewBook::manual(title, "Autor");
    draft.genre = genre.to_string();
    draft.price = price;
    draft.page_count = pages;
    draft.publication_year = year.to_string();
    Book::added_at(draft, Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap())
}

pub fn titles<'a, I>(books: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a Book>,
{
    books.into_iter().map(|b| b.title.as_str()).collect()
}
