//! Re-ordered copies of the inventory.

use std::cmp::Ordering;

use bookstack_inventory::Book;

fn genre_then_price(a: &Book, b: &Book) -> Ordering {
    a.genre
        .cmp(&b.genre)
        .then_with(|| a.price.total_cmp(&b.price))
}

/// Copy of the inventory ordered by genre, then by ascending price.
///
/// Genres compare lexicographically by code point. Books equal on both keys
/// keep their inventory order.
pub fn sort_by_genre_then_price(books: &[Book]) -> Vec<Book> {
    let mut sorted = books.to_vec();
    sorted.sort_by(genre_then_price);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{book, titles};
    use std::collections::HashSet;

    #[test]
    fn orders_by_genre_then_price() {
        let books = vec![
            book("f-caro", "ficción", 60000.0, 1, "2000"),
            book("a-caro", "fantasía", 90000.0, 1, "2000"),
            book("f-barato", "ficción", 40000.0, 1, "2000"),
            book("c", "clásico", 85000.0, 1, "2000"),
            book("a-barato", "fantasía", 50000.0, 1, "2000"),
        ];

        let sorted = sort_by_genre_then_price(&books);
        assert_eq!(
            titles(&sorted),
            vec!["c", "a-barato", "a-caro", "f-barato", "f-caro"]
        );
        // The source order is untouched.
        assert_eq!(books[0].title, "f-caro");
    }

    #[test]
    fn equal_keys_keep_inventory_order() {
        let books = vec![
            book("primero", "ficción", 10.0, 1, "2000"),
            book("segundo", "ficción", 10.0, 1, "2000"),
        ];
        assert_eq!(
            titles(&sort_by_genre_then_price(&books)),
            vec!["primero", "segundo"]
        );
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: output is contiguous by genre and non-decreasing in
            /// price inside each genre run.
            #[test]
            fn genres_are_contiguous_and_prices_sorted_within(
                rows in prop::collection::vec(("[a-d]", 0u32..1000), 0..40)
            ) {
                let books: Vec<Book> = rows
                    .iter()
                    .enumerate()
                    .map(|(i, (genre, price))| book(&format!("t{i}"), genre, f64::from(*price), 1, "2000"))
                    .collect();

                let sorted = sort_by_genre_then_price(&books);
                prop_assert_eq!(sorted.len(), books.len());

                let mut finished: HashSet<&str> = HashSet::new();
                for pair in sorted.windows(2) {
                    let (a, b) = (&pair[0], &pair[1]);
                    if a.genre == b.genre {
                        prop_assert!(a.price <= b.price);
                    } else {
                        prop_assert!(finished.insert(a.genre.as_str()));
                        prop_assert!(!finished.contains(b.genre.as_str()));
                    }
                }
            }
        }
    }
}
