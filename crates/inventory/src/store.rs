//! Ordered in-memory book store.

use bookstack_core::{InventoryError, InventoryResult};

use crate::book::Book;

/// The inventory: an ordered sequence of books, last-in-first-out for
/// removals.
///
/// Owned by whoever drives the program (the shell, a test). Reports borrow
/// [`InventoryStore::list`] and never mutate it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InventoryStore {
    books: Vec<Book>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self { books: Vec::new() }
    }

    pub fn with_books(books: Vec<Book>) -> Self {
        Self { books }
    }

    /// Add a book at the end.
    pub fn append(&mut self, book: Book) {
        tracing::debug!(title = %book.title, len = self.books.len() + 1, "book appended");
        self.books.push(book);
    }

    /// Remove and return the most recently added book.
    ///
    /// An empty store is left untouched and reported as
    /// [`InventoryError::EmptyInventory`].
    pub fn remove_last(&mut self) -> InventoryResult<Book> {
        match self.books.pop() {
            Some(book) => {
                tracing::debug!(title = %book.title, len = self.books.len(), "book removed");
                Ok(book)
            }
            None => {
                tracing::warn!("remove_last on empty inventory");
                Err(InventoryError::empty())
            }
        }
    }

    /// Discard the current contents and take `books` in their given order.
    pub fn replace_all(&mut self, books: Vec<Book>) {
        tracing::info!(previous = self.books.len(), loaded = books.len(), "inventory replaced");
        self.books = books;
    }

    /// Append `books` in order after the current contents.
    pub fn extend<I>(&mut self, books: I)
    where
        I: IntoIterator<Item = Book>,
    {
        let before = self.books.len();
        self.books.extend(books);
        tracing::info!(added = self.books.len() - before, len = self.books.len(), "inventory extended");
    }

    /// Read-only view in insertion order.
    pub fn list(&self) -> &[Book] {
        &self.books
    }

    pub fn last(&self) -> Option<&Book> {
        self.books.last()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
