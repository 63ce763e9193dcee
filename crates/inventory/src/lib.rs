//! Inventory domain module.
//!
//! This crate contains the book record and the ordered in-memory store,
//! implemented as plain deterministic logic (no IO, no terminal).

pub mod book;
pub mod price;
pub mod seed;
pub mod store;

pub use book::{Book, BookFormat, NewBook};
pub use store::InventoryStore;
