//! `bookstack-core` — foundation building blocks shared by the inventory and
//! reporting crates.
//!
//! This crate contains **pure** primitives (no IO, no terminal concerns).

pub mod error;
pub mod numeric;

pub use error::{InventoryError, InventoryResult};
pub use numeric::{decade_of, mean, parse_year_or_zero, round_to_cents};
