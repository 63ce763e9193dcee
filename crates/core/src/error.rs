//! Inventory error model.

use thiserror::Error;

/// Result type used across the inventory layer.
pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory-level error.
///
/// Every variant is recoverable: callers report it and keep the store as it
/// was. Terminal and rendering failures belong to the shell.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InventoryError {
    /// An operation needed at least one book but the store was empty.
    #[error("inventory is empty")]
    EmptyInventory,
}

impl InventoryError {
    pub fn empty() -> Self {
        Self::EmptyInventory
    }

    /// Whether this error means "nothing to act on" rather than a real fault.
    pub fn is_empty_inventory(&self) -> bool {
        matches!(self, Self::EmptyInventory)
    }
}
