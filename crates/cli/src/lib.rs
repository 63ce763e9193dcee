//! Interactive terminal front-end for the book inventory.
//!
//! The [`Shell`] owns the single [`InventoryStore`](bookstack_inventory::InventoryStore)
//! and is generic over its input and output so sessions can be scripted.

pub mod config;
pub mod error;
pub mod render;
pub mod shell;

pub use config::{ConfigWarning, ShellConfig};
pub use error::{ShellError, ShellResult};
pub use shell::Shell;
