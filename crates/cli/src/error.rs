//! Shell error model.

use thiserror::Error;

pub type ShellResult<T> = Result<T, ShellError>;

/// Failures that end an interactive session.
///
/// Inventory conditions (such as removing from an empty stack) are reported
/// to the user and never surface here.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render report: {0}")]
    Render(#[from] serde_json::Error),
}
