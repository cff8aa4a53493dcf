//! Error types for the finance console.

use thiserror::Error;

/// Result type alias for console and session operations
pub type Result<T> = std::result::Result<T, FinanceError>;

/// Errors that can occur while running a session.
///
/// Business-rule rejections (balance guard, invalid menu selections) are not
/// errors; they are reported to the user and control returns to the menu.
#[derive(Error, Debug)]
pub enum FinanceError {
    /// Failed to read from or write to the console
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input stream ended (piped input exhausted or Ctrl-D)
    #[error("input stream closed")]
    InputClosed,
}
