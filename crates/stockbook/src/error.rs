//! Inventory error types

use thiserror::Error;

/// Result type for inventory operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while searching or editing an inventory document
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A configured sheet does not exist in the document
    #[error("Sheet not found: {0}")]
    SheetNotFound(String),

    /// Quantity input is missing, not a number, or negative
    #[error("Invalid quantity: {0:?} (expected a non-negative whole number)")]
    InvalidQuantity(String),

    /// Search query is empty after trimming
    #[error("Empty search query: enter a SKU to search")]
    EmptyQuery,

    /// Name for the header stamp is empty after trimming
    #[error("Invalid name: a name is required")]
    InvalidName,

    /// Configuration is inconsistent (bad column letters, empty range, bad address)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Document model error
    #[error("Document error: {0}")]
    Core(#[from] stockbook_core::Error),
}

/// Broad classification of an [`Error`], for callers that only need to
/// decide how to report it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The configuration does not fit the document
    Configuration,
    /// User-supplied input was rejected before any write
    InputValidation,
    /// The document model refused the operation
    Document,
}

impl Error {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::SheetNotFound(_) | Error::InvalidConfig(_) => ErrorKind::Configuration,
            Error::InvalidQuantity(_) | Error::InvalidName | Error::EmptyQuery => {
                ErrorKind::InputValidation
            }
            Error::Core(_) => ErrorKind::Document,
        }
    }
}
