//! Error handling for the `GedReader`.

use crate::utils::date::DateError;
use std::{fmt, io};

/// Specialized error type for the `GedReader`
#[derive(Debug)]
pub enum GedReaderError {
    /// Error opening or reading a file
    IoError(io::Error),
    /// A non-empty date literal that does not match `DD MMM YYYY`
    DateError(DateError),
}

impl From<io::Error> for GedReaderError {
    fn from(error: io::Error) -> Self {
        Self::IoError(error)
    }
}

impl From<DateError> for GedReaderError {
    fn from(error: DateError) -> Self {
        Self::DateError(error)
    }
}

impl fmt::Display for GedReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "IO error: {e}"),
            Self::DateError(e) => write!(f, "Date error: {e}"),
        }
    }
}

impl std::error::Error for GedReaderError {}

/// Result type for `GedReader` operations
pub type Result<T> = std::result::Result<T, GedReaderError>;
