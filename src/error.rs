/// Error types for TableStore
///
/// Every failure the store can hit is one of the variants below. Errors are
/// handed to a [`Reporter`](crate::report::Reporter) and returned as a plain
/// `Result`; the store itself is always left in its last valid state.

use thiserror::Error;

/// Broad classification of a [`TableError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The column set or JSON configuration is malformed
    Configuration,
    /// A page number or page size failed validation
    Validation,
    /// The caller asked for something the current configuration does not allow
    Usage,
}

#[derive(Debug, Error)]
pub enum TableError {
    #[error("duplicate column key '{key}'")]
    DuplicateColumnKey { key: String },

    #[error("invalid table configuration: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("page {page} is invalid, expected a positive integer no greater than {page_count}")]
    InvalidPageNumber { page: usize, page_count: usize },

    #[error("limit {limit} is invalid, expected a positive integer")]
    InvalidLimit { limit: usize },

    #[error("sorting is not turned on for the '{title}' column ('{key}')")]
    SortOnNonSortableColumn { key: String, title: String },

    #[error("no column with key '{key}'")]
    UnknownColumn { key: String },
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::DuplicateColumnKey { .. } | TableError::InvalidConfig(_) => {
                ErrorKind::Configuration
            }
            TableError::InvalidPageNumber { .. } | TableError::InvalidLimit { .. } => {
                ErrorKind::Validation
            }
            TableError::SortOnNonSortableColumn { .. } | TableError::UnknownColumn { .. } => {
                ErrorKind::Usage
            }
        }
    }
}
