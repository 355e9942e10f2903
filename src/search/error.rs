//! Error types for search operations

use crate::error::AppError;

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur during search operations
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Index construction failed; the service never becomes ready
    #[error("Index build failed: {0}")]
    BuildFailed(String),

    /// Query referenced a field not declared for the active entity kind
    #[error("Unknown search field: {0}")]
    UnknownField(String),

    /// Search execution failed
    #[error("Search execution failed: {0}")]
    QueryFailed(String),

    /// Record could not be serialized for indexing
    #[error("Document indexing failed: {0}")]
    IndexingFailed(String),
}

impl From<tantivy::TantivyError> for SearchError {
    fn from(err: tantivy::TantivyError) -> Self {
        SearchError::QueryFailed(err.to_string())
    }
}

impl From<SearchError> for AppError {
    fn from(err: SearchError) -> Self {
        AppError::Internal(err.to_string())
    }
}
