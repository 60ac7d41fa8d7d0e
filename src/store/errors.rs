//! Store gateway errors

use thiserror::Error;

use crate::model::BookId;

/// Result type for gateway operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors raised by a [`BookStore`](super::BookStore)
#[derive(Debug, Error)]
pub enum StoreError {
    /// No record matched the id
    #[error("book {0} not found")]
    NotFound(BookId),

    /// Error reported by the MongoDB driver
    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    /// The store acknowledged an insert with a non-ObjectId `_id`
    #[error("unexpected inserted id: {0}")]
    UnexpectedId(String),

    /// In-process store lock was poisoned by a panicking writer
    #[error("book store lock poisoned")]
    Poisoned,
}

impl StoreError {
    /// True if the error only means the record was absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_includes_id() {
        let id = BookId::parse("5f8d0d55b54764421b7156c1").unwrap();
        let err = StoreError::NotFound(id);
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "book 5f8d0d55b54764421b7156c1 not found");
    }

    #[test]
    fn test_other_errors_are_not_not_found() {
        assert!(!StoreError::Poisoned.is_not_found());
        assert!(!StoreError::UnexpectedId("1".into()).is_not_found());
    }
}
