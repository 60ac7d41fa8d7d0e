//! # Store Gateway
//!
//! Record-level access to the `books` collection. Handlers only ever see
//! the [`BookStore`] trait; the process picks an implementation once at
//! startup and shares it behind an `Arc`.

mod config;
mod errors;
mod memory;
mod mongo;
mod query;

pub use config::StoreConfig;
pub use errors::{StoreError, StoreResult};
pub use memory::MemoryBookStore;
pub use mongo::MongoBookStore;
pub use query::{BookFilter, BookFields};

use async_trait::async_trait;

use crate::model::{BookDocument, BookId};

/// Pass-through operations on the book collection
///
/// Implementations must be safe to share across concurrent requests.
#[async_trait]
pub trait BookStore: Send + Sync {
    /// Insert a new book and return the id the store assigned
    async fn insert(&self, book: BookDocument) -> StoreResult<BookId>;

    /// Every stored book
    async fn find_all(&self) -> StoreResult<Vec<BookDocument>>;

    /// One book, or [`StoreError::NotFound`]
    async fn find_by_id(&self, id: BookId) -> StoreResult<BookDocument>;

    /// Overwrite title, author and isbn. [`StoreError::NotFound`] if nothing matched.
    async fn update_fields(&self, id: BookId, fields: BookFields) -> StoreResult<()>;

    /// Remove a book. [`StoreError::NotFound`] if nothing was removed.
    async fn delete_by_id(&self, id: BookId) -> StoreResult<()>;
}
