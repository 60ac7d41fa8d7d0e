//! In-process gateway
//!
//! Keeps books in an ordered map. Used by the test suites and by
//! `serve --in-memory` for running without a database.

use std::collections::BTreeMap;
use std::sync::RwLock;

use async_trait::async_trait;

use super::errors::{StoreError, StoreResult};
use super::query::{BookFields, BookFilter};
use super::BookStore;
use crate::model::{BookDocument, BookId};

/// Book store held entirely in memory
#[derive(Debug, Default)]
pub struct MemoryBookStore {
    books: RwLock<BTreeMap<BookId, BookDocument>>,
}

impl MemoryBookStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored books
    pub fn len(&self) -> StoreResult<usize> {
        let books = self.books.read().map_err(|_| StoreError::Poisoned)?;
        Ok(books.len())
    }

    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.len()? == 0)
    }

    fn select(&self, filter: BookFilter) -> StoreResult<Vec<BookDocument>> {
        let books = self.books.read().map_err(|_| StoreError::Poisoned)?;
        Ok(books
            .values()
            .filter(|book| filter.matches(book))
            .cloned()
            .collect())
    }
}

#[async_trait]
impl BookStore for MemoryBookStore {
    async fn insert(&self, mut book: BookDocument) -> StoreResult<BookId> {
        let id = BookId::generate();
        book.id = Some(id.object_id());

        let mut books = self.books.write().map_err(|_| StoreError::Poisoned)?;
        books.insert(id, book);
        Ok(id)
    }

    async fn find_all(&self) -> StoreResult<Vec<BookDocument>> {
        self.select(BookFilter::All)
    }

    async fn find_by_id(&self, id: BookId) -> StoreResult<BookDocument> {
        self.select(BookFilter::ById(id))?
            .into_iter()
            .next()
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_fields(&self, id: BookId, fields: BookFields) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| StoreError::Poisoned)?;
        let book = books.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        fields.apply(book);
        Ok(())
    }

    async fn delete_by_id(&self, id: BookId) -> StoreResult<()> {
        let mut books = self.books.write().map_err(|_| StoreError::Poisoned)?;
        books
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
