//! MongoDB-backed gateway

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};
use tracing::{debug, info};

use super::config::StoreConfig;
use super::errors::{StoreError, StoreResult};
use super::query::{BookFields, BookFilter};
use super::BookStore;
use crate::model::{BookDocument, BookId};

/// Long-lived handle to the configured books collection
#[derive(Clone)]
pub struct MongoBookStore {
    collection: Collection<BookDocument>,
}

impl MongoBookStore {
    /// Connect and verify the server answers a `ping`
    ///
    /// Any failure is returned to the caller; there is no retry.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let options = ClientOptions::parse(&config.uri).await?;
        let client = Client::with_options(options)?;
        let database = client.database(&config.database);

        database.run_command(doc! { "ping": 1 }, None).await?;

        info!(
            database = %config.database,
            collection = %config.collection,
            "connected to document store"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
        })
    }
}

#[async_trait]
impl BookStore for MongoBookStore {
    async fn insert(&self, book: BookDocument) -> StoreResult<BookId> {
        let result = self.collection.insert_one(book, None).await?;
        let id = result
            .inserted_id
            .as_object_id()
            .map(BookId::from)
            .ok_or_else(|| StoreError::UnexpectedId(result.inserted_id.to_string()))?;

        debug!(%id, "inserted book");
        Ok(id)
    }

    async fn find_all(&self) -> StoreResult<Vec<BookDocument>> {
        let cursor = self
            .collection
            .find(BookFilter::All.to_document(), None)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, id: BookId) -> StoreResult<BookDocument> {
        self.collection
            .find_one(BookFilter::ById(id).to_document(), None)
            .await?
            .ok_or(StoreError::NotFound(id))
    }

    async fn update_fields(&self, id: BookId, fields: BookFields) -> StoreResult<()> {
        let result = self
            .collection
            .update_one(BookFilter::ById(id).to_document(), fields.to_update(), None)
            .await?;

        if result.matched_count == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: BookId) -> StoreResult<()> {
        let result = self
            .collection
            .delete_one(BookFilter::ById(id).to_document(), None)
            .await?;

        if result.deleted_count == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
