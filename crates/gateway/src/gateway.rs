//! The gateway seam
//!
//! [`CatalogGateway`] is the only door to the backend. The HTTP
//! [`ApiClient`](crate::ApiClient) implements it for real use; tests plug in
//! an in-memory implementation.

use async_trait::async_trait;
use bookshelf_core::{Collection, RecordId};
use bookshelf_model::{
    Author, Book, BookFilter, CollectionSnapshot, Genre, RecordPayload, Review, User, WireSchema,
    decode_rows,
};
use serde_json::Value;
use tracing::debug;

use crate::error::ClientError;

/// Access to the five collections of the catalog backend
#[async_trait]
pub trait CatalogGateway: Send + Sync {
    /// Fetch the raw positional rows of a collection
    async fn fetch_rows(
        &self,
        collection: Collection,
        query: &[(String, String)],
    ) -> Result<Value, ClientError>;

    /// `POST` a new record
    async fn create_record(&self, payload: &RecordPayload) -> Result<(), ClientError>;

    /// `PUT` a full replacement of an existing record
    async fn update_record(&self, payload: &RecordPayload) -> Result<(), ClientError>;

    /// `DELETE` a record by identifier
    async fn delete_record(&self, collection: Collection, id: RecordId) -> Result<(), ClientError>;

    /// Column order used to decode rows
    fn schema(&self) -> WireSchema {
        WireSchema::current()
    }

    /// Fetch and decode a full collection
    ///
    /// The filter only applies to books; other collections ignore it.
    async fn fetch_collection(
        &self,
        collection: Collection,
        filter: Option<&BookFilter>,
    ) -> Result<CollectionSnapshot, ClientError> {
        let query = match (collection, filter) {
            (Collection::Books, Some(filter)) => filter.to_query(),
            _ => Vec::new(),
        };

        let body = self.fetch_rows(collection, &query).await?;
        let schema = self.schema();

        let snapshot = match collection {
            Collection::Users => CollectionSnapshot::Users(decode_rows::<User>(&schema, &body)?),
            Collection::Books => CollectionSnapshot::Books(decode_rows::<Book>(&schema, &body)?),
            Collection::Genres => CollectionSnapshot::Genres(decode_rows::<Genre>(&schema, &body)?),
            Collection::Authors => {
                CollectionSnapshot::Authors(decode_rows::<Author>(&schema, &body)?)
            }
            Collection::Reviews => {
                CollectionSnapshot::Reviews(decode_rows::<Review>(&schema, &body)?)
            }
        };

        debug!("Fetched {} {}", snapshot.len(), collection);
        Ok(snapshot)
    }

    /// Send a payload with the verb it calls for
    async fn send(&self, payload: &RecordPayload) -> Result<(), ClientError> {
        if payload.is_update() {
            self.update_record(payload).await
        } else {
            self.create_record(payload).await
        }
    }
}

#[async_trait]
impl<G: CatalogGateway + ?Sized> CatalogGateway for Box<G> {
    async fn fetch_rows(
        &self,
        collection: Collection,
        query: &[(String, String)],
    ) -> Result<Value, ClientError> {
        (**self).fetch_rows(collection, query).await
    }

    async fn create_record(&self, payload: &RecordPayload) -> Result<(), ClientError> {
        (**self).create_record(payload).await
    }

    async fn update_record(&self, payload: &RecordPayload) -> Result<(), ClientError> {
        (**self).update_record(payload).await
    }

    async fn delete_record(&self, collection: Collection, id: RecordId) -> Result<(), ClientError> {
        (**self).delete_record(collection, id).await
    }

    fn schema(&self) -> WireSchema {
        (**self).schema()
    }
}
