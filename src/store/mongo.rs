use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    Client, Collection, Database,
    bson::{Bson, Document, doc, oid::ObjectId},
};
use tracing::{error, info};

use super::{DocumentStore, StoreError, StoreResult};

/// MongoDB backed store. One client, one database, shared by all repositories.
#[derive(Clone)]
pub struct MongoStore {
    database: Result<Database, String>,
}

impl MongoStore {
    /// Open the client and ping the server once.
    ///
    /// Never fails: if the client cannot be built the error is logged and the
    /// returned store answers every call with [`StoreError::Unavailable`].
    /// There is no retry and no reconnect.
    pub async fn connect(uri: &str, database: &str) -> Self {
        let client = match Client::with_uri_str(uri).await {
            Ok(c) => c,
            Err(e) => {
                error!(error = %e, uri, "Error connecting to MongoDB");
                return Self {
                    database: Err(e.to_string()),
                };
            }
        };

        let db = client.database(database);
        match db.run_command(doc! { "ping": 1 }).await {
            Ok(_) => info!(uri, database, "Connected to MongoDB"),
            Err(e) => error!(error = %e, uri, database, "MongoDB did not answer ping"),
        }

        Self { database: Ok(db) }
    }

    /// Handle to one named collection of the configured database.
    pub fn collection(&self, name: &str) -> StoreResult<Collection<Document>> {
        match &self.database {
            Ok(db) => Ok(db.collection::<Document>(name)),
            Err(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }

    /// Drop the whole configured database. Used to clean up after live tests.
    pub async fn drop_database(&self) -> StoreResult<()> {
        match &self.database {
            Ok(db) => {
                db.drop().await?;
                info!(database = db.name(), "Database dropped");
                Ok(())
            }
            Err(reason) => Err(StoreError::Unavailable(reason.clone())),
        }
    }
}

fn by_id(id: ObjectId) -> Document {
    doc! { "_id": id }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<ObjectId> {
        let result = self.collection(collection)?.insert_one(doc).await?;
        match result.inserted_id {
            Bson::ObjectId(id) => Ok(id),
            other => Err(StoreError::decode(
                "_id",
                format!("server assigned a non object id key: {other}"),
            )),
        }
    }

    async fn replace_one(
        &self,
        collection: &str,
        id: ObjectId,
        doc: Document,
    ) -> StoreResult<u64> {
        let result = self
            .collection(collection)?
            .replace_one(by_id(id), doc)
            .await?;
        Ok(result.matched_count)
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        let cursor = self.collection(collection)?.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        Ok(self.collection(collection)?.find_one(by_id(id)).await?)
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> StoreResult<u64> {
        let result = self.collection(collection)?.delete_one(by_id(id)).await?;
        Ok(result.deleted_count)
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> StoreResult<u64> {
        let result = self
            .collection(collection)?
            .update_one(by_id(id), doc! { "$set": fields })
            .await?;
        Ok(result.matched_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degraded_store_reports_unavailable() {
        let store = MongoStore {
            database: Err("connection refused".to_string()),
        };
        match store.collection("employees") {
            Err(StoreError::Unavailable(reason)) => assert_eq!(reason, "connection refused"),
            other => panic!("expected Unavailable, got {:?}", other.map(|_| ())),
        }
    }

    #[actix_web::test]
    async fn degraded_store_fails_every_operation() {
        let store = MongoStore {
            database: Err("no server".to_string()),
        };
        let id = ObjectId::new();

        assert!(matches!(
            store.find_all("departments").await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.delete_one("departments", id).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.insert_one("departments", doc! { "name": "x" }).await,
            Err(StoreError::Unavailable(_))
        ));
        assert!(matches!(
            store.drop_database().await,
            Err(StoreError::Unavailable(_))
        ));
    }
}
