use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};

use super::{DocumentStore, StoreError, StoreResult};

/// In-memory store for tests/dev.
///
/// Collections keep insertion order, which stands in for the server's
/// natural order.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    collections: RwLock<HashMap<String, Vec<(ObjectId, Document)>>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read<T>(
        &self,
        f: impl FnOnce(&HashMap<String, Vec<(ObjectId, Document)>>) -> T,
    ) -> StoreResult<T> {
        let map = self
            .collections
            .read()
            .map_err(|_| StoreError::Unavailable("in-memory store poisoned".to_string()))?;
        Ok(f(&map))
    }

    fn write<T>(
        &self,
        f: impl FnOnce(&mut HashMap<String, Vec<(ObjectId, Document)>>) -> T,
    ) -> StoreResult<T> {
        let mut map = self
            .collections
            .write()
            .map_err(|_| StoreError::Unavailable("in-memory store poisoned".to_string()))?;
        Ok(f(&mut map))
    }
}

fn with_id(id: ObjectId, doc: &Document) -> Document {
    let mut stored = Document::new();
    stored.insert("_id", id);
    for (k, v) in doc {
        if k != "_id" {
            stored.insert(k.clone(), v.clone());
        }
    }
    stored
}

#[async_trait]
impl DocumentStore for InMemoryStore {
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<ObjectId> {
        let id = ObjectId::new();
        self.write(|map| {
            map.entry(collection.to_string())
                .or_default()
                .push((id, with_id(id, &doc)));
        })?;
        Ok(id)
    }

    async fn replace_one(
        &self,
        collection: &str,
        id: ObjectId,
        doc: Document,
    ) -> StoreResult<u64> {
        self.write(|map| {
            let slot = map
                .get_mut(collection)
                .and_then(|docs| docs.iter_mut().find(|(k, _)| *k == id));
            match slot {
                Some((_, stored)) => {
                    *stored = with_id(id, &doc);
                    1
                }
                None => 0,
            }
        })
    }

    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>> {
        self.read(|map| {
            map.get(collection)
                .map(|docs| docs.iter().map(|(_, d)| d.clone()).collect())
                .unwrap_or_default()
        })
    }

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>> {
        self.read(|map| {
            map.get(collection)
                .and_then(|docs| docs.iter().find(|(k, _)| *k == id))
                .map(|(_, d)| d.clone())
        })
    }

    async fn delete_one(&self, collection: &str, id: ObjectId) -> StoreResult<u64> {
        self.write(|map| match map.get_mut(collection) {
            Some(docs) => {
                let before = docs.len();
                docs.retain(|(k, _)| *k != id);
                (before - docs.len()) as u64
            }
            None => 0,
        })
    }

    async fn set_fields(
        &self,
        collection: &str,
        id: ObjectId,
        fields: Document,
    ) -> StoreResult<u64> {
        self.write(|map| {
            let slot = map
                .get_mut(collection)
                .and_then(|docs| docs.iter_mut().find(|(k, _)| *k == id));
            match slot {
                Some((_, stored)) => {
                    for (k, v) in fields {
                        stored.insert(k, v);
                    }
                    1
                }
                None => 0,
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[actix_web::test]
    async fn insert_assigns_id_and_keeps_order() {
        let store = InMemoryStore::new();
        let a = store.insert_one("c", doc! { "n": 1 }).await.unwrap();
        let b = store.insert_one("c", doc! { "n": 2 }).await.unwrap();
        assert_ne!(a, b);

        let all = store.find_all("c").await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].get_object_id("_id").unwrap(), a);
        assert_eq!(all[1].get_i32("n").unwrap(), 2);
    }

    #[actix_web::test]
    async fn replace_is_full_overwrite_and_never_upserts() {
        let store = InMemoryStore::new();
        let id = store.insert_one("c", doc! { "a": 1, "b": 2 }).await.unwrap();

        assert_eq!(store.replace_one("c", id, doc! { "a": 3 }).await.unwrap(), 1);
        let stored = store.find_by_id("c", id).await.unwrap().unwrap();
        assert_eq!(stored.get_i32("a").unwrap(), 3);
        assert!(stored.get("b").is_none());

        let missing = ObjectId::new();
        assert_eq!(store.replace_one("c", missing, doc! { "a": 9 }).await.unwrap(), 0);
        assert!(store.find_by_id("c", missing).await.unwrap().is_none());
    }

    #[actix_web::test]
    async fn set_fields_is_partial() {
        let store = InMemoryStore::new();
        let id = store.insert_one("c", doc! { "a": 1, "b": 2 }).await.unwrap();
        store.set_fields("c", id, doc! { "b": 5 }).await.unwrap();

        let stored = store.find_by_id("c", id).await.unwrap().unwrap();
        assert_eq!(stored.get_i32("a").unwrap(), 1);
        assert_eq!(stored.get_i32("b").unwrap(), 5);
    }

    #[actix_web::test]
    async fn delete_missing_is_zero() {
        let store = InMemoryStore::new();
        store.insert_one("c", doc! {}).await.unwrap();
        assert_eq!(store.delete_one("c", ObjectId::new()).await.unwrap(), 0);
        assert_eq!(store.delete_one("other", ObjectId::new()).await.unwrap(), 0);
        assert_eq!(store.find_all("c").await.unwrap().len(), 1);
    }
}
