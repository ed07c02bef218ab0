//! CRUD over one collection per entity kind.
//!
//! [`DocumentRepository`] carries the shared contract; each entity supplies
//! its document mapping through [`Record`]. Leave requests wrap the generic
//! repository to add employee-name enrichment and status updates.

pub mod department;
pub mod employee;
pub mod leave_request;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use leave_request::LeaveRequestRepository;

use std::marker::PhantomData;
use std::sync::Arc;

use mongodb::bson::Document;
use tracing::{debug, error};

use crate::store::{DocumentStore, StoreResult, parse_id};

/// A typed entity stored as one document.
pub trait Record: Sized + Send + Sync {
    const COLLECTION: &'static str;

    /// Empty string means "not yet persisted".
    fn id(&self) -> &str;
    fn set_id(&mut self, id: String);

    /// Every field by exact name, without `_id`.
    fn to_document(&self) -> Document;
    fn from_document(doc: &Document) -> StoreResult<Self>;
}

pub struct DocumentRepository<T> {
    store: Arc<dyn DocumentStore>,
    _record: PhantomData<fn() -> T>,
}

impl<T> Clone for DocumentRepository<T> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            _record: PhantomData,
        }
    }
}

impl<T: Record> DocumentRepository<T> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            _record: PhantomData,
        }
    }

    /// Insert when the id is empty, otherwise replace the whole stored
    /// document. The assigned id is written back into `record`.
    ///
    /// Returns `false` when a replace matched nothing; nothing is inserted
    /// in that case.
    pub async fn save(&self, record: &mut T) -> StoreResult<bool> {
        let doc = record.to_document();

        if record.id().is_empty() {
            let id = self.store.insert_one(T::COLLECTION, doc).await.map_err(|e| {
                error!(error = %e, collection = T::COLLECTION, "Insert failed");
                e
            })?;
            record.set_id(id.to_hex());
            debug!(collection = T::COLLECTION, id = %id, "Document created");
            Ok(true)
        } else {
            let id = parse_id(record.id())?;
            let matched = self
                .store
                .replace_one(T::COLLECTION, id, doc)
                .await
                .map_err(|e| {
                    error!(error = %e, collection = T::COLLECTION, id = %id, "Replace failed");
                    e
                })?;
            debug!(collection = T::COLLECTION, id = %id, matched, "Document replaced");
            Ok(matched > 0)
        }
    }

    pub async fn find_all(&self) -> StoreResult<Vec<T>> {
        let docs = self.store.find_all(T::COLLECTION).await?;
        docs.iter().map(T::from_document).collect()
    }

    /// `Ok(None)` when nothing matches; `Err(MalformedId)` when `id` is not
    /// a valid object id.
    pub async fn find_by_id(&self, id: &str) -> StoreResult<Option<T>> {
        let oid = parse_id(id)?;
        match self.store.find_by_id(T::COLLECTION, oid).await? {
            Some(doc) => Ok(Some(T::from_document(&doc)?)),
            None => Ok(None),
        }
    }

    /// Deleting an unknown id is not an error.
    pub async fn delete(&self, id: &str) -> StoreResult<()> {
        let oid = parse_id(id)?;
        let deleted = self.store.delete_one(T::COLLECTION, oid).await?;
        debug!(collection = T::COLLECTION, id, deleted, "Delete");
        Ok(())
    }

    pub(crate) async fn set_fields(&self, id: &str, fields: Document) -> StoreResult<u64> {
        let oid = parse_id(id)?;
        self.store.set_fields(T::COLLECTION, oid, fields).await
    }
}
