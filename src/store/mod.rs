//! Document storage behind the repositories.
//!
//! A [`DocumentStore`] is handed to every repository at construction time.
//! Production code injects a [`MongoStore`], tests inject an [`InMemoryStore`].

mod memory;
mod mongo;

pub use memory::InMemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;
use mongodb::bson::{Document, oid::ObjectId};
use thiserror::Error;

pub const EMPLOYEES: &str = "employees";
pub const DEPARTMENTS: &str = "departments";
pub const LEAVE_REQUESTS: &str = "leave_requests";

pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The connection could not be established at startup; the store is
    /// degraded for the rest of the process.
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    /// Caller supplied an identifier that is not a 24-hex object id.
    #[error("malformed identifier `{0}`")]
    MalformedId(String),

    #[error("cannot decode field `{field}`: {reason}")]
    Decode { field: String, reason: String },

    #[error(transparent)]
    Driver(#[from] mongodb::error::Error),
}

impl StoreError {
    pub fn decode(field: &str, reason: impl Into<String>) -> Self {
        Self::Decode {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

/// Parse a caller supplied identifier string into an object id.
pub fn parse_id(id: &str) -> StoreResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}

/// Single-document operations over named collections.
///
/// Every method is atomic for one document only. Documents passed to
/// `insert_one` and `replace_one` must not carry `_id`; the store owns it.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Insert a new document and return the identifier assigned to it.
    async fn insert_one(&self, collection: &str, doc: Document) -> StoreResult<ObjectId>;

    /// Replace the whole document with that id. Returns the matched count;
    /// nothing is inserted when no document matches.
    async fn replace_one(&self, collection: &str, id: ObjectId, doc: Document)
    -> StoreResult<u64>;

    /// All documents, in the store's natural order.
    async fn find_all(&self, collection: &str) -> StoreResult<Vec<Document>>;

    async fn find_by_id(&self, collection: &str, id: ObjectId) -> StoreResult<Option<Document>>;

    /// Returns the deleted count (0 or 1).
    async fn delete_one(&self, collection: &str, id: ObjectId) -> StoreResult<u64>;

    /// `$set` the given fields on one document, leaving the others untouched.
    /// Returns the matched count.
    async fn set_fields(&self, collection: &str, id: ObjectId, fields: Document)
    -> StoreResult<u64>;
}
