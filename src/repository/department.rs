use mongodb::bson::{Document, doc};

use super::{DocumentRepository, Record};
use crate::model::Department;
use crate::store::{DEPARTMENTS, StoreResult};
use crate::utils::db_utils::{read_id, read_text, text_value};

pub type DepartmentRepository = DocumentRepository<Department>;

impl Record for Department {
    const COLLECTION: &'static str = DEPARTMENTS;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn to_document(&self) -> Document {
        doc! {
            "name": text_value(self.name.as_deref()),
            "description": text_value(self.description.as_deref()),
        }
    }

    fn from_document(doc: &Document) -> StoreResult<Self> {
        Ok(Department {
            id: read_id(doc)?,
            name: read_text(doc, "name")?,
            description: read_text(doc, "description")?,
        })
    }
}
