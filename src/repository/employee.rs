use mongodb::bson::{Document, doc};

use super::{DocumentRepository, Record};
use crate::model::Employee;
use crate::store::{EMPLOYEES, StoreResult};
use crate::utils::db_utils::{date_value, read_date, read_id, read_text, text_value};

pub type EmployeeRepository = DocumentRepository<Employee>;

impl Record for Employee {
    const COLLECTION: &'static str = EMPLOYEES;

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }

    fn to_document(&self) -> Document {
        doc! {
            "name": text_value(self.name.as_deref()),
            "email": text_value(self.email.as_deref()),
            "position": text_value(self.position.as_deref()),
            "departmentId": text_value(self.department_id.as_deref()),
            "hireDate": date_value(self.hire_date),
        }
    }

    fn from_document(doc: &Document) -> StoreResult<Self> {
        Ok(Employee {
            id: read_id(doc)?,
            name: read_text(doc, "name")?,
            email: read_text(doc, "email")?,
            position: read_text(doc, "position")?,
            department_id: read_text(doc, "departmentId")?,
            hire_date: read_date(doc, "hireDate")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{DocumentStore, InMemoryStore, StoreError};
    use chrono::NaiveDate;
    use mongodb::bson::Bson;
    use std::sync::Arc;

    fn ana(department_id: Option<&str>) -> Employee {
        Employee {
            id: String::new(),
            name: Some("Ana".into()),
            email: Some("ana@x.com".into()),
            position: Some("Engineer".into()),
            department_id: department_id.map(str::to_string),
            hire_date: NaiveDate::from_ymd_opt(2024, 1, 10),
        }
    }

    #[actix_web::test]
    async fn save_then_find_is_structurally_equal() {
        let repo = EmployeeRepository::new(Arc::new(InMemoryStore::new()));
        let mut emp = ana(Some("65a1f0c2e4b0a1b2c3d4e5f7"));
        repo.save(&mut emp).await.unwrap();

        let found = repo.find_by_id(&emp.id).await.unwrap().unwrap();
        assert_eq!(found, emp);
    }

    #[actix_web::test]
    async fn last_write_wins_across_snapshots() {
        let repo = EmployeeRepository::new(Arc::new(InMemoryStore::new()));
        let mut emp = ana(Some("65a1f0c2e4b0a1b2c3d4e5f7"));
        repo.save(&mut emp).await.unwrap();

        let mut first = emp.clone();
        first.position = Some("Lead".into());
        let mut second = emp.clone();
        second.department_id = None;

        repo.save(&mut first).await.unwrap();
        repo.save(&mut second).await.unwrap();

        let found = repo.find_by_id(&emp.id).await.unwrap().unwrap();
        assert_eq!(found, second);
        assert_eq!(found.position.as_deref(), Some("Engineer"));
    }

    #[actix_web::test]
    async fn stored_document_uses_exact_field_names() {
        let store = Arc::new(InMemoryStore::new());
        let repo = EmployeeRepository::new(store.clone());
        let mut emp = ana(None);
        repo.save(&mut emp).await.unwrap();

        let docs = store.find_all(EMPLOYEES).await.unwrap();
        let doc = &docs[0];
        assert_eq!(doc.get_str("name").unwrap(), "Ana");
        assert_eq!(doc.get_str("email").unwrap(), "ana@x.com");
        assert_eq!(doc.get_str("position").unwrap(), "Engineer");
        assert_eq!(doc.get("departmentId"), Some(&Bson::Null));
        assert!(doc.get_datetime("hireDate").is_ok());
    }

    #[actix_web::test]
    async fn sparse_document_decodes_to_absent_fields() {
        let store = Arc::new(InMemoryStore::new());
        let id = store.insert_one(EMPLOYEES, doc! { "name": "Bo" }).await.unwrap();
        let repo = EmployeeRepository::new(store);

        let found = repo.find_by_id(&id.to_hex()).await.unwrap().unwrap();
        assert_eq!(found.name.as_deref(), Some("Bo"));
        assert_eq!(found.email, None);
        assert_eq!(found.department_id, None);
        assert_eq!(found.hire_date, None);
    }

    #[actix_web::test]
    async fn mistyped_field_fails_decoding() {
        let store = Arc::new(InMemoryStore::new());
        store
            .insert_one(EMPLOYEES, doc! { "name": "Bo", "hireDate": "2024-01-10" })
            .await
            .unwrap();
        let repo = EmployeeRepository::new(store);

        assert!(matches!(
            repo.find_all().await,
            Err(StoreError::Decode { field, .. }) if field == "hireDate"
        ));
    }
}
