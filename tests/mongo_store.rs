//! Round trip against a real server on the default local address.
//!
//! `cargo test -- --ignored` with MongoDB listening on localhost:27017.
//! The per-process database is dropped when the test finishes.

use std::sync::Arc;

use chrono::NaiveDate;
use employee_manager::context::AppContext;
use employee_manager::model::{Department, Employee, LeaveRequest, LeaveStatus};
use employee_manager::store::MongoStore;

#[actix_web::test]
#[ignore = "needs a local MongoDB server"]
async fn mongo_round_trip() {
    let db = format!("employee_db_test_{}", std::process::id());
    let store = MongoStore::connect("mongodb://localhost:27017", &db).await;
    let ctx = AppContext::new(Arc::new(store.clone()));

    let mut dept = Department {
        id: String::new(),
        name: Some("Engineering".into()),
        description: Some("R&D".into()),
    };
    ctx.departments.save(&mut dept).await.unwrap();

    let mut ana = Employee {
        id: String::new(),
        name: Some("Ana".into()),
        email: Some("ana@x.com".into()),
        position: Some("Engineer".into()),
        department_id: Some(dept.id.clone()),
        hire_date: NaiveDate::from_ymd_opt(2024, 1, 10),
    };
    ctx.employees.save(&mut ana).await.unwrap();
    assert_eq!(ctx.employees.find_by_id(&ana.id).await.unwrap(), Some(ana.clone()));

    let mut leave = LeaveRequest {
        employee_id: Some(ana.id.clone()),
        start_date: NaiveDate::from_ymd_opt(2024, 3, 1),
        end_date: NaiveDate::from_ymd_opt(2024, 3, 5),
        reason: Some("vacation".into()),
        ..Default::default()
    };
    ctx.leaves.save(&mut leave).await.unwrap();
    assert_eq!(leave.employee_name.as_deref(), Some("Ana"));

    ctx.leaves
        .update_status(&leave.id, LeaveStatus::Approved)
        .await
        .unwrap();
    let found = ctx.leaves.find_by_id(&leave.id).await.unwrap().unwrap();
    assert_eq!(found.status, Some(LeaveStatus::Approved));

    ctx.leaves.delete(&leave.id).await.unwrap();
    ctx.employees.delete(&ana.id).await.unwrap();
    ctx.departments.delete(&dept.id).await.unwrap();
    assert!(ctx.departments.find_all().await.unwrap().is_empty());

    store.drop_database().await.unwrap();
}
