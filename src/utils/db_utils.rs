use chrono::{DateTime, NaiveDate, NaiveTime};
use mongodb::bson::{self, Bson, Document};

use crate::store::{StoreError, StoreResult};


/// ===============================
/// Rust value -> BSON field value
/// ===============================
pub fn text_value(value: Option<&str>) -> Bson {
    match value {
        Some(s) => Bson::String(s.to_string()),
        None => Bson::Null,
    }
}

/// Calendar days are stored as a UTC datetime at midnight.
pub fn date_value(value: Option<NaiveDate>) -> Bson {
    match value {
        Some(d) => {
            let millis = d.and_time(NaiveTime::MIN).and_utc().timestamp_millis();
            Bson::DateTime(bson::DateTime::from_millis(millis))
        }
        None => Bson::Null,
    }
}


/// ===============================
/// BSON field -> Rust value
/// ===============================
/// Missing and null both decode to `None`; any other type is an error.
pub fn read_text(doc: &Document, field: &str) -> StoreResult<Option<String>> {
    match doc.get(field) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::String(s)) => Ok(Some(s.clone())),
        Some(other) => Err(StoreError::decode(
            field,
            format!("expected string, found {:?}", other.element_type()),
        )),
    }
}

pub fn read_date(doc: &Document, field: &str) -> StoreResult<Option<NaiveDate>> {
    match doc.get(field) {
        None | Some(Bson::Null) => Ok(None),
        Some(Bson::DateTime(dt)) => DateTime::from_timestamp_millis(dt.timestamp_millis())
            .map(|t| Some(t.date_naive()))
            .ok_or_else(|| StoreError::decode(field, "datetime out of range")),
        Some(other) => Err(StoreError::decode(
            field,
            format!("expected datetime, found {:?}", other.element_type()),
        )),
    }
}

/// The `_id` of a stored document as its 24-hex string form.
pub fn read_id(doc: &Document) -> StoreResult<String> {
    match doc.get("_id") {
        Some(Bson::ObjectId(id)) => Ok(id.to_hex()),
        Some(other) => Err(StoreError::decode(
            "_id",
            format!("expected object id, found {:?}", other.element_type()),
        )),
        None => Err(StoreError::decode("_id", "missing")),
    }
}
