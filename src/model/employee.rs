use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[schema(
    example = json!({
        "id": "65a1f0c2e4b0a1b2c3d4e5f6",
        "name": "Ana",
        "email": "ana@x.com",
        "position": "Engineer",
        "department_id": "65a1f0c2e4b0a1b2c3d4e5f7",
        "hire_date": "2024-01-10"
    })
)]
pub struct Employee {
    /// Empty until the record is first saved.
    #[serde(default)]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f6")]
    pub id: String,

    #[schema(example = "Ana")]
    pub name: Option<String>,

    #[schema(example = "ana@x.com")]
    pub email: Option<String>,

    /// Free-text job title.
    #[schema(example = "Engineer")]
    pub position: Option<String>,

    /// Weak reference to a department; `None` means unassigned.
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7", nullable = true)]
    pub department_id: Option<String>,

    #[schema(example = "2024-01-10", value_type = Option<String>, format = "date")]
    pub hire_date: Option<NaiveDate>,
}
