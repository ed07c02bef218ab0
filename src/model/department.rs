use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Department {
    #[serde(default)]
    #[schema(example = "65a1f0c2e4b0a1b2c3d4e5f7")]
    pub id: String,
    #[schema(example = "Engineering")]
    pub name: Option<String>,
    #[schema(example = "R&D")]
    pub description: Option<String>,
}
