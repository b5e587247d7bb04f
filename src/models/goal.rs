use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A user-level aspirational habit statement. The active list lives under its
/// own state key; entries additionally carry frozen copies taken at creation
/// time, which never track later edits to the active list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: Uuid,
    pub text: String,
    #[serde(default)]
    pub completed: bool,
    pub date_added: NaiveDate,
}

impl Goal {
    pub fn new(text: impl Into<String>, date_added: NaiveDate) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            completed: false,
            date_added,
        }
    }
}
