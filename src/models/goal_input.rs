use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AddGoalInput {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetGoalCompletionInput {
    pub completed: bool,
}

/// Response after a successful goal mutation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalMutationResponse {
    pub success: bool,
    pub goal_id: Option<Uuid>,
    pub message: Option<String>,
}
