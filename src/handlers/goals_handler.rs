use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    extractors::AuthenticatedUser,
    journal::goals,
    models::{AddGoalInput, Goal, GoalMutationResponse, SetGoalCompletionInput},
    AppResult, AppState,
};

/// GET /api/goals - The user's goal list (active and completed)
#[utoipa::path(
    get,
    path = "/api/goals",
    responses(
        (status = 200, description = "All goals", body = Vec<Goal>)
    ),
    tag = "goals",
    security(("cookie_auth" = []))
)]
pub async fn get_goals(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<Goal>>> {
    let goals = goals::load(state.journal.as_ref(), &auth.user_id).await?;
    Ok(Json(goals))
}

/// POST /api/goals - Add a goal; mirrored into today's entry snapshot when one exists
#[utoipa::path(
    post,
    path = "/api/goals",
    request_body = AddGoalInput,
    responses(
        (status = 200, description = "Goal added", body = Goal),
        (status = 422, description = "Empty goal text")
    ),
    tag = "goals",
    security(("cookie_auth" = []))
)]
pub async fn add_goal(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<AddGoalInput>,
) -> AppResult<Json<Goal>> {
    let goal = goals::add(
        state.journal.as_ref(),
        &auth.user_id,
        &input.text,
        &state.config.default_timezone,
    )
    .await?;

    Ok(Json(goal))
}

/// DELETE /api/goals/{id} - Remove a goal from the active list and today's
/// snapshot; past entries keep their frozen copies
#[utoipa::path(
    delete,
    path = "/api/goals/{id}",
    params(
        ("id" = Uuid, Path, description = "Goal ID")
    ),
    responses(
        (status = 200, description = "Goal removed", body = GoalMutationResponse),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals",
    security(("cookie_auth" = []))
)]
pub async fn delete_goal(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<Uuid>,
    auth: AuthenticatedUser,
) -> AppResult<Json<GoalMutationResponse>> {
    goals::remove(
        state.journal.as_ref(),
        &auth.user_id,
        goal_id,
        &state.config.default_timezone,
    )
    .await?;

    Ok(Json(GoalMutationResponse {
        success: true,
        goal_id: Some(goal_id),
        message: Some("Goal removed".to_string()),
    }))
}

/// PUT /api/goals/{id}/completion
#[utoipa::path(
    put,
    path = "/api/goals/{id}/completion",
    params(
        ("id" = Uuid, Path, description = "Goal ID")
    ),
    request_body = SetGoalCompletionInput,
    responses(
        (status = 200, description = "Completion flag updated", body = Goal),
        (status = 404, description = "Goal not found")
    ),
    tag = "goals",
    security(("cookie_auth" = []))
)]
pub async fn set_goal_completion(
    State(state): State<Arc<AppState>>,
    Path(goal_id): Path<Uuid>,
    auth: AuthenticatedUser,
    Json(input): Json<SetGoalCompletionInput>,
) -> AppResult<Json<Goal>> {
    let goal = goals::set_completion(
        state.journal.as_ref(),
        &auth.user_id,
        goal_id,
        input.completed,
        &state.config.default_timezone,
    )
    .await?;

    Ok(Json(goal))
}

/// POST /api/goals/generate - Run the once-per-day suggestion generator;
/// returns the goals it added (possibly none)
#[utoipa::path(
    post,
    path = "/api/goals/generate",
    responses(
        (status = 200, description = "Newly generated goals", body = Vec<Goal>)
    ),
    tag = "goals",
    security(("cookie_auth" = []))
)]
pub async fn generate_goals(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<Goal>>> {
    let added = goals::generate_daily(
        state.journal.as_ref(),
        &auth.user_id,
        &state.config.default_timezone,
    )
    .await?;

    Ok(Json(added))
}
