use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::{
    extractors::AuthenticatedUser,
    journal::{
        entries,
        history::{self, NameField},
        timezone,
    },
    models::{JournalEntry, SuccessResponse},
    store::StateKey,
    AppResult, AppState,
};

fn names_on(entry: &JournalEntry, field: NameField) -> Vec<String> {
    match field {
        NameField::Medications => entry.medications.iter().map(|m| m.name.clone()).collect(),
        NameField::Chores => entry.chores.iter().map(|t| t.name.clone()).collect(),
        NameField::WorkTasks => entry.work_tasks.iter().map(|t| t.name.clone()).collect(),
    }
}

async fn distinct_for(
    state: &AppState,
    user_id: &str,
    field: NameField,
) -> AppResult<Vec<String>> {
    let all = entries::load(state.journal.as_ref(), user_id).await?;
    Ok(history::distinct_names(&all, field))
}

async fn suggestions_for(
    state: &AppState,
    user_id: &str,
    field: NameField,
) -> AppResult<Vec<String>> {
    let store = state.journal.as_ref();

    let all = entries::load(store, user_id).await?;
    let distinct = history::distinct_names(&all, field);

    let today = timezone::today_for_user(store, user_id, &state.config.default_timezone).await?;
    let current = entries::get_by_date(&all, today)
        .map(|entry| names_on(entry, field))
        .unwrap_or_default();

    let deleted = match field.deleted_names_key() {
        Some(key) => history::deleted_names(store, user_id, key).await?,
        None => Vec::new(),
    };

    Ok(history::available_suggestions(&distinct, &current, &deleted))
}

/// GET /api/history/medications - Every medication name ever used
#[utoipa::path(
    get,
    path = "/api/history/medications",
    responses(
        (status = 200, description = "Distinct medication names", body = Vec<String>)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn get_medication_names(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        distinct_for(&state, &auth.user_id, NameField::Medications).await?,
    ))
}

/// GET /api/history/chores - Every chore name ever used
#[utoipa::path(
    get,
    path = "/api/history/chores",
    responses(
        (status = 200, description = "Distinct chore names", body = Vec<String>)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn get_chore_names(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        distinct_for(&state, &auth.user_id, NameField::Chores).await?,
    ))
}

/// GET /api/history/work-tasks - Every work-task name ever used
#[utoipa::path(
    get,
    path = "/api/history/work-tasks",
    responses(
        (status = 200, description = "Distinct work-task names", body = Vec<String>)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn get_work_task_names(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        distinct_for(&state, &auth.user_id, NameField::WorkTasks).await?,
    ))
}

/// GET /api/history/medications/suggestions - Quick-add suggestions not
/// already on today's entry
#[utoipa::path(
    get,
    path = "/api/history/medications/suggestions",
    responses(
        (status = 200, description = "Available medication suggestions", body = Vec<String>)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn get_medication_suggestions(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        suggestions_for(&state, &auth.user_id, NameField::Medications).await?,
    ))
}

/// GET /api/history/chores/suggestions
#[utoipa::path(
    get,
    path = "/api/history/chores/suggestions",
    responses(
        (status = 200, description = "Available chore suggestions", body = Vec<String>)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn get_chore_suggestions(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        suggestions_for(&state, &auth.user_id, NameField::Chores).await?,
    ))
}

/// GET /api/history/work-tasks/suggestions
#[utoipa::path(
    get,
    path = "/api/history/work-tasks/suggestions",
    responses(
        (status = 200, description = "Available work-task suggestions", body = Vec<String>)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn get_work_task_suggestions(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<String>>> {
    Ok(Json(
        suggestions_for(&state, &auth.user_id, NameField::WorkTasks).await?,
    ))
}

/// DELETE /api/history/chores/{name} - Suppress a chore name from future
/// suggestions; history and past entries keep it
#[utoipa::path(
    delete,
    path = "/api/history/chores/{name}",
    params(
        ("name" = String, Path, description = "Chore name to suppress")
    ),
    responses(
        (status = 200, description = "Name suppressed", body = SuccessResponse)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn delete_chore_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    auth: AuthenticatedUser,
) -> AppResult<Json<SuccessResponse>> {
    history::soft_delete_name(
        state.journal.as_ref(),
        &auth.user_id,
        StateKey::DeletedChoreNames,
        &name,
    )
    .await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: Some(format!("\"{}\" will no longer be suggested", name)),
    }))
}

/// DELETE /api/history/work-tasks/{name}
#[utoipa::path(
    delete,
    path = "/api/history/work-tasks/{name}",
    params(
        ("name" = String, Path, description = "Work-task name to suppress")
    ),
    responses(
        (status = 200, description = "Name suppressed", body = SuccessResponse)
    ),
    tag = "history",
    security(("cookie_auth" = []))
)]
pub async fn delete_work_task_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
    auth: AuthenticatedUser,
) -> AppResult<Json<SuccessResponse>> {
    history::soft_delete_name(
        state.journal.as_ref(),
        &auth.user_id,
        StateKey::DeletedWorkTaskNames,
        &name,
    )
    .await?;

    Ok(Json(SuccessResponse {
        success: true,
        message: Some(format!("\"{}\" will no longer be suggested", name)),
    }))
}
