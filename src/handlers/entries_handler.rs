use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    extractors::AuthenticatedUser,
    journal::{entries, timezone},
    models::{CreateEntryInput, JournalEntry, UpdateEntryInput},
    AppError, AppResult, AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
pub struct ByDateQuery {
    pub date: String,
}

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|e| AppError::BadRequest(format!("Invalid date: {}", e)))
}

/// GET /api/entries - The user's full entry collection, in storage order
#[utoipa::path(
    get,
    path = "/api/entries",
    responses(
        (status = 200, description = "All journal entries", body = Vec<JournalEntry>)
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn get_entries(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<Vec<JournalEntry>>> {
    let all = entries::load(state.journal.as_ref(), &auth.user_id).await?;
    Ok(Json(all))
}

/// GET /api/entries/today - The entry for "today" in the user's timezone
#[utoipa::path(
    get,
    path = "/api/entries/today",
    responses(
        (status = 200, description = "Today's entry", body = JournalEntry),
        (status = 404, description = "No entry for today yet")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn get_today(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<JournalEntry>> {
    let store = state.journal.as_ref();
    let today =
        timezone::today_for_user(store, &auth.user_id, &state.config.default_timezone).await?;

    let all = entries::load(store, &auth.user_id).await?;
    let entry = entries::get_by_date(&all, today)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No entry for {}", today)))?;

    Ok(Json(entry))
}

/// GET /api/entries/by-date?date=YYYY-MM-DD
#[utoipa::path(
    get,
    path = "/api/entries/by-date",
    params(ByDateQuery),
    responses(
        (status = 200, description = "Entry for the given date", body = JournalEntry),
        (status = 400, description = "Invalid date format"),
        (status = 404, description = "No entry for that date")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn get_by_date(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Query(query): Query<ByDateQuery>,
) -> AppResult<Json<JournalEntry>> {
    let date = parse_date(&query.date)?;

    let all = entries::load(state.journal.as_ref(), &auth.user_id).await?;
    let entry = entries::get_by_date(&all, date)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("No entry for {}", date)))?;

    Ok(Json(entry))
}

/// POST /api/entries - Create the entry for a date
#[utoipa::path(
    post,
    path = "/api/entries",
    request_body = CreateEntryInput,
    responses(
        (status = 200, description = "Entry created", body = JournalEntry),
        (status = 409, description = "An entry for that date already exists"),
        (status = 422, description = "Date lies in the future")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<CreateEntryInput>,
) -> AppResult<Json<JournalEntry>> {
    let store = state.journal.as_ref();

    let tz = timezone::user_timezone(store, &auth.user_id).await?;
    if timezone::is_future_date(input.date, &tz, &state.config.default_timezone) {
        return Err(AppError::Validation(
            "Cannot create an entry for a future date".to_string(),
        ));
    }

    let entry = entries::create(
        store,
        &auth.user_id,
        input.date,
        &state.config.default_timezone,
    )
    .await?;

    Ok(Json(entry))
}

/// PUT /api/entries/{id} - Patch an entry's fields
#[utoipa::path(
    put,
    path = "/api/entries/{id}",
    params(
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    request_body = UpdateEntryInput,
    responses(
        (status = 200, description = "Entry updated", body = JournalEntry),
        (status = 403, description = "Custom trackers require a premium subscription"),
        (status = 404, description = "Entry not found"),
        (status = 422, description = "Validation failed")
    ),
    tag = "entries",
    security(("cookie_auth" = []))
)]
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    auth: AuthenticatedUser,
    Json(input): Json<UpdateEntryInput>,
) -> AppResult<Json<JournalEntry>> {
    // Custom trackers are a premium feature
    if input.touches_custom_metrics() && !auth.premium {
        return Err(AppError::Forbidden(
            "Custom trackers require a premium subscription".to_string(),
        ));
    }

    let store = state.journal.as_ref();
    let all = entries::load(store, &auth.user_id).await?;

    let mut entry = all
        .iter()
        .find(|entry| entry.id == entry_id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Journal entry {} not found", entry_id)))?;

    input.apply(&mut entry);

    let updated = entries::update(store, &auth.user_id, entry).await?;
    Ok(Json(updated))
}
