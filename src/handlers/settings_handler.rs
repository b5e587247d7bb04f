use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    extractors::AuthenticatedUser,
    journal::timezone,
    models::{TimezoneResponse, UpdateTimezoneInput},
    AppError, AppResult, AppState,
};

/// GET /api/settings/timezone - The zone "today" resolves against
#[utoipa::path(
    get,
    path = "/api/settings/timezone",
    responses(
        (status = 200, description = "Effective timezone", body = TimezoneResponse)
    ),
    tag = "settings",
    security(("cookie_auth" = []))
)]
pub async fn get_timezone(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
) -> AppResult<Json<TimezoneResponse>> {
    let configured = timezone::user_timezone(state.journal.as_ref(), &auth.user_id).await?;

    let effective = if configured.is_empty() {
        state.config.default_timezone.clone()
    } else {
        configured
    };

    Ok(Json(TimezoneResponse { timezone: effective }))
}

/// PUT /api/settings/timezone
#[utoipa::path(
    put,
    path = "/api/settings/timezone",
    request_body = UpdateTimezoneInput,
    responses(
        (status = 200, description = "Timezone updated", body = TimezoneResponse),
        (status = 422, description = "Not a valid IANA zone id")
    ),
    tag = "settings",
    security(("cookie_auth" = []))
)]
pub async fn update_timezone(
    State(state): State<Arc<AppState>>,
    auth: AuthenticatedUser,
    Json(input): Json<UpdateTimezoneInput>,
) -> AppResult<Json<TimezoneResponse>> {
    if input.timezone.parse::<chrono_tz::Tz>().is_err() {
        return Err(AppError::Validation(format!(
            "Not a valid IANA zone id: {}",
            input.timezone
        )));
    }

    timezone::set_user_timezone(state.journal.as_ref(), &auth.user_id, &input.timezone).await?;

    Ok(Json(TimezoneResponse {
        timezone: input.timezone,
    }))
}
