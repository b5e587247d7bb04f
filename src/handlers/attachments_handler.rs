use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    extractors::AuthenticatedUser,
    journal::attachments,
    models::{AttachmentInput, JournalEntry, VoiceNoteInput},
    AppError, AppResult, AppState,
};

/// POST /api/entries/{id}/attachments - Append an attachment reference
#[utoipa::path(
    post,
    path = "/api/entries/{id}/attachments",
    params(
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    request_body = AttachmentInput,
    responses(
        (status = 200, description = "Attachment appended", body = JournalEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "attachments",
    security(("cookie_auth" = []))
)]
pub async fn attach_reference(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    auth: AuthenticatedUser,
    Json(input): Json<AttachmentInput>,
) -> AppResult<Json<JournalEntry>> {
    let entry = attachments::attach(
        state.journal.as_ref(),
        &auth.user_id,
        entry_id,
        input.reference,
    )
    .await?;

    Ok(Json(entry))
}

/// DELETE /api/entries/{id}/attachments - Remove the first exact-match
/// occurrence of the reference; removing an absent reference changes nothing
#[utoipa::path(
    delete,
    path = "/api/entries/{id}/attachments",
    params(
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    request_body = AttachmentInput,
    responses(
        (status = 200, description = "Attachment removed (or was absent)", body = JournalEntry),
        (status = 404, description = "Entry not found")
    ),
    tag = "attachments",
    security(("cookie_auth" = []))
)]
pub async fn detach_reference(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    auth: AuthenticatedUser,
    Json(input): Json<AttachmentInput>,
) -> AppResult<Json<JournalEntry>> {
    let entry = attachments::detach(
        state.journal.as_ref(),
        &auth.user_id,
        entry_id,
        &input.reference,
    )
    .await?;

    Ok(Json(entry))
}

/// PUT /api/entries/{id}/voice-note - Replace the entry's voice note and
/// transcription (premium feature)
#[utoipa::path(
    put,
    path = "/api/entries/{id}/voice-note",
    params(
        ("id" = Uuid, Path, description = "Entry ID")
    ),
    request_body = VoiceNoteInput,
    responses(
        (status = 200, description = "Voice note set", body = JournalEntry),
        (status = 403, description = "Voice journaling requires a premium subscription"),
        (status = 404, description = "Entry not found")
    ),
    tag = "attachments",
    security(("cookie_auth" = []))
)]
pub async fn set_voice_note(
    State(state): State<Arc<AppState>>,
    Path(entry_id): Path<Uuid>,
    auth: AuthenticatedUser,
    Json(input): Json<VoiceNoteInput>,
) -> AppResult<Json<JournalEntry>> {
    // Voice journaling is a premium feature
    if !auth.premium {
        return Err(AppError::Forbidden(
            "Voice journaling requires a premium subscription".to_string(),
        ));
    }

    let entry = attachments::set_voice_note(
        state.journal.as_ref(),
        &auth.user_id,
        entry_id,
        input.reference,
        input.transcription,
    )
    .await?;

    Ok(Json(entry))
}
