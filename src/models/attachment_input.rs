use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An opaque attachment reference (typically a data URI); the ledger does no
/// size or type validation
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AttachmentInput {
    pub reference: String,
}

/// Replaces the entry's single voice-note slot wholesale
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct VoiceNoteInput {
    pub reference: String,
    pub transcription: String,
}
