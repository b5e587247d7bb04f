use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateTimezoneInput {
    pub timezone: String,
}

/// The zone entries resolve "today" against: the user's configured zone when
/// set, otherwise the server default
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TimezoneResponse {
    pub timezone: String,
}

/// Generic success response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SuccessResponse {
    pub success: bool,
    pub message: Option<String>,
}
