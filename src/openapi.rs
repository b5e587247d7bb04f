use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::Modify;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Daybook API",
        version = "1.0.0",
        description = "Backend API for the Daybook wellness journal",
        contact(
            name = "API Support",
            email = "support@daybook.app"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    ),
    paths(
        // Health
        crate::handlers::health::health_check,

        // Entries
        crate::handlers::entries_handler::get_entries,
        crate::handlers::entries_handler::get_today,
        crate::handlers::entries_handler::get_by_date,
        crate::handlers::entries_handler::create_entry,
        crate::handlers::entries_handler::update_entry,

        // Attachments
        crate::handlers::attachments_handler::attach_reference,
        crate::handlers::attachments_handler::detach_reference,
        crate::handlers::attachments_handler::set_voice_note,

        // Goals
        crate::handlers::goals_handler::get_goals,
        crate::handlers::goals_handler::add_goal,
        crate::handlers::goals_handler::delete_goal,
        crate::handlers::goals_handler::set_goal_completion,
        crate::handlers::goals_handler::generate_goals,

        // History
        crate::handlers::history_handler::get_medication_names,
        crate::handlers::history_handler::get_chore_names,
        crate::handlers::history_handler::get_work_task_names,
        crate::handlers::history_handler::get_medication_suggestions,
        crate::handlers::history_handler::get_chore_suggestions,
        crate::handlers::history_handler::get_work_task_suggestions,
        crate::handlers::history_handler::delete_chore_name,
        crate::handlers::history_handler::delete_work_task_name,

        // Settings
        crate::handlers::settings_handler::get_timezone,
        crate::handlers::settings_handler::update_timezone,
    ),
    components(
        schemas(
            // Core models
            crate::models::JournalEntry,
            crate::models::TaskItem,
            crate::models::MedicationItem,
            crate::models::Priority,
            crate::models::MetricValue,
            crate::models::Goal,

            // Input models
            crate::models::CreateEntryInput,
            crate::models::UpdateEntryInput,
            crate::models::AddGoalInput,
            crate::models::SetGoalCompletionInput,
            crate::models::GoalMutationResponse,
            crate::models::AttachmentInput,
            crate::models::VoiceNoteInput,
            crate::models::UpdateTimezoneInput,
            crate::models::TimezoneResponse,
            crate::models::SuccessResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check"),
        (name = "entries", description = "Journal entry management"),
        (name = "attachments", description = "Entry attachments and voice notes"),
        (name = "goals", description = "Goal management and daily suggestions"),
        (name = "history", description = "Name history and quick-add suggestions"),
        (name = "settings", description = "Per-user settings"),
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new("__session"))),
            )
        }
    }
}
