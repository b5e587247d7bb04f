pub mod attachment_input;
pub mod entry;
pub mod entry_input;
pub mod goal;
pub mod goal_input;
pub mod settings_input;

pub use attachment_input::{AttachmentInput, VoiceNoteInput};
pub use entry::{is_known_mood, JournalEntry, MedicationItem, MetricValue, Priority, TaskItem, KNOWN_MOODS};
pub use entry_input::{CreateEntryInput, UpdateEntryInput};
pub use goal::Goal;
pub use goal_input::{AddGoalInput, GoalMutationResponse, SetGoalCompletionInput};
pub use settings_input::{SuccessResponse, TimezoneResponse, UpdateTimezoneInput};
