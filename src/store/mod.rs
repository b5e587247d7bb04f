use async_trait::async_trait;
use serde_json::Value;

use crate::AppResult;

#[cfg(test)]
pub mod memory;
mod postgres;

pub use postgres::PgJournalStore;

/// Per-user state slots. The store itself never looks inside the blobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKey {
    Entries,
    Goals,
    DeletedChoreNames,
    DeletedWorkTaskNames,
    LastGoalGeneration,
    Timezone,
}

impl StateKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateKey::Entries => "entries",
            StateKey::Goals => "goals",
            StateKey::DeletedChoreNames => "deleted_chore_names",
            StateKey::DeletedWorkTaskNames => "deleted_work_task_names",
            StateKey::LastGoalGeneration => "last_goal_generation",
            StateKey::Timezone => "timezone",
        }
    }
}

/// The persistence collaborator: an opaque key-value store of JSON blobs
/// keyed by user id. Everything the journal persists goes through here.
#[async_trait]
pub trait JournalStore: Send + Sync {
    async fn read(&self, user_id: &str, key: StateKey) -> AppResult<Option<Value>>;

    async fn write(&self, user_id: &str, key: StateKey, value: Value) -> AppResult<()>;

    /// Either every write lands or none does. The goal dual-write (active
    /// list + today's entry snapshot) relies on this to never half-apply.
    async fn write_many(&self, user_id: &str, values: Vec<(StateKey, Value)>) -> AppResult<()>;
}
