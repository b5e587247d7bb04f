use std::collections::HashSet;

use crate::models::JournalEntry;
use crate::store::{JournalStore, StateKey};
use crate::AppResult;

/// Which name list of an entry the indexer scans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameField {
    Medications,
    Chores,
    WorkTasks,
}

impl NameField {
    /// State key of the matching soft-delete list; medications have none.
    pub fn deleted_names_key(&self) -> Option<StateKey> {
        match self {
            NameField::Medications => None,
            NameField::Chores => Some(StateKey::DeletedChoreNames),
            NameField::WorkTasks => Some(StateKey::DeletedWorkTaskNames),
        }
    }
}

/// Every name ever used across the collection, case-sensitive, first-seen
/// order. Soft-deleted names stay in here; deletion never erases history.
pub fn distinct_names(entries: &[JournalEntry], field: NameField) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut names: Vec<String> = Vec::new();

    for entry in entries {
        match field {
            NameField::Medications => {
                for medication in &entry.medications {
                    if seen.insert(&medication.name) {
                        names.push(medication.name.clone());
                    }
                }
            }
            NameField::Chores => {
                for task in &entry.chores {
                    if seen.insert(&task.name) {
                        names.push(task.name.clone());
                    }
                }
            }
            NameField::WorkTasks => {
                for task in &entry.work_tasks {
                    if seen.insert(&task.name) {
                        names.push(task.name.clone());
                    }
                }
            }
        }
    }

    names
}

/// Quick-add suggestions: distinct names minus those already on the current
/// day's list and minus soft-deleted names, both compared case-insensitively.
pub fn available_suggestions(
    distinct: &[String],
    current_list: &[String],
    deleted: &[String],
) -> Vec<String> {
    let current: HashSet<String> = current_list.iter().map(|name| name.to_lowercase()).collect();
    let suppressed: HashSet<String> = deleted.iter().map(|name| name.to_lowercase()).collect();

    distinct
        .iter()
        .filter(|name| {
            let folded = name.to_lowercase();
            !current.contains(&folded) && !suppressed.contains(&folded)
        })
        .cloned()
        .collect()
}

pub async fn deleted_names(
    store: &dyn JournalStore,
    user_id: &str,
    key: StateKey,
) -> AppResult<Vec<String>> {
    let Some(raw) = store.read(user_id, key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_value::<Vec<String>>(raw) {
        Ok(names) => Ok(names),
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Persisted deleted-name list failed to decode, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Suppress `name` from future suggestion lists. History and past entries are
/// untouched; the user gets it back only by retyping the name.
pub async fn soft_delete_name(
    store: &dyn JournalStore,
    user_id: &str,
    key: StateKey,
    name: &str,
) -> AppResult<()> {
    let mut names = deleted_names(store, user_id, key).await?;

    let folded = name.to_lowercase();
    if names.iter().any(|existing| existing.to_lowercase() == folded) {
        return Ok(());
    }

    names.push(name.to_string());
    store
        .write(user_id, key, serde_json::to_value(&names)?)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MedicationItem, Priority, TaskItem};
    use crate::store::memory::MemoryJournalStore;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn medication(name: &str) -> MedicationItem {
        MedicationItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            taken: false,
            note: None,
            priority: Priority::None,
        }
    }

    fn chore(name: &str) -> TaskItem {
        TaskItem {
            id: Uuid::new_v4(),
            name: name.to_string(),
            completed: false,
            priority: Priority::None,
        }
    }

    fn entry_on(date: &str) -> JournalEntry {
        JournalEntry::new(date.parse::<NaiveDate>().unwrap(), Vec::new())
    }

    #[test]
    fn test_distinct_names_scans_all_entries_case_sensitive() {
        let mut first = entry_on("2024-01-01");
        first.medications = vec![medication("Aspirin"), medication("Ibuprofen")];
        let mut second = entry_on("2024-01-02");
        second.medications = vec![medication("Aspirin"), medication("aspirin")];

        let names = distinct_names(&[first, second], NameField::Medications);

        // Case-sensitive: "Aspirin" and "aspirin" are distinct history entries
        assert_eq!(names, vec!["Aspirin", "Ibuprofen", "aspirin"]);
    }

    #[test]
    fn test_suggestions_exclude_current_list_case_insensitively() {
        // Scenario: Aspirin used in past entries and present today is not
        // suggested again, but remains in history
        let mut past = entry_on("2024-01-01");
        past.medications = vec![medication("Aspirin"), medication("Vitamin D")];

        let distinct = distinct_names(std::slice::from_ref(&past), NameField::Medications);
        assert!(distinct.contains(&"Aspirin".to_string()));

        let current = vec!["aspirin".to_string()];
        let suggestions = available_suggestions(&distinct, &current, &[]);

        assert_eq!(suggestions, vec!["Vitamin D"]);
    }

    #[test]
    fn test_soft_deleted_names_suppressed_but_history_preserved() {
        let mut past = entry_on("2024-01-01");
        past.chores = vec![chore("Laundry"), chore("Dishes")];

        let distinct = distinct_names(std::slice::from_ref(&past), NameField::Chores);
        let suggestions = available_suggestions(&distinct, &[], &["Laundry".to_string()]);

        assert_eq!(suggestions, vec!["Dishes"]);
        // History still includes the deleted name
        assert!(distinct.contains(&"Laundry".to_string()));
    }

    #[tokio::test]
    async fn test_soft_delete_persists_and_dedupes() {
        let store = MemoryJournalStore::new();

        soft_delete_name(&store, "u1", StateKey::DeletedChoreNames, "Laundry")
            .await
            .unwrap();
        soft_delete_name(&store, "u1", StateKey::DeletedChoreNames, "laundry")
            .await
            .unwrap();
        soft_delete_name(&store, "u1", StateKey::DeletedChoreNames, "Vacuum")
            .await
            .unwrap();

        let names = deleted_names(&store, "u1", StateKey::DeletedChoreNames)
            .await
            .unwrap();
        assert_eq!(names, vec!["Laundry", "Vacuum"]);
    }

    #[tokio::test]
    async fn test_chore_and_work_task_lists_are_separate() {
        let store = MemoryJournalStore::new();

        soft_delete_name(&store, "u1", StateKey::DeletedChoreNames, "Laundry")
            .await
            .unwrap();

        let work = deleted_names(&store, "u1", StateKey::DeletedWorkTaskNames)
            .await
            .unwrap();
        assert!(work.is_empty());
    }
}
