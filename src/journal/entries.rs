use chrono::NaiveDate;
use serde_json::Value;
use std::collections::HashSet;

use crate::models::{is_known_mood, JournalEntry};
use crate::store::{JournalStore, StateKey};
use crate::{AppError, AppResult};

use super::{goals, timezone};

/// Per-category note fields are capped at the input boundary; the store
/// re-validates rather than trusting callers.
pub const NOTE_CHAR_LIMIT: usize = 100;

pub const SYMPTOM_LEVEL_MAX: u8 = 10;

/// Load the user's entry collection: raw blob, migrated entry by entry, then
/// decoded. Storage order is preserved; sorting is a presentation concern.
/// A blob that fails to parse is treated as an empty collection so corrupt
/// local state never bricks the account.
pub async fn load(store: &dyn JournalStore, user_id: &str) -> AppResult<Vec<JournalEntry>> {
    let Some(raw) = store.read(user_id, StateKey::Entries).await? else {
        return Ok(Vec::new());
    };

    let Value::Array(items) = raw else {
        tracing::warn!(user_id, "Persisted entries blob is not an array, starting empty");
        return Ok(Vec::new());
    };

    let migrated: Vec<Value> = items.into_iter().map(super::migrate::migrate_entry).collect();

    match serde_json::from_value::<Vec<JournalEntry>>(Value::Array(migrated)) {
        Ok(entries) => Ok(entries),
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Persisted entries failed to decode, starting empty");
            Ok(Vec::new())
        }
    }
}

pub fn get_by_date(entries: &[JournalEntry], date: NaiveDate) -> Option<&JournalEntry> {
    entries.iter().find(|entry| entry.date == date)
}

/// Create the entry for `date`. A date that already has an entry is rejected;
/// overwriting would destroy user data. Only a creation for "today" embeds
/// the active goal snapshot; explicit past-date creation starts with none.
pub async fn create(
    store: &dyn JournalStore,
    user_id: &str,
    date: NaiveDate,
    default_tz: &str,
) -> AppResult<JournalEntry> {
    let mut entries = load(store, user_id).await?;

    if get_by_date(&entries, date).is_some() {
        return Err(AppError::Conflict(format!(
            "An entry for {} already exists",
            date
        )));
    }

    let today = timezone::today_for_user(store, user_id, default_tz).await?;
    let goal_snapshot = if date == today {
        goals::active_goal_copies(store, user_id).await?
    } else {
        Vec::new()
    };

    let entry = JournalEntry::new(date, goal_snapshot);
    entries.push(entry.clone());
    persist(store, user_id, &entries).await?;

    tracing::info!(user_id, date = %date, entry_id = %entry.id, "Journal entry created");

    Ok(entry)
}

/// Replace the stored entry matching `entry.id`. An unknown id is a typed
/// NotFound so callers can tell "already correct" from "target missing".
pub async fn update(
    store: &dyn JournalStore,
    user_id: &str,
    entry: JournalEntry,
) -> AppResult<JournalEntry> {
    validate(&entry)?;

    let mut entries = load(store, user_id).await?;

    let Some(slot) = entries.iter_mut().find(|e| e.id == entry.id) else {
        return Err(AppError::NotFound(format!(
            "Journal entry {} not found",
            entry.id
        )));
    };

    if slot.date != entry.date {
        return Err(AppError::Validation(
            "The date of an entry cannot be changed".to_string(),
        ));
    }

    *slot = entry.clone();
    persist(store, user_id, &entries).await?;

    Ok(entry)
}

/// The full collection is rewritten on every mutation; entry counts stay in
/// the low thousands (one per day), so the scan-and-replace is acceptable.
pub(crate) async fn persist(
    store: &dyn JournalStore,
    user_id: &str,
    entries: &[JournalEntry],
) -> AppResult<()> {
    store
        .write(user_id, StateKey::Entries, serde_json::to_value(entries)?)
        .await
}

fn validate(entry: &JournalEntry) -> AppResult<()> {
    for (field, note) in [
        ("moodNote", &entry.mood_note),
        ("exercisesNote", &entry.exercises_note),
        ("selfCareNote", &entry.self_care_note),
    ] {
        if note.chars().count() > NOTE_CHAR_LIMIT {
            return Err(AppError::Validation(format!(
                "{} exceeds the {}-character limit",
                field, NOTE_CHAR_LIMIT
            )));
        }
    }

    if !is_known_mood(&entry.mood) {
        return Err(AppError::Validation(format!(
            "Unknown mood identifier: {}",
            entry.mood
        )));
    }

    if entry.pain_level > SYMPTOM_LEVEL_MAX || entry.energy_level > SYMPTOM_LEVEL_MAX {
        return Err(AppError::Validation(format!(
            "Symptom levels must be between 0 and {}",
            SYMPTOM_LEVEL_MAX
        )));
    }

    let mut task_ids = HashSet::new();
    for task in entry.chores.iter().chain(&entry.work_tasks) {
        if !task_ids.insert(task.id) {
            return Err(AppError::Validation(format!(
                "Duplicate task id: {}",
                task.id
            )));
        }
    }

    let mut medication_ids = HashSet::new();
    for medication in &entry.medications {
        if !medication_ids.insert(medication.id) {
            return Err(AppError::Validation(format!(
                "Duplicate medication id: {}",
                medication.id
            )));
        }
    }

    Ok(())
}
