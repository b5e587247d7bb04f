use uuid::Uuid;

use crate::models::JournalEntry;
use crate::store::JournalStore;
use crate::{AppError, AppResult};

use super::entries;

/// Append an attachment reference to an entry. References are opaque strings
/// (typically data URIs); size and type validation is the caller's problem.
pub async fn attach(
    store: &dyn JournalStore,
    user_id: &str,
    entry_id: Uuid,
    reference: String,
) -> AppResult<JournalEntry> {
    with_entry(store, user_id, entry_id, |entry| {
        entry.attachments.push(reference);
        true
    })
    .await
}

/// Remove the first exact-match occurrence of `reference`. A reference that is
/// not present leaves the entry untouched; only a missing entry is an error.
pub async fn detach(
    store: &dyn JournalStore,
    user_id: &str,
    entry_id: Uuid,
    reference: &str,
) -> AppResult<JournalEntry> {
    with_entry(store, user_id, entry_id, |entry| {
        match entry.attachments.iter().position(|r| r == reference) {
            Some(position) => {
                entry.attachments.remove(position);
                true
            }
            None => false,
        }
    })
    .await
}

/// Replace the entry's single voice-note slot and transcription wholesale.
pub async fn set_voice_note(
    store: &dyn JournalStore,
    user_id: &str,
    entry_id: Uuid,
    reference: String,
    transcription: String,
) -> AppResult<JournalEntry> {
    with_entry(store, user_id, entry_id, |entry| {
        entry.audio_notes = reference;
        entry.audio_transcription = transcription;
        true
    })
    .await
}

/// Apply `mutate` to the entry with `entry_id` and persist when it reports a
/// change.
async fn with_entry(
    store: &dyn JournalStore,
    user_id: &str,
    entry_id: Uuid,
    mutate: impl FnOnce(&mut JournalEntry) -> bool,
) -> AppResult<JournalEntry> {
    let mut all_entries = entries::load(store, user_id).await?;

    let Some(entry) = all_entries.iter_mut().find(|entry| entry.id == entry_id) else {
        return Err(AppError::NotFound(format!(
            "Journal entry {} not found",
            entry_id
        )));
    };

    let changed = mutate(entry);
    let updated = entry.clone();

    if changed {
        entries::persist(store, user_id, &all_entries).await?;
    }

    Ok(updated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryJournalStore;
    use chrono::NaiveDate;

    async fn store_with_entry() -> (MemoryJournalStore, JournalEntry) {
        let store = MemoryJournalStore::new();
        let entry = entries::create(
            &store,
            "u1",
            "2024-01-15".parse::<NaiveDate>().unwrap(),
            "UTC",
        )
        .await
        .unwrap();
        (store, entry)
    }

    #[tokio::test]
    async fn test_attach_appends_reference() {
        let (store, entry) = store_with_entry().await;

        attach(&store, "u1", entry.id, "data:image/png;base64,AAAA".to_string())
            .await
            .unwrap();
        let updated = attach(&store, "u1", entry.id, "data:image/png;base64,BBBB".to_string())
            .await
            .unwrap();

        assert_eq!(
            updated.attachments,
            vec!["data:image/png;base64,AAAA", "data:image/png;base64,BBBB"]
        );
    }

    #[tokio::test]
    async fn test_detach_removes_first_match_only() {
        let (store, entry) = store_with_entry().await;

        attach(&store, "u1", entry.id, "ref-a".to_string()).await.unwrap();
        attach(&store, "u1", entry.id, "ref-a".to_string()).await.unwrap();

        let updated = detach(&store, "u1", entry.id, "ref-a").await.unwrap();
        assert_eq!(updated.attachments, vec!["ref-a"]);
    }

    #[tokio::test]
    async fn test_detach_absent_reference_is_noop() {
        let (store, entry) = store_with_entry().await;

        attach(&store, "u1", entry.id, "ref-a".to_string()).await.unwrap();
        let updated = detach(&store, "u1", entry.id, "ref-b").await.unwrap();

        assert_eq!(updated.attachments, vec!["ref-a"]);
    }

    #[tokio::test]
    async fn test_missing_entry_is_not_found() {
        let (store, _) = store_with_entry().await;

        let result = attach(&store, "u1", uuid::Uuid::new_v4(), "ref".to_string()).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_voice_note_replaces_wholesale() {
        let (store, entry) = store_with_entry().await;

        set_voice_note(
            &store,
            "u1",
            entry.id,
            "voice-1.webm".to_string(),
            "first take".to_string(),
        )
        .await
        .unwrap();

        let updated = set_voice_note(
            &store,
            "u1",
            entry.id,
            "voice-2.webm".to_string(),
            "second take".to_string(),
        )
        .await
        .unwrap();

        assert_eq!(updated.audio_notes, "voice-2.webm");
        assert_eq!(updated.audio_transcription, "second take");
    }
}
