use chrono::NaiveDate;
use rand::Rng;
use serde_json::Value;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::{Goal, JournalEntry};
use crate::store::{JournalStore, StateKey};
use crate::{AppError, AppResult};

use super::{entries, timezone};

/// Candidate texts for the daily auto-suggestion generator.
pub const GOAL_SUGGESTION_POOL: [&str; 10] = [
    "Drink 8 glasses of water",
    "Take a 15 minute walk",
    "Get to bed before 11pm",
    "Stretch for 5 minutes after waking",
    "Write down one thing you're grateful for",
    "Spend 10 minutes outside",
    "Do a short breathing exercise",
    "Eat a piece of fruit",
    "Check in with a friend",
    "Put your phone away an hour before bed",
];

/// Suggestions are onboarding help; users with this many active goals or
/// recorded entries are left alone.
pub const SUGGESTION_ACTIVE_GOAL_LIMIT: usize = 3;
pub const SUGGESTION_ENTRY_LIMIT: usize = 3;
pub const DAILY_SUGGESTION_COUNT: usize = 3;

pub async fn load(store: &dyn JournalStore, user_id: &str) -> AppResult<Vec<Goal>> {
    let Some(raw) = store.read(user_id, StateKey::Goals).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_value::<Vec<Goal>>(raw) {
        Ok(goals) => Ok(goals),
        Err(e) => {
            tracing::warn!(user_id, error = %e, "Persisted goals failed to decode, starting empty");
            Ok(Vec::new())
        }
    }
}

/// Independent copies of the active (non-completed) goals, completed flag
/// reset regardless of the original. Embedded into a newly created entry.
pub(crate) async fn active_goal_copies(
    store: &dyn JournalStore,
    user_id: &str,
) -> AppResult<Vec<Goal>> {
    let goals = load(store, user_id).await?;
    Ok(goals
        .into_iter()
        .filter(|goal| !goal.completed)
        .map(|goal| Goal {
            completed: false,
            ..goal
        })
        .collect())
}

/// Persist the active list and, when an entry exists for `today`, the matching
/// mutation of that entry's embedded snapshot. Both blobs go through a single
/// transactional write so the two views cannot diverge on a partial failure.
/// Past entries' frozen snapshots are never touched.
async fn persist_with_snapshot(
    store: &dyn JournalStore,
    user_id: &str,
    goals: &[Goal],
    today: NaiveDate,
    mutate_snapshot: impl FnOnce(&mut JournalEntry),
) -> AppResult<()> {
    let mut writes = vec![(StateKey::Goals, serde_json::to_value(goals)?)];

    let mut all_entries = entries::load(store, user_id).await?;
    if let Some(entry) = all_entries.iter_mut().find(|entry| entry.date == today) {
        mutate_snapshot(entry);
        writes.push((StateKey::Entries, serde_json::to_value(&all_entries)?));
    }

    store.write_many(user_id, writes).await
}

pub async fn add(
    store: &dyn JournalStore,
    user_id: &str,
    text: &str,
    default_tz: &str,
) -> AppResult<Goal> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::Validation("Goal text cannot be empty".to_string()));
    }

    let today = timezone::today_for_user(store, user_id, default_tz).await?;
    let goal = Goal::new(text, today);

    let mut goals = load(store, user_id).await?;
    goals.push(goal.clone());

    let snapshot_copy = goal.clone();
    persist_with_snapshot(store, user_id, &goals, today, |entry| {
        entry.goals.push(snapshot_copy);
    })
    .await?;

    tracing::info!(user_id, goal_id = %goal.id, "Goal added");

    Ok(goal)
}

pub async fn remove(
    store: &dyn JournalStore,
    user_id: &str,
    goal_id: Uuid,
    default_tz: &str,
) -> AppResult<()> {
    let mut goals = load(store, user_id).await?;

    let Some(position) = goals.iter().position(|goal| goal.id == goal_id) else {
        return Err(AppError::NotFound(format!("Goal {} not found", goal_id)));
    };
    goals.remove(position);

    let today = timezone::today_for_user(store, user_id, default_tz).await?;
    persist_with_snapshot(store, user_id, &goals, today, |entry| {
        entry.goals.retain(|goal| goal.id != goal_id);
    })
    .await?;

    tracing::info!(user_id, goal_id = %goal_id, "Goal removed");

    Ok(())
}

pub async fn set_completion(
    store: &dyn JournalStore,
    user_id: &str,
    goal_id: Uuid,
    completed: bool,
    default_tz: &str,
) -> AppResult<Goal> {
    let mut goals = load(store, user_id).await?;

    let Some(goal) = goals.iter_mut().find(|goal| goal.id == goal_id) else {
        return Err(AppError::NotFound(format!("Goal {} not found", goal_id)));
    };
    goal.completed = completed;
    let updated = goal.clone();

    let today = timezone::today_for_user(store, user_id, default_tz).await?;
    persist_with_snapshot(store, user_id, &goals, today, |entry| {
        if let Some(snapshot) = entry.goals.iter_mut().find(|goal| goal.id == goal_id) {
            snapshot.completed = completed;
        }
    })
    .await?;

    Ok(updated)
}

/// Draw up to three distinct candidates not already among the active goals.
/// Selection order is random; callers must not depend on it.
pub fn pick_suggestions(active_texts: &HashSet<String>, rng: &mut impl Rng) -> Vec<&'static str> {
    use rand::seq::SliceRandom;

    let candidates: Vec<&'static str> = GOAL_SUGGESTION_POOL
        .iter()
        .copied()
        .filter(|candidate| !active_texts.contains(*candidate))
        .collect();

    candidates
        .choose_multiple(rng, DAILY_SUGGESTION_COUNT)
        .copied()
        .collect()
}

/// Once-per-day suggestion generation for new users: runs at most once per
/// calendar day (last-generated marker) and only while the user has fewer
/// than three active goals and fewer than three recorded entries.
pub async fn generate_daily(
    store: &dyn JournalStore,
    user_id: &str,
    default_tz: &str,
) -> AppResult<Vec<Goal>> {
    let today = timezone::today_for_user(store, user_id, default_tz).await?;
    let marker = today.to_string();

    if let Some(Value::String(last)) = store.read(user_id, StateKey::LastGoalGeneration).await? {
        if last == marker {
            return Ok(Vec::new());
        }
    }

    let mut goals = load(store, user_id).await?;
    let mut all_entries = entries::load(store, user_id).await?;

    let active_texts: HashSet<String> = goals
        .iter()
        .filter(|goal| !goal.completed)
        .map(|goal| goal.text.clone())
        .collect();

    if active_texts.len() >= SUGGESTION_ACTIVE_GOAL_LIMIT
        || all_entries.len() >= SUGGESTION_ENTRY_LIMIT
    {
        store
            .write(user_id, StateKey::LastGoalGeneration, Value::String(marker))
            .await?;
        return Ok(Vec::new());
    }

    let added: Vec<Goal> = pick_suggestions(&active_texts, &mut rand::thread_rng())
        .into_iter()
        .map(|text| Goal::new(text, today))
        .collect();
    goals.extend(added.iter().cloned());

    let mut writes = vec![
        (StateKey::Goals, serde_json::to_value(&goals)?),
        (StateKey::LastGoalGeneration, Value::String(marker)),
    ];
    if let Some(entry) = all_entries.iter_mut().find(|entry| entry.date == today) {
        entry.goals.extend(added.iter().cloned());
        writes.push((StateKey::Entries, serde_json::to_value(&all_entries)?));
    }
    store.write_many(user_id, writes).await?;

    tracing::info!(user_id, count = added.len(), "Daily goal suggestions generated");

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryJournalStore;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn today() -> NaiveDate {
        timezone::today_in("UTC", "UTC")
    }

    fn past(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[tokio::test]
    async fn test_add_lands_in_active_list_and_today_snapshot() {
        let store = MemoryJournalStore::new();
        entries::create(&store, "u1", today(), "UTC").await.unwrap();

        let goal = add(&store, "u1", "Take a 15 minute walk", "UTC").await.unwrap();

        let goals = load(&store, "u1").await.unwrap();
        assert_eq!(goals.len(), 1);

        let all = entries::load(&store, "u1").await.unwrap();
        let snapshot = &entries::get_by_date(&all, today()).unwrap().goals;
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot[0].id, goal.id);
    }

    #[tokio::test]
    async fn test_add_without_today_entry_touches_only_active_list() {
        // Goal snapshot consistency: the text appears in today's entry iff the
        // entry already existed at add time
        let store = MemoryJournalStore::new();

        add(&store, "u1", "Stretch", "UTC").await.unwrap();

        assert_eq!(load(&store, "u1").await.unwrap().len(), 1);
        assert!(entries::load(&store, "u1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_add_rejects_blank_text() {
        let store = MemoryJournalStore::new();
        let result = add(&store, "u1", "   ", "UTC").await;
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[tokio::test]
    async fn test_remove_updates_both_views_but_not_past_snapshots() {
        // Scenario: removal reaches the active list and today's entry while a
        // past entry's frozen snapshot keeps the goal
        let store = MemoryJournalStore::new();

        let goal = add(&store, "u1", "Meditate", "UTC").await.unwrap();

        let mut past_entry = entries::create(&store, "u1", past("2024-01-10"), "UTC")
            .await
            .unwrap();
        past_entry.goals.push(goal.clone());
        entries::update(&store, "u1", past_entry).await.unwrap();

        entries::create(&store, "u1", today(), "UTC").await.unwrap();

        remove(&store, "u1", goal.id, "UTC").await.unwrap();

        assert!(load(&store, "u1").await.unwrap().is_empty());

        let all = entries::load(&store, "u1").await.unwrap();
        let today_snapshot = &entries::get_by_date(&all, today()).unwrap().goals;
        assert!(today_snapshot.is_empty());

        let frozen = &entries::get_by_date(&all, past("2024-01-10")).unwrap().goals;
        assert_eq!(frozen.len(), 1);
        assert_eq!(frozen[0].id, goal.id);
    }

    #[tokio::test]
    async fn test_remove_unknown_goal_is_not_found() {
        let store = MemoryJournalStore::new();
        let result = remove(&store, "u1", Uuid::new_v4(), "UTC").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_set_completion_syncs_active_list_and_snapshot() {
        let store = MemoryJournalStore::new();
        entries::create(&store, "u1", today(), "UTC").await.unwrap();

        let goal = add(&store, "u1", "Eat a piece of fruit", "UTC").await.unwrap();
        set_completion(&store, "u1", goal.id, true, "UTC").await.unwrap();

        let goals = load(&store, "u1").await.unwrap();
        assert!(goals[0].completed);

        let all = entries::load(&store, "u1").await.unwrap();
        let snapshot = &entries::get_by_date(&all, today()).unwrap().goals;
        assert!(snapshot[0].completed);

        // Non-completed sets agree across both views
        let active: HashSet<Uuid> = goals.iter().filter(|g| !g.completed).map(|g| g.id).collect();
        let embedded: HashSet<Uuid> = snapshot.iter().filter(|g| !g.completed).map(|g| g.id).collect();
        assert_eq!(active, embedded);
    }

    #[tokio::test]
    async fn test_generate_daily_for_new_user() {
        let store = MemoryJournalStore::new();

        let added = generate_daily(&store, "u1", "UTC").await.unwrap();

        assert_eq!(added.len(), DAILY_SUGGESTION_COUNT);
        let texts: HashSet<&str> = added.iter().map(|g| g.text.as_str()).collect();
        assert_eq!(texts.len(), DAILY_SUGGESTION_COUNT, "suggestions must be distinct");
        for text in &texts {
            assert!(GOAL_SUGGESTION_POOL.contains(text));
        }
    }

    #[tokio::test]
    async fn test_generate_daily_runs_once_per_day() {
        let store = MemoryJournalStore::new();

        let first = generate_daily(&store, "u1", "UTC").await.unwrap();
        let second = generate_daily(&store, "u1", "UTC").await.unwrap();

        assert!(!first.is_empty());
        assert!(second.is_empty());
        assert_eq!(load(&store, "u1").await.unwrap().len(), first.len());
    }

    #[tokio::test]
    async fn test_generate_daily_skips_established_users() {
        let store = MemoryJournalStore::new();
        for date in ["2024-01-01", "2024-01-02", "2024-01-03"] {
            entries::create(&store, "u1", past(date), "UTC").await.unwrap();
        }

        let added = generate_daily(&store, "u1", "UTC").await.unwrap();
        assert!(added.is_empty());

        // The marker still stamps so the check does not rerun all day
        let marker = store
            .read("u1", StateKey::LastGoalGeneration)
            .await
            .unwrap();
        assert_eq!(marker, Some(Value::String(today().to_string())));
    }

    #[tokio::test]
    async fn test_generated_goals_flow_into_today_snapshot() {
        let store = MemoryJournalStore::new();
        entries::create(&store, "u1", today(), "UTC").await.unwrap();

        let added = generate_daily(&store, "u1", "UTC").await.unwrap();

        let all = entries::load(&store, "u1").await.unwrap();
        let snapshot = &entries::get_by_date(&all, today()).unwrap().goals;
        assert_eq!(snapshot.len(), added.len());
    }

    #[test]
    fn test_pick_suggestions_excludes_active_texts() {
        let mut rng = StdRng::seed_from_u64(7);
        let active: HashSet<String> = GOAL_SUGGESTION_POOL[..8]
            .iter()
            .map(|s| s.to_string())
            .collect();

        let picked = pick_suggestions(&active, &mut rng);

        // Only two candidates survive the exclusion
        assert_eq!(picked.len(), 2);
        for text in picked {
            assert!(!active.contains(text));
        }
    }

    #[tokio::test]
    async fn test_malformed_goals_blob_treated_as_empty() {
        let store = MemoryJournalStore::new();
        store.seed("u1", StateKey::Goals, serde_json::json!("nonsense"));

        assert!(load(&store, "u1").await.unwrap().is_empty());
    }
}
