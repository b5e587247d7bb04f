use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use moka::future::Cache;
use once_cell::sync::Lazy;
use serde_json::Value;
use std::time::Duration;

use crate::store::{JournalStore, StateKey};
use crate::AppResult;

// Cache configured zone ids per user (5-minute TTL); invalidated on settings writes
static TZ_CACHE: Lazy<Cache<String, String>> = Lazy::new(|| {
    Cache::builder()
        .time_to_live(Duration::from_secs(300))
        .max_capacity(10_000)
        .build()
});

/// Parse an IANA zone id, falling back to `default` (and then to the built-in
/// fallback) instead of erroring. An empty id means "unset" and is not logged.
pub fn resolve_zone(tz: &str, default: &str) -> Tz {
    match tz.parse::<Tz>() {
        Ok(zone) => zone,
        Err(_) => {
            if !tz.is_empty() {
                tracing::warn!(timezone = tz, "Unparseable timezone id, using default zone");
            }
            default
                .parse::<Tz>()
                .unwrap_or(chrono_tz::America::New_York)
        }
    }
}

/// The current calendar date as seen from `tz`.
pub fn today_in(tz: &str, default: &str) -> NaiveDate {
    Utc::now().with_timezone(&resolve_zone(tz, default)).date_naive()
}

/// Navigation guard: is `date` past "today" in the given zone?
pub fn is_future_date(date: NaiveDate, tz: &str, default: &str) -> bool {
    date > today_in(tz, default)
}

/// The user's configured zone id; empty string when unset.
pub async fn user_timezone(store: &dyn JournalStore, user_id: &str) -> AppResult<String> {
    if let Some(tz) = TZ_CACHE.get(user_id).await {
        return Ok(tz);
    }

    let tz = match store.read(user_id, StateKey::Timezone).await? {
        Some(Value::String(tz)) => tz,
        _ => String::new(),
    };

    TZ_CACHE.insert(user_id.to_string(), tz.clone()).await;
    Ok(tz)
}

/// Persist the user's zone id. Callers validate the id first; the resolver
/// itself tolerates anything.
pub async fn set_user_timezone(
    store: &dyn JournalStore,
    user_id: &str,
    tz: &str,
) -> AppResult<()> {
    store
        .write(user_id, StateKey::Timezone, Value::String(tz.to_string()))
        .await?;
    TZ_CACHE.invalidate(user_id).await;
    Ok(())
}

/// "Today" for this user: their configured zone when set, the server default
/// otherwise.
pub async fn today_for_user(
    store: &dyn JournalStore,
    user_id: &str,
    default: &str,
) -> AppResult<NaiveDate> {
    let tz = user_timezone(store, user_id).await?;
    Ok(today_in(&tz, default))
}
