use serde_json::{json, Map, Value};

/// Energy level an earlier schema wrote when the slider was never touched.
/// A genuine historical 5 cannot be told apart from an unset one and is
/// squashed with it.
pub const LEGACY_ENERGY_SENTINEL: u64 = 5;

const EMPTY_STRING_FIELDS: [&str; 5] = [
    "moodNote",
    "exercisesNote",
    "selfCareNote",
    "audioNotes",
    "audioTranscription",
];

const TASK_LIST_FIELDS: [&str; 3] = ["chores", "workTasks", "medications"];

/// Normalize one raw persisted entry to the current schema. Applied to every
/// entry on load; each rule is independent and idempotent, and no rule
/// re-derives a value once set. Non-object input passes through untouched and
/// fails typed decoding downstream.
pub fn migrate_entry(mut raw: Value) -> Value {
    let Some(obj) = raw.as_object_mut() else {
        return raw;
    };

    for field in EMPTY_STRING_FIELDS {
        ensure_default(obj, field, Value::String(String::new()));
    }
    ensure_default(obj, "attachments", json!([]));
    ensure_default(obj, "customMetrics", json!({}));
    ensure_default(obj, "goals", json!([]));

    normalize_energy_level(obj);

    for field in TASK_LIST_FIELDS {
        backfill_priority(obj, field);
    }

    lift_custom_metrics(obj);

    raw
}

fn ensure_default(obj: &mut Map<String, Value>, key: &str, default: Value) {
    match obj.get(key) {
        None | Some(Value::Null) => {
            obj.insert(key.to_string(), default);
        }
        Some(_) => {}
    }
}

fn normalize_energy_level(obj: &mut Map<String, Value>) {
    match obj.get("energyLevel").and_then(Value::as_u64) {
        None | Some(LEGACY_ENERGY_SENTINEL) => {
            obj.insert("energyLevel".to_string(), json!(0));
        }
        Some(_) => {}
    }
}

fn backfill_priority(obj: &mut Map<String, Value>, key: &str) {
    if let Some(Value::Array(items)) = obj.get_mut(key) {
        for item in items {
            if let Some(record) = item.as_object_mut() {
                ensure_default(record, "priority", json!("none"));
            }
        }
    }
}

/// Earlier schemas stored custom-tracker values as bare numbers/booleans;
/// lift those into the tagged union. A bare number could have been a scale
/// tracker, but that information was never stored, so it becomes a counter.
fn lift_custom_metrics(obj: &mut Map<String, Value>) {
    if let Some(Value::Object(metrics)) = obj.get_mut("customMetrics") {
        for (_, value) in metrics.iter_mut() {
            let lifted = match value {
                Value::Bool(flag) => json!({"type": "yesNo", "value": *flag}),
                Value::Number(n) => {
                    let count = n
                        .as_i64()
                        .or_else(|| n.as_f64().map(|f| f as i64))
                        .unwrap_or(0);
                    json!({"type": "counter", "value": count})
                }
                _ => continue,
            };
            *value = lifted;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn legacy_entry() -> Value {
        json!({
            "id": "5f64a1c2-9f10-4f5e-b0a3-0e3f6b9c1d2e",
            "date": "2023-06-01",
            "waterCount": 4,
            "sleepHours": 7.5,
            "chores": [
                {"id": "11111111-1111-1111-1111-111111111111", "name": "Laundry", "completed": true}
            ],
            "workTasks": [],
            "medications": [
                {"id": "22222222-2222-2222-2222-222222222222", "name": "Aspirin", "taken": false}
            ],
            "painLevel": 2,
            "energyLevel": 5,
            "customMetrics": {"meditation": 3, "flossed": true}
        })
    }

    #[test]
    fn test_missing_note_fields_default_to_empty() {
        let migrated = migrate_entry(legacy_entry());

        for field in EMPTY_STRING_FIELDS {
            assert_eq!(migrated[field], json!(""), "{} should default", field);
        }
        assert_eq!(migrated["attachments"], json!([]));
        assert_eq!(migrated["goals"], json!([]));
    }

    #[test]
    fn test_energy_sentinel_normalized_to_zero() {
        // The legacy sentinel 5 is squashed, not preserved
        let migrated = migrate_entry(legacy_entry());
        assert_eq!(migrated["energyLevel"], json!(0));
    }

    #[test]
    fn test_absent_energy_level_becomes_zero() {
        let mut raw = legacy_entry();
        raw.as_object_mut().unwrap().remove("energyLevel");

        let migrated = migrate_entry(raw);
        assert_eq!(migrated["energyLevel"], json!(0));
    }

    #[test]
    fn test_other_energy_levels_pass_through() {
        let mut raw = legacy_entry();
        raw["energyLevel"] = json!(7);

        let migrated = migrate_entry(raw);
        assert_eq!(migrated["energyLevel"], json!(7));
    }

    #[test]
    fn test_priority_backfilled_on_tasks_and_medications() {
        let migrated = migrate_entry(legacy_entry());

        assert_eq!(migrated["chores"][0]["priority"], json!("none"));
        assert_eq!(migrated["medications"][0]["priority"], json!("none"));
    }

    #[test]
    fn test_existing_priority_untouched() {
        let mut raw = legacy_entry();
        raw["chores"][0]["priority"] = json!("high");

        let migrated = migrate_entry(raw);
        assert_eq!(migrated["chores"][0]["priority"], json!("high"));
    }

    #[test]
    fn test_raw_custom_metrics_lifted_into_union() {
        let migrated = migrate_entry(legacy_entry());

        assert_eq!(
            migrated["customMetrics"]["meditation"],
            json!({"type": "counter", "value": 3})
        );
        assert_eq!(
            migrated["customMetrics"]["flossed"],
            json!({"type": "yesNo", "value": true})
        );
    }

    #[test]
    fn test_migration_is_idempotent() {
        let once = migrate_entry(legacy_entry());
        let twice = migrate_entry(once.clone());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_current_shape_passes_through_unchanged() {
        let current = migrate_entry(legacy_entry());
        let explicit = json!({"moodNote": "tired", "energyLevel": 3});

        assert_eq!(migrate_entry(current.clone()), current);
        let migrated = migrate_entry(explicit);
        assert_eq!(migrated["moodNote"], json!("tired"));
        assert_eq!(migrated["energyLevel"], json!(3));
    }

    #[test]
    fn test_non_object_input_passes_through() {
        assert_eq!(migrate_entry(json!("garbage")), json!("garbage"));
        assert_eq!(migrate_entry(json!(null)), json!(null));
    }
}
