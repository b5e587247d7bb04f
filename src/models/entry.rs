use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;

use super::goal::Goal;

/// Mood identifiers the UI offers; an entry's mood is one of these or empty.
pub const KNOWN_MOODS: [&str; 5] = ["amazing", "good", "okay", "bad", "terrible"];

pub fn is_known_mood(mood: &str) -> bool {
    mood.is_empty() || KNOWN_MOODS.contains(&mood)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
    #[default]
    None,
}

/// A chore or work-task line on an entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MedicationItem {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub taken: bool,
    #[serde(default)]
    pub note: Option<String>,
    #[serde(default)]
    pub priority: Priority,
}

/// Custom-tracker value. Trackers declare their shape, so the value is a
/// tagged union rather than an open numeric/boolean bag; the migration layer
/// lifts legacy raw primitives into it on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "type", content = "value", rename_all = "camelCase")]
pub enum MetricValue {
    Counter(i64),
    YesNo(bool),
    Scale(u8),
}

/// One day's complete wellness record for one user. At most one exists per
/// (user, date); task and medication ids are unique within their lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub water_count: u32,
    #[serde(default)]
    pub water_note: String,
    #[serde(default)]
    pub sleep_hours: f32,
    #[serde(default)]
    pub sleep_note: String,

    #[serde(default)]
    pub chores: Vec<TaskItem>,
    #[serde(default)]
    pub work_tasks: Vec<TaskItem>,
    #[serde(default)]
    pub medications: Vec<MedicationItem>,

    #[serde(default)]
    pub pain_level: u8,
    #[serde(default)]
    pub energy_level: u8,
    #[serde(default)]
    pub headache: bool,
    #[serde(default)]
    pub nausea: bool,
    #[serde(default)]
    pub dizziness: bool,
    #[serde(default)]
    pub other_symptoms: String,

    #[serde(default)]
    pub mood: String,
    #[serde(default)]
    pub mood_note: String,

    #[serde(default)]
    pub exercises: Vec<String>,
    #[serde(default)]
    pub exercises_note: String,
    #[serde(default)]
    pub exercise_minutes: u32,

    #[serde(default)]
    pub self_care: Vec<String>,
    #[serde(default)]
    pub self_care_note: String,
    #[serde(default)]
    pub self_care_minutes: u32,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub audio_notes: String,
    #[serde(default)]
    pub audio_transcription: String,
    #[serde(default)]
    pub attachments: Vec<String>,

    #[serde(default)]
    pub custom_metrics: BTreeMap<String, MetricValue>,

    #[serde(default)]
    pub goals: Vec<Goal>,
}

impl JournalEntry {
    /// A fresh all-default entry for `date` carrying the given goal snapshot.
    pub fn new(date: NaiveDate, goals: Vec<Goal>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            created_at: Utc::now(),
            water_count: 0,
            water_note: String::new(),
            sleep_hours: 0.0,
            sleep_note: String::new(),
            chores: Vec::new(),
            work_tasks: Vec::new(),
            medications: Vec::new(),
            pain_level: 0,
            energy_level: 0,
            headache: false,
            nausea: false,
            dizziness: false,
            other_symptoms: String::new(),
            mood: String::new(),
            mood_note: String::new(),
            exercises: Vec::new(),
            exercises_note: String::new(),
            exercise_minutes: 0,
            self_care: Vec::new(),
            self_care_note: String::new(),
            self_care_minutes: 0,
            notes: String::new(),
            audio_notes: String::new(),
            audio_transcription: String::new(),
            attachments: Vec::new(),
            custom_metrics: BTreeMap::new(),
            goals,
        }
    }
}
