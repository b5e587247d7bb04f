use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

use super::entry::{JournalEntry, MedicationItem, MetricValue, TaskItem};

/// Input DTO for creating a new entry; every other field starts at its default
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateEntryInput {
    pub date: NaiveDate,
}

/// Input DTO for updating an existing entry. Absent fields are left untouched;
/// the date, goal snapshot, attachments and voice note have their own
/// endpoints and cannot be patched here.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEntryInput {
    pub water_count: Option<u32>,
    pub water_note: Option<String>,
    pub sleep_hours: Option<f32>,
    pub sleep_note: Option<String>,
    pub chores: Option<Vec<TaskItem>>,
    pub work_tasks: Option<Vec<TaskItem>>,
    pub medications: Option<Vec<MedicationItem>>,
    pub pain_level: Option<u8>,
    pub energy_level: Option<u8>,
    pub headache: Option<bool>,
    pub nausea: Option<bool>,
    pub dizziness: Option<bool>,
    pub other_symptoms: Option<String>,
    pub mood: Option<String>,
    pub mood_note: Option<String>,
    pub exercises: Option<Vec<String>>,
    pub exercises_note: Option<String>,
    pub exercise_minutes: Option<u32>,
    pub self_care: Option<Vec<String>>,
    pub self_care_note: Option<String>,
    pub self_care_minutes: Option<u32>,
    pub notes: Option<String>,
    pub custom_metrics: Option<BTreeMap<String, MetricValue>>,
}

impl UpdateEntryInput {
    /// Overlay the provided fields onto `entry`.
    pub fn apply(self, entry: &mut JournalEntry) {
        if let Some(v) = self.water_count {
            entry.water_count = v;
        }
        if let Some(v) = self.water_note {
            entry.water_note = v;
        }
        if let Some(v) = self.sleep_hours {
            entry.sleep_hours = v;
        }
        if let Some(v) = self.sleep_note {
            entry.sleep_note = v;
        }
        if let Some(v) = self.chores {
            entry.chores = v;
        }
        if let Some(v) = self.work_tasks {
            entry.work_tasks = v;
        }
        if let Some(v) = self.medications {
            entry.medications = v;
        }
        if let Some(v) = self.pain_level {
            entry.pain_level = v;
        }
        if let Some(v) = self.energy_level {
            entry.energy_level = v;
        }
        if let Some(v) = self.headache {
            entry.headache = v;
        }
        if let Some(v) = self.nausea {
            entry.nausea = v;
        }
        if let Some(v) = self.dizziness {
            entry.dizziness = v;
        }
        if let Some(v) = self.other_symptoms {
            entry.other_symptoms = v;
        }
        if let Some(v) = self.mood {
            entry.mood = v;
        }
        if let Some(v) = self.mood_note {
            entry.mood_note = v;
        }
        if let Some(v) = self.exercises {
            entry.exercises = v;
        }
        if let Some(v) = self.exercises_note {
            entry.exercises_note = v;
        }
        if let Some(v) = self.exercise_minutes {
            entry.exercise_minutes = v;
        }
        if let Some(v) = self.self_care {
            entry.self_care = v;
        }
        if let Some(v) = self.self_care_note {
            entry.self_care_note = v;
        }
        if let Some(v) = self.self_care_minutes {
            entry.self_care_minutes = v;
        }
        if let Some(v) = self.notes {
            entry.notes = v;
        }
        if let Some(v) = self.custom_metrics {
            entry.custom_metrics = v;
        }
    }

    pub fn touches_custom_metrics(&self) -> bool {
        self.custom_metrics.is_some()
    }
}
