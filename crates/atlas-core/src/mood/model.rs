//! Mood check-in domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A selectable mood in the check-in palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodKind {
    pub kind: &'static str,
    pub label: &'static str,
    pub emoji: &'static str,
}

/// The built-in mood palette, in display order.
pub const MOOD_KINDS: [MoodKind; 6] = [
    MoodKind {
        kind: "radiant",
        label: "Radiant",
        emoji: "\u{2600}\u{FE0F}",
    },
    MoodKind {
        kind: "calm",
        label: "Calm",
        emoji: "\u{1F33F}",
    },
    MoodKind {
        kind: "foggy",
        label: "Foggy",
        emoji: "\u{2601}\u{FE0F}",
    },
    MoodKind {
        kind: "stormy",
        label: "Stormy",
        emoji: "\u{26C8}\u{FE0F}",
    },
    MoodKind {
        kind: "cloudy",
        label: "Cloudy",
        emoji: "\u{1F327}\u{FE0F}",
    },
    MoodKind {
        kind: "numb",
        label: "Numb",
        emoji: "\u{1F311}",
    },
];

/// A single timestamped mood check-in, independent of stories.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoodEntry {
    pub id: String,
    /// Palette key (e.g. `calm`, `stormy`)
    #[serde(rename = "type")]
    pub kind: String,
    /// Display label at the time of the check-in
    pub label: String,
    pub timestamp: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl MoodEntry {
    /// Creates a check-in recorded now.
    pub fn new(
        kind: impl Into<String>,
        label: impl Into<String>,
        note: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind: kind.into(),
            label: label.into(),
            timestamp: Utc::now(),
            note,
        }
    }
}

/// The mood history, newest entry first.
///
/// Append-only from the member's perspective; the whole log is cleared on
/// logout and persisted wholesale after every change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodLog {
    entries: Vec<MoodEntry>,
}

impl MoodLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restores a log from persisted entries (already newest-first).
    pub fn from_entries(entries: Vec<MoodEntry>) -> Self {
        Self { entries }
    }

    /// Prepends a new check-in.
    pub fn add(&mut self, entry: MoodEntry) {
        self.entries.insert(0, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in display order (newest first).
    pub fn entries(&self) -> &[MoodEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_is_newest_first() {
        let mut log = MoodLog::new();
        log.add(MoodEntry::new("calm", "Calm", None));
        log.add(MoodEntry::new("stormy", "Stormy", None));

        let labels: Vec<&str> = log.entries().iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Stormy", "Calm"]);
    }

    #[test]
    fn test_entry_uses_wire_field_name_for_kind() {
        let entry = MoodEntry::new("numb", "Numb", Some("flat day".to_string()));
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["type"], "numb");
        assert_eq!(json["note"], "flat day");

        let restored: MoodEntry = serde_json::from_value(json).unwrap();
        assert_eq!(restored, entry);
    }
}
