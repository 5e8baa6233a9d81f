//! Task model types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A task in the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, assigned by the store, immutable after creation.
    pub id: u64,
    /// Short title describing the task.
    pub title: String,
    /// Free-form category label, used for grouping in the UI.
    ///
    /// Serialized as `"type"`; the wire name is fixed for compatibility.
    #[serde(rename = "type")]
    pub kind: String,
    /// Who the task is assigned to. Free-form.
    pub owner: String,
    /// Priority label, conventionally one of High/Medium/Low. Not enforced.
    pub priority: String,
    /// Whether the task has been completed.
    pub completed: bool,
    /// Optional free-form notes.
    pub notes: String,
    /// When the task was created. Set once, never changed.
    pub created_at: DateTime<Utc>,
    /// When the task was completed. `Some` if and only if `completed` is true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Caller-supplied fields for creating or replacing a task.
///
/// `title` is required; everything else defaults. Any `id`, `created_at`, or
/// `completed_at` in the request body is ignored — those are owned by the
/// store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TaskFields {
    /// Short title describing the task. Required.
    pub title: String,
    /// Free-form category label (wire name `"type"`).
    #[serde(rename = "type", default)]
    pub kind: String,
    /// Who the task is assigned to.
    #[serde(default)]
    pub owner: String,
    /// Priority label.
    #[serde(default)]
    pub priority: String,
    /// Completion flag. Only meaningful on replace; create forces it false.
    #[serde(default)]
    pub completed: bool,
    /// Optional free-form notes.
    #[serde(default)]
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_serializes_kind_as_type() {
        let task = Task {
            id: 1,
            title: "Write docs".to_string(),
            kind: "Ongoing".to_string(),
            owner: "Sam".to_string(),
            priority: "Low".to_string(),
            completed: false,
            notes: String::new(),
            created_at: Utc::now(),
            completed_at: None,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["type"], "Ongoing");
        assert!(json.get("kind").is_none());
    }

    #[test]
    fn test_completed_at_omitted_when_none() {
        let task = Task {
            id: 1,
            title: "t".to_string(),
            kind: String::new(),
            owner: String::new(),
            priority: String::new(),
            completed: false,
            notes: String::new(),
            created_at: Utc::now(),
            completed_at: None,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert!(json.get("completed_at").is_none());
    }

    #[test]
    fn test_task_fields_defaults() {
        let fields: TaskFields = serde_json::from_str(r#"{"title":"X"}"#).unwrap();
        assert_eq!(fields.title, "X");
        assert_eq!(fields.kind, "");
        assert_eq!(fields.owner, "");
        assert_eq!(fields.priority, "");
        assert!(!fields.completed);
        assert_eq!(fields.notes, "");
    }

    #[test]
    fn test_task_fields_requires_title() {
        let result: Result<TaskFields, _> = serde_json::from_str(r#"{"owner":"O"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_task_round_trips_through_json() {
        let task = Task {
            id: 7,
            title: "Fix recurring meeting setup".to_string(),
            kind: "Process Improvement Tasks (1-2 weeks)".to_string(),
            owner: "Endri".to_string(),
            priority: "Medium".to_string(),
            completed: true,
            notes: "Wednesday 7:30 AM".to_string(),
            created_at: Utc::now(),
            completed_at: Some(Utc::now()),
        };

        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
