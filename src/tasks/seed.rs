//! Built-in seed tasks.
//!
//! The store has no persistence, so every process starts from this fixed
//! example set. IDs run 1..=8; the store's counter then continues from 9.

use crate::tasks::models::Task;
use chrono::Utc;

/// The example tasks the server starts with.
#[must_use]
pub fn seed_tasks() -> Vec<Task> {
    let entries: [(&str, &str, &str, &str, &str); 8] = [
        (
            "Schedule follow-up meeting - Tomorrow at 7:30 AM",
            "Immediate Tasks (24-48 hours)",
            "Tariro & Endri",
            "High",
            "Endri to create recurring weekly meeting",
        ),
        (
            "Audit current Calendly setup",
            "Immediate Tasks (24-48 hours)",
            "Tariro & Endri",
            "High",
            "Review all existing schedules, clones, and configurations",
        ),
        (
            "Complete resident list cleanup",
            "Immediate Tasks (24-48 hours)",
            "Michael & Tariro",
            "High",
            "Verify all current vs. former residents in Zoho",
        ),
        (
            "Implement SMS capability",
            "Immediate Tasks (24-48 hours)",
            "Michael & Technical Team",
            "Medium",
            "Deploy text messaging API integration in Zoho within one week",
        ),
        (
            "Establish Calendly change procedures",
            "Process Improvement Tasks (1-2 weeks)",
            "Liz, Tariro, Endri",
            "Medium",
            "Define who updates what and when",
        ),
        (
            "Fix recurring meeting setup",
            "Process Improvement Tasks (1-2 weeks)",
            "Endri",
            "Medium",
            "Ensure Wednesday 7:30 AM meetings auto-schedule properly",
        ),
        (
            "Track residency completion dates",
            "Ongoing Management Tasks",
            "Liz",
            "Low",
            "Monitor approaching end dates for proper offboarding",
        ),
        (
            "Establish clear handoff procedures",
            "Communication & Coordination",
            "All Team",
            "Medium",
            "Between Liz and Tariro for scheduling",
        ),
    ];

    entries
        .iter()
        .enumerate()
        .map(|(i, (title, kind, owner, priority, notes))| Task {
            id: i as u64 + 1,
            title: (*title).to_string(),
            kind: (*kind).to_string(),
            owner: (*owner).to_string(),
            priority: (*priority).to_string(),
            completed: false,
            notes: (*notes).to_string(),
            created_at: Utc::now(),
            completed_at: None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_are_one_through_eight() {
        let ids: Vec<u64> = seed_tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids, (1..=8).collect::<Vec<u64>>());
    }

    #[test]
    fn test_seed_ids_are_unique() {
        let tasks = seed_tasks();
        let ids: HashSet<u64> = tasks.iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), tasks.len());
    }

    #[test]
    fn test_seed_tasks_start_uncompleted() {
        for task in seed_tasks() {
            assert!(!task.completed);
            assert!(task.completed_at.is_none());
        }
    }
}
