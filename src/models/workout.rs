// ABOUTME: Strength training models for exercise catalog, templates, and sessions
// ABOUTME: WorkoutLog holds templates plus planned and completed sessions with date filters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Macrotrack Contributors

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Exercise catalog entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExerciseType {
    /// Unique identifier
    pub id: Uuid,
    /// Exercise name
    pub name: String,
    /// Primary muscle group
    pub muscle_group: String,
}

impl ExerciseType {
    /// Create an exercise type with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, muscle_group: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            muscle_group: muscle_group.into(),
        }
    }
}

/// One exercise line of a workout template
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TemplateItem {
    /// Referenced exercise type
    pub exercise_type_id: Uuid,
    /// Target number of sets
    pub target_sets: u32,
    /// Target repetitions per set
    pub target_reps: u32,
    /// Rest between sets (seconds)
    pub rest_sec: u32,
}

/// A reusable workout plan
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutTemplate {
    /// Unique identifier
    pub id: Uuid,
    /// Template name
    pub name: String,
    /// Exercise lines
    pub items: Vec<TemplateItem>,
}

impl WorkoutTemplate {
    /// Create a template with a fresh identifier
    #[must_use]
    pub fn new(name: impl Into<String>, items: Vec<TemplateItem>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            items,
        }
    }

    /// Total number of target sets across all exercise lines
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.items.iter().map(|item| item.target_sets).sum()
    }
}

/// Lifecycle status of a scheduled session
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    /// Scheduled but not yet run
    Planned,
    /// Run and recorded
    Done,
}

/// A scheduled (and possibly completed) training session
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSession {
    /// Unique identifier
    pub id: Uuid,
    /// Template this session instantiates
    pub template_id: Uuid,
    /// Scheduled calendar date
    pub date: NaiveDate,
    /// Lifecycle status
    pub status: SessionStatus,
    /// Notes recorded at completion
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Sets actually performed
    pub done_sets: u32,
    /// Target sets, snapshotted from the template at scheduling time
    pub total_sets: u32,
    /// Completion timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// The caller's whole training log: templates plus planned/completed sessions
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutLog {
    /// Reusable workout plans
    pub templates: Vec<WorkoutTemplate>,
    /// Scheduled sessions (completed ones stay here with `Done` status)
    pub planned: Vec<WorkoutSession>,
    /// Completed sessions, in completion order
    pub completed: Vec<WorkoutSession>,
}

impl WorkoutLog {
    /// Add a template to the catalog
    pub fn add_template(&mut self, template: WorkoutTemplate) {
        self.templates.push(template);
    }

    /// Look up a template by id
    #[must_use]
    pub fn template(&self, id: Uuid) -> Option<&WorkoutTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Schedule a session of `template_id` on `date`
    ///
    /// The target set count is snapshotted from the template so later
    /// template edits do not rewrite scheduled sessions.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownReference`] if the template does not exist.
    pub fn schedule(&mut self, template_id: Uuid, date: NaiveDate) -> AppResult<Uuid> {
        let template = self
            .template(template_id)
            .ok_or(AppError::unknown_reference("template", template_id))?;
        let session = WorkoutSession {
            id: Uuid::new_v4(),
            template_id,
            date,
            status: SessionStatus::Planned,
            notes: None,
            done_sets: 0,
            total_sets: template.total_sets(),
            completed_at: None,
        };
        let id = session.id;
        self.planned.push(session);
        Ok(id)
    }

    /// Mark a planned session as done and record the outcome
    ///
    /// The session is updated in place in `planned` and a copy is appended
    /// to `completed`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownReference`] if no planned session has
    /// this id.
    pub fn complete(
        &mut self,
        session_id: Uuid,
        notes: Option<String>,
        done_sets: u32,
    ) -> AppResult<()> {
        let session = self
            .planned
            .iter_mut()
            .find(|s| s.id == session_id)
            .ok_or(AppError::unknown_reference("session", session_id))?;
        session.status = SessionStatus::Done;
        session.notes = notes;
        session.done_sets = done_sets;
        session.completed_at = Some(Utc::now());
        let done = session.clone();
        self.completed.push(done);
        Ok(())
    }

    /// Planned sessions on or after `date` that have not been run yet
    #[must_use]
    pub fn upcoming(&self, date: NaiveDate) -> Vec<&WorkoutSession> {
        self.planned
            .iter()
            .filter(|s| s.status == SessionStatus::Planned && s.date >= date)
            .collect()
    }

    /// Completed sessions on a given date
    #[must_use]
    pub fn completed_on(&self, date: NaiveDate) -> Vec<&WorkoutSession> {
        self.completed.iter().filter(|s| s.date == date).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn bench_press_template() -> WorkoutTemplate {
        let bench = ExerciseType::new("Bench press", "Chest");
        let extension = ExerciseType::new("Triceps extension", "Triceps");
        WorkoutTemplate::new(
            "Chest/Triceps",
            vec![
                TemplateItem {
                    exercise_type_id: bench.id,
                    target_sets: 4,
                    target_reps: 8,
                    rest_sec: 120,
                },
                TemplateItem {
                    exercise_type_id: extension.id,
                    target_sets: 3,
                    target_reps: 12,
                    rest_sec: 90,
                },
            ],
        )
    }

    #[test]
    fn test_total_sets_sums_items() {
        assert_eq!(bench_press_template().total_sets(), 7);
    }

    #[test]
    fn test_schedule_snapshots_total_sets() {
        let mut log = WorkoutLog::default();
        let template = bench_press_template();
        let template_id = template.id;
        log.add_template(template);

        let session_id = log.schedule(template_id, date(2024, 5, 10)).unwrap();
        let session = log.planned.iter().find(|s| s.id == session_id).unwrap();
        assert_eq!(session.total_sets, 7);
        assert_eq!(session.status, SessionStatus::Planned);
    }

    #[test]
    fn test_schedule_unknown_template_fails() {
        let mut log = WorkoutLog::default();
        let err = log.schedule(Uuid::new_v4(), date(2024, 5, 10)).unwrap_err();
        assert!(err.to_string().contains("template"));
    }

    #[test]
    fn test_complete_moves_session_to_history() {
        let mut log = WorkoutLog::default();
        let template = bench_press_template();
        let template_id = template.id;
        log.add_template(template);
        let session_id = log.schedule(template_id, date(2024, 5, 10)).unwrap();

        log.complete(session_id, Some("felt strong".into()), 6).unwrap();

        let planned = log.planned.iter().find(|s| s.id == session_id).unwrap();
        assert_eq!(planned.status, SessionStatus::Done);
        assert_eq!(planned.done_sets, 6);
        assert!(planned.completed_at.is_some());

        assert_eq!(log.completed.len(), 1);
        assert_eq!(log.completed_on(date(2024, 5, 10)).len(), 1);
        // A completed session no longer shows up as upcoming
        assert!(log.upcoming(date(2024, 5, 1)).is_empty());
    }

    #[test]
    fn test_upcoming_filters_past_sessions() {
        let mut log = WorkoutLog::default();
        let template = bench_press_template();
        let template_id = template.id;
        log.add_template(template);
        log.schedule(template_id, date(2024, 5, 1)).unwrap();
        log.schedule(template_id, date(2024, 5, 20)).unwrap();

        let upcoming = log.upcoming(date(2024, 5, 10));
        assert_eq!(upcoming.len(), 1);
        assert_eq!(upcoming[0].date, date(2024, 5, 20));
    }
}
