//! Day-1 Activation Engine: whether the first-day checklist is live.
//!
//! Unlike the readiness engine, an empty partition here counts as NOT done.
//! A hire without pre-boarding employee tasks never activates the Day 1
//! checklist, and a hire without Day 1 tasks never completes it.

use super::types::{Day1ChecklistStatus, Phase, Task};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Day1Facts {
    pub preboarding_employee_done: bool,
    pub day1_done: bool,
}

impl Day1Facts {
    #[must_use]
    pub fn gather(tasks: &[Task]) -> Self {
        let preboarding_employee: Vec<_> =
            tasks.iter().filter(|t| t.is_preboarding_employee()).collect();
        let day1: Vec<_> = tasks.iter().filter(|t| t.phase() == Phase::Day1).collect();

        Self {
            preboarding_employee_done: all_completed(&preboarding_employee),
            day1_done: all_completed(&day1),
        }
    }
}

/// Non-vacuous: an empty set is not done.
fn all_completed(tasks: &[&Task]) -> bool {
    !tasks.is_empty() && tasks.iter().all(|t| t.is_completed())
}

/// One row of the Day 1 decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Day1Rule {
    PreboardingOpen,
    Day1Open,
    Day1Done,
}

/// Evaluation order of the Day 1 rules. First match wins.
pub const DAY1_RULES: [Day1Rule; 3] = [Day1Rule::PreboardingOpen, Day1Rule::Day1Open, Day1Rule::Day1Done];

impl Day1Rule {
    #[must_use]
    pub fn holds(&self, f: &Day1Facts) -> bool {
        match self {
            Self::PreboardingOpen => !f.preboarding_employee_done,
            Self::Day1Open => !f.day1_done,
            Self::Day1Done => true,
        }
    }

    #[must_use]
    pub fn outcome(&self) -> Day1ChecklistStatus {
        match self {
            Self::PreboardingOpen => Day1ChecklistStatus::NotYetActive,
            Self::Day1Open => Day1ChecklistStatus::Active,
            Self::Day1Done => Day1ChecklistStatus::Completed,
        }
    }

    #[must_use]
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::PreboardingOpen => {
                "Pre-boarding employee tasks are missing or not all completed."
            }
            Self::Day1Open => "Pre-boarding is done; Day 1 tasks are missing or still open.",
            Self::Day1Done => "Pre-boarding and every Day 1 task are completed.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Day1Verdict {
    pub status: Day1ChecklistStatus,
    pub rule: Day1Rule,
    pub facts: Day1Facts,
}

/// Classifies a task snapshot and reports which rule fired.
#[must_use]
pub fn classify_day1(tasks: &[Task]) -> Day1Verdict {
    let facts = Day1Facts::gather(tasks);
    let rule = DAY1_RULES
        .into_iter()
        .find(|r| r.holds(&facts))
        .unwrap_or(Day1Rule::Day1Done);

    Day1Verdict {
        status: rule.outcome(),
        rule,
        facts,
    }
}

/// Derives the Day 1 checklist status from a task snapshot.
#[must_use]
pub fn compute_day1_checklist_status(tasks: &[Task]) -> Day1ChecklistStatus {
    classify_day1(tasks).status
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::{generate_default_tasks, seed_tasks_for_status};
    use crate::engine::state::compute_readiness_status;
    use crate::engine::types::{ReadinessStatus, TaskStatus};

    #[test]
    fn test_default_catalog_not_yet_active() {
        let tasks = generate_default_tasks();
        assert_eq!(
            compute_day1_checklist_status(&tasks),
            Day1ChecklistStatus::NotYetActive
        );
    }

    #[test]
    fn test_partial_preboarding_not_yet_active() {
        let tasks = seed_tasks_for_status(&generate_default_tasks(), ReadinessStatus::InProgress);
        let verdict = classify_day1(&tasks);
        assert_eq!(verdict.status, Day1ChecklistStatus::NotYetActive);
        assert_eq!(verdict.rule, Day1Rule::PreboardingOpen);
    }

    #[test]
    fn test_preboarding_done_is_active() {
        let tasks = seed_tasks_for_status(&generate_default_tasks(), ReadinessStatus::ReadyForDay1);
        assert_eq!(compute_day1_checklist_status(&tasks), Day1ChecklistStatus::Active);
    }

    #[test]
    fn test_everything_done_is_completed() {
        let tasks =
            seed_tasks_for_status(&generate_default_tasks(), ReadinessStatus::ReadyForPayroll);
        let verdict = classify_day1(&tasks);
        assert_eq!(verdict.status, Day1ChecklistStatus::Completed);
        assert_eq!(verdict.rule, Day1Rule::Day1Done);
    }

    #[test]
    fn test_owner_preboarding_does_not_gate_activation() {
        let mut tasks = generate_default_tasks();
        for t in &mut tasks {
            if t.is_preboarding_employee() {
                t.set_status(TaskStatus::Completed);
            }
        }
        assert_eq!(compute_day1_checklist_status(&tasks), Day1ChecklistStatus::Active);
    }

    #[test]
    fn test_empty_collection_not_yet_active() {
        assert_eq!(compute_day1_checklist_status(&[]), Day1ChecklistStatus::NotYetActive);
    }

    #[test]
    fn test_missing_day1_tasks_never_complete() {
        // Readiness treats an empty Day 1 set as done; this engine does not.
        let mut tasks =
            seed_tasks_for_status(&generate_default_tasks(), ReadinessStatus::ReadyForPayroll);
        tasks.retain(|t| t.phase() == Phase::PreBoarding);
        assert_eq!(compute_readiness_status(&tasks), ReadinessStatus::ReadyForPayroll);
        assert_eq!(compute_day1_checklist_status(&tasks), Day1ChecklistStatus::Active);
    }

    #[test]
    fn test_missing_employee_preboarding_never_activates() {
        let mut tasks =
            seed_tasks_for_status(&generate_default_tasks(), ReadinessStatus::ReadyForPayroll);
        tasks.retain(|t| !t.is_preboarding_employee());
        assert_eq!(
            compute_day1_checklist_status(&tasks),
            Day1ChecklistStatus::NotYetActive
        );
    }
}
