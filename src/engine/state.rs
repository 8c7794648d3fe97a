//! Readiness Engine: Computes a hire's aggregate status from its tasks.
//!
//! This module is the "truth oracle" for onboarding progress. It answers
//! "how far along is this hire right now?" by examining the current task
//! snapshot. Nothing here remembers earlier answers; every call recomputes
//! from scratch, so a cached status can never drift from its tasks.
//!
//! The rules form an ordered decision table (`READINESS_RULES`). The first
//! rule whose predicate holds decides the status.

use super::types::{Assignee, Phase, ReadinessStatus, Task, TaskStatus};
use serde::Serialize;
use std::fmt;

/// Partition-level facts about a task snapshot.
///
/// The `all_*` flags are vacuously true over empty partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ReadinessFacts {
    pub task_count: usize,
    pub all_not_started: bool,
    pub has_activity: bool,
    pub all_preboarding_employee_done: bool,
    pub all_preboarding_owner_done: bool,
    pub all_day1_done: bool,
    pub all_done: bool,
}

impl ReadinessFacts {
    /// Gathers the facts in a single pass over the snapshot.
    #[must_use]
    pub fn gather(tasks: &[Task]) -> Self {
        let mut facts = Self {
            task_count: tasks.len(),
            all_not_started: true,
            has_activity: false,
            all_preboarding_employee_done: true,
            all_preboarding_owner_done: true,
            all_day1_done: true,
            all_done: true,
        };

        for task in tasks {
            let done = task.is_completed();
            if task.status() != TaskStatus::NotStarted {
                facts.all_not_started = false;
                facts.has_activity = true;
            }
            facts.all_done &= done;

            match (task.phase(), task.assignee()) {
                (Phase::PreBoarding, Assignee::Employee) => {
                    facts.all_preboarding_employee_done &= done;
                }
                (Phase::PreBoarding, Assignee::Owner | Assignee::Manager) => {
                    facts.all_preboarding_owner_done &= done;
                }
                (Phase::Day1, _) => facts.all_day1_done &= done,
            }
        }
        facts
    }
}

/// One row of the readiness decision table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ReadinessRule {
    /// The hire has no tasks at all.
    NoTasks,
    /// Every task is still `Not started`.
    NothingStarted,
    /// Work has begun but some pre-boarding employee task is open.
    EmployeePreboardingOpen,
    /// Employee pre-boarding is done; owner pre-boarding or Day 1 work is open.
    AwaitingOwnerOrDay1,
    /// Every task is `Completed`.
    AllCompleted,
    /// Nothing above matched.
    Fallback,
}

/// Evaluation order of the readiness rules. First match wins.
pub const READINESS_RULES: [ReadinessRule; 6] = [
    ReadinessRule::NoTasks,
    ReadinessRule::NothingStarted,
    ReadinessRule::EmployeePreboardingOpen,
    ReadinessRule::AwaitingOwnerOrDay1,
    ReadinessRule::AllCompleted,
    ReadinessRule::Fallback,
];

impl ReadinessRule {
    /// Returns true if this rule's predicate holds for the given facts.
    #[must_use]
    pub fn holds(&self, f: &ReadinessFacts) -> bool {
        match self {
            Self::NoTasks => f.task_count == 0,
            Self::NothingStarted => f.all_not_started,
            Self::EmployeePreboardingOpen => f.has_activity && !f.all_preboarding_employee_done,
            Self::AwaitingOwnerOrDay1 => {
                f.all_preboarding_employee_done
                    && (!f.all_preboarding_owner_done || !f.all_day1_done)
            }
            Self::AllCompleted => f.all_done,
            Self::Fallback => true,
        }
    }

    /// The status this rule assigns when it fires.
    #[must_use]
    pub fn outcome(&self) -> ReadinessStatus {
        match self {
            Self::NoTasks | Self::NothingStarted => ReadinessStatus::NotStarted,
            Self::EmployeePreboardingOpen | Self::Fallback => ReadinessStatus::InProgress,
            Self::AwaitingOwnerOrDay1 => ReadinessStatus::ReadyForDay1,
            Self::AllCompleted => ReadinessStatus::ReadyForPayroll,
        }
    }

    /// Human explanation of why the rule fired.
    #[must_use]
    pub fn explanation(&self) -> &'static str {
        match self {
            Self::NoTasks => "The checklist is empty.",
            Self::NothingStarted => "No task has been started yet.",
            Self::EmployeePreboardingOpen => {
                "Work has begun, but some pre-boarding employee tasks are still open."
            }
            Self::AwaitingOwnerOrDay1 => {
                "Employee pre-boarding is complete; owner pre-boarding or Day 1 tasks remain."
            }
            Self::AllCompleted => "Every task on the checklist is completed.",
            Self::Fallback => "No specific rule matched.",
        }
    }
}

impl fmt::Display for ReadinessRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::NoTasks => "no-tasks",
            Self::NothingStarted => "nothing-started",
            Self::EmployeePreboardingOpen => "employee-preboarding-open",
            Self::AwaitingOwnerOrDay1 => "awaiting-owner-or-day1",
            Self::AllCompleted => "all-completed",
            Self::Fallback => "fallback",
        };
        f.write_str(name)
    }
}

/// The outcome of classifying a snapshot, with the rule that decided it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessVerdict {
    pub status: ReadinessStatus,
    pub rule: ReadinessRule,
    pub facts: ReadinessFacts,
}

/// Classifies a task snapshot and reports which rule fired.
///
/// This is a pure function - no I/O, no side effects.
#[must_use]
pub fn classify_readiness(tasks: &[Task]) -> ReadinessVerdict {
    let facts = ReadinessFacts::gather(tasks);
    let rule = READINESS_RULES
        .into_iter()
        .find(|r| r.holds(&facts))
        .unwrap_or(ReadinessRule::Fallback);

    ReadinessVerdict {
        status: rule.outcome(),
        rule,
        facts,
    }
}

/// Derives the aggregate readiness status of a hire from its tasks.
///
/// Order of `tasks` is irrelevant; an empty slice yields `Not started`.
#[must_use]
pub fn compute_readiness_status(tasks: &[Task]) -> ReadinessStatus {
    classify_readiness(tasks).status
}
