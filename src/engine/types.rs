//! Core types for the onboarding checklist.
//!
//! Note: `ReadinessStatus` and `Day1ChecklistStatus` are never stored by hand.
//! They are derived from a task snapshot by `state.rs` and `day1.rs`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// An enumerated value with a fixed, human-readable label.
///
/// Labels double as the storage and wire representation.
pub trait Labeled: Sized + Copy + 'static {
    /// Every variant, in display order.
    const ALL: &'static [Self];
    /// Name of the value kind, used in parse errors.
    const KIND: &'static str;

    fn label(&self) -> &'static str;
}

/// Returned when a string names none of the variants of an enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}' (expected one of: {expected})")]
pub struct ParseLabelError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

fn normalize(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parses a label case-insensitively, treating `-`, `_` and spaces alike.
///
/// # Errors
/// Returns `ParseLabelError` if the input matches no variant.
pub fn parse_label<T: Labeled>(s: &str) -> Result<T, ParseLabelError> {
    let wanted = normalize(s);
    T::ALL
        .iter()
        .copied()
        .find(|v| normalize(v.label()) == wanted)
        .ok_or_else(|| ParseLabelError {
            kind: T::KIND,
            value: s.to_string(),
            expected: T::ALL
                .iter()
                .map(Labeled::label)
                .collect::<Vec<_>>()
                .join(", "),
        })
}

macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $label)] $variant ),+
        }

        impl Labeled for $name {
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const KIND: &'static str = $kind;

            fn label(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_label(s)
            }
        }
    };
}

labeled_enum! {
    /// Checklist grouping. Purely categorical.
    Section, "section" {
        Compliance => "Compliance",
        PayrollBasics => "Payroll & basics",
        Day1Welcome => "Day 1 welcome & orientation",
    }
}

labeled_enum! {
    /// The party responsible for completing a task.
    Assignee, "assignee" {
        Employee => "Employee",
        Owner => "Owner",
        Manager => "Manager",
    }
}

labeled_enum! {
    /// When a task is due. Display and grouping only.
    Due, "due" {
        BeforeDay1 => "Before Day 1",
        Day1 => "Day 1",
        BeforeFirstPayroll => "Before first payroll",
    }
}

labeled_enum! {
    /// Onboarding phase. Drives both derivation engines.
    Phase, "phase" {
        PreBoarding => "Pre-boarding",
        Day1 => "Day 1",
    }
}

labeled_enum! {
    /// Per-task progress. The only mutable field of a task.
    TaskStatus, "task status" {
        NotStarted => "Not started",
        InProgress => "In progress",
        Completed => "Completed",
    }
}

labeled_enum! {
    /// Aggregate lifecycle label of a hire, derived from its tasks.
    ReadinessStatus, "readiness status" {
        NotStarted => "Not started",
        InProgress => "In progress",
        ReadyForDay1 => "Ready for Day 1",
        ReadyForPayroll => "Ready for payroll",
    }
}

labeled_enum! {
    /// Activation state of the first-day checklist view.
    Day1ChecklistStatus, "day 1 checklist status" {
        NotYetActive => "Not yet active",
        Active => "Active",
        Completed => "Completed",
    }
}

labeled_enum! {
    EmploymentType, "employment type" {
        FullTime => "Full-time",
        PartTime => "Part-time",
    }
}

impl Phase {
    /// Infers the phase of a custom task from its due marker.
    #[must_use]
    pub fn for_due(due: Due) -> Self {
        match due {
            Due::Day1 => Self::Day1,
            Due::BeforeDay1 | Due::BeforeFirstPayroll => Self::PreBoarding,
        }
    }
}

impl ReadinessStatus {
    /// Owner-facing hint for what happens next at this stage.
    #[must_use]
    pub fn next_step(&self) -> &'static str {
        match self {
            Self::NotStarted => "Invite sent to employee",
            Self::InProgress => "Monitor employee and owner tasks",
            Self::ReadyForDay1 => "Complete remaining Day 1 tasks",
            Self::ReadyForPayroll => "No actions pending",
        }
    }
}

impl Default for EmploymentType {
    fn default() -> Self {
        Self::FullTime
    }
}

/// One checklist item.
///
/// `section`, `assignee`, `due` and `phase` are fixed at creation; only
/// `status` changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: String,
    section: Section,
    title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    assignee: Assignee,
    due: Due,
    phase: Phase,
    status: TaskStatus,
}

impl Task {
    /// Creates a fresh task with a new id and status `Not started`.
    #[must_use]
    pub fn new(section: Section, title: &str, assignee: Assignee, due: Due, phase: Phase) -> Self {
        Self::with_id(
            &uuid::Uuid::new_v4().to_string(),
            section,
            title,
            assignee,
            due,
            phase,
        )
    }

    /// Creates a task with an explicit id (used when loading from storage).
    #[must_use]
    pub fn with_id(
        id: &str,
        section: Section,
        title: &str,
        assignee: Assignee,
        due: Due,
        phase: Phase,
    ) -> Self {
        Self {
            id: id.to_string(),
            section,
            title: title.to_string(),
            description: None,
            assignee,
            due,
            phase,
            status: TaskStatus::NotStarted,
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn section(&self) -> Section {
        self.section
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn assignee(&self) -> Assignee {
        self.assignee
    }

    #[must_use]
    pub fn due(&self) -> Due {
        self.due
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn status(&self) -> TaskStatus {
        self.status
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// True for pre-boarding work owned by the employee.
    #[must_use]
    pub fn is_preboarding_employee(&self) -> bool {
        self.phase == Phase::PreBoarding && self.assignee == Assignee::Employee
    }
}
