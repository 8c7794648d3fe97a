//! Task Set Generator: the starter checklist every new hire receives.

use super::types::{Assignee, Due, Phase, ReadinessStatus, Section, Task, TaskStatus};

/// Title fragments completed when seeding an `In progress` fixture.
const IN_PROGRESS_MARKERS: [&str; 2] = ["personal details", "W-4"];

/// Returns the canonical 11-task catalog, every task fresh and `Not started`.
#[must_use]
pub fn generate_default_tasks() -> Vec<Task> {
    use Assignee::{Employee, Manager, Owner};
    use Phase::{Day1, PreBoarding};

    vec![
        Task::new(Section::Compliance, "Complete W-4", Employee, Due::BeforeDay1, PreBoarding),
        Task::new(
            Section::Compliance,
            "Complete I-9 (section 1)",
            Employee,
            Due::BeforeDay1,
            PreBoarding,
        ),
        Task::new(
            Section::Compliance,
            "Complete I-9 (section 2 verification)",
            Owner,
            Due::Day1,
            Day1,
        ),
        Task::new(
            Section::Compliance,
            "Review and acknowledge state-specific notice",
            Employee,
            Due::BeforeDay1,
            PreBoarding,
        ),
        Task::new(
            Section::PayrollBasics,
            "Provide personal details & emergency contact",
            Employee,
            Due::BeforeDay1,
            PreBoarding,
        ),
        Task::new(
            Section::PayrollBasics,
            "Set up direct deposit",
            Employee,
            Due::BeforeDay1,
            PreBoarding,
        ),
        Task::new(
            Section::PayrollBasics,
            "Confirm pay rate and schedule",
            Owner,
            Due::BeforeFirstPayroll,
            PreBoarding,
        ),
        Task::new(Section::Day1Welcome, "Meet manager", Employee, Due::Day1, Day1)
            .with_description("At start time"),
        Task::new(
            Section::Day1Welcome,
            "Store/office tour and safety briefing",
            Manager,
            Due::Day1,
            Day1,
        ),
        Task::new(
            Section::Day1Welcome,
            "Review house rules (breaks, phone use, dress code)",
            Employee,
            Due::Day1,
            Day1,
        ),
        Task::new(
            Section::Day1Welcome,
            "Shadow a teammate on your first shift",
            Employee,
            Due::Day1,
            Day1,
        ),
    ]
}

/// The onboarding-kit template task an owner can append with one action.
#[must_use]
pub fn kit_template_task() -> Task {
    Task::new(
        Section::Day1Welcome,
        "Review employee handbook",
        Assignee::Employee,
        Due::Day1,
        Phase::Day1,
    )
}

/// Returns a copy of `tasks` whose statuses classify as `target`.
///
/// Used to build demo and test fixtures. The `In progress` policy only
/// round-trips through the readiness engine when the input holds at least one
/// task titled with a marker ("personal details", "W-4") and at least one
/// other pre-boarding employee task.
#[must_use]
pub fn seed_tasks_for_status(tasks: &[Task], target: ReadinessStatus) -> Vec<Task> {
    let mut seeded = tasks.to_vec();

    let complete_if: fn(&Task) -> bool = match target {
        ReadinessStatus::NotStarted => return seeded,
        ReadinessStatus::InProgress => {
            |t: &Task| IN_PROGRESS_MARKERS.iter().any(|m| t.title().contains(m))
        }
        ReadinessStatus::ReadyForDay1 => |t: &Task| t.phase() == Phase::PreBoarding,
        ReadinessStatus::ReadyForPayroll => |_: &Task| true,
    };

    for task in &mut seeded {
        if complete_if(task) {
            task.set_status(TaskStatus::Completed);
        }
    }
    seeded
}
