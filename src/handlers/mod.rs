//! Command handlers for the `onboard` binary.

pub mod add_task;
pub mod hire;
pub mod hires;
pub mod init;
pub mod remove_task;
pub mod reset;
pub mod seed;
pub mod set;
pub mod status;
pub mod tasks;
pub mod use_hire;
pub mod why;

use anyhow::Result;
use colored::{ColoredString, Colorize};
use onboard::engine::hire::Hire;
use onboard::engine::repo::HireStore;
use onboard::engine::resolver::Resolver;
use onboard::engine::service::HireService;
use onboard::engine::types::{Day1ChecklistStatus, ReadinessStatus, Task, TaskStatus};

/// Resolves `--hire` against all hires, or falls back to the current hire.
///
/// # Errors
/// Returns error if nothing matches or no current hire is selected.
pub fn resolve_hire<S: HireStore>(svc: &HireService<S>, hire_ref: Option<&str>) -> Result<Hire> {
    let Some(query) = hire_ref else {
        return Ok(svc.current_hire()?);
    };
    let hires = svc.list_hires()?;
    let found = Resolver::new().resolve(&hires, query)?;
    Ok(found.clone())
}

/// Resolves a task reference within one hire's checklist.
///
/// # Errors
/// Returns error if no task matches or the reference is ambiguous.
pub fn resolve_task<'a>(hire: &'a Hire, task_ref: &str, strict: bool) -> Result<&'a Task> {
    let resolver = if strict {
        Resolver::strict()
    } else {
        Resolver::new()
    };
    resolver.resolve(hire.tasks(), task_ref)
}

#[must_use]
pub fn short_id(id: &str) -> &str {
    id.get(..8).unwrap_or(id)
}

pub fn readiness_badge(status: ReadinessStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        ReadinessStatus::NotStarted => label.dimmed(),
        ReadinessStatus::InProgress => label.yellow(),
        ReadinessStatus::ReadyForDay1 => label.blue(),
        ReadinessStatus::ReadyForPayroll => label.green(),
    }
}

pub fn day1_badge(status: Day1ChecklistStatus) -> ColoredString {
    let label = status.to_string();
    match status {
        Day1ChecklistStatus::NotYetActive => label.dimmed(),
        Day1ChecklistStatus::Active => label.yellow(),
        Day1ChecklistStatus::Completed => label.green(),
    }
}

pub fn task_icon(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::NotStarted => "○".dimmed(),
        TaskStatus::InProgress => "◐".yellow(),
        TaskStatus::Completed => "✓".green(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_id() {
        assert_eq!(short_id("77a234f3-1c2d-4e5f"), "77a234f3");
        assert_eq!(short_id("abc"), "abc");
        assert_eq!(short_id("aéééé-1"), "aéééé-1");
    }
}
