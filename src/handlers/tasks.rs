//! Handler for the `tasks` command.

use super::{resolve_hire, short_id, task_icon};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;
use onboard::engine::types::{Assignee, Labeled, Phase, Section, Task};

/// Prints a hire's checklist grouped by section.
///
/// # Errors
/// Returns error if the hire cannot be resolved.
pub fn handle(
    config: &Config,
    hire_ref: Option<&str>,
    phase: Option<Phase>,
    assignee: Option<Assignee>,
) -> Result<()> {
    let conn = Db::connect(config)?;
    let svc = HireService::new(SqliteHireRepo::new(&conn));
    let hire = resolve_hire(&svc, hire_ref)?;

    println!("{} Checklist for {}:", "📋".cyan(), hire.employee_name().bold());

    for &section in Section::ALL {
        let tasks: Vec<_> = hire
            .tasks()
            .iter()
            .filter(|t| t.section() == section && shows(t, phase, assignee))
            .collect();
        if tasks.is_empty() {
            continue;
        }

        println!("\n   {}", section.to_string().underline());
        for task in tasks {
            println!(
                "   {} [{}] {} {}",
                task_icon(task.status()),
                short_id(task.id()).dimmed(),
                task.title(),
                format!("({}, {})", task.assignee(), task.due()).dimmed()
            );
            if let Some(desc) = task.description() {
                println!("              {}", desc.dimmed());
            }
        }
    }
    Ok(())
}

fn shows(task: &Task, phase: Option<Phase>, assignee: Option<Assignee>) -> bool {
    phase.map_or(true, |p| task.phase() == p) && assignee.map_or(true, |a| task.assignee() == a)
}

#[cfg(test)]
mod tests {
    use super::*;
    use onboard::engine::catalog::generate_default_tasks;

    fn titles(phase: Option<Phase>, assignee: Option<Assignee>) -> Vec<String> {
        generate_default_tasks()
            .iter()
            .filter(|t| shows(t, phase, assignee))
            .map(|t| t.title().to_string())
            .collect()
    }

    #[test]
    fn test_no_filter_shows_everything() {
        assert_eq!(titles(None, None).len(), 11);
    }

    #[test]
    fn test_assignee_filter() {
        let employee = titles(None, Some(Assignee::Employee));
        let owner = titles(None, Some(Assignee::Owner));
        let manager = titles(None, Some(Assignee::Manager));
        assert_eq!(employee.len() + owner.len() + manager.len(), 11);
        assert!(employee.contains(&"Complete W-4".to_string()));
        assert!(!owner.contains(&"Complete W-4".to_string()));
    }

    #[test]
    fn test_phase_and_assignee_combine() {
        let both = titles(Some(Phase::Day1), Some(Assignee::Employee));
        let day1 = titles(Some(Phase::Day1), None);
        assert!(both.len() <= day1.len());
        assert!(generate_default_tasks()
            .iter()
            .filter(|t| both.contains(&t.title().to_string()))
            .all(|t| t.phase() == Phase::Day1 && t.assignee() == Assignee::Employee));
    }
}
