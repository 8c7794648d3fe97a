//! Handler for the `status` command.

use super::{day1_badge, readiness_badge, resolve_hire, short_id};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::hire::Hire;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;
use onboard::engine::types::{Assignee, Phase, Task, TaskStatus};
use serde::Serialize;

/// Displays readiness and Day 1 status for a hire.
///
/// # Errors
/// Returns error if the hire cannot be resolved.
pub fn handle(config: &Config, hire_ref: Option<&str>, json: bool) -> Result<()> {
    let conn = Db::connect(config)?;
    let svc = HireService::new(SqliteHireRepo::new(&conn));
    let hire = resolve_hire(&svc, hire_ref)?;

    if json {
        return print_json(&hire);
    }

    print_human(&hire);
    Ok(())
}

/// Aggregate counts of tasks by status.
#[derive(Debug, Default, Serialize)]
pub struct StatusCounts {
    pub not_started: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl StatusCounts {
    fn tally<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        let mut counts = Self::default();
        for task in tasks {
            match task.status() {
                TaskStatus::NotStarted => counts.not_started += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
        }
        counts
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.not_started + self.in_progress + self.completed
    }
}

#[derive(Serialize)]
struct StatusReport<'a> {
    hire: &'a Hire,
    next_step: &'static str,
    counts: StatusCounts,
}

fn print_json(hire: &Hire) -> Result<()> {
    let report = StatusReport {
        hire,
        next_step: hire.readiness_status().next_step(),
        counts: StatusCounts::tally(hire.tasks()),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_human(hire: &Hire) {
    let p = hire.profile();
    println!(
        "{} {} [{}]",
        "📊".cyan(),
        hire.employee_name().bold(),
        short_id(hire.id()).dimmed()
    );
    println!(
        "   {} at {} ({}), starts {}",
        p.role, p.business_name, p.employment_type, p.start_date
    );
    println!();
    println!("   Readiness:  {}", readiness_badge(hire.readiness_status()));
    println!("   Day 1:      {}", day1_badge(hire.day1_status()));
    println!(
        "   Next step:  {}",
        hire.readiness_status().next_step().dimmed()
    );
    println!();

    let groups: [(&str, fn(&Task) -> bool); 3] = [
        ("Employee pre-boarding", Task::is_preboarding_employee),
        ("Owner pre-boarding", |t: &Task| {
            t.phase() == Phase::PreBoarding && t.assignee() != Assignee::Employee
        }),
        ("Day 1", |t: &Task| t.phase() == Phase::Day1),
    ];
    for (label, belongs) in groups {
        let counts = StatusCounts::tally(hire.tasks().iter().filter(|t| belongs(t)));
        println!(
            "   {:<22} {}/{} completed{}",
            label,
            counts.completed,
            counts.total(),
            if counts.in_progress > 0 {
                format!(", {} in progress", counts.in_progress)
            } else {
                String::new()
            }
        );
    }
}
