//! Handler for the `add-task` command.

use super::{resolve_hire, set::print_change, short_id};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use onboard::engine::catalog::kit_template_task;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;
use onboard::engine::types::{Assignee, Due, Phase, Section, Task};

#[derive(Args, Clone, Debug)]
pub struct AddTaskArgs {
    /// Task title (omit with --kit)
    #[arg(required_unless_present = "kit")]
    pub title: Option<String>,
    #[arg(long, default_value = "Day 1 welcome & orientation")]
    pub section: Section,
    #[arg(long, default_value = "Employee")]
    pub assignee: Assignee,
    #[arg(long, default_value = "Day 1")]
    pub due: Due,
    /// Defaults to Day 1 when due on Day 1, otherwise Pre-boarding
    #[arg(long)]
    pub phase: Option<Phase>,
    #[arg(long)]
    pub description: Option<String>,
    /// Add the onboarding-kit template task instead
    #[arg(long, conflicts_with = "title")]
    pub kit: bool,
}

impl AddTaskArgs {
    fn into_task(self) -> Task {
        let Some(title) = self.title.filter(|_| !self.kit) else {
            return kit_template_task();
        };
        let phase = self.phase.unwrap_or_else(|| Phase::for_due(self.due));
        let task = Task::new(self.section, &title, self.assignee, self.due, phase);
        match self.description {
            Some(d) => task.with_description(&d),
            None => task,
        }
    }
}

/// Appends a custom task to a hire's checklist.
///
/// # Errors
/// Returns error if the hire cannot be resolved.
pub fn handle(config: &Config, hire_ref: Option<&str>, args: AddTaskArgs) -> Result<()> {
    let mut conn = Db::connect(config)?;
    let tx = conn.transaction()?;
    let svc = HireService::new(SqliteHireRepo::new(&tx));

    let hire = resolve_hire(&svc, hire_ref)?;
    let task = args.into_task();
    let summary = format!(
        "[{}] {} ({}, {}, {})",
        short_id(task.id()),
        task.title(),
        task.phase(),
        task.assignee(),
        task.due()
    );

    let (_, change) = svc.add_task(hire.id(), task)?;
    tx.commit()?;

    println!(
        "{} Added {} for {}",
        "✓".green(),
        summary,
        hire.employee_name().yellow()
    );
    print_change(&change);
    Ok(())
}
