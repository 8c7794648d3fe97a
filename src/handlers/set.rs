//! Handler for the `set` command.

use super::{day1_badge, readiness_badge, resolve_hire, resolve_task, task_icon};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::hire::StatusChange;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;
use onboard::engine::types::TaskStatus;

/// Changes one task's status and reports any derived status transition.
///
/// # Errors
/// Returns error if the hire or task cannot be resolved.
pub fn handle(
    config: &Config,
    hire_ref: Option<&str>,
    task_ref: &str,
    status: TaskStatus,
    strict: bool,
) -> Result<()> {
    let mut conn = Db::connect(config)?;
    let tx = conn.transaction()?;
    let svc = HireService::new(SqliteHireRepo::new(&tx));

    let hire = resolve_hire(&svc, hire_ref)?;
    let task = resolve_task(&hire, task_ref, strict)?;
    let (title, previous) = (task.title().to_string(), task.status());

    let (_, change) = svc.update_task_status(hire.id(), task.id(), status)?;
    tx.commit()?;

    println!(
        "{} {} ({} → {})",
        task_icon(status),
        title,
        previous.to_string().dimmed(),
        status
    );
    print_change(&change);
    Ok(())
}

/// Prints derived status transitions, if any.
pub fn print_change(change: &StatusChange) {
    if change.readiness_changed() {
        println!(
            "   Readiness: {} → {}",
            readiness_badge(change.readiness_before),
            readiness_badge(change.readiness_after)
        );
    }
    if change.day1_changed() {
        println!(
            "   Day 1:     {} → {}",
            day1_badge(change.day1_before),
            day1_badge(change.day1_after)
        );
    }
}
