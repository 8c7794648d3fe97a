//! Handler for the `remove-task` command.

use super::{resolve_hire, resolve_task, set::print_change};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;

/// Removes a task from a hire's checklist.
///
/// # Errors
/// Returns error if the hire or task cannot be resolved.
pub fn handle(config: &Config, hire_ref: Option<&str>, task_ref: &str, strict: bool) -> Result<()> {
    let mut conn = Db::connect(config)?;
    let tx = conn.transaction()?;
    let svc = HireService::new(SqliteHireRepo::new(&tx));

    let hire = resolve_hire(&svc, hire_ref)?;
    let task_id = resolve_task(&hire, task_ref, strict)?.id().to_string();

    let (_, removed, change) = svc.remove_task(hire.id(), &task_id)?;
    tx.commit()?;

    println!("{} Removed {}", "✗".red(), removed.title());
    print_change(&change);
    Ok(())
}
