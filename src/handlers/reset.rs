//! Handler for the `reset` command.

use super::{resolve_hire, set::print_change};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;

/// Puts every task of a hire back to `Not started`.
///
/// # Errors
/// Returns error if the hire cannot be resolved.
pub fn handle(config: &Config, hire_ref: Option<&str>) -> Result<()> {
    let mut conn = Db::connect(config)?;
    let tx = conn.transaction()?;
    let svc = HireService::new(SqliteHireRepo::new(&tx));

    let hire = resolve_hire(&svc, hire_ref)?;
    let (_, change) = svc.reset_progress(hire.id())?;
    tx.commit()?;

    println!(
        "{} Reset {} tasks for {}",
        "↺".yellow(),
        hire.tasks().len(),
        hire.employee_name()
    );
    print_change(&change);
    Ok(())
}
