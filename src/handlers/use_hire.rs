//! Handler for the `use` command.

use super::{readiness_badge, resolve_hire};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;

/// Selects the hire that later commands act on.
///
/// # Errors
/// Returns error if the hire cannot be resolved.
pub fn handle(config: &Config, hire_ref: &str) -> Result<()> {
    let conn = Db::connect(config)?;
    let svc = HireService::new(SqliteHireRepo::new(&conn));

    let hire = resolve_hire(&svc, Some(hire_ref))?;
    svc.set_current_hire(hire.id())?;

    println!(
        "{} Now onboarding: {} ({})",
        "→".yellow(),
        hire.employee_name().yellow(),
        readiness_badge(hire.readiness_status())
    );
    Ok(())
}
