//! Handler for the `seed` command.

use super::{readiness_badge, short_id};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;

/// Inserts the demo hires.
///
/// # Errors
/// Returns error if the store is not initialized.
pub fn handle(config: &Config) -> Result<()> {
    let mut conn = Db::connect(config)?;
    let tx = conn.transaction()?;
    let svc = HireService::new(SqliteHireRepo::new(&tx));

    let hires = svc.seed_demo_hires(chrono::Local::now().date_naive())?;
    tx.commit()?;

    if hires.is_empty() {
        println!("{} Store already has hires; nothing seeded.", "•".yellow());
        return Ok(());
    }
    println!("{} Seeded {} demo hires:", "✓".green(), hires.len());
    for hire in &hires {
        println!(
            "   [{}] {} ({})",
            short_id(hire.id()).blue(),
            hire.employee_name(),
            readiness_badge(hire.readiness_status())
        );
    }
    Ok(())
}
