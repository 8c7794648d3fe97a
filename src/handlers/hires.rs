//! Handler for the `hires` command.

use super::{day1_badge, readiness_badge, short_id};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::hire::Hire;
use onboard::engine::repo::{HireStore, SqliteHireRepo};
use serde::Serialize;

#[derive(Serialize)]
struct HireRow<'a> {
    id: &'a str,
    employee_name: &'a str,
    role: &'a str,
    start_date: String,
    readiness_status: String,
    day1_status: String,
    next_step: &'a str,
    current: bool,
}

/// Lists all hires with their derived status.
///
/// # Errors
/// Returns error if database query fails.
pub fn handle(config: &Config, json: bool) -> Result<()> {
    let conn = Db::connect(config)?;
    let repo = SqliteHireRepo::new(&conn);
    let hires = repo.list()?;
    let current = repo.current_hire_id()?;

    if json {
        return print_json(&hires, current.as_deref());
    }

    println!("{} New Hire Onboarding:", "📋".cyan());
    if hires.is_empty() {
        println!("   (No hires yet. Run `onboard hire --name ...` or `onboard seed`.)");
        return Ok(());
    }

    for hire in &hires {
        let marker = if current.as_deref() == Some(hire.id()) {
            "→".yellow()
        } else {
            " ".normal()
        };
        let p = hire.profile();
        println!(
            " {} [{}] {} ({}, starts {})",
            marker,
            short_id(hire.id()).blue(),
            hire.employee_name(),
            p.role,
            p.start_date
        );
        println!(
            "      {} | Day 1: {} | {}",
            readiness_badge(hire.readiness_status()),
            day1_badge(hire.day1_status()),
            hire.readiness_status().next_step().dimmed()
        );
    }
    Ok(())
}

fn print_json(hires: &[Hire], current: Option<&str>) -> Result<()> {
    let rows: Vec<_> = hires
        .iter()
        .map(|h| HireRow {
            id: h.id(),
            employee_name: h.employee_name(),
            role: &h.profile().role,
            start_date: h.profile().start_date.to_string(),
            readiness_status: h.readiness_status().to_string(),
            day1_status: h.day1_status().to_string(),
            next_step: h.readiness_status().next_step(),
            current: current == Some(h.id()),
        })
        .collect();
    println!("{}", serde_json::to_string_pretty(&rows)?);
    Ok(())
}
