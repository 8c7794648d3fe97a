//! Handler for the `why` command.

use super::{day1_badge, readiness_badge, resolve_hire};
use anyhow::Result;
use colored::Colorize;
use onboard::engine::config::Config;
use onboard::engine::day1::{classify_day1, Day1Facts, Day1Rule, DAY1_RULES};
use onboard::engine::db::Db;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;
use onboard::engine::state::{classify_readiness, ReadinessFacts, ReadinessRule, READINESS_RULES};

/// Explains which rule produced a hire's readiness and Day 1 status.
///
/// # Errors
/// Returns error if the hire cannot be resolved.
pub fn handle(config: &Config, hire_ref: Option<&str>) -> Result<()> {
    let conn = Db::connect(config)?;
    let svc = HireService::new(SqliteHireRepo::new(&conn));
    let hire = resolve_hire(&svc, hire_ref)?;

    let readiness = classify_readiness(hire.tasks());
    let day1 = classify_day1(hire.tasks());

    println!("{} {}", "?".cyan(), hire.employee_name().bold());
    println!();
    println!("   Readiness: {}", readiness_badge(readiness.status));
    println!(
        "   {} {}",
        "reason:".yellow(),
        readiness.rule.explanation()
    );
    print_readiness_rules(readiness.rule);
    print_readiness_facts(&readiness.facts);

    println!();
    println!("   Day 1:     {}", day1_badge(day1.status));
    println!("   {} {}", "reason:".yellow(), day1.rule.explanation());
    print_day1_rules(day1.rule);
    print_day1_facts(&day1.facts);
    Ok(())
}

fn print_readiness_rules(fired: ReadinessRule) {
    for rule in READINESS_RULES {
        let marker = if rule == fired { "▶".green() } else { " ".normal() };
        println!("     {} {:<26} → {}", marker, rule.to_string(), rule.outcome());
        if rule == fired {
            break;
        }
    }
}

fn print_day1_rules(fired: Day1Rule) {
    for rule in DAY1_RULES {
        let marker = if rule == fired { "▶".green() } else { " ".normal() };
        println!("     {} {:<26} → {}", marker, format!("{rule:?}"), rule.outcome());
        if rule == fired {
            break;
        }
    }
}

fn print_readiness_facts(f: &ReadinessFacts) {
    println!("{}", "     facts:".dimmed());
    println!("       tasks                          {}", f.task_count);
    println!("       any activity                   {}", yes_no(f.has_activity));
    println!(
        "       employee pre-boarding done     {}",
        yes_no(f.all_preboarding_employee_done)
    );
    println!(
        "       owner pre-boarding done        {}",
        yes_no(f.all_preboarding_owner_done)
    );
    println!("       day 1 done                     {}", yes_no(f.all_day1_done));
    println!("       everything done                {}", yes_no(f.all_done));
}

fn print_day1_facts(f: &Day1Facts) {
    println!("{}", "     facts:".dimmed());
    println!(
        "       employee pre-boarding done     {}",
        yes_no(f.preboarding_employee_done)
    );
    println!("       day 1 done                     {}", yes_no(f.day1_done));
}

fn yes_no(v: bool) -> colored::ColoredString {
    if v {
        "yes".green()
    } else {
        "no".red()
    }
}
