//! Handler for the `hire` command.

use super::{readiness_badge, short_id};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;
use colored::Colorize;
use onboard::engine::catalog::kit_template_task;
use onboard::engine::config::Config;
use onboard::engine::db::Db;
use onboard::engine::hire::DraftHire;
use onboard::engine::repo::SqliteHireRepo;
use onboard::engine::service::HireService;
use onboard::engine::types::EmploymentType;

#[derive(Args, Clone, Debug)]
pub struct NewHireArgs {
    /// Employee's full name
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub role: Option<String>,
    /// Full-time or Part-time
    #[arg(long = "type")]
    pub employment_type: Option<EmploymentType>,
    #[arg(long)]
    pub city: Option<String>,
    #[arg(long)]
    pub state: Option<String>,
    /// First day of work (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<NaiveDate>,
    /// Owner contact email
    #[arg(long)]
    pub email: Option<String>,
    /// Owner contact phone
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub business: Option<String>,
    #[arg(long)]
    pub manager: Option<String>,
    /// Day 1 meeting time, e.g. "9:00 AM"
    #[arg(long)]
    pub meeting: Option<String>,
    /// Business address for Day 1
    #[arg(long)]
    pub address: Option<String>,
    /// Append the onboarding-kit template task
    #[arg(long)]
    pub kit: bool,
}

impl NewHireArgs {
    fn into_draft(self) -> DraftHire {
        let mut draft = DraftHire::new().employee_name(self.name);
        if let Some(role) = self.role {
            draft = draft.role(role);
        }
        if let Some(kind) = self.employment_type {
            draft = draft.employment_type(kind);
        }
        if let Some(city) = self.city {
            draft = draft.location_city(city);
        }
        if let Some(state) = self.state {
            draft = draft.location_state(state);
        }
        if let Some(start) = self.start {
            draft = draft.start_date(start);
        }
        if let Some(email) = self.email {
            draft = draft.owner_contact_email(email);
        }
        if let Some(phone) = self.phone {
            draft = draft.owner_contact_phone(phone);
        }
        if let Some(business) = self.business {
            draft = draft.business_name(business);
        }
        if let Some(manager) = self.manager {
            draft = draft.manager_name(manager);
        }
        if let Some(meeting) = self.meeting {
            draft = draft.manager_meeting_time(meeting);
        }
        if let Some(address) = self.address {
            draft = draft.address_line(address);
        }
        if self.kit {
            draft.add_task(kit_template_task());
        }
        draft
    }
}

/// Creates a hire with the default checklist and selects it.
///
/// # Errors
/// Returns error if validation fails or the store is not initialized.
pub fn handle(config: &Config, args: NewHireArgs) -> Result<()> {
    let mut conn = Db::connect(config)?;
    let tx = conn.transaction()?;
    let svc = HireService::new(SqliteHireRepo::new(&tx));

    let hire = svc.create_hire(args.into_draft())?;
    tx.commit()?;

    let p = hire.profile();
    println!(
        "{} Added hire [{}] {} ({}, starts {})",
        "✓".green(),
        short_id(hire.id()).yellow(),
        hire.employee_name(),
        p.role,
        p.start_date
    );
    println!(
        "   {} tasks, status {}",
        hire.tasks().len(),
        readiness_badge(hire.readiness_status())
    );
    Ok(())
}
