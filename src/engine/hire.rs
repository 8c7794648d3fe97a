//! Hire aggregate: one onboarding record and its checklist.
//!
//! `DraftHire` is the mutable builder an owner fills in; `finalize` turns it
//! into a `Hire`. A `Hire` keeps its derived statuses as a cache that is
//! refreshed after every checklist mutation and can never be set directly.

use super::catalog::generate_default_tasks;
use super::day1::compute_day1_checklist_status;
use super::error::{HireError, ValidationError};
use super::state::compute_readiness_status;
use super::types::{Day1ChecklistStatus, EmploymentType, ReadinessStatus, Task, TaskStatus};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;

const DEFAULT_ROLE: &str = "Role";
const DEFAULT_BUSINESS: &str = "Sunrise Cafe";
const DEFAULT_MANAGER: &str = "Alex";
const DEFAULT_MEETING_TIME: &str = "9:00 AM";
const DEFAULT_ADDRESS: &str = "123 Main Street, Springfield, CO";

/// Descriptive fields of a hire. None of these affect derivation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HireProfile {
    pub employee_name: String,
    pub role: String,
    pub employment_type: EmploymentType,
    pub location_city: String,
    pub location_state: String,
    pub start_date: NaiveDate,
    pub owner_contact_email: String,
    pub owner_contact_phone: Option<String>,
    pub business_name: String,
    pub manager_name: String,
    pub manager_meeting_time: Option<String>,
    pub address_line: Option<String>,
}

/// Readiness and Day 1 status before and after one mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StatusChange {
    pub readiness_before: ReadinessStatus,
    pub readiness_after: ReadinessStatus,
    pub day1_before: Day1ChecklistStatus,
    pub day1_after: Day1ChecklistStatus,
}

impl StatusChange {
    #[must_use]
    pub fn readiness_changed(&self) -> bool {
        self.readiness_before != self.readiness_after
    }

    #[must_use]
    pub fn day1_changed(&self) -> bool {
        self.day1_before != self.day1_after
    }
}

/// A persisted onboarding record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hire {
    id: String,
    #[serde(flatten)]
    profile: HireProfile,
    readiness_status: ReadinessStatus,
    day1_status: Day1ChecklistStatus,
    tasks: Vec<Task>,
}

impl Hire {
    /// Rebuilds a hire from stored parts, recomputing its derived statuses.
    #[must_use]
    pub fn from_parts(id: &str, profile: HireProfile, tasks: Vec<Task>) -> Self {
        let mut hire = Self {
            id: id.to_string(),
            profile,
            readiness_status: ReadinessStatus::NotStarted,
            day1_status: Day1ChecklistStatus::NotYetActive,
            tasks,
        };
        hire.refresh();
        hire
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn profile(&self) -> &HireProfile {
        &self.profile
    }

    #[must_use]
    pub fn employee_name(&self) -> &str {
        &self.profile.employee_name
    }

    #[must_use]
    pub fn readiness_status(&self) -> ReadinessStatus {
        self.readiness_status
    }

    #[must_use]
    pub fn day1_status(&self) -> Day1ChecklistStatus {
        self.day1_status
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == task_id)
    }

    /// Sets one task's status and recomputes the derived statuses.
    ///
    /// # Errors
    /// Returns `HireError::TaskNotFound` if no task has `task_id`.
    pub fn set_task_status(
        &mut self,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<StatusChange, HireError> {
        let pos = self.position(task_id)?;
        self.tasks[pos].set_status(status);
        Ok(self.refresh())
    }

    /// Appends a task to the checklist.
    ///
    /// # Errors
    /// Returns `HireError::DuplicateTask` if the id is already present.
    pub fn add_task(&mut self, task: Task) -> Result<StatusChange, HireError> {
        if self.task(task.id()).is_some() {
            return Err(HireError::DuplicateTask(task.id().to_string()));
        }
        self.tasks.push(task);
        Ok(self.refresh())
    }

    /// Removes a task from the checklist, returning it.
    ///
    /// # Errors
    /// Returns `HireError::TaskNotFound` if no task has `task_id`.
    pub fn remove_task(&mut self, task_id: &str) -> Result<(Task, StatusChange), HireError> {
        let pos = self.position(task_id)?;
        let removed = self.tasks.remove(pos);
        Ok((removed, self.refresh()))
    }

    /// Puts every task back to `Not started`.
    pub fn reset_progress(&mut self) -> StatusChange {
        for task in &mut self.tasks {
            task.set_status(TaskStatus::NotStarted);
        }
        self.refresh()
    }

    fn position(&self, task_id: &str) -> Result<usize, HireError> {
        self.tasks
            .iter()
            .position(|t| t.id() == task_id)
            .ok_or_else(|| HireError::TaskNotFound {
                hire_id: self.id.clone(),
                task_id: task_id.to_string(),
            })
    }

    fn refresh(&mut self) -> StatusChange {
        let readiness_before = self.readiness_status;
        let day1_before = self.day1_status;
        self.readiness_status = compute_readiness_status(&self.tasks);
        self.day1_status = compute_day1_checklist_status(&self.tasks);
        StatusChange {
            readiness_before,
            readiness_after: self.readiness_status,
            day1_before,
            day1_after: self.day1_status,
        }
    }
}

/// A hire under construction.
///
/// Unset fields fall back to defaults at `finalize`. An empty checklist is
/// replaced by the default catalog.
#[derive(Debug, Clone, Default)]
pub struct DraftHire {
    employee_name: Option<String>,
    role: Option<String>,
    employment_type: Option<EmploymentType>,
    location_city: Option<String>,
    location_state: Option<String>,
    start_date: Option<NaiveDate>,
    owner_contact_email: Option<String>,
    owner_contact_phone: Option<String>,
    business_name: Option<String>,
    manager_name: Option<String>,
    manager_meeting_time: Option<String>,
    address_line: Option<String>,
    tasks: Vec<Task>,
}

macro_rules! draft_setters {
    ($($field:ident: $ty:ty),+ $(,)?) => {
        $(
            #[must_use]
            pub fn $field(mut self, value: impl Into<$ty>) -> Self {
                self.$field = Some(value.into());
                self
            }
        )+
    };
}

impl DraftHire {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    draft_setters! {
        employee_name: String,
        role: String,
        employment_type: EmploymentType,
        location_city: String,
        location_state: String,
        start_date: NaiveDate,
        owner_contact_email: String,
        owner_contact_phone: String,
        business_name: String,
        manager_name: String,
        manager_meeting_time: String,
        address_line: String,
    }

    /// Replaces the draft checklist.
    #[must_use]
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Fills an empty checklist with the default catalog.
    pub fn ensure_default_tasks(&mut self) {
        if self.tasks.is_empty() {
            self.tasks = generate_default_tasks();
        }
    }

    /// Appends a task, seeding the default catalog first if the list is empty.
    pub fn add_task(&mut self, task: Task) {
        self.ensure_default_tasks();
        self.tasks.push(task);
    }

    /// Removes a task by id. Returns false if it was not on the draft.
    pub fn remove_task(&mut self, task_id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id() != task_id);
        self.tasks.len() != before
    }

    /// Validates the draft and produces a hire with a fresh id.
    ///
    /// # Errors
    /// Returns a `ValidationError` if the employee name is blank, the owner
    /// email is malformed, or two tasks share an id.
    pub fn finalize(self) -> Result<Hire, ValidationError> {
        let employee_name = self
            .employee_name
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .ok_or(ValidationError::MissingEmployeeName)?;

        let owner_contact_email = self.owner_contact_email.unwrap_or_default();
        if !owner_contact_email.is_empty() && !is_plausible_email(&owner_contact_email) {
            return Err(ValidationError::InvalidEmail(owner_contact_email));
        }

        if let Some(dup) = first_duplicate_id(&self.tasks) {
            return Err(ValidationError::DuplicateTaskId(dup));
        }

        let tasks = if self.tasks.is_empty() {
            generate_default_tasks()
        } else {
            self.tasks
        };

        let profile = HireProfile {
            employee_name,
            role: self.role.unwrap_or_else(|| DEFAULT_ROLE.to_string()),
            employment_type: self.employment_type.unwrap_or_default(),
            location_city: self.location_city.unwrap_or_default(),
            location_state: self.location_state.unwrap_or_default(),
            start_date: self
                .start_date
                .unwrap_or_else(|| chrono::Local::now().date_naive()),
            owner_contact_email,
            owner_contact_phone: self.owner_contact_phone,
            business_name: self
                .business_name
                .unwrap_or_else(|| DEFAULT_BUSINESS.to_string()),
            manager_name: self
                .manager_name
                .unwrap_or_else(|| DEFAULT_MANAGER.to_string()),
            manager_meeting_time: self
                .manager_meeting_time
                .or_else(|| Some(DEFAULT_MEETING_TIME.to_string())),
            address_line: self
                .address_line
                .or_else(|| Some(DEFAULT_ADDRESS.to_string())),
        };

        Ok(Hire::from_parts(
            &uuid::Uuid::new_v4().to_string(),
            profile,
            tasks,
        ))
    }
}

fn first_duplicate_id(tasks: &[Task]) -> Option<String> {
    let mut seen = HashSet::new();
    tasks
        .iter()
        .find(|t| !seen.insert(t.id()))
        .map(|t| t.id().to_string())
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && domain.contains('.') && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::kit_template_task;
    use crate::engine::types::Phase;

    fn make_hire() -> Hire {
        DraftHire::new()
            .employee_name("Jane Smith")
            .start_date(NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
            .finalize()
            .unwrap()
    }

    fn ids_where(hire: &Hire, pred: impl Fn(&Task) -> bool) -> Vec<String> {
        hire.tasks()
            .iter()
            .filter(|t| pred(t))
            .map(|t| t.id().to_string())
            .collect()
    }

    #[test]
    fn test_finalize_applies_defaults() {
        let hire = make_hire();
        assert_eq!(hire.tasks().len(), 11);
        assert_eq!(hire.readiness_status(), ReadinessStatus::NotStarted);
        assert_eq!(hire.day1_status(), Day1ChecklistStatus::NotYetActive);
        assert_eq!(hire.profile().business_name, "Sunrise Cafe");
        assert_eq!(hire.profile().manager_name, "Alex");
        assert_eq!(hire.profile().employment_type, EmploymentType::FullTime);
    }

    #[test]
    fn test_finalize_requires_name() {
        assert_eq!(
            DraftHire::new().finalize().unwrap_err(),
            ValidationError::MissingEmployeeName
        );
        assert_eq!(
            DraftHire::new().employee_name("   ").finalize().unwrap_err(),
            ValidationError::MissingEmployeeName
        );
    }

    #[test]
    fn test_finalize_rejects_bad_email() {
        let err = DraftHire::new()
            .employee_name("Jane")
            .owner_contact_email("owner.example.com")
            .finalize()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidEmail(_)));

        let ok = DraftHire::new()
            .employee_name("Jane")
            .owner_contact_email("owner@sunrisecafe.com")
            .finalize();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_finalize_rejects_duplicate_task_ids() {
        let mut draft = DraftHire::new().employee_name("Jane");
        let task = kit_template_task();
        draft.add_task(task.clone());
        draft.add_task(task);
        assert!(matches!(
            draft.finalize(),
            Err(ValidationError::DuplicateTaskId(_))
        ));
    }

    #[test]
    fn test_draft_task_edits() {
        let mut draft = DraftHire::new().employee_name("Jane");
        let extra = kit_template_task();
        let extra_id = extra.id().to_string();
        draft.add_task(extra);
        assert_eq!(draft.tasks().len(), 12);
        assert!(draft.remove_task(&extra_id));
        assert!(!draft.remove_task(&extra_id));
        assert_eq!(draft.finalize().unwrap().tasks().len(), 11);
    }

    #[test]
    fn test_status_updates_recompute() {
        let mut hire = make_hire();
        let w4 = ids_where(&hire, |t| t.title() == "Complete W-4");
        let change = hire.set_task_status(&w4[0], TaskStatus::Completed).unwrap();
        assert!(change.readiness_changed());
        assert_eq!(change.readiness_before, ReadinessStatus::NotStarted);
        assert_eq!(hire.readiness_status(), ReadinessStatus::InProgress);

        for id in ids_where(&hire, |t| t.phase() == Phase::PreBoarding) {
            hire.set_task_status(&id, TaskStatus::Completed).unwrap();
        }
        assert_eq!(hire.readiness_status(), ReadinessStatus::ReadyForDay1);
        assert_eq!(hire.day1_status(), Day1ChecklistStatus::Active);

        for id in ids_where(&hire, |_| true) {
            hire.set_task_status(&id, TaskStatus::Completed).unwrap();
        }
        assert_eq!(hire.readiness_status(), ReadinessStatus::ReadyForPayroll);
        assert_eq!(hire.day1_status(), Day1ChecklistStatus::Completed);
    }

    #[test]
    fn test_unknown_task_errors() {
        let mut hire = make_hire();
        let err = hire.set_task_status("nope", TaskStatus::Completed).unwrap_err();
        assert!(matches!(err, HireError::TaskNotFound { .. }));
        assert!(hire.remove_task("nope").is_err());
    }

    #[test]
    fn test_add_and_remove_recompute() {
        let mut hire = make_hire();
        for id in ids_where(&hire, |_| true) {
            hire.set_task_status(&id, TaskStatus::Completed).unwrap();
        }
        assert_eq!(hire.readiness_status(), ReadinessStatus::ReadyForPayroll);

        let extra = kit_template_task();
        let extra_id = extra.id().to_string();
        hire.add_task(extra.clone()).unwrap();
        assert_eq!(hire.readiness_status(), ReadinessStatus::ReadyForDay1);
        assert_eq!(hire.add_task(extra), Err(HireError::DuplicateTask(extra_id.clone())));

        let (removed, change) = hire.remove_task(&extra_id).unwrap();
        assert_eq!(removed.title(), "Review employee handbook");
        assert_eq!(change.readiness_after, ReadinessStatus::ReadyForPayroll);
    }

    #[test]
    fn test_reset_progress() {
        let mut hire = make_hire();
        for id in ids_where(&hire, |_| true) {
            hire.set_task_status(&id, TaskStatus::InProgress).unwrap();
        }
        let change = hire.reset_progress();
        assert_eq!(change.readiness_after, ReadinessStatus::NotStarted);
        assert!(hire.tasks().iter().all(|t| t.status() == TaskStatus::NotStarted));
    }

    #[test]
    fn test_from_parts_derives_statuses() {
        let hire = make_hire();
        let tasks: Vec<_> = hire
            .tasks()
            .iter()
            .cloned()
            .map(|t| t.with_status(TaskStatus::Completed))
            .collect();
        let rebuilt = Hire::from_parts(hire.id(), hire.profile().clone(), tasks);
        assert_eq!(rebuilt.readiness_status(), ReadinessStatus::ReadyForPayroll);
    }
}
