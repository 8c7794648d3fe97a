//! Hire Service: every hire mutation goes through here.
//!
//! Each operation loads the hire, applies one mutation (which recomputes the
//! derived statuses), and saves it back. The service never caches hires, so
//! the store is the only copy. Callers sharing a store across threads must
//! serialize calls; the CLI wraps each command in one `SQLite` transaction.

use super::catalog::{generate_default_tasks, seed_tasks_for_status};
use super::error::{HireError, ServiceError};
use super::hire::{DraftHire, Hire, StatusChange};
use super::repo::HireStore;
use super::types::{EmploymentType, ReadinessStatus, Task, TaskStatus};
use chrono::{Days, NaiveDate};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub struct HireService<S: HireStore> {
    store: S,
}

impl<S: HireStore> HireService<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Finalizes a draft, persists it, and makes it the current hire.
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if the draft is incomplete.
    pub fn create_hire(&self, draft: DraftHire) -> ServiceResult<Hire> {
        let hire = draft.finalize()?;
        self.store.save(&hire)?;
        self.store.set_current_hire(hire.id())?;
        tracing::info!(
            hire = hire.id(),
            name = hire.employee_name(),
            tasks = hire.tasks().len(),
            "hire created"
        );
        Ok(hire)
    }

    /// # Errors
    /// Returns `ServiceError::HireNotFound` if no hire has `id`.
    pub fn get_hire(&self, id: &str) -> ServiceResult<Hire> {
        self.store.load(id)?.ok_or_else(|| {
            tracing::warn!(hire = id, "hire not found");
            ServiceError::HireNotFound(id.to_string())
        })
    }

    /// # Errors
    /// Returns `ServiceError::Store` if the store fails.
    pub fn list_hires(&self) -> ServiceResult<Vec<Hire>> {
        Ok(self.store.list()?)
    }

    /// Selects the hire that commands act on by default.
    ///
    /// # Errors
    /// Returns `ServiceError::HireNotFound` if no hire has `id`.
    pub fn set_current_hire(&self, id: &str) -> ServiceResult<Hire> {
        let hire = self.get_hire(id)?;
        self.store.set_current_hire(hire.id())?;
        Ok(hire)
    }

    /// # Errors
    /// Returns `ServiceError::NoCurrentHire` if nothing was selected, or
    /// `HireNotFound` if the selection points at a missing hire.
    pub fn current_hire(&self) -> ServiceResult<Hire> {
        let id = self
            .store
            .current_hire_id()?
            .ok_or(ServiceError::NoCurrentHire)?;
        self.get_hire(&id)
    }

    /// Changes one task's status and persists the recomputed hire.
    ///
    /// # Errors
    /// Returns `HireNotFound` or `Hire(TaskNotFound)` for unknown ids.
    pub fn update_task_status(
        &self,
        hire_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> ServiceResult<(Hire, StatusChange)> {
        self.mutate(hire_id, |hire| hire.set_task_status(task_id, status))
    }

    /// Appends a task to an existing hire's checklist.
    ///
    /// # Errors
    /// Returns `HireNotFound`, or `Hire(DuplicateTask)` if the id is taken.
    pub fn add_task(&self, hire_id: &str, task: Task) -> ServiceResult<(Hire, StatusChange)> {
        self.mutate(hire_id, |hire| hire.add_task(task))
    }

    /// Removes a task from an existing hire's checklist.
    ///
    /// # Errors
    /// Returns `HireNotFound` or `Hire(TaskNotFound)` for unknown ids.
    pub fn remove_task(
        &self,
        hire_id: &str,
        task_id: &str,
    ) -> ServiceResult<(Hire, Task, StatusChange)> {
        let (hire, (removed, change)) = self.mutate(hire_id, |hire| hire.remove_task(task_id))?;
        Ok((hire, removed, change))
    }

    /// Puts every task of a hire back to `Not started`.
    ///
    /// # Errors
    /// Returns `HireNotFound` if no hire has `hire_id`.
    pub fn reset_progress(&self, hire_id: &str) -> ServiceResult<(Hire, StatusChange)> {
        self.mutate(hire_id, |hire| Ok(hire.reset_progress()))
    }

    /// Inserts the three demo hires, each seeded to a different stage.
    /// Does nothing and returns an empty list if any hire already exists.
    ///
    /// # Errors
    /// Returns `ServiceError::Store` if saving fails.
    pub fn seed_demo_hires(&self, today: NaiveDate) -> ServiceResult<Vec<Hire>> {
        if !self.store.list()?.is_empty() {
            tracing::info!("store already has hires, demo seeding skipped");
            return Ok(Vec::new());
        }
        let mut created = Vec::new();
        for demo in demo_drafts(today) {
            let hire = demo.finalize()?;
            self.store.save(&hire)?;
            created.push(hire);
        }
        tracing::info!(count = created.len(), "demo hires seeded");
        Ok(created)
    }

    fn mutate<T>(
        &self,
        hire_id: &str,
        apply: impl FnOnce(&mut Hire) -> Result<T, HireError>,
    ) -> ServiceResult<(Hire, T)>
    where
        T: HasStatusChange,
    {
        let mut hire = self.get_hire(hire_id)?;
        let out = apply(&mut hire)?;
        self.store.save(&hire)?;

        let change = out.status_change();
        if change.readiness_changed() || change.day1_changed() {
            tracing::info!(
                hire = hire.id(),
                readiness_from = %change.readiness_before,
                readiness_to = %change.readiness_after,
                day1_from = %change.day1_before,
                day1_to = %change.day1_after,
                "derived status changed"
            );
        }
        Ok((hire, out))
    }
}

/// Mutation results that carry the resulting status transition.
trait HasStatusChange {
    fn status_change(&self) -> StatusChange;
}

impl HasStatusChange for StatusChange {
    fn status_change(&self) -> StatusChange {
        *self
    }
}

impl HasStatusChange for (Task, StatusChange) {
    fn status_change(&self) -> StatusChange {
        self.1
    }
}

struct DemoHire {
    name: &'static str,
    role: &'static str,
    employment_type: EmploymentType,
    city: &'static str,
    business: &'static str,
    manager: &'static str,
    meeting_time: &'static str,
    address: &'static str,
    starts_in_days: u64,
    stage: ReadinessStatus,
}

const DEMO_HIRES: [DemoHire; 3] = [
    DemoHire {
        name: "Jane Smith",
        role: "Retail Associate",
        employment_type: EmploymentType::FullTime,
        city: "Springfield",
        business: "Sunrise Cafe",
        manager: "Alex",
        meeting_time: "9:00 AM",
        address: "123 Main Street, Springfield, CO",
        starts_in_days: 7,
        stage: ReadinessStatus::InProgress,
    },
    DemoHire {
        name: "Carlos Rodriguez",
        role: "Server",
        employment_type: EmploymentType::PartTime,
        city: "Springfield",
        business: "Sunrise Cafe",
        manager: "Alex",
        meeting_time: "10:00 AM",
        address: "123 Main Street, Springfield, CO",
        starts_in_days: 3,
        stage: ReadinessStatus::ReadyForDay1,
    },
    DemoHire {
        name: "Priya Patel",
        role: "Office Admin",
        employment_type: EmploymentType::FullTime,
        city: "Denver",
        business: "Sunrise Cafe HQ",
        manager: "Sarah",
        meeting_time: "9:00 AM",
        address: "400 Broad St, Denver, CO",
        starts_in_days: 14,
        stage: ReadinessStatus::NotStarted,
    },
];

fn demo_drafts(today: NaiveDate) -> Vec<DraftHire> {
    DEMO_HIRES
        .iter()
        .map(|d| {
            let start = today
                .checked_add_days(Days::new(d.starts_in_days))
                .unwrap_or(today);
            DraftHire::new()
                .employee_name(d.name)
                .role(d.role)
                .employment_type(d.employment_type)
                .location_city(d.city)
                .location_state("CO")
                .start_date(start)
                .owner_contact_email("owner@sunrisecafe.com")
                .business_name(d.business)
                .manager_name(d.manager)
                .manager_meeting_time(d.meeting_time)
                .address_line(d.address)
                .with_tasks(seed_tasks_for_status(&generate_default_tasks(), d.stage))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::kit_template_task;
    use crate::engine::repo::MemoryHireStore;
    use crate::engine::types::{Day1ChecklistStatus, Phase};

    fn service() -> HireService<MemoryHireStore> {
        HireService::new(MemoryHireStore::new())
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    #[test]
    fn test_create_hire_sets_current() {
        let svc = service();
        let hire = svc
            .create_hire(DraftHire::new().employee_name("Jane Smith"))
            .unwrap();
        assert_eq!(svc.current_hire().unwrap().id(), hire.id());
        assert_eq!(hire.readiness_status(), ReadinessStatus::NotStarted);
    }

    #[test]
    fn test_create_hire_rejects_invalid_draft() {
        let svc = service();
        let err = svc.create_hire(DraftHire::new()).unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
        assert!(svc.list_hires().unwrap().is_empty());
    }

    #[test]
    fn test_no_current_hire() {
        let svc = service();
        assert!(matches!(svc.current_hire(), Err(ServiceError::NoCurrentHire)));
        assert!(matches!(
            svc.set_current_hire("missing"),
            Err(ServiceError::HireNotFound(_))
        ));
    }

    #[test]
    fn test_update_task_status_persists_recomputed_hire() {
        let svc = service();
        let hire = svc
            .create_hire(DraftHire::new().employee_name("Jane Smith"))
            .unwrap();

        let pre: Vec<_> = hire
            .tasks()
            .iter()
            .filter(|t| t.phase() == Phase::PreBoarding)
            .map(|t| t.id().to_string())
            .collect();
        let mut last = None;
        for id in &pre {
            last = Some(svc.update_task_status(hire.id(), id, TaskStatus::Completed).unwrap());
        }
        let (updated, change) = last.unwrap();
        assert_eq!(change.readiness_after, ReadinessStatus::ReadyForDay1);
        assert_eq!(change.day1_after, Day1ChecklistStatus::Active);

        let stored = svc.get_hire(hire.id()).unwrap();
        assert_eq!(stored, updated);
        assert_eq!(stored.readiness_status(), ReadinessStatus::ReadyForDay1);
    }

    #[test]
    fn test_unknown_task_leaves_store_untouched() {
        let svc = service();
        let hire = svc
            .create_hire(DraftHire::new().employee_name("Jane Smith"))
            .unwrap();
        let err = svc
            .update_task_status(hire.id(), "nope", TaskStatus::Completed)
            .unwrap_err();
        assert!(matches!(err, ServiceError::Hire(HireError::TaskNotFound { .. })));
        assert_eq!(svc.get_hire(hire.id()).unwrap(), hire);
    }

    #[test]
    fn test_add_remove_and_reset() {
        let svc = service();
        let hire = svc
            .create_hire(DraftHire::new().employee_name("Jane Smith"))
            .unwrap();

        let extra = kit_template_task();
        let extra_id = extra.id().to_string();
        let (with_extra, _) = svc.add_task(hire.id(), extra).unwrap();
        assert_eq!(with_extra.tasks().len(), 12);

        svc.update_task_status(hire.id(), &extra_id, TaskStatus::InProgress)
            .unwrap();
        let (after_remove, removed, change) = svc.remove_task(hire.id(), &extra_id).unwrap();
        assert_eq!(removed.status(), TaskStatus::InProgress);
        assert_eq!(after_remove.tasks().len(), 11);
        assert_eq!(change.readiness_after, ReadinessStatus::NotStarted);

        let first = after_remove.tasks()[0].id().to_string();
        svc.update_task_status(hire.id(), &first, TaskStatus::Completed)
            .unwrap();
        let (reset, change) = svc.reset_progress(hire.id()).unwrap();
        assert_eq!(change.readiness_before, ReadinessStatus::InProgress);
        assert_eq!(reset.readiness_status(), ReadinessStatus::NotStarted);
    }

    #[test]
    fn test_seed_demo_hires_match_their_stage() {
        let svc = service();
        let hires = svc.seed_demo_hires(today()).unwrap();
        let stages: Vec<_> = hires.iter().map(Hire::readiness_status).collect();
        assert_eq!(
            stages,
            vec![
                ReadinessStatus::InProgress,
                ReadinessStatus::ReadyForDay1,
                ReadinessStatus::NotStarted
            ]
        );
        assert_eq!(
            hires[1].profile().start_date,
            NaiveDate::from_ymd_opt(2026, 10, 22).unwrap()
        );
        assert_eq!(svc.list_hires().unwrap().len(), 3);
    }

    #[test]
    fn test_seed_demo_hires_only_into_empty_store() {
        let svc = service();
        assert_eq!(svc.seed_demo_hires(today()).unwrap().len(), 3);
        assert!(svc.seed_demo_hires(today()).unwrap().is_empty());
        assert_eq!(svc.list_hires().unwrap().len(), 3);

        let other = service();
        other
            .create_hire(DraftHire::new().employee_name("Jane Smith"))
            .unwrap();
        assert!(other.seed_demo_hires(today()).unwrap().is_empty());
        assert_eq!(other.list_hires().unwrap().len(), 1);
    }
}
