//! Hire Repository: `SQLite` persistence for hires and their checklists.

use super::HireStore;
use crate::engine::hire::{Hire, HireProfile};
use crate::engine::types::{parse_label, Labeled, Task};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use rusqlite::types::Type;
use rusqlite::{params, Connection, OptionalExtension};

const HIRE_SELECT: &str = "SELECT id, employee_name, role, employment_type, location_city, \
     location_state, start_date, owner_contact_email, owner_contact_phone, business_name, \
     manager_name, manager_meeting_time, address_line FROM hires";

const TASK_SELECT: &str = "SELECT id, section, title, description, assignee, due, phase, status \
     FROM tasks WHERE hire_id = ?1 ORDER BY position";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub struct SqliteHireRepo<'a> {
    conn: &'a Connection,
}

impl<'a> SqliteHireRepo<'a> {
    /// Creates a new repository instance borrowing the connection.
    ///
    /// Pass a `Transaction` to make a load-mutate-save sequence atomic.
    #[must_use]
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Loads the checklist of a hire in stored order.
    ///
    /// # Errors
    /// Returns a `rusqlite` error if the query or a column conversion fails.
    pub fn get_tasks(&self, hire_id: &str) -> rusqlite::Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(TASK_SELECT)?;
        let rows = stmt.query_map(params![hire_id], |r| {
            let id: String = r.get(0)?;
            let title: String = r.get(2)?;
            let description: Option<String> = r.get(3)?;
            let task = Task::with_id(
                &id,
                label_column(r, 1)?,
                &title,
                label_column(r, 4)?,
                label_column(r, 5)?,
                label_column(r, 6)?,
            )
            .with_status(label_column(r, 7)?);
            Ok(match description {
                Some(d) => task.with_description(&d),
                None => task,
            })
        })?;

        let mut tasks = Vec::new();
        for t in rows {
            tasks.push(t?);
        }
        Ok(tasks)
    }

    /// Converts a database row to a Hire, loading its tasks.
    ///
    /// # Errors
    /// Returns a `rusqlite` error if data conversion fails.
    pub fn row_to_hire(&self, row: &rusqlite::Row) -> rusqlite::Result<Hire> {
        let id: String = row.get(0)?;
        let start_date: String = row.get(6)?;
        let start_date = NaiveDate::parse_from_str(&start_date, DATE_FORMAT)
            .map_err(|e| rusqlite::Error::FromSqlConversionFailure(6, Type::Text, Box::new(e)))?;

        let profile = HireProfile {
            employee_name: row.get(1)?,
            role: row.get(2)?,
            employment_type: label_column(row, 3)?,
            location_city: row.get(4)?,
            location_state: row.get(5)?,
            start_date,
            owner_contact_email: row.get(7)?,
            owner_contact_phone: row.get(8)?,
            business_name: row.get(9)?,
            manager_name: row.get(10)?,
            manager_meeting_time: row.get(11)?,
            address_line: row.get(12)?,
        };
        let tasks = self.get_tasks(&id)?;

        // Cached status columns are not read back; the hire re-derives them.
        Ok(Hire::from_parts(&id, profile, tasks))
    }

    fn save_tasks(&self, hire: &Hire) -> Result<()> {
        self.conn
            .execute("DELETE FROM tasks WHERE hire_id = ?1", params![hire.id()])?;

        let mut stmt = self.conn.prepare(
            "INSERT INTO tasks (id, hire_id, position, section, title, description, assignee, due, phase, status)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        )?;
        for (position, task) in hire.tasks().iter().enumerate() {
            stmt.execute(params![
                task.id(),
                hire.id(),
                i64::try_from(position)?,
                task.section().label(),
                task.title(),
                task.description(),
                task.assignee().label(),
                task.due().label(),
                task.phase().label(),
                task.status().label(),
            ])
            .with_context(|| format!("Failed to save task '{}'", task.title()))?;
        }
        Ok(())
    }
}

impl HireStore for SqliteHireRepo<'_> {
    fn load(&self, id: &str) -> Result<Option<Hire>> {
        let sql = format!("{HIRE_SELECT} WHERE id = ?1");
        self.conn
            .query_row(&sql, params![id], |r| self.row_to_hire(r))
            .optional()
            .context("Search by ID failed")
    }

    fn save(&self, hire: &Hire) -> Result<()> {
        let p = hire.profile();
        self.conn
            .execute(
                "INSERT INTO hires (id, employee_name, role, employment_type, location_city,
                    location_state, start_date, owner_contact_email, owner_contact_phone,
                    business_name, manager_name, manager_meeting_time, address_line,
                    readiness_status, day1_status)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14, ?15)
                 ON CONFLICT(id) DO UPDATE SET
                    employee_name = excluded.employee_name,
                    role = excluded.role,
                    employment_type = excluded.employment_type,
                    location_city = excluded.location_city,
                    location_state = excluded.location_state,
                    start_date = excluded.start_date,
                    owner_contact_email = excluded.owner_contact_email,
                    owner_contact_phone = excluded.owner_contact_phone,
                    business_name = excluded.business_name,
                    manager_name = excluded.manager_name,
                    manager_meeting_time = excluded.manager_meeting_time,
                    address_line = excluded.address_line,
                    readiness_status = excluded.readiness_status,
                    day1_status = excluded.day1_status",
                params![
                    hire.id(),
                    p.employee_name,
                    p.role,
                    p.employment_type.label(),
                    p.location_city,
                    p.location_state,
                    p.start_date.format(DATE_FORMAT).to_string(),
                    p.owner_contact_email,
                    p.owner_contact_phone,
                    p.business_name,
                    p.manager_name,
                    p.manager_meeting_time,
                    p.address_line,
                    hire.readiness_status().label(),
                    hire.day1_status().label(),
                ],
            )
            .context("Failed to save hire")?;

        self.save_tasks(hire)?;
        tracing::debug!(hire = hire.id(), tasks = hire.tasks().len(), "hire saved");
        Ok(())
    }

    fn list(&self) -> Result<Vec<Hire>> {
        let sql = format!("{HIRE_SELECT} ORDER BY rowid");
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], |r| self.row_to_hire(r))?;
        let mut hires = Vec::new();
        for hire in rows {
            hires.push(hire?);
        }
        Ok(hires)
    }

    fn set_current_hire(&self, id: &str) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO state (key, value) VALUES ('current_hire', ?1)",
            params![id],
        )?;
        Ok(())
    }

    fn current_hire_id(&self) -> Result<Option<String>> {
        let res: Option<Option<String>> = self
            .conn
            .query_row(
                "SELECT value FROM state WHERE key = 'current_hire'",
                [],
                |r| r.get(0),
            )
            .optional()?;
        Ok(res.flatten())
    }
}

/// Reads a labeled enumeration out of a text column.
fn label_column<T: Labeled>(row: &rusqlite::Row, idx: usize) -> rusqlite::Result<T> {
    let raw: String = row.get(idx)?;
    parse_label(&raw)
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::catalog::kit_template_task;
    use crate::engine::db::Db;
    use crate::engine::hire::DraftHire;
    use crate::engine::resolver::Resolver;
    use crate::engine::service::HireService;
    use crate::engine::types::{Day1ChecklistStatus, Phase, ReadinessStatus, TaskStatus};

    fn make_hire(name: &str) -> Hire {
        DraftHire::new()
            .employee_name(name)
            .role("Server")
            .start_date(NaiveDate::from_ymd_opt(2026, 11, 2).unwrap())
            .owner_contact_phone("555-0100")
            .finalize()
            .unwrap()
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let conn = Db::in_memory().unwrap();
        let repo = SqliteHireRepo::new(&conn);

        let mut hire = make_hire("Jane Smith");
        let ids: Vec<_> = hire
            .tasks()
            .iter()
            .filter(|t| t.phase() == Phase::PreBoarding)
            .map(|t| t.id().to_string())
            .collect();
        for id in &ids {
            hire.set_task_status(id, TaskStatus::Completed).unwrap();
        }
        repo.save(&hire).unwrap();

        let loaded = repo.load(hire.id()).unwrap().unwrap();
        assert_eq!(loaded, hire);
        assert_eq!(loaded.readiness_status(), ReadinessStatus::ReadyForDay1);
        assert_eq!(loaded.day1_status(), Day1ChecklistStatus::Active);
        assert_eq!(loaded.tasks()[7].description(), Some("At start time"));
    }

    #[test]
    fn test_save_replaces_checklist() {
        let conn = Db::in_memory().unwrap();
        let repo = SqliteHireRepo::new(&conn);

        let mut hire = make_hire("Jane Smith");
        repo.save(&hire).unwrap();

        hire.add_task(kit_template_task()).unwrap();
        let first = hire.tasks()[0].id().to_string();
        hire.remove_task(&first).unwrap();
        repo.save(&hire).unwrap();

        let loaded = repo.load(hire.id()).unwrap().unwrap();
        assert_eq!(loaded.tasks().len(), 11);
        assert!(loaded.task(&first).is_none());
        assert_eq!(
            loaded.tasks().last().map(Task::title),
            Some("Review employee handbook")
        );
    }

    #[test]
    fn test_list_in_creation_order() {
        let conn = Db::in_memory().unwrap();
        let repo = SqliteHireRepo::new(&conn);
        for name in ["Jane", "Carlos", "Priya"] {
            repo.save(&make_hire(name)).unwrap();
        }
        let names: Vec<_> = repo
            .list()
            .unwrap()
            .iter()
            .map(|h| h.employee_name().to_string())
            .collect();
        assert_eq!(names, vec!["Jane", "Carlos", "Priya"]);
    }

    #[test]
    fn test_load_missing_is_none() {
        let conn = Db::in_memory().unwrap();
        let repo = SqliteHireRepo::new(&conn);
        assert!(repo.load("missing").unwrap().is_none());
    }

    #[test]
    fn test_current_hire_state() {
        let conn = Db::in_memory().unwrap();
        let repo = SqliteHireRepo::new(&conn);
        assert_eq!(repo.current_hire_id().unwrap(), None);
        repo.set_current_hire("h1").unwrap();
        repo.set_current_hire("h2").unwrap();
        assert_eq!(repo.current_hire_id().unwrap(), Some("h2".to_string()));
    }

    #[test]
    fn test_corrupt_label_is_rejected() {
        let conn = Db::in_memory().unwrap();
        let repo = SqliteHireRepo::new(&conn);
        let hire = make_hire("Jane");
        repo.save(&hire).unwrap();
        conn.execute("UPDATE tasks SET phase = 'Week 2'", []).unwrap();
        assert!(repo.load(hire.id()).is_err());
    }

    #[test]
    fn test_reseeding_keeps_demo_names_resolvable() {
        let conn = Db::in_memory().unwrap();
        let svc = HireService::new(SqliteHireRepo::new(&conn));
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        svc.seed_demo_hires(today).unwrap();
        svc.seed_demo_hires(today).unwrap();

        let hires = svc.list_hires().unwrap();
        assert_eq!(hires.len(), 3);
        let jane = Resolver::strict().resolve(&hires, "Jane Smith").unwrap();
        assert_eq!(jane.readiness_status(), ReadinessStatus::InProgress);
    }
}
