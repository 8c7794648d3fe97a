//! Database bootstrap: data directory and `SQLite` schema.

use super::config::Config;
use anyhow::{Context, Result};
use rusqlite::Connection;
use std::fs;
use std::path::Path;

pub struct Db;

impl Db {
    /// Initializes the data directory and database schema.
    ///
    /// # Errors
    /// Returns error if directory creation, DB opening, or migration fails.
    pub fn init(config: &Config) -> Result<Connection> {
        if !config.data_dir.exists() {
            fs::create_dir_all(&config.data_dir).with_context(|| {
                format!("Failed to create {}", config.data_dir.display())
            })?;
        }

        let conn = Self::open(&config.db_path())?;
        Self::migrate(&conn)?;
        tracing::debug!(path = %config.db_path().display(), "database initialized");
        Ok(conn)
    }

    /// Connects to an existing database.
    ///
    /// # Errors
    /// Returns error if the database file does not exist or cannot be opened.
    pub fn connect(config: &Config) -> Result<Connection> {
        let db_path = config.db_path();
        if !db_path.exists() {
            anyhow::bail!("Onboarding store not initialized. Run `onboard init` first.");
        }
        let conn = Self::open(&db_path)?;
        Self::migrate(&conn)?;
        Ok(conn)
    }

    /// Opens an in-memory database with the schema applied.
    ///
    /// # Errors
    /// Returns error if migration fails.
    pub fn in_memory() -> Result<Connection> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::migrate(&conn)?;
        Ok(conn)
    }

    fn open(path: &Path) -> Result<Connection> {
        let conn = Connection::open(path).context("Failed to open database")?;
        conn.execute_batch("PRAGMA foreign_keys = ON;")
            .context("Failed to enable foreign keys")?;
        Ok(conn)
    }

    /// Applies the schema migrations.
    fn migrate(conn: &Connection) -> Result<()> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS hires (
                id TEXT PRIMARY KEY,
                employee_name TEXT NOT NULL,
                role TEXT NOT NULL,
                employment_type TEXT NOT NULL,
                location_city TEXT NOT NULL,
                location_state TEXT NOT NULL,
                start_date TEXT NOT NULL,
                owner_contact_email TEXT NOT NULL,
                owner_contact_phone TEXT,
                business_name TEXT NOT NULL,
                manager_name TEXT NOT NULL,
                manager_meeting_time TEXT,
                address_line TEXT,
                readiness_status TEXT NOT NULL,
                day1_status TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )",
            [],
        )
        .context("Failed to create hires table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id TEXT PRIMARY KEY,
                hire_id TEXT NOT NULL,
                position INTEGER NOT NULL,
                section TEXT NOT NULL,
                title TEXT NOT NULL,
                description TEXT,
                assignee TEXT NOT NULL,
                due TEXT NOT NULL,
                phase TEXT NOT NULL,
                status TEXT NOT NULL,
                FOREIGN KEY(hire_id) REFERENCES hires(id) ON DELETE CASCADE
            )",
            [],
        )
        .context("Failed to create tasks table")?;

        conn.execute(
            "CREATE TABLE IF NOT EXISTS state (
                key TEXT PRIMARY KEY,
                value TEXT
            )",
            [],
        )
        .context("Failed to create state table")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_requires_init() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(Some(dir.path().join("store").as_path()));
        assert!(Db::connect(&config).is_err());

        Db::init(&config).unwrap();
        assert!(config.db_path().exists());
        assert!(Db::connect(&config).is_ok());
    }

    #[test]
    fn test_init_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::resolve(Some(dir.path()));
        Db::init(&config).unwrap();
        Db::init(&config).unwrap();
    }
}
