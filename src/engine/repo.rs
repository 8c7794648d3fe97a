//! Hire storage: the boundary between the service and durable state.
//!
//! `HireStore` is what `HireService` depends on. `SqliteHireRepo` backs the
//! CLI; `MemoryHireStore` backs tests and throwaway sessions.

mod hires;
mod memory;

pub use hires::SqliteHireRepo;
pub use memory::MemoryHireStore;

use super::hire::Hire;
use anyhow::Result;

/// Load/save access to hires, plus the "current hire" selection.
pub trait HireStore {
    /// Loads one hire with its full checklist.
    ///
    /// # Errors
    /// Returns an error if the underlying storage fails.
    fn load(&self, id: &str) -> Result<Option<Hire>>;

    /// Inserts or replaces a hire and its checklist.
    ///
    /// # Errors
    /// Returns an error if the underlying storage fails.
    fn save(&self, hire: &Hire) -> Result<()>;

    /// All hires in creation order.
    ///
    /// # Errors
    /// Returns an error if the underlying storage fails.
    fn list(&self) -> Result<Vec<Hire>>;

    /// Records which hire commands act on by default.
    ///
    /// # Errors
    /// Returns an error if the underlying storage fails.
    fn set_current_hire(&self, id: &str) -> Result<()>;

    /// Returns the id recorded by `set_current_hire`, if any.
    ///
    /// # Errors
    /// Returns an error if the underlying storage fails.
    fn current_hire_id(&self) -> Result<Option<String>>;
}
