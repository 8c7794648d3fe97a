//! In-memory hire store.

use super::HireStore;
use crate::engine::hire::Hire;
use anyhow::Result;
use std::cell::RefCell;

#[derive(Debug, Default)]
pub struct MemoryHireStore {
    hires: RefCell<Vec<Hire>>,
    current: RefCell<Option<String>>,
}

impl MemoryHireStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl HireStore for MemoryHireStore {
    fn load(&self, id: &str) -> Result<Option<Hire>> {
        Ok(self.hires.borrow().iter().find(|h| h.id() == id).cloned())
    }

    fn save(&self, hire: &Hire) -> Result<()> {
        let mut hires = self.hires.borrow_mut();
        match hires.iter_mut().find(|h| h.id() == hire.id()) {
            Some(existing) => *existing = hire.clone(),
            None => hires.push(hire.clone()),
        }
        Ok(())
    }

    fn list(&self) -> Result<Vec<Hire>> {
        Ok(self.hires.borrow().clone())
    }

    fn set_current_hire(&self, id: &str) -> Result<()> {
        *self.current.borrow_mut() = Some(id.to_string());
        Ok(())
    }

    fn current_hire_id(&self) -> Result<Option<String>> {
        Ok(self.current.borrow().clone())
    }
}
