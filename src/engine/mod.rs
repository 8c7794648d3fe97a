//! Core engine modules for onboarding.

pub mod catalog;
pub mod config;
pub mod day1;
pub mod db;
pub mod error;
pub mod hire;
pub mod repo;
pub mod resolver;
pub mod service;
pub mod state;
pub mod types;

pub use catalog::{generate_default_tasks, seed_tasks_for_status};
pub use day1::compute_day1_checklist_status;
pub use state::compute_readiness_status;
