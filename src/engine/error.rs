//! Error types for the onboarding engine.
//!
//! The derivation engines themselves never fail; these cover building hires,
//! mutating them, and talking to storage.

/// Reasons a `DraftHire` cannot become a `Hire`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Employee name is required")]
    MissingEmployeeName,

    #[error("Invalid owner contact email: '{0}'")]
    InvalidEmail(String),

    #[error("Duplicate task id in checklist: {0}")]
    DuplicateTaskId(String),
}

/// Failures when mutating an existing hire's checklist.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HireError {
    #[error("Task {task_id} not found for hire {hire_id}")]
    TaskNotFound { hire_id: String, task_id: String },

    #[error("Task {0} already exists on this hire")]
    DuplicateTask(String),
}

/// Top-level error for `HireService` operations.
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    #[error("Hire not found: {0}")]
    HireNotFound(String),

    #[error("No current hire selected. Run `onboard use <hire>` or pass --hire.")]
    NoCurrentHire,

    #[error(transparent)]
    Hire(#[from] HireError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage error: {0:#}")]
    Store(#[from] anyhow::Error),
}
