//! New-hire onboarding checklist with derived readiness.
//!
//! The four pure operations live in [`engine`]: generate the default
//! checklist, seed fixtures, and derive readiness and Day 1 status.

pub mod engine;
