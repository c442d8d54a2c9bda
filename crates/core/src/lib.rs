//! Domain types shared across the taskdeck workspace.
//!
//! This crate has zero internal dependencies so both the repository
//! layer and any future CLI tooling can use it.

pub mod error;
pub mod recurrence;
pub mod types;
