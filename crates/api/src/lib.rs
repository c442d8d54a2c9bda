//! Taskdeck API server library.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! the reminder scheduler and the notification sink) so integration
//! tests and the binary entrypoint can both access them.

pub mod background;
pub mod config;
pub mod error;
pub mod handlers;
pub mod notify;
pub mod routes;
pub mod state;
