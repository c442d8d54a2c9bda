//! HTTP request handlers, one module per resource.

pub mod project;
pub mod subtask;
pub mod todo;
