//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&SqlitePool` as the first argument.

pub mod project_repo;
pub mod subtask_repo;
pub mod todo_repo;

pub use project_repo::ProjectRepo;
pub use subtask_repo::SubtaskRepo;
pub use todo_repo::TodoRepo;
