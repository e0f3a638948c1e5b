//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over data persistence, one trait
//! per entity, so services can be tested against mocks.

pub(crate) mod entities;

mod board_repository;
mod task_repository;
mod user_repository;

pub use board_repository::{BoardRepository, BoardStore};
pub use task_repository::{TaskRepository, TaskStore};
pub use user_repository::{UserRepository, UserStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use board_repository::MockBoardRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use task_repository::MockTaskRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
