//! Infrastructure layer - database access.

pub mod db;
pub mod repositories;

pub use db::Database;
pub use repositories::{
    BoardRepository, BoardStore, TaskRepository, TaskStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::{MockBoardRepository, MockTaskRepository, MockUserRepository};
