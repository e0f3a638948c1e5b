//! Services layer - Business logic and use cases.
//!
//! Every service is a trait (for dependency injection and mocking) with a
//! concrete implementation over the repository contracts in `infra`.

mod access_service;
mod auth_service;
mod board_service;
mod container;
mod task_service;
mod user_service;
pub(crate) mod validation;

pub use access_service::{AccessChecker, AccessService};
pub use auth_service::{AuthService, Authenticator, Claims, TokenResponse};
pub use board_service::{BoardManager, BoardService};
pub use container::{ServiceContainer, Services};
pub use task_service::{TaskManager, TaskService};
pub use user_service::{UserManager, UserService};

#[cfg(any(test, feature = "test-utils"))]
pub use container::MockServiceContainer;
#[cfg(any(test, feature = "test-utils"))]
pub use user_service::MockUserService;
