//! Service container - centralized service wiring and access.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    AccessChecker, AccessService, AuthService, Authenticator, BoardManager, BoardService,
    TaskManager, TaskService, UserManager, UserService,
};
use crate::config::Config;
use crate::infra::{
    BoardRepository, BoardStore, TaskRepository, TaskStore, UserRepository, UserStore,
};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Service container trait for dependency injection.
///
/// Provides centralized access to all application services.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait ServiceContainer: Send + Sync {
    /// Get authentication service
    fn auth(&self) -> Arc<dyn AuthService>;

    /// Get access check service
    fn access(&self) -> Arc<dyn AccessService>;

    /// Get user service
    fn users(&self) -> Arc<dyn UserService>;

    /// Get board service
    fn boards(&self) -> Arc<dyn BoardService>;

    /// Get task service
    fn tasks(&self) -> Arc<dyn TaskService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    auth_service: Arc<dyn AuthService>,
    access_service: Arc<dyn AccessService>,
    user_service: Arc<dyn UserService>,
    board_service: Arc<dyn BoardService>,
    task_service: Arc<dyn TaskService>,
}

impl Services {
    /// Create a new service container from already-built services
    pub fn new(
        auth_service: Arc<dyn AuthService>,
        access_service: Arc<dyn AccessService>,
        user_service: Arc<dyn UserService>,
        board_service: Arc<dyn BoardService>,
        task_service: Arc<dyn TaskService>,
    ) -> Self {
        Self {
            auth_service,
            access_service,
            user_service,
            board_service,
            task_service,
        }
    }

    /// Create service container from database connection and config
    pub fn from_connection(db: DatabaseConnection, config: &Config) -> Self {
        let users: Arc<dyn UserRepository> = Arc::new(UserStore::new(db.clone()));
        let boards: Arc<dyn BoardRepository> = Arc::new(BoardStore::new(db.clone()));
        let tasks: Arc<dyn TaskRepository> = Arc::new(TaskStore::new(db));

        let user_service: Arc<dyn UserService> = Arc::new(UserManager::new(users.clone()));
        let auth_service = Arc::new(Authenticator::new(user_service.clone(), config));
        let access_service = Arc::new(AccessChecker::new(boards.clone(), tasks.clone()));
        let board_service = Arc::new(BoardManager::new(
            boards.clone(),
            tasks.clone(),
            users.clone(),
        ));
        let task_service = Arc::new(TaskManager::new(tasks, boards));

        Self {
            auth_service,
            access_service,
            user_service,
            board_service,
            task_service,
        }
    }
}

impl ServiceContainer for Services {
    fn auth(&self) -> Arc<dyn AuthService> {
        self.auth_service.clone()
    }

    fn access(&self) -> Arc<dyn AccessService> {
        self.access_service.clone()
    }

    fn users(&self) -> Arc<dyn UserService> {
        self.user_service.clone()
    }

    fn boards(&self) -> Arc<dyn BoardService> {
        self.board_service.clone()
    }

    fn tasks(&self) -> Arc<dyn TaskService> {
        self.task_service.clone()
    }
}
