//! Access control - ownership-chain checks.
//!
//! Boards belong to users and tasks belong to boards, so "may this
//! principal touch this resource" is a walk up that chain. The gateway
//! calls these checks before invoking any mutating operation; the
//! mutating operations themselves never re-derive ownership.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::errors::{AppResult, OptionExt};
use crate::infra::{BoardRepository, TaskRepository};
use crate::services::validation::require_id;

/// Access check trait for dependency injection.
///
/// Both checks distinguish three outcomes: `Ok(true)` (the principal owns
/// the resource), `Ok(false)` (the resource exists but belongs to someone
/// else - a forbidden-style outcome, not an error), and `Err(NotFound)`
/// (the resource genuinely does not exist). Callers must not conflate the
/// last two.
#[async_trait]
pub trait AccessService: Send + Sync {
    /// Does the principal own the board?
    async fn can_access_board(&self, board_id: Uuid, principal_id: Uuid) -> AppResult<bool>;

    /// Does the principal own the board the task sits on?
    async fn can_access_task(&self, task_id: Uuid, principal_id: Uuid) -> AppResult<bool>;
}

/// Concrete implementation of AccessService
pub struct AccessChecker {
    boards: Arc<dyn BoardRepository>,
    tasks: Arc<dyn TaskRepository>,
}

impl AccessChecker {
    /// Create new access check instance
    pub fn new(boards: Arc<dyn BoardRepository>, tasks: Arc<dyn TaskRepository>) -> Self {
        Self { boards, tasks }
    }
}

#[async_trait]
impl AccessService for AccessChecker {
    async fn can_access_board(&self, board_id: Uuid, principal_id: Uuid) -> AppResult<bool> {
        require_id(board_id, "Board")?;
        require_id(principal_id, "Principal")?;

        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_not_found("Board")?;

        Ok(board.owner_id == principal_id)
    }

    async fn can_access_task(&self, task_id: Uuid, principal_id: Uuid) -> AppResult<bool> {
        require_id(task_id, "Task")?;
        require_id(principal_id, "Principal")?;

        let task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or_not_found("Task")?;

        let board = self
            .boards
            .find_by_id(task.board_id)
            .await?
            .ok_or_not_found("Board")?;

        Ok(board.owner_id == principal_id)
    }
}
