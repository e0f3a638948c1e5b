//! Board service - board lifecycle and merge updates.

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::MAX_BOARD_TITLE_LENGTH;
use crate::domain::{Board, BoardPatch, BoardResponse, CreateBoard, TaskResponse};
use crate::errors::{AppResult, OptionExt};
use crate::infra::{BoardRepository, TaskRepository, UserRepository};
use crate::services::validation::{check_title_length, require_id, required_text};

/// Board service trait for dependency injection.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Get board by ID
    async fn get_board(&self, id: Uuid) -> AppResult<Board>;

    /// List boards owned by a user
    async fn list_boards(&self, owner_id: Uuid) -> AppResult<Vec<BoardResponse>>;

    /// List tasks on a board
    async fn list_tasks(&self, board_id: Uuid) -> AppResult<Vec<TaskResponse>>;

    /// Create a board for an owner
    async fn create_board(&self, owner_id: Uuid, request: CreateBoard) -> AppResult<BoardResponse>;

    /// Apply a partial update to a board
    async fn update_board(&self, id: Uuid, patch: BoardPatch) -> AppResult<BoardResponse>;

    /// Delete a board and, with it, every task it holds
    async fn delete_board(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BoardService
pub struct BoardManager {
    boards: Arc<dyn BoardRepository>,
    tasks: Arc<dyn TaskRepository>,
    users: Arc<dyn UserRepository>,
}

impl BoardManager {
    /// Create new board service instance
    pub fn new(
        boards: Arc<dyn BoardRepository>,
        tasks: Arc<dyn TaskRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self {
            boards,
            tasks,
            users,
        }
    }
}

#[async_trait]
impl BoardService for BoardManager {
    async fn get_board(&self, id: Uuid) -> AppResult<Board> {
        require_id(id, "Board")?;

        self.boards.find_by_id(id).await?.ok_or_not_found("Board")
    }

    async fn list_boards(&self, owner_id: Uuid) -> AppResult<Vec<BoardResponse>> {
        require_id(owner_id, "User")?;

        self.users
            .find_by_id(owner_id)
            .await?
            .ok_or_not_found("User")?;

        let boards = self.boards.find_by_owner(owner_id).await?;

        Ok(boards.into_iter().map(BoardResponse::from).collect())
    }

    async fn list_tasks(&self, board_id: Uuid) -> AppResult<Vec<TaskResponse>> {
        self.get_board(board_id).await?;

        let tasks = self.tasks.find_by_board(board_id).await?;

        Ok(tasks.into_iter().map(TaskResponse::from).collect())
    }

    /// Creation is strict about the title: null and empty both fail, each
    /// with its own error detail.
    async fn create_board(&self, owner_id: Uuid, request: CreateBoard) -> AppResult<BoardResponse> {
        require_id(owner_id, "User")?;

        let title = required_text(request.title.as_deref(), "Title")?;
        check_title_length(title, MAX_BOARD_TITLE_LENGTH)?;

        let owner = self
            .users
            .find_by_id(owner_id)
            .await?
            .ok_or_not_found("User")?;

        let created = self
            .boards
            .create(Board::new(title.to_string(), request.sorted, owner.id))
            .await?;
        tracing::debug!(board_id = %created.id, owner_id = %owner.id, "board created");

        Ok(BoardResponse::from(created))
    }

    /// Update is forgiving: an absent, null or empty title is a no-op.
    /// `sorted` is a primitive boolean and is always overwritten.
    async fn update_board(&self, id: Uuid, patch: BoardPatch) -> AppResult<BoardResponse> {
        let mut board = self.get_board(id).await?;

        if let Some(title) = patch.title.non_empty() {
            check_title_length(title, MAX_BOARD_TITLE_LENGTH)?;
            board.title = title.to_string();
        }
        board.sorted = patch.sorted;

        let updated = self.boards.merge_update(board).await?;

        Ok(BoardResponse::from(updated))
    }

    async fn delete_board(&self, id: Uuid) -> AppResult<()> {
        self.get_board(id).await?;

        // The store removes the board's tasks in the same transaction.
        self.boards.delete(id).await?;
        tracing::debug!(board_id = %id, "board deleted");

        Ok(())
    }
}
