//! Board repository with transactional child cascade on delete.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use super::entities::board::{self, ActiveModel, Entity as BoardEntity};
use super::entities::task;
use crate::domain::Board;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Board store contract.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait BoardRepository: Send + Sync {
    /// Find board by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>>;

    /// List boards owned by the given user
    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Board>>;

    /// Persist a new board
    async fn create(&self, board: Board) -> AppResult<Board>;

    /// Persist an already-merged board and return the stored row
    async fn merge_update(&self, board: Board) -> AppResult<Board>;

    /// Delete a board and all of its tasks atomically.
    ///
    /// No task may outlive its board; the cascade and the board delete
    /// share one transaction.
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of BoardRepository over SeaORM
pub struct BoardStore {
    db: DatabaseConnection,
}

impl BoardStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(board: Board) -> ActiveModel {
        ActiveModel {
            id: Set(board.id),
            title: Set(board.title),
            sorted: Set(board.sorted),
            owner_id: Set(board.owner_id),
        }
    }
}

#[async_trait]
impl BoardRepository for BoardStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Board>> {
        let result = BoardEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Board::from))
    }

    async fn find_by_owner(&self, owner_id: Uuid) -> AppResult<Vec<Board>> {
        let models = BoardEntity::find()
            .filter(board::Column::OwnerId.eq(owner_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Board::from).collect())
    }

    async fn create(&self, board: Board) -> AppResult<Board> {
        let model = Self::to_active_model(board)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Board::from(model))
    }

    async fn merge_update(&self, board: Board) -> AppResult<Board> {
        let model = Self::to_active_model(board)
            .update(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Board::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        // Dropping the transaction without commit rolls both deletes back.
        let txn = self.db.begin().await.map_err(AppError::from)?;

        task::Entity::delete_many()
            .filter(task::Column::BoardId.eq(id))
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        let result = BoardEntity::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Board"));
        }

        txn.commit().await.map_err(AppError::from)?;
        Ok(())
    }
}
