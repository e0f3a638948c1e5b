//! Task repository.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use uuid::Uuid;

use super::entities::task::{self, ActiveModel, Entity as TaskEntity};
use crate::domain::Task;
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Task store contract.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>>;

    /// List tasks on the given board
    async fn find_by_board(&self, board_id: Uuid) -> AppResult<Vec<Task>>;

    /// Persist a new task
    async fn create(&self, task: Task) -> AppResult<Task>;

    /// Persist an already-merged task and return the stored row
    async fn merge_update(&self, task: Task) -> AppResult<Task>;

    /// Delete task by ID
    async fn delete(&self, id: Uuid) -> AppResult<()>;
}

/// Concrete implementation of TaskRepository over SeaORM
pub struct TaskStore {
    db: DatabaseConnection,
}

impl TaskStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn to_active_model(task: Task) -> ActiveModel {
        ActiveModel {
            id: Set(task.id),
            title: Set(task.title),
            description: Set(task.description),
            priority: Set(task.priority.to_string()),
            deadline: Set(task.deadline),
            finished: Set(task.finished),
            board_id: Set(task.board_id),
        }
    }
}

#[async_trait]
impl TaskRepository for TaskStore {
    async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Task>> {
        let result = TaskEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Task::from))
    }

    async fn find_by_board(&self, board_id: Uuid) -> AppResult<Vec<Task>> {
        let models = TaskEntity::find()
            .filter(task::Column::BoardId.eq(board_id))
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Task::from).collect())
    }

    async fn create(&self, task: Task) -> AppResult<Task> {
        let model = Self::to_active_model(task)
            .insert(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Task::from(model))
    }

    async fn merge_update(&self, task: Task) -> AppResult<Task> {
        let model = Self::to_active_model(task)
            .update(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(Task::from(model))
    }

    async fn delete(&self, id: Uuid) -> AppResult<()> {
        let result = TaskEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::not_found("Task"));
        }

        Ok(())
    }
}
