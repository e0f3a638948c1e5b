//! Task service - task lifecycle and merge updates.
//!
//! Deadline validation computes "today" in the caller-supplied IANA time
//! zone; the zone is only resolved when a deadline is actually involved.

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use chrono_tz::Tz;
use std::sync::Arc;
use uuid::Uuid;

use crate::config::{MAX_TASK_TITLE_LENGTH, MSG_BEFORE_CURRENT_DATE, MSG_NULL, MSG_WRONG_FORMAT};
use crate::domain::{CreateTask, Priority, Task, TaskPatch, TaskResponse};
use crate::errors::{AppError, AppResult, OptionExt};
use crate::infra::{BoardRepository, TaskRepository};
use crate::services::validation::{check_title_length, require_id, required_text};

/// Task service trait for dependency injection.
#[async_trait]
pub trait TaskService: Send + Sync {
    /// Get task by ID
    async fn get_task(&self, id: Uuid) -> AppResult<Task>;

    /// Create a task on a board
    async fn create_task(
        &self,
        board_id: Uuid,
        request: CreateTask,
        time_zone: &str,
    ) -> AppResult<TaskResponse>;

    /// Apply a partial update to a task.
    ///
    /// A supplied `board_id` replaces the owning board outright after an
    /// existence check; whether the destination board belongs to the same
    /// principal is not re-checked here - the caller authorized the
    /// mutation of the *task*, and gateways that want destination-ownership
    /// enforcement must run `can_access_board` on the new board themselves.
    async fn update_task(
        &self,
        id: Uuid,
        patch: TaskPatch,
        time_zone: &str,
    ) -> AppResult<TaskResponse>;

    /// Delete task by ID
    async fn delete_task(&self, id: Uuid) -> AppResult<()>;
}

/// Compute "today" in the caller-supplied IANA zone.
fn today_in_zone(time_zone: &str) -> AppResult<NaiveDate> {
    let zone: Tz = time_zone
        .parse()
        .map_err(|_| AppError::validation(format!("Time zone {}", MSG_WRONG_FORMAT)))?;

    Ok(Utc::now().with_timezone(&zone).date_naive())
}

/// Parse a priority wire value; absent and empty default to `Standard`.
fn parse_priority(value: Option<&str>) -> AppResult<Priority> {
    match value {
        None | Some("") => Ok(Priority::Standard),
        Some(text) => text
            .parse()
            .map_err(|_| AppError::validation(format!("Priority {}", MSG_WRONG_FORMAT))),
    }
}

/// Concrete implementation of TaskService
pub struct TaskManager {
    tasks: Arc<dyn TaskRepository>,
    boards: Arc<dyn BoardRepository>,
}

impl TaskManager {
    /// Create new task service instance
    pub fn new(tasks: Arc<dyn TaskRepository>, boards: Arc<dyn BoardRepository>) -> Self {
        Self { tasks, boards }
    }
}

#[async_trait]
impl TaskService for TaskManager {
    async fn get_task(&self, id: Uuid) -> AppResult<Task> {
        require_id(id, "Task")?;

        self.tasks.find_by_id(id).await?.ok_or_not_found("Task")
    }

    /// Creation is strict about title and deadline; priority quietly
    /// defaults to `Standard` when absent or empty.
    async fn create_task(
        &self,
        board_id: Uuid,
        request: CreateTask,
        time_zone: &str,
    ) -> AppResult<TaskResponse> {
        require_id(board_id, "Board")?;

        let board = self
            .boards
            .find_by_id(board_id)
            .await?
            .ok_or_not_found("Board")?;

        let title = required_text(request.title.as_deref(), "Title")?;
        check_title_length(title, MAX_TASK_TITLE_LENGTH)?;

        let priority = parse_priority(request.priority.as_deref())?;

        let deadline = request
            .deadline
            .ok_or_else(|| AppError::validation(format!("Task deadline {}", MSG_NULL)))?;
        if deadline < today_in_zone(time_zone)? {
            return Err(AppError::validation(format!(
                "Task deadline {}",
                MSG_BEFORE_CURRENT_DATE
            )));
        }

        let created = self
            .tasks
            .create(Task::new(
                title.to_string(),
                request.description,
                priority,
                deadline,
                request.finished,
                board.id,
            ))
            .await?;
        tracing::debug!(task_id = %created.id, board_id = %board.id, "task created");

        Ok(TaskResponse::from(created))
    }

    /// Update is forgiving: absent, null and empty fields leave the stored
    /// value untouched. `finished` is a primitive boolean and is always
    /// overwritten - the one deliberate asymmetry.
    async fn update_task(
        &self,
        id: Uuid,
        patch: TaskPatch,
        time_zone: &str,
    ) -> AppResult<TaskResponse> {
        let mut task = self.get_task(id).await?;

        if let Some(title) = patch.title.non_empty() {
            check_title_length(title, MAX_TASK_TITLE_LENGTH)?;
            task.title = title.to_string();
        }

        if let Some(description) = patch.description.non_empty() {
            task.description = Some(description.to_string());
        }

        if let Some(priority) = patch.priority.non_empty() {
            task.priority = priority
                .parse()
                .map_err(|_| AppError::validation(format!("Priority {}", MSG_WRONG_FORMAT)))?;
        }

        if let Some(&deadline) = patch.deadline.value() {
            if deadline < today_in_zone(time_zone)? {
                return Err(AppError::validation(format!(
                    "Task deadline {}",
                    MSG_BEFORE_CURRENT_DATE
                )));
            }
            task.deadline = deadline;
        }

        task.finished = patch.finished;

        if let Some(&board_id) = patch.board_id.value() {
            let board = self
                .boards
                .find_by_id(board_id)
                .await?
                .ok_or_not_found("Board")?;
            // Full substitution of the owning board pointer.
            task.board_id = board.id;
        }

        let updated = self.tasks.merge_update(task).await?;

        Ok(TaskResponse::from(updated))
    }

    async fn delete_task(&self, id: Uuid) -> AppResult<()> {
        require_id(id, "Task")?;

        // The store reports a missing row as NotFound.
        self.tasks.delete(id).await?;
        tracing::debug!(task_id = %id, "task deleted");

        Ok(())
    }
}
