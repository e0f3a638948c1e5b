//! Task domain entity, priority levels and related types.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::Patch;

/// Task priority, ten ordinal levels.
///
/// Rank 1 is the most urgent; the wire form is the SCREAMING_SNAKE_CASE
/// variant name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Priority {
    Critical,
    Highest,
    High,
    #[default]
    Standard,
    MediumHigh,
    Medium,
    MediumLow,
    Low,
    Lowest,
    None,
}

impl Priority {
    /// Ordinal rank, 1 (most urgent) through 10.
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Critical => 1,
            Priority::Highest => 2,
            Priority::High => 3,
            Priority::Standard => 4,
            Priority::MediumHigh => 5,
            Priority::Medium => 6,
            Priority::MediumLow => 7,
            Priority::Low => 8,
            Priority::Lowest => 9,
            Priority::None => 10,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "CRITICAL",
            Priority::Highest => "HIGHEST",
            Priority::High => "HIGH",
            Priority::Standard => "STANDARD",
            Priority::MediumHigh => "MEDIUM_HIGH",
            Priority::Medium => "MEDIUM",
            Priority::MediumLow => "MEDIUM_LOW",
            Priority::Low => "LOW",
            Priority::Lowest => "LOWEST",
            Priority::None => "NONE",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CRITICAL" => Ok(Priority::Critical),
            "HIGHEST" => Ok(Priority::Highest),
            "HIGH" => Ok(Priority::High),
            "STANDARD" => Ok(Priority::Standard),
            "MEDIUM_HIGH" => Ok(Priority::MediumHigh),
            "MEDIUM" => Ok(Priority::Medium),
            "MEDIUM_LOW" => Ok(Priority::MediumLow),
            "LOW" => Ok(Priority::Low),
            "LOWEST" => Ok(Priority::Lowest),
            "NONE" => Ok(Priority::None),
            _ => Err(()),
        }
    }
}

/// Task domain entity.
///
/// A task has no owner of its own; its effective owner is always the
/// owner of its board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub finished: bool,
    pub board_id: Uuid,
}

impl Task {
    /// Create a new task with a fresh id on the given board
    pub fn new(
        title: String,
        description: Option<String>,
        priority: Priority,
        deadline: NaiveDate,
        finished: bool,
        board_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            description,
            priority,
            deadline,
            finished,
            board_id,
        }
    }
}

/// Task creation request.
///
/// Priority is accepted as its wire string so absent and empty can both
/// default to [`Priority::Standard`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTask {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<String>,
    pub deadline: Option<NaiveDate>,
    #[serde(default)]
    pub finished: bool,
}

/// Partial-update request for a task.
///
/// `finished` is a primitive boolean and is always applied on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Patch<String>,
    #[serde(default)]
    pub description: Patch<String>,
    #[serde(default)]
    pub priority: Patch<String>,
    #[serde(default)]
    pub deadline: Patch<NaiveDate>,
    #[serde(default)]
    pub finished: bool,
    #[serde(default)]
    pub board_id: Patch<Uuid>,
}

/// Task response shape.
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub priority: Priority,
    pub deadline: NaiveDate,
    pub finished: bool,
    pub board_id: Uuid,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            description: task.description,
            priority: task.priority,
            deadline: task.deadline,
            finished: task.finished,
            board_id: task.board_id,
        }
    }
}
