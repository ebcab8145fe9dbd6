//! Task model: the task record itself, the fixed status and category sets,
//! and the filters accepted by [`crate::db::tasks::Tasks::fetch`].
//!
//! Status and category are persisted as their display strings ("In
//! Progress", "New Learning", ...), so the enums implement `ToSql`/`FromSql`
//! directly and serde round-trips use the same spelling.

use crate::libs::errors::PlannerError;
use crate::libs::user::UserId;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub type TaskId = i64;

/// A planned task with a due timestamp.
///
/// `user_id` is `None` for tasks created in the unauthenticated (local)
/// variant; such tasks are only visible to the anonymous context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Option<TaskId>,
    pub user_id: Option<UserId>,
    pub text: String,
    pub due_at: NaiveDateTime,
    pub status: TaskStatus,
    pub category: TaskCategory,
}

impl Task {
    pub fn new(user_id: Option<UserId>, text: &str, due_at: NaiveDateTime, status: TaskStatus, category: TaskCategory) -> Self {
        Task {
            id: None,
            user_id,
            text: text.to_string(),
            due_at,
            status,
            category,
        }
    }
}

/// Schedule window selection for task queries.
///
/// The date carried by `Week` and `Month` is any day inside the target
/// window; the window itself is derived from it (Monday through Sunday for
/// weeks, the calendar month otherwise).
#[derive(Debug, Clone)]
pub enum TaskFilter {
    All,
    Date(NaiveDate),
    Week(NaiveDate),
    Month(NaiveDate),
}

/// Lifecycle state of a task. Only this field may change after creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    Completed,
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "Not yet started")]
    NotYetStarted,
    Canceled,
}

impl TaskStatus {
    /// All statuses, in the order the planner form offers them.
    pub const ALL: [TaskStatus; 4] = [TaskStatus::Completed, TaskStatus::InProgress, TaskStatus::NotYetStarted, TaskStatus::Canceled];

    /// The persisted (and displayed) spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::NotYetStarted => "Not yet started",
            TaskStatus::Canceled => "Canceled",
        }
    }

    /// Display color used by the planner UI for this status.
    pub fn color(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "green",
            TaskStatus::InProgress => "blue",
            TaskStatus::NotYetStarted => "orange",
            TaskStatus::Canceled => "red",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::NotYetStarted
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Completed" => Ok(TaskStatus::Completed),
            "In Progress" => Ok(TaskStatus::InProgress),
            "Not yet started" => Ok(TaskStatus::NotYetStarted),
            "Canceled" => Ok(TaskStatus::Canceled),
            other => Err(PlannerError::InvalidStatus(other.to_string())),
        }
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse::<TaskStatus>().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

/// Planning category a task is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskCategory {
    Strategic,
    #[serde(rename = "New Learning")]
    NewLearning,
    Improve,
    Achievement,
}

impl TaskCategory {
    /// All categories, in the order the planner form offers them.
    pub const ALL: [TaskCategory; 4] = [TaskCategory::Strategic, TaskCategory::NewLearning, TaskCategory::Improve, TaskCategory::Achievement];

    /// The persisted (and displayed) spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Strategic => "Strategic",
            TaskCategory::NewLearning => "New Learning",
            TaskCategory::Improve => "Improve",
            TaskCategory::Achievement => "Achievement",
        }
    }

    /// Highlight color used by the planner UI for this category.
    pub fn color(&self) -> &'static str {
        match self {
            TaskCategory::Strategic => "yellow",
            TaskCategory::NewLearning => "orange",
            TaskCategory::Improve => "green",
            TaskCategory::Achievement => "blue",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskCategory {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Strategic" => Ok(TaskCategory::Strategic),
            "New Learning" => Ok(TaskCategory::NewLearning),
            "Improve" => Ok(TaskCategory::Improve),
            "Achievement" => Ok(TaskCategory::Achievement),
            other => Err(PlannerError::InvalidCategory(other.to_string())),
        }
    }
}

impl ToSql for TaskCategory {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(self.as_str().into())
    }
}

impl FromSql for TaskCategory {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str()?.parse::<TaskCategory>().map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}
