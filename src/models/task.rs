use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::AppError;

use super::{parse_date, require};

#[derive(Debug, Clone, FromRow)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub detail: String,
    pub due_date: String,
    pub start_time: String,
    pub end_time: String,
    pub task_type: String,
    pub subject: String,
    pub created_at: String,
}

/// Wire payload for POST /api/tasks. Required fields are checked in
/// `validate` so a missing key reports its own name instead of a
/// generic deserialization failure.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTaskRequest {
    pub title: Option<String>,
    pub detail: Option<String>,
    #[serde(rename = "dueDate")]
    pub due_date: Option<String>,
    #[serde(rename = "startTime")]
    pub start_time: Option<String>,
    #[serde(rename = "endTime")]
    pub end_time: Option<String>,
    #[serde(rename = "type")]
    pub task_type: Option<String>,
    pub subject: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub detail: String,
    pub due_date: String,
    pub start_time: String,
    pub end_time: String,
    pub task_type: String,
    pub subject: String,
}

impl NewTaskRequest {
    pub fn validate(self) -> Result<NewTask, AppError> {
        Ok(NewTask {
            title: require(self.title, "title")?,
            detail: require(self.detail, "detail")?,
            due_date: parse_date(&require(self.due_date, "dueDate")?)?,
            start_time: self.start_time.unwrap_or_default(),
            end_time: self.end_time.unwrap_or_default(),
            task_type: require(self.task_type, "type")?,
            subject: require(self.subject, "subject")?,
        })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub id: i64,
    pub title: String,
    pub detail: String,
    #[serde(rename = "dueDate")]
    pub due_date: String,
    #[serde(rename = "startTime")]
    pub start_time: String,
    #[serde(rename = "endTime")]
    pub end_time: String,
    #[serde(rename = "type")]
    pub task_type: String,
    pub subject: String,
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            detail: task.detail,
            due_date: task.due_date,
            start_time: task.start_time,
            end_time: task.end_time,
            task_type: task.task_type,
            subject: task.subject,
        }
    }
}
