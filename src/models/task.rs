use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::{Employee, Label};
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    Routine,
    OneTime,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskPriority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    Assigned,
    InProgress,
    Blocked,
    Completed,
    Overdue,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Assigned => "assigned",
            Self::InProgress => "in_progress",
            Self::Blocked => "blocked",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "assigned" => Ok(Self::Assigned),
            "in_progress" => Ok(Self::InProgress),
            "blocked" => Ok(Self::Blocked),
            "completed" => Ok(Self::Completed),
            "overdue" => Ok(Self::Overdue),
            other => Err(format!("unknown status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommentType {
    General,
    IssueReport,
    Clarification,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskComment {
    pub id: Uuid,
    pub task_id: Uuid,
    pub comment_by_employee_id: Option<Uuid>,
    pub comment_by_user_id: Option<Uuid>,
    pub comment_text: String,
    pub comment_type: CommentType,
    pub created_at: DateTime<Utc>,
    pub employee: Option<Employee>,
    pub user: Option<User>,
}

/// Canonical task representation. Subtasks and the parent task are nested
/// using the same shape, so the type is recursive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: Uuid,
    pub task_number: String,
    pub title: String,
    pub description: Option<String>,
    pub task_type: TaskType,
    pub priority: TaskPriority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
    pub due_time: Option<NaiveTime>,
    pub assigned_to: Option<Uuid>,
    pub assigned_by: Option<Uuid>,
    pub created_by: Option<Uuid>,
    pub parent_task_id: Option<Uuid>,
    pub is_subtask: bool,
    pub telegram_message_id: Option<i64>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub assigned_employee: Option<Employee>,
    pub assigner: Option<User>,
    pub creator: Option<User>,
    pub parent_task: Option<Box<Task>>,
    pub subtasks: Option<Vec<Task>>,
    pub comments: Option<Vec<TaskComment>>,
    pub labels: Option<Vec<Label>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_type: Option<TaskType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    pub due_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Uuid>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_task_id: Option<Uuid>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TaskPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Uuid>>,
}

/// Server-side filters for `GET /api/tasks`.
#[derive(Debug, Clone, Default)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub employee_id: Option<Uuid>,
    pub priority: Option<TaskPriority>,
    pub date: Option<NaiveDate>,
}

impl TaskFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(status) = self.status {
            query.push(("status", status.to_string()));
        }
        if let Some(employee_id) = self.employee_id {
            query.push(("employee_id", employee_id.to_string()));
        }
        if let Some(priority) = self.priority {
            query.push(("priority", priority.to_string()));
        }
        if let Some(date) = self.date {
            query.push(("date", date.to_string()));
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enums_use_backend_wire_names() {
        assert_eq!(
            serde_json::to_string(&TaskType::OneTime).unwrap(),
            "\"one_time\""
        );
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        assert_eq!(
            serde_json::to_string(&CommentType::IssueReport).unwrap(),
            "\"issue_report\""
        );
    }

    #[test]
    fn test_status_round_trips_from_str() {
        assert_eq!("in_progress".parse::<TaskStatus>(), Ok(TaskStatus::InProgress));
        assert!("nope".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn test_filter_query_includes_only_set_fields() {
        let filter = TaskFilter {
            status: Some(TaskStatus::Pending),
            priority: Some(TaskPriority::High),
            ..Default::default()
        };
        assert_eq!(
            filter.to_query(),
            vec![("status", "pending".to_string()), ("priority", "high".to_string())]
        );
    }

    #[test]
    fn test_task_decodes_without_optional_relations() {
        let task: Task = serde_json::from_str(
            r#"{
                "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
                "task_number": "TSK-0001",
                "title": "Polish display cases",
                "task_type": "one_time",
                "priority": "medium",
                "status": "pending",
                "due_date": "2024-06-01",
                "is_subtask": false,
                "created_at": "2024-05-01T09:00:00Z",
                "updated_at": "2024-05-01T09:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(task.task_number, "TSK-0001");
        assert!(task.subtasks.is_none());
        assert!(task.assigned_employee.is_none());
    }
}
