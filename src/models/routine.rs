use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::Label;
use super::user::User;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecurrenceType {
    Daily,
    Weekly,
    Monthly,
}

/// Recurring task template. The backend generates concrete tasks from
/// these on schedule (or on demand via the generate endpoint).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Routine {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub recurrence_type: RecurrenceType,
    pub recurrence_time: NaiveTime,
    /// Day-of-week (weekly) or day-of-month (monthly); unused for daily.
    pub recurrence_day: Option<i32>,
    pub is_active: bool,
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator: Option<User>,
    pub labels: Option<Vec<Label>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutineCreate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub recurrence_type: RecurrenceType,
    pub recurrence_time: NaiveTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Uuid>>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoutineUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_type: Option<RecurrenceType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_day: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<Uuid>>,
}
