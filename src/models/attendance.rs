use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::Employee;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
    HalfDay,
    OnLeave,
}

impl AttendanceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Present => "present",
            Self::Absent => "absent",
            Self::HalfDay => "half_day",
            Self::OnLeave => "on_leave",
        }
    }
}

impl fmt::Display for AttendanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttendanceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "present" => Ok(Self::Present),
            "absent" => Ok(Self::Absent),
            "half_day" => Ok(Self::HalfDay),
            "on_leave" => Ok(Self::OnLeave),
            other => Err(format!("unknown attendance status: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Attendance {
    pub id: Uuid,
    pub employee_id: Uuid,
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    pub marked_at: Option<DateTime<Utc>>,
    pub auto_marked: bool,
    pub employee: Employee,
}

/// Roll-up for a single day, as rendered on the dashboard attendance card.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceSummary {
    pub date: NaiveDate,
    pub total_employees: u32,
    pub present: u32,
    pub absent: u32,
    pub half_day: u32,
    pub on_leave: u32,
    pub not_marked: u32,
}

/// Body of `POST /api/attendance/mark`. Omitting the date marks today.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkAttendance {
    pub employee_id: Uuid,
    pub status: AttendanceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// Query filters shared by the history and report endpoints.
#[derive(Debug, Clone, Default)]
pub struct AttendanceFilter {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub employee_id: Option<Uuid>,
}

impl AttendanceFilter {
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut query = Vec::new();
        if let Some(start_date) = self.start_date {
            query.push(("start_date", start_date.to_string()));
        }
        if let Some(end_date) = self.end_date {
            query.push(("end_date", end_date.to_string()));
        }
        if let Some(employee_id) = self.employee_id {
            query.push(("employee_id", employee_id.to_string()));
        }
        query
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusBreakdown {
    pub present: u32,
    pub absent: u32,
    pub half_day: u32,
    pub on_leave: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceReport {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub total_days: i64,
    pub total_records: u32,
    pub status_breakdown: StatusBreakdown,
    pub auto_marked_count: u32,
    pub records: Vec<Attendance>,
}
