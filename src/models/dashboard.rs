use serde::{Deserialize, Serialize};

use super::task::Task;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceOverview {
    pub today_present: u32,
    pub today_absent: u32,
    pub total_employees: u32,
    pub not_marked: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskOverview {
    pub pending: u32,
    pub in_progress: u32,
    pub completed: u32,
    pub overdue: u32,
}

/// Payload of `GET /api/dashboard/stats`: today's attendance counts, task
/// counts across the board, and the ten most recently created tasks.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardStats {
    pub attendance: AttendanceOverview,
    pub tasks: TaskOverview,
    pub recent_tasks: Vec<Task>,
}
