use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::attendance::{
    Attendance, AttendanceFilter, AttendanceReport, AttendanceSummary, MarkAttendance,
};

/// Today's roll-up for the dashboard attendance card.
pub async fn today(client: &ApiClient) -> Result<AttendanceSummary, ApiError> {
    client.get("/api/attendance/today").await
}

pub async fn history(
    client: &ApiClient,
    filter: &AttendanceFilter,
) -> Result<Vec<Attendance>, ApiError> {
    client.get_query("/api/attendance", &filter.to_query()).await
}

pub async fn mark(client: &ApiClient, data: &MarkAttendance) -> Result<Attendance, ApiError> {
    client.post("/api/attendance/mark", data).await
}

pub async fn report(
    client: &ApiClient,
    filter: &AttendanceFilter,
) -> Result<AttendanceReport, ApiError> {
    client
        .get_query("/api/attendance/report", &filter.to_query())
        .await
}
