use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::dashboard::DashboardStats;

pub async fn stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    client.get("/api/dashboard/stats").await
}
