use uuid::Uuid;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::routine::{Routine, RoutineCreate, RoutineUpdate};

pub async fn list(client: &ApiClient) -> Result<Vec<Routine>, ApiError> {
    client.get("/api/routines").await
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Routine, ApiError> {
    client.get(&format!("/api/routines/{id}")).await
}

pub async fn create(client: &ApiClient, data: &RoutineCreate) -> Result<Routine, ApiError> {
    client.post("/api/routines", data).await
}

pub async fn update(
    client: &ApiClient,
    id: Uuid,
    data: &RoutineUpdate,
) -> Result<Routine, ApiError> {
    client.put(&format!("/api/routines/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    client.delete(&format!("/api/routines/{id}")).await
}

/// Ask the backend to materialize today's tasks from this routine now
/// instead of waiting for its schedule.
pub async fn generate(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    client.post_unit(&format!("/api/routines/{id}/generate")).await
}
