use uuid::Uuid;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::employee::{Label, LabelCreate, LabelUpdate};

pub async fn list(client: &ApiClient) -> Result<Vec<Label>, ApiError> {
    client.get("/api/labels").await
}

pub async fn create(client: &ApiClient, data: &LabelCreate) -> Result<Label, ApiError> {
    client.post("/api/labels", data).await
}

pub async fn update(client: &ApiClient, id: Uuid, data: &LabelUpdate) -> Result<Label, ApiError> {
    client.put(&format!("/api/labels/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    client.delete(&format!("/api/labels/{id}")).await
}
