use serde_json::json;
use uuid::Uuid;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::task::{CommentType, Task, TaskComment, TaskCreate, TaskFilter, TaskUpdate};

pub async fn list(client: &ApiClient, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
    client.get_query("/api/tasks", &filter.to_query()).await
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Task, ApiError> {
    client.get(&format!("/api/tasks/{id}")).await
}

pub async fn create(client: &ApiClient, data: &TaskCreate) -> Result<Task, ApiError> {
    client.post("/api/tasks", data).await
}

pub async fn update(client: &ApiClient, id: Uuid, data: &TaskUpdate) -> Result<Task, ApiError> {
    client.put(&format!("/api/tasks/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    client.delete(&format!("/api/tasks/{id}")).await
}

pub async fn assign(client: &ApiClient, id: Uuid, employee_id: Uuid) -> Result<Task, ApiError> {
    client
        .post(
            &format!("/api/tasks/{id}/assign"),
            &json!({ "employee_id": employee_id }),
        )
        .await
}

pub async fn complete(client: &ApiClient, id: Uuid) -> Result<Task, ApiError> {
    client.post_empty(&format!("/api/tasks/{id}/complete")).await
}

pub async fn create_subtask(
    client: &ApiClient,
    parent_id: Uuid,
    data: &TaskCreate,
) -> Result<Task, ApiError> {
    client
        .post(&format!("/api/tasks/{parent_id}/subtask"), data)
        .await
}

pub async fn comments(client: &ApiClient, id: Uuid) -> Result<Vec<TaskComment>, ApiError> {
    client.get(&format!("/api/tasks/{id}/comments")).await
}

pub async fn add_comment(
    client: &ApiClient,
    id: Uuid,
    comment_text: &str,
    comment_type: CommentType,
) -> Result<TaskComment, ApiError> {
    client
        .post(
            &format!("/api/tasks/{id}/comments"),
            &json!({
                "comment_text": comment_text,
                "comment_type": comment_type,
            }),
        )
        .await
}

pub async fn overdue(client: &ApiClient) -> Result<Vec<Task>, ApiError> {
    client.get("/api/tasks/overdue").await
}
