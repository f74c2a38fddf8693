use uuid::Uuid;

use crate::client::ApiClient;
use crate::errors::ApiError;
use crate::models::employee::{Employee, EmployeeCreate, EmployeeUpdate};
use crate::models::task::Task;

pub async fn list(client: &ApiClient) -> Result<Vec<Employee>, ApiError> {
    client.get("/api/employees").await
}

pub async fn get(client: &ApiClient, id: Uuid) -> Result<Employee, ApiError> {
    client.get(&format!("/api/employees/{id}")).await
}

pub async fn create(client: &ApiClient, data: &EmployeeCreate) -> Result<Employee, ApiError> {
    client.post("/api/employees", data).await
}

pub async fn update(
    client: &ApiClient,
    id: Uuid,
    data: &EmployeeUpdate,
) -> Result<Employee, ApiError> {
    client.put(&format!("/api/employees/{id}"), data).await
}

pub async fn delete(client: &ApiClient, id: Uuid) -> Result<(), ApiError> {
    client.delete(&format!("/api/employees/{id}")).await
}

/// Tasks currently assigned to one employee.
pub async fn tasks(client: &ApiClient, id: Uuid) -> Result<Vec<Task>, ApiError> {
    client.get(&format!("/api/employees/{id}/tasks")).await
}
