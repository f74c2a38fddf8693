//! Endpoint-level tests for the typed resource wrappers: bearer
//! attachment, query-parameter filtering, body shapes, and error-detail
//! extraction.

use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, header, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use shopdesk::api;
use shopdesk::client::{ApiClient, Navigator, Screen, TokenStore};
use shopdesk::config::Config;
use shopdesk::errors::ApiError;
use shopdesk::models::attendance::{AttendanceFilter, AttendanceStatus, MarkAttendance};
use shopdesk::models::employee::{EmployeeCreate, EmployeeUpdate};
use shopdesk::models::task::{TaskFilter, TaskPriority, TaskStatus};

fn client_for(server: &MockServer) -> ApiClient {
    let config = Config {
        api_url: server.uri(),
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    let client = ApiClient::new(&config, TokenStore::new(), Navigator::new(Screen::Dashboard)).unwrap();
    client.tokens().set("a1", "r1");
    client
}

const EMPLOYEE_ID: &str = "7c9e6679-7425-40de-944b-e07fc1f90ae7";
const TASK_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

fn employee_json() -> serde_json::Value {
    json!({
        "id": EMPLOYEE_ID,
        "user_id": null,
        "name": "Asha",
        "phone": "+91-9000000000",
        "telegram_user_id": null,
        "telegram_username": null,
        "is_active": true,
        "labels": [],
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

fn task_json(status: &str) -> serde_json::Value {
    json!({
        "id": TASK_ID,
        "task_number": "TSK-0042",
        "title": "Restring the pearl necklace",
        "description": null,
        "task_type": "one_time",
        "priority": "high",
        "status": status,
        "due_date": "2024-06-01",
        "due_time": "17:00:00",
        "assigned_to": EMPLOYEE_ID,
        "is_subtask": false,
        "created_at": "2024-05-01T09:00:00Z",
        "updated_at": "2024-05-01T09:00:00Z"
    })
}

#[tokio::test]
async fn test_requests_carry_bearer_access_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/labels"))
        .and(header("Authorization", "Bearer a1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let labels = api::labels::list(&client).await.unwrap();
    assert!(labels.is_empty());
}

/// Without stored credentials no Authorization header is sent at all.
#[tokio::test]
async fn test_no_auth_header_without_credentials() {
    let server = MockServer::start().await;

    // Trap: any request that does carry the header fails the call.
    Mock::given(method("GET"))
        .and(path("/api/labels"))
        .and(header_exists("Authorization"))
        .respond_with(ResponseTemplate::new(500))
        .expect(0)
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/labels"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        api_url: server.uri(),
        request_timeout_secs: 5,
        connect_timeout_secs: 2,
    };
    let client =
        ApiClient::new(&config, TokenStore::new(), Navigator::new(Screen::Dashboard)).unwrap();

    let labels = api::labels::list(&client).await.unwrap();
    assert!(labels.is_empty());
}

#[tokio::test]
async fn test_task_filters_become_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/tasks"))
        .and(query_param("status", "pending"))
        .and(query_param("priority", "high"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = TaskFilter {
        status: Some(TaskStatus::Pending),
        priority: Some(TaskPriority::High),
        ..Default::default()
    };
    let tasks = api::tasks::list(&client, &filter).await.unwrap();
    assert!(tasks.is_empty());
}

#[tokio::test]
async fn test_validation_error_detail_is_extracted() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/employees"))
        .respond_with(
            ResponseTemplate::new(422).set_body_json(json!({"detail": "Name is required"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let create = EmployeeCreate {
        name: String::new(),
        phone: None,
        telegram_user_id: None,
        telegram_username: None,
        is_active: None,
        label_ids: None,
    };
    let err = api::employees::create(&client, &create).await.unwrap_err();

    match err {
        ApiError::Api { status, detail } => {
            assert_eq!(status.as_u16(), 422);
            assert_eq!(detail, "Name is required");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

/// Partial updates put only the fields that were set; everything left
/// `None` stays off the wire entirely.
#[tokio::test]
async fn test_update_employee_sends_only_set_fields() {
    let server = MockServer::start().await;
    let employee_id: Uuid = EMPLOYEE_ID.parse().unwrap();

    let mut updated = employee_json();
    updated["is_active"] = json!(false);

    Mock::given(method("PUT"))
        .and(path(format!("/api/employees/{employee_id}")))
        .and(body_json(json!({ "is_active": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(updated))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let update = EmployeeUpdate {
        is_active: Some(false),
        ..Default::default()
    };
    let employee = api::employees::update(&client, employee_id, &update)
        .await
        .unwrap();
    assert!(!employee.is_active);
}

#[tokio::test]
async fn test_assign_posts_employee_id() {
    let server = MockServer::start().await;
    let task_id: Uuid = TASK_ID.parse().unwrap();
    let employee_id: Uuid = EMPLOYEE_ID.parse().unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/api/tasks/{task_id}/assign")))
        .and(body_json(json!({ "employee_id": employee_id })))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("assigned")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = api::tasks::assign(&client, task_id, employee_id).await.unwrap();
    assert_eq!(task.status, TaskStatus::Assigned);
    assert_eq!(task.assigned_to, Some(employee_id));
}

#[tokio::test]
async fn test_complete_decodes_updated_task() {
    let server = MockServer::start().await;
    let task_id: Uuid = TASK_ID.parse().unwrap();

    Mock::given(method("POST"))
        .and(path(format!("/api/tasks/{task_id}/complete")))
        .respond_with(ResponseTemplate::new(200).set_body_json(task_json("completed")))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let task = api::tasks::complete(&client, task_id).await.unwrap();
    assert_eq!(task.status, TaskStatus::Completed);
}

#[tokio::test]
async fn test_mark_attendance_posts_status_and_decodes_record() {
    let server = MockServer::start().await;
    let employee_id: Uuid = EMPLOYEE_ID.parse().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/attendance/mark"))
        .and(body_json(json!({
            "employee_id": employee_id,
            "status": "half_day"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "9b2e5f8a-0c4d-4f6e-8a1b-2c3d4e5f6a7b",
            "employee_id": EMPLOYEE_ID,
            "date": "2024-06-01",
            "status": "half_day",
            "marked_at": "2024-06-01T10:15:00Z",
            "auto_marked": false,
            "employee": employee_json()
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let mark = MarkAttendance {
        employee_id,
        status: AttendanceStatus::HalfDay,
        date: None,
    };
    let record = api::attendance::mark(&client, &mark).await.unwrap();

    assert_eq!(record.status, AttendanceStatus::HalfDay);
    assert!(!record.auto_marked);
    assert_eq!(record.employee.name, "Asha");
}

#[tokio::test]
async fn test_attendance_report_sends_date_range() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/attendance/report"))
        .and(query_param("start_date", "2024-06-01"))
        .and(query_param("end_date", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "start_date": "2024-06-01",
            "end_date": "2024-06-30",
            "total_days": 30,
            "total_records": 1,
            "status_breakdown": {
                "present": 1,
                "absent": 0,
                "half_day": 0,
                "on_leave": 0
            },
            "auto_marked_count": 0,
            "records": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let filter = AttendanceFilter {
        start_date: Some("2024-06-01".parse().unwrap()),
        end_date: Some("2024-06-30".parse().unwrap()),
        employee_id: None,
    };
    let report = api::attendance::report(&client, &filter).await.unwrap();

    assert_eq!(report.total_days, 30);
    assert_eq!(report.status_breakdown.present, 1);
}

#[tokio::test]
async fn test_dashboard_stats_decode() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/dashboard/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "attendance": {
                "today_present": 4,
                "today_absent": 1,
                "total_employees": 6,
                "not_marked": 1
            },
            "tasks": {
                "pending": 3,
                "in_progress": 2,
                "completed": 10,
                "overdue": 1
            },
            "recent_tasks": [task_json("pending")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let stats = api::dashboard::stats(&client).await.unwrap();

    assert_eq!(stats.attendance.total_employees, 6);
    assert_eq!(stats.tasks.overdue, 1);
    assert_eq!(stats.recent_tasks.len(), 1);
    assert_eq!(stats.recent_tasks[0].task_number, "TSK-0042");
}

#[tokio::test]
async fn test_delete_employee_accepts_empty_response() {
    let server = MockServer::start().await;
    let employee_id: Uuid = EMPLOYEE_ID.parse().unwrap();

    Mock::given(method("DELETE"))
        .and(path(format!("/api/employees/{employee_id}")))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    api::employees::delete(&client, employee_id).await.unwrap();
}

#[tokio::test]
async fn test_generate_routine_tasks() {
    let server = MockServer::start().await;
    let routine_id = Uuid::new_v4();

    Mock::given(method("POST"))
        .and(path(format!("/api/routines/{routine_id}/generate")))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "tasks generated"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    api::routines::generate(&client, routine_id).await.unwrap();
}
