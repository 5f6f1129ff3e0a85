//! Runs [`ApiClient`] against an in-process fake of the task service.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use api::{
    ApiClient, ApiError, Backend, LoginRequest, Priority, ProfileUpdate, RegisterRequest,
    SortKey, Status, Task, TaskFilter, TaskPayload, User,
};
use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

const TOKEN: &str = "secret-token";

#[derive(Default)]
struct Fake {
    users: Vec<User>,
    tasks: Vec<Task>,
    next_id: i64,
    task_queries: Vec<HashMap<String, String>>,
}

type Shared = Arc<Mutex<Fake>>;
type Reply = Result<Json<Value>, (StatusCode, Json<Value>)>;

fn rejected(status: StatusCode, message: &str) -> (StatusCode, Json<Value>) {
    (status, Json(json!({ "message": message })))
}

fn authorize(headers: &HeaderMap) -> Result<(), (StatusCode, Json<Value>)> {
    let expected = format!("Bearer {TOKEN}");
    match headers.get("authorization").and_then(|v| v.to_str().ok()) {
        Some(value) if value == expected => Ok(()),
        Some(_) => Err(rejected(StatusCode::UNAUTHORIZED, "Token is invalid!")),
        None => Err(rejected(StatusCode::UNAUTHORIZED, "Token is missing!")),
    }
}

fn admin() -> User {
    User {
        id: 1,
        username: "admin".into(),
        email: "admin@taskapp.com".into(),
        profile_picture: None,
        created_at: Some("2024-01-01T00:00:00".into()),
        role: Some("admin".into()),
    }
}

async fn register(State(fake): State<Shared>, Json(body): Json<Value>) -> impl IntoResponse {
    let mut fake = fake.lock().unwrap();
    let username = body["username"].as_str().unwrap_or_default().to_string();
    if fake.users.iter().any(|u| u.username == username) {
        return rejected(StatusCode::BAD_REQUEST, "Username already exists");
    }
    let id = fake.users.len() as i64 + 1;
    fake.users.push(User {
        id,
        username,
        email: body["email"].as_str().unwrap_or_default().to_string(),
        profile_picture: None,
        created_at: None,
        role: Some("user".into()),
    });
    (
        StatusCode::CREATED,
        Json(json!({ "message": "User created successfully" })),
    )
}

async fn login(State(fake): State<Shared>, Json(body): Json<Value>) -> Reply {
    let fake = fake.lock().unwrap();
    let user = fake
        .users
        .iter()
        .find(|u| body["username"] == u.username.as_str())
        .filter(|_| body["password"] == "admin123")
        .ok_or_else(|| rejected(StatusCode::UNAUTHORIZED, "Invalid credentials"))?;
    Ok(Json(json!({ "token": TOKEN, "user": user })))
}

async fn get_profile(State(fake): State<Shared>, headers: HeaderMap) -> Reply {
    authorize(&headers)?;
    Ok(Json(json!(fake.lock().unwrap().users[0])))
}

async fn update_profile(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<ProfileUpdate>,
) -> Reply {
    authorize(&headers)?;
    let mut fake = fake.lock().unwrap();
    let user = &mut fake.users[0];
    user.username = body.username;
    user.email = body.email;
    user.profile_picture = Some(body.profile_picture);
    Ok(Json(json!(user)))
}

async fn list_tasks(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Reply {
    authorize(&headers)?;
    let mut fake = fake.lock().unwrap();
    let status = query.get("status").cloned().unwrap_or_default();
    let tasks: Vec<&Task> = fake
        .tasks
        .iter()
        .filter(|t| status.is_empty() || t.status.as_str() == status)
        .collect();
    let body = json!(tasks);
    fake.task_queries.push(query);
    Ok(Json(body))
}

async fn create_task(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Json(payload): Json<TaskPayload>,
) -> Result<(StatusCode, Json<Value>), (StatusCode, Json<Value>)> {
    authorize(&headers)?;
    let mut fake = fake.lock().unwrap();
    fake.next_id += 1;
    let task = Task {
        id: fake.next_id,
        title: payload.title,
        description: Some(payload.description),
        due_date: payload.due_date.map(|d| format!("{d}T00:00:00")),
        priority: payload.priority,
        status: payload.status,
        created_at: None,
        assignee_id: payload.assignee_id,
        creator_id: payload.creator_id,
    };
    fake.tasks.push(task.clone());
    Ok((StatusCode::CREATED, Json(json!(task))))
}

async fn update_task(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
    Json(payload): Json<TaskPayload>,
) -> Reply {
    authorize(&headers)?;
    let mut fake = fake.lock().unwrap();
    let task = fake
        .tasks
        .iter_mut()
        .find(|t| t.id == id)
        .ok_or_else(|| rejected(StatusCode::NOT_FOUND, "Task not found"))?;
    task.title = payload.title;
    task.status = payload.status;
    task.priority = payload.priority;
    Ok(Json(json!(task)))
}

async fn delete_task(
    State(fake): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, Json<Value>)> {
    authorize(&headers)?;
    let mut fake = fake.lock().unwrap();
    let before = fake.tasks.len();
    fake.tasks.retain(|t| t.id != id);
    if fake.tasks.len() == before {
        // Mirrors a framework 404 page: no JSON body.
        return Ok(StatusCode::NOT_FOUND);
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn list_users(State(fake): State<Shared>, headers: HeaderMap) -> Reply {
    authorize(&headers)?;
    Ok(Json(json!(fake.lock().unwrap().users)))
}

async fn spawn_fake() -> (String, Shared) {
    let fake: Shared = Arc::new(Mutex::new(Fake {
        users: vec![admin()],
        ..Default::default()
    }));
    let app = Router::new()
        .route("/api/auth/register", post(register))
        .route("/api/auth/login", post(login))
        .route("/api/auth/profile", get(get_profile).put(update_profile))
        .route("/api/tasks", get(list_tasks).post(create_task))
        .route("/api/tasks/{id}", put(update_task).delete(delete_task))
        .route("/api/users", get(list_users))
        .with_state(fake.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), fake)
}

fn payload(title: &str) -> TaskPayload {
    TaskPayload {
        title: title.into(),
        description: "details".into(),
        due_date: Some("2024-07-01".into()),
        priority: Priority::High,
        status: Status::Pending,
        assignee_id: None,
        creator_id: Some(1),
    }
}

#[tokio::test]
async fn test_login_returns_session_material() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base);

    let response = client
        .login(&LoginRequest {
            username: "admin".into(),
            password: "admin123".into(),
        })
        .await
        .unwrap();

    assert_eq!(response.token, TOKEN);
    assert_eq!(response.user.username, "admin");
    assert!(response.user.is_admin());
}

#[tokio::test]
async fn test_bad_credentials_surface_server_message() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base);

    let err = client
        .login(&LoginRequest {
            username: "admin".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Status { status: 401, .. }));
    assert_eq!(err.user_message("An error occurred"), "Invalid credentials");
}

#[tokio::test]
async fn test_register_conflict() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base);
    let request = RegisterRequest {
        username: "carol".into(),
        email: "carol@example.org".into(),
        password: "pw".into(),
    };

    client.register(&request).await.unwrap();
    let err = client.register(&request).await.unwrap_err();
    assert_eq!(err.user_message("An error occurred"), "Username already exists");
}

#[tokio::test]
async fn test_missing_token_is_rejected() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base);

    let err = client.get_profile().await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 401, .. }));
    assert_eq!(err.user_message("Failed to fetch profile"), "Token is missing!");
}

#[tokio::test]
async fn test_profile_update_round_trip() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base).with_token(Some(TOKEN.into()));

    let updated = client
        .update_profile(&ProfileUpdate {
            username: "root".into(),
            email: "root@taskapp.com".into(),
            profile_picture: "blob:http://localhost/1234".into(),
        })
        .await
        .unwrap();
    assert_eq!(updated.username, "root");

    let fetched = client.get_profile().await.unwrap();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_list_tasks_forwards_filter_as_query() {
    let (base, fake) = spawn_fake().await;
    let client = ApiClient::new(base).with_token(Some(TOKEN.into()));

    client.create_task(&payload("one")).await.unwrap();
    let filter = TaskFilter {
        status: Some(Status::Completed),
        priority: None,
        sort_by: SortKey::CreatedAt,
    };
    let tasks = client.list_tasks(&filter).await.unwrap();
    assert!(tasks.is_empty());

    let fake = fake.lock().unwrap();
    assert_eq!(fake.task_queries.len(), 1);
    let query = &fake.task_queries[0];
    assert_eq!(query["status"], "completed");
    assert_eq!(query["priority"], "");
    assert_eq!(query["sort_by"], "created_at");
}

#[tokio::test]
async fn test_task_create_update_delete() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base).with_token(Some(TOKEN.into()));

    let created = client.create_task(&payload("draft")).await.unwrap();
    assert_eq!(created.creator_id, Some(1));
    assert_eq!(created.due_input_value(), "2024-07-01");

    let mut edit = payload("final");
    edit.creator_id = None;
    edit.status = Status::Completed;
    let updated = client.update_task(created.id, &edit).await.unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.title, "final");
    assert_eq!(updated.status, Status::Completed);

    client.delete_task(created.id).await.unwrap();
    let remaining = client.list_tasks(&TaskFilter::default()).await.unwrap();
    assert!(remaining.iter().all(|t| t.id != created.id));
}

#[tokio::test]
async fn test_error_without_json_body_falls_back() {
    let (base, _) = spawn_fake().await;
    let client = ApiClient::new(base).with_token(Some(TOKEN.into()));

    let err = client.delete_task(999).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
    assert_eq!(err.user_message("An error occurred"), "An error occurred");
}

#[tokio::test]
async fn test_unreachable_server_is_a_network_error() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::new(format!("http://{addr}")).with_token(Some(TOKEN.into()));
    let err = client.list_users().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
    assert_eq!(err.user_message("An error occurred"), "An error occurred");
}
