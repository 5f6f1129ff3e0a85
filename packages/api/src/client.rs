use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use store::{Task, TaskFilter, User};

use crate::error::ApiError;
use crate::models::{
    LoginRequest, LoginResponse, MessageBody, ProfileUpdate, RegisterRequest, TaskPayload,
};
use crate::Backend;

/// HTTP client for the task REST API.
///
/// Cheap to clone. Authenticated endpoints send `Authorization: Bearer <token>`
/// when a token was attached with [`ApiClient::with_token`]; without one the
/// request goes out bare and the server rejects it.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        tracing::debug!("{} {}", method, path);
        let builder = self.http.request(method, self.url(path));
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn send_json<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T, ApiError> {
        let response = Self::send(builder).await?;
        Ok(response.json::<T>().await?)
    }

    async fn send(builder: RequestBuilder) -> Result<Response, ApiError> {
        let response = builder.send().await?;
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<MessageBody>(&body)
            .ok()
            .map(|b| b.message);
        tracing::warn!("API call failed with {}: {:?}", status, message);
        Err(ApiError::Status { status, message })
    }
}

impl Backend for ApiClient {
    async fn register(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        Self::send(self.request(Method::POST, "/api/auth/register").json(request)).await?;
        Ok(())
    }

    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        Self::send_json(self.request(Method::POST, "/api/auth/login").json(request)).await
    }

    async fn get_profile(&self) -> Result<User, ApiError> {
        Self::send_json(self.request(Method::GET, "/api/auth/profile")).await
    }

    async fn update_profile(&self, update: &ProfileUpdate) -> Result<User, ApiError> {
        Self::send_json(self.request(Method::PUT, "/api/auth/profile").json(update)).await
    }

    async fn list_tasks(&self, filter: &TaskFilter) -> Result<Vec<Task>, ApiError> {
        Self::send_json(
            self.request(Method::GET, "/api/tasks")
                .query(&filter.query_pairs()[..]),
        )
        .await
    }

    async fn create_task(&self, payload: &TaskPayload) -> Result<Task, ApiError> {
        Self::send_json(self.request(Method::POST, "/api/tasks").json(payload)).await
    }

    async fn update_task(&self, id: i64, payload: &TaskPayload) -> Result<Task, ApiError> {
        Self::send_json(
            self.request(Method::PUT, &format!("/api/tasks/{id}"))
                .json(payload),
        )
        .await
    }

    async fn delete_task(&self, id: i64) -> Result<(), ApiError> {
        Self::send(self.request(Method::DELETE, &format!("/api/tasks/{id}"))).await?;
        Ok(())
    }

    async fn list_users(&self) -> Result<Vec<User>, ApiError> {
        Self::send_json(self.request(Method::GET, "/api/users")).await
    }
}
