//! # API crate: REST access to the task service
//!
//! Every screen of the client talks to the server through this crate. It
//! defines the [`Backend`] trait (one method per endpoint), the
//! `reqwest`-based [`ApiClient`] that implements it, and the wire-only request
//! and response bodies.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`ApiClient`]: base address, optional bearer token, JSON in/out |
//! | [`error`] | [`ApiError`]: non-success status vs. transport failure, reduced to one message for the UI |
//! | [`models`] | Request/response bodies that are not domain records |
//!
//! ## Endpoints
//!
//! | Method | Call | Auth |
//! |--------|------|------|
//! | [`register`](Backend::register) | `POST /api/auth/register` | – |
//! | [`login`](Backend::login) | `POST /api/auth/login` | – |
//! | [`get_profile`](Backend::get_profile) | `GET /api/auth/profile` | bearer |
//! | [`update_profile`](Backend::update_profile) | `PUT /api/auth/profile` | bearer |
//! | [`list_tasks`](Backend::list_tasks) | `GET /api/tasks?status=&priority=&sort_by=` | bearer |
//! | [`create_task`](Backend::create_task) | `POST /api/tasks` | bearer |
//! | [`update_task`](Backend::update_task) | `PUT /api/tasks/{id}` | bearer |
//! | [`delete_task`](Backend::delete_task) | `DELETE /api/tasks/{id}` | bearer |
//! | [`list_users`](Backend::list_users) | `GET /api/users` | bearer (admin on the reference server) |
//!
//! Each call is a single request: no retries, no timeouts, no caching.

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::ApiClient;
pub use error::ApiError;
pub use models::{LoginRequest, LoginResponse, ProfileUpdate, RegisterRequest, TaskPayload};
pub use store::{Priority, Session, SortKey, Status, Task, TaskFilter, User};

/// Async interface to the task service.
///
/// [`ApiClient`] is the production implementation; view logic is written
/// against this trait so it can run against an in-memory double.
pub trait Backend {
    fn register(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;
    fn login(
        &self,
        request: &LoginRequest,
    ) -> impl Future<Output = Result<LoginResponse, ApiError>>;
    fn get_profile(&self) -> impl Future<Output = Result<User, ApiError>>;
    fn update_profile(
        &self,
        update: &ProfileUpdate,
    ) -> impl Future<Output = Result<User, ApiError>>;
    fn list_tasks(
        &self,
        filter: &TaskFilter,
    ) -> impl Future<Output = Result<Vec<Task>, ApiError>>;
    fn create_task(
        &self,
        payload: &TaskPayload,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn update_task(
        &self,
        id: i64,
        payload: &TaskPayload,
    ) -> impl Future<Output = Result<Task, ApiError>>;
    fn delete_task(&self, id: i64) -> impl Future<Output = Result<(), ApiError>>;
    fn list_users(&self) -> impl Future<Output = Result<Vec<User>, ApiError>>;
}
