//! Request and response bodies for the task REST API.
//!
//! The records themselves ([`store::User`], [`store::Task`]) live in the `store`
//! crate so they can be persisted locally; this module only holds the shapes
//! that exist purely on the wire.

mod auth;
mod task;

pub use auth::{LoginRequest, LoginResponse, MessageBody, ProfileUpdate, RegisterRequest};
pub use task::TaskPayload;
