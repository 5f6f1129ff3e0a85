use serde::{Deserialize, Serialize};
use store::{Session, User};

/// Body of `POST /api/auth/register`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful sign-in: a bearer token and the signed-in user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

impl From<LoginResponse> for Session {
    fn from(response: LoginResponse) -> Self {
        Session {
            token: response.token,
            user: response.user,
        }
    }
}

/// Body of `PUT /api/auth/profile`. The whole buffered form is sent every time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProfileUpdate {
    pub username: String,
    pub email: String,
    pub profile_picture: String,
}

/// `{"message": "..."}` bodies used for confirmations and errors.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MessageBody {
    pub message: String,
}
